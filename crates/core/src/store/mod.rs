//! Storage seam.
//!
//! The repository never talks to a driver directly. It hands a [`Schema`] and a set of
//! column [`Fields`] to a [`Store`], which owns identifiers and persistence. Two stores ship
//! with the crate: [`MySqlStore`] for production and [`MemoryStore`] for tests and local runs.

pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

use crate::config::{StoreConfig, StoreKind};
use crate::error::StoreError;
use crate::schema::Schema;
use chrono::NaiveDate;
use rbfs_types::RecordId;
use std::collections::BTreeMap;
use std::sync::Arc;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A single column value as it crosses the storage boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

static NULL: Value = Value::Null;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// JSON form used on the wire. Dates render as `YYYY-MM-DD`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Integer(n) => serde_json::Value::from(*n),
            Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Column values of one row, keyed by column name. The id is never part of the fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields(BTreeMap<&'static str, Value>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &'static str, value: Value) {
        self.0.insert(column, value);
    }

    /// Value of `column`, or `Value::Null` when the column was never set.
    pub fn get(&self, column: &str) -> &Value {
        self.0.get(column).unwrap_or(&NULL)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Restrict to the schema's columns, writing `Null` for any the caller did not supply.
    ///
    /// This is what makes an update a full overwrite: every column is always written.
    pub fn complete_for(&self, schema: &Schema) -> Fields {
        let mut out = Fields::new();
        for column in schema.columns {
            out.set(column.name, self.get(column.name).clone());
        }
        out
    }
}

/// Persistence operations against one resource table.
///
/// Implementations must treat each call as a single atomic statement and must not retry.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Every row of the table, in storage order.
    async fn fetch_all(&self, schema: &'static Schema) -> StoreResult<Vec<(RecordId, Fields)>>;

    /// Insert one row and return the identifier the store assigned to it.
    async fn insert(&self, schema: &'static Schema, fields: &Fields) -> StoreResult<RecordId>;

    /// Overwrite every column of the row `id`. Returns `false` when no row has that id.
    async fn update(
        &self,
        schema: &'static Schema,
        id: RecordId,
        fields: &Fields,
    ) -> StoreResult<bool>;

    /// Whether a row with `id` exists.
    async fn exists(&self, schema: &'static Schema, id: RecordId) -> StoreResult<bool>;

    /// Remove the row `id`. Returns `false` when no row has that id.
    async fn delete(&self, schema: &'static Schema, id: RecordId) -> StoreResult<bool>;

    /// Release all resources. Later calls fail with [`StoreError::Closed`] or a driver error.
    async fn close(&self);
}

/// Build the store selected by configuration.
///
/// The MySQL pool connects lazily, so this never touches the network.
pub fn open(cfg: &StoreConfig) -> Arc<dyn Store> {
    match cfg.kind() {
        StoreKind::MySql => Arc::new(MySqlStore::connect_lazy(cfg)),
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, ColumnKind, Messages};

    static SAMPLE: Schema = Schema {
        path: "amostras",
        table: "amostras",
        component: "Sample",
        columns: &[
            Column::required("nome", ColumnKind::Text),
            Column::optional("quantidade", ColumnKind::Integer),
        ],
        messages: Messages {
            list_failed: "",
            missing_fields: "",
            create_failed: "",
            not_found: "",
            updated: "",
            update_failed: "",
            deleted: "",
            delete_failed: "",
        },
    };

    #[test]
    fn test_get_missing_column_is_null() {
        let fields = Fields::new();
        assert!(fields.get("nome").is_null());
    }

    #[test]
    fn test_complete_for_fills_unsupplied_columns_and_drops_unknown() {
        let mut fields = Fields::new();
        fields.set("nome", Value::Text("Arroz".into()));
        fields.set("extra", Value::Integer(1));

        let complete = fields.complete_for(&SAMPLE);
        let columns: Vec<_> = complete.iter().map(|(k, _)| k).collect();

        assert_eq!(columns, vec!["nome", "quantidade"]);
        assert_eq!(complete.get("quantidade"), &Value::Null);
    }

    #[test]
    fn test_date_renders_as_iso_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2030, 2, 3).unwrap();
        assert_eq!(Value::Date(date).to_json(), serde_json::json!("2030-02-03"));
    }
}
