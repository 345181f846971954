//! The four managed resources and the generic mapping between them and storage fields.

pub mod clinic;
pub mod supply;
pub mod vaccine;
pub mod volunteer;

pub use clinic::Clinic;
pub use supply::Supply;
pub use vaccine::Vaccine;
pub use volunteer::Volunteer;

use crate::error::{ResourceResult, StoreError};
use crate::schema::{Column, ColumnKind, Schema};
use crate::store::{Fields, StoreResult, Value};
use chrono::NaiveDate;
use rbfs_types::RecordId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;

/// A resource kind managed through the generic [`Repository`](crate::repository::Repository).
///
/// Implementors are flat serde structs whose wire keys match the columns of `SCHEMA`. Every
/// field is optional at the type level; presence is enforced on create by validation, and the
/// `Default` value (every field absent) is what an empty update body writes.
pub trait Resource:
    Serialize + DeserializeOwned + Debug + Default + Send + Sync + 'static
{
    const SCHEMA: &'static Schema;

    /// Business rule applied on create after the required-field check.
    fn check(&self, _today: NaiveDate) -> ResourceResult<()> {
        Ok(())
    }
}

/// A stored resource together with its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<R> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: R,
}

/// Map a resource onto storage fields, one entry per schema column.
pub fn to_fields<R: Resource>(resource: &R) -> StoreResult<Fields> {
    let json = serde_json::to_value(resource).map_err(StoreError::Record)?;
    let mut fields = Fields::new();
    for column in R::SCHEMA.columns {
        let value = match json.get(column.name) {
            None | Some(serde_json::Value::Null) => Value::Null,
            Some(v) => value_from_json(column, v)?,
        };
        fields.set(column.name, value);
    }
    Ok(fields)
}

/// Rebuild a record from a stored row.
pub fn from_fields<R: Resource>(id: RecordId, fields: &Fields) -> StoreResult<Record<R>> {
    let object: serde_json::Map<String, serde_json::Value> = R::SCHEMA
        .columns
        .iter()
        .map(|column| (column.name.to_owned(), fields.get(column.name).to_json()))
        .collect();
    let fields =
        serde_json::from_value::<R>(serde_json::Value::Object(object)).map_err(StoreError::Record)?;
    Ok(Record { id, fields })
}

fn value_from_json(column: &Column, json: &serde_json::Value) -> StoreResult<Value> {
    let mismatch = || StoreError::Encode {
        column: column.name,
        reason: format!("expected {:?}, got {json}", column.kind),
    };
    match column.kind {
        ColumnKind::Text => json
            .as_str()
            .map(|s| Value::Text(s.to_owned()))
            .ok_or_else(mismatch),
        ColumnKind::Integer => json.as_i64().map(Value::Integer).ok_or_else(mismatch),
        ColumnKind::Date => json
            .as_str()
            .ok_or_else(mismatch)?
            .parse::<NaiveDate>()
            .map(Value::Date)
            .map_err(|e| StoreError::Encode {
                column: column.name,
                reason: e.to_string(),
            }),
    }
}

/// Accepts an integer given either as a JSON number or as a numeric string.
///
/// Browser forms routinely submit quantities as strings.
pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {s:?}"))),
    }
}
