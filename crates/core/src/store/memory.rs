//! In-process store.
//!
//! Mirrors the MySQL store's observable behaviour: ids auto-increment per table starting at 1,
//! listing returns rows in insertion order, and updates overwrite every column.

use super::{Fields, Store, StoreResult};
use crate::error::StoreError;
use crate::schema::Schema;
use rbfs_types::RecordId;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    last_id: u64,
    rows: BTreeMap<RecordId, Fields>,
}

#[derive(Debug, Default)]
struct State {
    closed: bool,
    tables: HashMap<&'static str, Table>,
}

/// Store backed by a map per table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn fetch_all(&self, schema: &'static Schema) -> StoreResult<Vec<(RecordId, Fields)>> {
        let state = self.state.read().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        Ok(state
            .tables
            .get(schema.table)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|(id, fields)| (*id, fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(&self, schema: &'static Schema, fields: &Fields) -> StoreResult<RecordId> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        let table = state.tables.entry(schema.table).or_default();
        table.last_id += 1;
        let id = RecordId::new(table.last_id);
        table.rows.insert(id, fields.complete_for(schema));
        Ok(id)
    }

    async fn update(
        &self,
        schema: &'static Schema,
        id: RecordId,
        fields: &Fields,
    ) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        let Some(row) = state
            .tables
            .get_mut(schema.table)
            .and_then(|table| table.rows.get_mut(&id))
        else {
            return Ok(false);
        };
        *row = fields.complete_for(schema);
        Ok(true)
    }

    async fn exists(&self, schema: &'static Schema, id: RecordId) -> StoreResult<bool> {
        let state = self.state.read().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        Ok(state
            .tables
            .get(schema.table)
            .is_some_and(|table| table.rows.contains_key(&id)))
    }

    async fn delete(&self, schema: &'static Schema, id: RecordId) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(StoreError::Closed);
        }
        Ok(state
            .tables
            .get_mut(schema.table)
            .and_then(|table| table.rows.remove(&id))
            .is_some())
    }

    async fn close(&self) {
        let mut state = self.state.write().await;
        state.closed = true;
        state.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Resource, Supply, Volunteer};
    use crate::store::Value;

    fn volunteer_fields(name: &str) -> Fields {
        let mut fields = Fields::new();
        fields.set("nome", Value::Text(name.into()));
        fields.set("contato", Value::Text(format!("{name}@example.org")));
        fields
    }

    #[tokio::test]
    async fn test_ids_increase_per_table() {
        let store = MemoryStore::new();

        let first = store
            .insert(Volunteer::SCHEMA, &volunteer_fields("Ana"))
            .await
            .expect("insert should succeed");
        let second = store
            .insert(Volunteer::SCHEMA, &volunteer_fields("Bruno"))
            .await
            .expect("insert should succeed");
        let other_table = store
            .insert(Supply::SCHEMA, &Fields::new())
            .await
            .expect("insert should succeed");

        assert_eq!(first, RecordId::new(1));
        assert_eq!(second, RecordId::new(2));
        assert_eq!(other_table, RecordId::new(1));
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        let id = store
            .insert(Volunteer::SCHEMA, &volunteer_fields("Ana"))
            .await
            .unwrap();
        assert!(store.delete(Volunteer::SCHEMA, id).await.unwrap());

        let next = store
            .insert(Volunteer::SCHEMA, &volunteer_fields("Bruno"))
            .await
            .unwrap();
        assert_eq!(next, RecordId::new(2));
    }

    #[tokio::test]
    async fn test_update_overwrites_every_column() {
        let store = MemoryStore::new();
        let id = store
            .insert(Volunteer::SCHEMA, &volunteer_fields("Ana"))
            .await
            .unwrap();

        let mut replacement = Fields::new();
        replacement.set("nome", Value::Text("Ana Paula".into()));
        assert!(store
            .update(Volunteer::SCHEMA, id, &replacement)
            .await
            .unwrap());

        let rows = store.fetch_all(Volunteer::SCHEMA).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.get("nome"), &Value::Text("Ana Paula".into()));
        assert!(rows[0].1.get("contato").is_null(), "contato should be cleared");
    }

    #[tokio::test]
    async fn test_update_and_delete_report_unmatched_ids() {
        let store = MemoryStore::new();
        let missing = RecordId::new(99);

        assert!(!store
            .update(Volunteer::SCHEMA, missing, &Fields::new())
            .await
            .unwrap());
        assert!(!store.delete(Volunteer::SCHEMA, missing).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_tracks_inserts_and_deletes() {
        let store = MemoryStore::new();
        assert!(!store
            .exists(Volunteer::SCHEMA, RecordId::new(1))
            .await
            .unwrap());

        let id = store
            .insert(Volunteer::SCHEMA, &volunteer_fields("Ana"))
            .await
            .unwrap();
        assert!(store.exists(Volunteer::SCHEMA, id).await.unwrap());
        assert!(!store.exists(Supply::SCHEMA, id).await.unwrap());

        store.delete(Volunteer::SCHEMA, id).await.unwrap();
        assert!(!store.exists(Volunteer::SCHEMA, id).await.unwrap());
    }

    #[tokio::test]
    async fn test_closed_store_rejects_operations() {
        let store = MemoryStore::new();
        store.close().await;

        let err = store
            .fetch_all(Volunteer::SCHEMA)
            .await
            .expect_err("closed store should fail");
        assert!(matches!(err, StoreError::Closed));
    }
}
