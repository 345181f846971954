//! MySQL store backed by an sqlx connection pool.
//!
//! All statements are parameterized. Table and column identifiers are taken only from the
//! static [`Schema`] descriptors, never from request data.

use super::{Fields, Store, StoreResult, Value};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::schema::{ColumnKind, Schema};
use chrono::NaiveDate;
use rbfs_types::RecordId;
use sqlx::mysql::{MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{MySql, Row};

/// Store over a pooled set of MySQL connections.
#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Build the pool without opening any connection.
    ///
    /// Connections are established on first use, up to `max_connections`. Requests beyond that
    /// bound queue for at most `acquire_timeout`; idle connections are released after
    /// `idle_timeout`.
    pub fn connect_lazy(cfg: &StoreConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(cfg.host())
            .port(cfg.port())
            .username(cfg.user())
            .password(cfg.password())
            .database(cfg.database());

        let pool = MySqlPoolOptions::new()
            .max_connections(cfg.max_connections())
            .min_connections(0)
            .idle_timeout(cfg.idle_timeout())
            .acquire_timeout(cfg.acquire_timeout())
            .connect_lazy_with(options);

        tracing::info!(
            "MySQL pool for {}@{}:{}/{} (max_connections={}, idle_timeout={:?})",
            cfg.user(),
            cfg.host(),
            cfg.port(),
            cfg.database(),
            cfg.max_connections(),
            cfg.idle_timeout()
        );

        Self { pool }
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl Store for MySqlStore {
    async fn fetch_all(&self, schema: &'static Schema) -> StoreResult<Vec<(RecordId, Fields)>> {
        let sql = select_all_sql(schema);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| decode_row(schema, row)).collect()
    }

    async fn insert(&self, schema: &'static Schema, fields: &Fields) -> StoreResult<RecordId> {
        let sql = insert_sql(schema);
        let result = bind_columns(sqlx::query(&sql), schema, fields)
            .execute(&self.pool)
            .await?;
        Ok(RecordId::new(result.last_insert_id()))
    }

    async fn update(
        &self,
        schema: &'static Schema,
        id: RecordId,
        fields: &Fields,
    ) -> StoreResult<bool> {
        let sql = update_sql(schema);
        let result = bind_columns(sqlx::query(&sql), schema, fields)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // MySQL counts changed rows, not matched ones: an update that rewrites identical
        // values reports zero. Probe before calling the id missing.
        self.exists(schema, id).await
    }

    async fn exists(&self, schema: &'static Schema, id: RecordId) -> StoreResult<bool> {
        let count: i64 = sqlx::query_scalar(&exists_sql(schema))
            .bind(id.get())
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete(&self, schema: &'static Schema, id: RecordId) -> StoreResult<bool> {
        let result = sqlx::query(&delete_sql(schema))
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind_columns<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    schema: &Schema,
    fields: &Fields,
) -> Query<'q, MySql, MySqlArguments> {
    for column in schema.columns {
        query = match fields.get(column.name) {
            Value::Null => query.bind(None::<String>),
            Value::Text(s) => query.bind(s.clone()),
            Value::Integer(n) => query.bind(*n),
            Value::Date(d) => query.bind(*d),
        };
    }
    query
}

fn decode_row(schema: &Schema, row: &MySqlRow) -> StoreResult<(RecordId, Fields)> {
    let raw_id: i64 = row.try_get("id")?;
    let id = u64::try_from(raw_id)
        .map(RecordId::new)
        .map_err(|_| StoreError::Decode {
            column: "id",
            reason: format!("negative id {raw_id}"),
        })?;

    let mut fields = Fields::new();
    for column in schema.columns {
        let value = match column.kind {
            ColumnKind::Text => row
                .try_get::<Option<String>, _>(column.name)?
                .map(Value::Text),
            ColumnKind::Integer => row
                .try_get::<Option<i64>, _>(column.name)?
                .map(Value::Integer),
            ColumnKind::Date => row
                .try_get::<Option<NaiveDate>, _>(column.name)?
                .map(Value::Date),
        };
        fields.set(column.name, value.unwrap_or(Value::Null));
    }
    Ok((id, fields))
}

fn quoted_columns(schema: &Schema) -> Vec<String> {
    schema.column_names().map(|name| format!("`{name}`")).collect()
}

fn select_all_sql(schema: &Schema) -> String {
    let mut columns = vec!["`id`".to_string()];
    columns.extend(quoted_columns(schema));
    format!("SELECT {} FROM `{}`", columns.join(", "), schema.table)
}

fn insert_sql(schema: &Schema) -> String {
    let columns = quoted_columns(schema);
    let placeholders = vec!["?"; columns.len()];
    format!(
        "INSERT INTO `{}` ({}) VALUES ({})",
        schema.table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

fn update_sql(schema: &Schema) -> String {
    let assignments: Vec<String> = quoted_columns(schema)
        .into_iter()
        .map(|column| format!("{column} = ?"))
        .collect();
    format!(
        "UPDATE `{}` SET {} WHERE `id` = ?",
        schema.table,
        assignments.join(", ")
    )
}

fn delete_sql(schema: &Schema) -> String {
    format!("DELETE FROM `{}` WHERE `id` = ?", schema.table)
}

fn exists_sql(schema: &Schema) -> String {
    format!("SELECT COUNT(*) FROM `{}` WHERE `id` = ?", schema.table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Clinic, Resource, Supply};

    #[test]
    fn test_select_lists_id_then_schema_columns() {
        assert_eq!(
            select_all_sql(Clinic::SCHEMA),
            "SELECT `id`, `nome`, `endereco`, `telefone`, `responsavel` FROM `Clinicas`"
        );
    }

    #[test]
    fn test_insert_binds_every_column() {
        assert_eq!(
            insert_sql(Supply::SCHEMA),
            "INSERT INTO `mantimentos` (`nome`, `quantidade`, `validade`, `unidade_medida`, `descricao`) VALUES (?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_update_sets_every_column_by_id() {
        assert_eq!(
            update_sql(Clinic::SCHEMA),
            "UPDATE `Clinicas` SET `nome` = ?, `endereco` = ?, `telefone` = ?, `responsavel` = ? WHERE `id` = ?"
        );
    }

    #[test]
    fn test_delete_and_exists_target_id() {
        assert_eq!(
            delete_sql(Supply::SCHEMA),
            "DELETE FROM `mantimentos` WHERE `id` = ?"
        );
        assert_eq!(
            exists_sql(Supply::SCHEMA),
            "SELECT COUNT(*) FROM `mantimentos` WHERE `id` = ?"
        );
    }
}
