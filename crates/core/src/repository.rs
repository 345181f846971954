//! Generic resource repository.
//!
//! One implementation of list/create/update/delete serves every [`Resource`]. The resource's
//! [`Schema`](crate::schema::Schema) supplies the table, the required columns and the messages;
//! its [`Resource::check`] hook supplies any extra business rule.
//!
//! Every operation is a single round-trip to the [`Store`]: nothing is cached between calls
//! and nothing is retried.

use crate::error::{ResourceError, ResourceResult, StoreError};
use crate::resources::{from_fields, to_fields, Record, Resource};
use crate::store::{Store, StoreResult};
use crate::validation::{check_required, today};
use chrono::NaiveDate;
use rbfs_types::RecordId;
use std::marker::PhantomData;
use std::sync::Arc;

/// Parse a caller-supplied identifier.
///
/// Text that is not a positive integer cannot name any stored row, so it is reported as
/// `NotFound` rather than as a validation failure.
pub fn parse_id(raw: &str) -> ResourceResult<RecordId> {
    raw.parse::<RecordId>().map_err(|_| ResourceError::NotFound)
}

/// Validated CRUD operations over one resource table.
pub struct Repository<R> {
    store: Arc<dyn Store>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> Repository<R> {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            resource: PhantomData,
        }
    }

    /// All records of the resource, in storage order.
    ///
    /// # Errors
    ///
    /// `ResourceError::Storage` if the store cannot be read.
    pub async fn list(&self) -> ResourceResult<Vec<Record<R>>> {
        let rows = self
            .store
            .fetch_all(R::SCHEMA)
            .await
            .map_err(|e| storage_failure::<R>("list", e))?;

        rows.iter()
            .map(|(id, fields)| from_fields::<R>(*id, fields))
            .collect::<StoreResult<Vec<_>>>()
            .map_err(|e| storage_failure::<R>("list", e))
    }

    /// Validate and insert a new record, judging date rules against the current date.
    pub async fn create(&self, resource: R) -> ResourceResult<Record<R>> {
        self.create_on(resource, today()).await
    }

    /// Validate and insert a new record, judging date rules against `today`.
    ///
    /// Validation runs before any storage access. On success the returned record echoes the
    /// submitted fields together with the newly assigned id; the row is not read back.
    ///
    /// # Errors
    ///
    /// - `ResourceError::Validation` if a required field is missing or the resource's
    ///   business rule rejects it.
    /// - `ResourceError::Storage` if the insert fails.
    pub async fn create_on(&self, resource: R, today: NaiveDate) -> ResourceResult<Record<R>> {
        let fields = to_fields(&resource).map_err(|e| storage_failure::<R>("create", e))?;
        check_required(R::SCHEMA, &fields)?;
        resource.check(today)?;

        let id = self
            .store
            .insert(R::SCHEMA, &fields)
            .await
            .map_err(|e| storage_failure::<R>("create", e))?;

        tracing::debug!("{}: created record {}", R::SCHEMA.path, id);
        Ok(Record {
            id,
            fields: resource,
        })
    }

    /// Overwrite every field of record `id` with `resource`.
    ///
    /// Fields absent from `resource` are written as null. No field validation is applied.
    ///
    /// # Errors
    ///
    /// - `ResourceError::NotFound` if no record has that id.
    /// - `ResourceError::Storage` if the update fails.
    pub async fn update(&self, id: RecordId, resource: R) -> ResourceResult<()> {
        let fields = to_fields(&resource).map_err(|e| storage_failure::<R>("update", e))?;
        let matched = self
            .store
            .update(R::SCHEMA, id, &fields)
            .await
            .map_err(|e| storage_failure::<R>("update", e))?;

        if !matched {
            return Err(ResourceError::NotFound);
        }
        tracing::debug!("{}: updated record {}", R::SCHEMA.path, id);
        Ok(())
    }

    /// Overwrite record `id` from a raw JSON body.
    ///
    /// An empty body writes every field as null. A body that does not decode into `R` is
    /// `NotFound` when no record has that id; otherwise no column could hold it and it is
    /// reported as a storage failure.
    ///
    /// # Errors
    ///
    /// - `ResourceError::NotFound` if no record has that id.
    /// - `ResourceError::Storage` if the body cannot be stored or the update fails.
    pub async fn update_json(&self, id: RecordId, body: &[u8]) -> ResourceResult<()> {
        let resource = if body.iter().all(u8::is_ascii_whitespace) {
            R::default()
        } else {
            match serde_json::from_slice::<R>(body) {
                Ok(resource) => resource,
                Err(error) => return Err(self.undecodable(id, error).await),
            }
        };
        self.update(id, resource).await
    }

    async fn undecodable(&self, id: RecordId, error: serde_json::Error) -> ResourceError {
        match self.store.exists(R::SCHEMA, id).await {
            Ok(false) => ResourceError::NotFound,
            Ok(true) => storage_failure::<R>("update", StoreError::Record(error)),
            Err(e) => storage_failure::<R>("update", e),
        }
    }

    /// Remove record `id`.
    ///
    /// # Errors
    ///
    /// - `ResourceError::NotFound` if no record has that id.
    /// - `ResourceError::Storage` if the delete fails.
    pub async fn delete(&self, id: RecordId) -> ResourceResult<()> {
        let matched = self
            .store
            .delete(R::SCHEMA, id)
            .await
            .map_err(|e| storage_failure::<R>("delete", e))?;

        if !matched {
            return Err(ResourceError::NotFound);
        }
        tracing::debug!("{}: deleted record {}", R::SCHEMA.path, id);
        Ok(())
    }
}

fn storage_failure<R: Resource>(operation: &str, error: StoreError) -> ResourceError {
    tracing::error!("{} {} failed: {:?}", operation, R::SCHEMA.path, error);
    ResourceError::Storage(error)
}
