//! # RBFS Core
//!
//! The resource access layer of the RBFS relief-logistics service.
//!
//! This crate maps validated create/read/update/delete operations for the four managed
//! resources (clinics, supplies, vaccines, volunteers) onto a relational store:
//! - Schema descriptors naming each table, its columns and mandatory fields
//! - One generic [`Repository`] instantiated per resource
//! - The [`Store`] seam, with a pooled MySQL implementation and an in-memory one
//!
//! **No API concerns**: HTTP routing, JSON bodies and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod repository;
pub mod resources;
pub mod schema;
pub mod store;
pub mod validation;

pub use config::{StoreConfig, StoreKind};
pub use error::{ConfigError, ResourceError, ResourceResult, StoreError};
pub use rbfs_types::{NonEmptyText, RecordId};
pub use repository::{parse_id, Repository};
pub use resources::{Clinic, Record, Resource, Supply, Vaccine, Volunteer};
pub use schema::Schema;
pub use store::{MemoryStore, MySqlStore, Store};
