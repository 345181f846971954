//! # API REST
//!
//! REST API implementation for RBFS.
//!
//! Handles:
//! - HTTP endpoints with axum, one generic handler set instantiated per resource
//! - Mapping repository outcomes onto status codes and JSON bodies
//! - OpenAPI documentation
//! - REST-specific concerns (JSON extraction, CORS, request tracing)
//!
//! Uses `rbfs-core` for all data operations and `api-shared` for response bodies.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, Operation};
pub use routes::router;
pub use state::AppState;
