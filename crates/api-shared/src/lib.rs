//! # API Shared
//!
//! Wire types shared by the RBFS HTTP surface.
//!
//! Contains:
//! - Response bodies for confirmations and errors
//! - `HealthService` for liveness checks

pub mod health;
pub mod responses;

pub use health::{HealthRes, HealthService};
pub use responses::{ErrorRes, MessageRes};
