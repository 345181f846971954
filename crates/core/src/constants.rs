//! Constants used throughout the RBFS core crate.
//!
//! Configuration keys and their defaults live here so that the binary, tests and
//! documentation agree on one set of names.

/// Environment key for the REST listener address.
pub const REST_ADDR_KEY: &str = "RBFS_REST_ADDR";
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3002";

/// Environment key selecting the storage backend (`mysql` or `memory`).
pub const STORE_KIND_KEY: &str = "RBFS_STORE";

pub const DB_HOST_KEY: &str = "RBFS_DB_HOST";
pub const DB_PORT_KEY: &str = "RBFS_DB_PORT";
pub const DB_USER_KEY: &str = "RBFS_DB_USER";
pub const DB_PASSWORD_KEY: &str = "RBFS_DB_PASSWORD";
pub const DB_NAME_KEY: &str = "RBFS_DB_NAME";
pub const DB_MAX_CONNECTIONS_KEY: &str = "RBFS_DB_MAX_CONNECTIONS";
pub const DB_IDLE_TIMEOUT_KEY: &str = "RBFS_DB_IDLE_TIMEOUT_SECS";
pub const DB_ACQUIRE_TIMEOUT_KEY: &str = "RBFS_DB_ACQUIRE_TIMEOUT_SECS";

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_NAME: &str = "RBFS";

/// Upper bound on pooled connections. Requests beyond it wait for a free connection.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Seconds a pooled connection may sit idle before it is released.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;

/// Seconds a request waits in the pool queue before the acquire fails.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
