//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store. Nothing
//! in the request path reads environment variables.

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use rbfs_types::NonEmptyText;
use std::time::Duration;

/// Which [`Store`](crate::store::Store) implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    MySql,
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "mysql" => Ok(Self::MySql),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidValue {
                key: STORE_KIND_KEY,
                value: s.to_owned(),
            }),
        }
    }
}

/// Storage configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    kind: StoreKind,
    host: NonEmptyText,
    port: u16,
    user: NonEmptyText,
    password: String,
    database: NonEmptyText,
    max_connections: u32,
    idle_timeout: Duration,
    acquire_timeout: Duration,
}

impl StoreConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to the defaults in [`crate::constants`]. Present but blank values
    /// are treated as missing, except for the password where blank is a legitimate value.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kind = value(STORE_KIND_KEY)
            .map(|v| v.parse::<StoreKind>())
            .transpose()?
            .unwrap_or(StoreKind::MySql);

        let host = text(DB_HOST_KEY, value(DB_HOST_KEY), DEFAULT_DB_HOST)?;
        let user = text(DB_USER_KEY, value(DB_USER_KEY), DEFAULT_DB_USER)?;
        let database = text(DB_NAME_KEY, value(DB_NAME_KEY), DEFAULT_DB_NAME)?;
        let password = lookup(DB_PASSWORD_KEY).unwrap_or_default();

        let port = number(DB_PORT_KEY, value(DB_PORT_KEY), DEFAULT_DB_PORT)?;
        let max_connections = number(
            DB_MAX_CONNECTIONS_KEY,
            value(DB_MAX_CONNECTIONS_KEY),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: DB_MAX_CONNECTIONS_KEY,
                value: "0".into(),
            });
        }
        let idle_secs = number(
            DB_IDLE_TIMEOUT_KEY,
            value(DB_IDLE_TIMEOUT_KEY),
            DEFAULT_IDLE_TIMEOUT_SECS,
        )?;
        let acquire_secs = number(
            DB_ACQUIRE_TIMEOUT_KEY,
            value(DB_ACQUIRE_TIMEOUT_KEY),
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            kind,
            host,
            port,
            user,
            password,
            database,
            max_connections,
            idle_timeout: Duration::from_secs(idle_secs),
            acquire_timeout: Duration::from_secs(acquire_secs),
        })
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        self.user.as_str()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        self.database.as_str()
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn acquire_timeout(&self) -> Duration {
        self.acquire_timeout
    }
}

fn text(key: &'static str, value: Option<String>, default: &str) -> ConfigResult<NonEmptyText> {
    NonEmptyText::new(value.as_deref().unwrap_or(default))
        .map_err(|source| ConfigError::Empty { key, source })
}

fn number<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> ConfigResult<T> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
