//! Response bodies shared by all resources.
//!
//! Field names are part of the public contract with existing clients and stay in Portuguese.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response: a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    #[serde(rename = "erro")]
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys() {
        assert_eq!(
            serde_json::to_string(&MessageRes::new("ok")).unwrap(),
            r#"{"mensagem":"ok"}"#
        );
        assert_eq!(
            serde_json::to_string(&ErrorRes::new("falhou")).unwrap(),
            r#"{"erro":"falhou"}"#
        );
    }
}
