//! Translation of repository outcomes into HTTP responses.

use api_shared::ErrorRes;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rbfs_core::{ResourceError, Schema};

pub const INVALID_BODY: &str = "Corpo da requisição inválido";

/// The repository operation a handler was performing when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Generic message for a storage failure. Driver detail is logged, never returned.
    pub fn failure_message(self, schema: &Schema) -> &'static str {
        match self {
            Operation::List => schema.messages.list_failed,
            Operation::Create => schema.messages.create_failed,
            Operation::Update => schema.messages.update_failed,
            Operation::Delete => schema.messages.delete_failed,
        }
    }
}

/// An error response: a status code and a body of the form `{"erro": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn resource(error: ResourceError, schema: &Schema, operation: Operation) -> Self {
        match error {
            ResourceError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            ResourceError::NotFound => Self::new(StatusCode::NOT_FOUND, schema.messages.not_found),
            ResourceError::Storage(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                operation.failure_message(schema),
            ),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorRes::new(self.message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, INVALID_BODY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbfs_core::{Resource, StoreError, Supply};

    #[test]
    fn test_resource_errors_map_to_status_codes() {
        let schema = Supply::SCHEMA;

        let err = ApiError::resource(
            ResourceError::Validation("A data de validade deve ser futura!".into()),
            schema,
            Operation::Create,
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "A data de validade deve ser futura!");

        let err = ApiError::resource(ResourceError::NotFound, schema, Operation::Delete);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Mantimento não encontrado");
    }

    #[test]
    fn test_storage_errors_hide_driver_detail() {
        let err = ApiError::resource(
            ResourceError::Storage(StoreError::Closed),
            Supply::SCHEMA,
            Operation::Update,
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Erro ao atualizar mantimento");
    }
}
