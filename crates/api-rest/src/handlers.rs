//! Request handlers.
//!
//! The resource handlers are generic over [`Resource`] and are instantiated once per resource
//! in [`crate::routes`]. They only translate between HTTP and the repository.

use crate::error::{ApiError, Operation};
use crate::extract::ApiJson;
use crate::openapi;
use crate::state::AppState;
use api_shared::{HealthRes, HealthService, MessageRes};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use rbfs_core::{parse_id, Record, Resource};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the RBFS service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

/// Serves the OpenAPI document describing every route.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::document())
}

/// `GET /{resource}`: every stored record.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<R>>>, ApiError> {
    state
        .repository::<R>()
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::resource(e, R::SCHEMA, Operation::List))
}

/// `POST /{resource}`: validate and insert, answering `201` with the record and its new id.
///
/// # Errors
/// - `400 Bad Request` if the body is malformed, a required field is missing, or a
///   business rule rejects it.
/// - `500 Internal Server Error` if the insert fails.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ApiJson(resource): ApiJson<R>,
) -> Result<(StatusCode, Json<Record<R>>), ApiError> {
    let record = state
        .repository::<R>()
        .create(resource)
        .await
        .map_err(|e| ApiError::resource(e, R::SCHEMA, Operation::Create))?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PATCH /{resource}/{id}`: overwrite every field of the record.
///
/// Fields missing from the body are cleared, and an empty body clears them all. No field
/// validation is applied, so the body is read raw rather than through [`ApiJson`].
///
/// # Errors
/// - `404 Not Found` if no record has that id, whatever the body holds.
/// - `500 Internal Server Error` if the body cannot be stored or the update fails.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageRes>, ApiError> {
    let schema = R::SCHEMA;
    let id = parse_id(&id).map_err(|e| ApiError::resource(e, schema, Operation::Update))?;
    state
        .repository::<R>()
        .update_json(id, &body)
        .await
        .map_err(|e| ApiError::resource(e, schema, Operation::Update))?;
    Ok(Json(MessageRes::new(schema.messages.updated)))
}

/// `DELETE /{resource}/{id}`: remove the record.
///
/// # Errors
/// - `404 Not Found` if no record has that id.
/// - `500 Internal Server Error` if the delete fails.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    let schema = R::SCHEMA;
    let id = parse_id(&id).map_err(|e| ApiError::resource(e, schema, Operation::Delete))?;
    state
        .repository::<R>()
        .delete(id)
        .await
        .map_err(|e| ApiError::resource(e, schema, Operation::Delete))?;
    Ok(Json(MessageRes::new(schema.messages.deleted)))
}
