use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};
use rbfs_core::{Clinic, Resource, Supply, Vaccine, Volunteer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full REST application.
///
/// Routes:
/// - `GET /health`, `GET /api-docs/openapi.json`
/// - `GET|POST /{resource}` and `PATCH|DELETE /{resource}/{id}` for
///   `clinicas`, `mantimentos`, `vacinas` and `voluntarios`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .merge(resource_routes::<Clinic>())
        .merge(resource_routes::<Supply>())
        .merge(resource_routes::<Vaccine>())
        .merge(resource_routes::<Volunteer>())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::SCHEMA.path);
    let item = format!("/{}/:id", R::SCHEMA.path);

    Router::new()
        .route(
            &collection,
            get(handlers::list::<R>).post(handlers::create::<R>),
        )
        .route(
            &item,
            patch(handlers::update::<R>).delete(handlers::delete::<R>),
        )
}
