use crate::error::ApiError;
use axum::extract::FromRequest;

/// `axum::Json` with rejections rendered as `{"erro": ...}` with status 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
