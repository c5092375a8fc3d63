//! Handler functions for authentication-related API endpoints.

use crate::api::common::service_error_to_http;
use crate::auth::models::{LoginRequest, TokenResponse};
use crate::auth::service::AuthService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(auth_service): Extension<AuthService>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<TokenResponse>, (StatusCode, String)> {
    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
