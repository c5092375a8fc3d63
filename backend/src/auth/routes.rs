//! Defines the HTTP routes specifically for authentication.

use crate::auth::handlers::login;
use axum::{Router, routing::post};

/// Creates the authentication router
pub fn auth_router() -> Router {
    Router::new().route("/api/auth/login", post(login))
}
