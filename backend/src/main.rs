//! Main entry point for the clinic management backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection pool, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall
//! structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use crate::api::common::ApiResponse;
use crate::auth::service::AuthService;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use database::Database;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    db.run_migrations().await.unwrap();
    let pool = db.pool().clone();

    let jwt_utils = JwtUtils::new(&config.auth_secret_key, config.token_ttl_minutes);
    let auth_service = AuthService::new(pool.clone(), jwt_utils);

    UserService::new(&pool)
        .ensure_bootstrap_admin(&config)
        .await
        .unwrap();

    let app = Router::new()
        .route("/", get(root_handler))
        .merge(auth::routes::auth_router())
        .merge(api::doctor::routes::doctor_router())
        .merge(api::appointment::routes::appointment_router())
        .layer(Extension(pool))
        .layer(Extension(auth_service));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting clinic backend on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Clinic Backend",
            "version": "0.1.0"
        }),
        "Welcome to the clinic API",
    ))
}
