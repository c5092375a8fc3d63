//! Defines the HTTP routes for the doctor endpoints.
//!
//! The listing is public; registration is wrapped by the admin gate.

use crate::api::doctor::handlers::{list_doctors, register_doctor};
use crate::auth::middleware::admin_gate;
use axum::{
    Router,
    extract::Request,
    middleware,
    routing::{get, put},
};

/// Creates the doctor router
pub fn doctor_router() -> Router {
    Router::new()
        .route("/api/doctors", get(list_doctors))
        .merge(
            Router::new()
                .route("/api/doctors", put(register_doctor))
                .route_layer(middleware::from_fn::<_, (Request,)>(admin_gate)),
        )
}
