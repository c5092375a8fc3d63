//! Defines the HTTP routes for the appointment endpoints.

use crate::api::appointment::handlers::create_appointment;
use axum::{Router, routing::post};

/// Creates the appointment router
pub fn appointment_router() -> Router {
    Router::new().route("/api/appointments", post(create_appointment))
}
