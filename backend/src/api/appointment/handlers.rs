//! Handler functions for the appointment API endpoints.

use crate::api::appointment::models::AppointmentRequestPayload;
use crate::api::common::service_error_to_http;
use crate::database::session::DbSession;
use crate::services::appointment_service::AppointmentService;
use axum::{extract::Json, http::StatusCode};

/// Record a patient appointment request.
///
/// Insert failures roll the session back and surface as typed errors;
/// nothing is swallowed.
#[axum::debug_handler]
pub async fn create_appointment(
    mut session: DbSession,
    Json(payload): Json<AppointmentRequestPayload>,
) -> Result<StatusCode, (StatusCode, String)> {
    let result = {
        let mut appointment_service = AppointmentService::new(&mut session);
        appointment_service.create_request(payload).await
    };

    match result {
        Ok(_id) => {
            session.commit().await.map_err(service_error_to_http)?;
            Ok(StatusCode::CREATED)
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}
