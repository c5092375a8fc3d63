//! Handler functions for the doctor API endpoints.

use crate::api::common::service_error_to_http;
use crate::api::doctor::models::{DoctorResponse, RegisterDoctorRequest};
use crate::auth::models::CurrentUser;
use crate::database::session::DbSession;
use crate::services::doctor_service::DoctorService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};

/// List all registered doctors.
#[axum::debug_handler]
pub async fn list_doctors(
    mut session: DbSession,
) -> Result<ResponseJson<Vec<DoctorResponse>>, (StatusCode, String)> {
    let mut doctor_service = DoctorService::new(&mut session);

    match doctor_service.list_doctors().await {
        Ok(doctors) => Ok(ResponseJson(doctors)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Register a new doctor. Admin-gated by the route middleware.
#[axum::debug_handler]
pub async fn register_doctor(
    mut session: DbSession,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<RegisterDoctorRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let result = {
        let mut doctor_service = DoctorService::new(&mut session);
        doctor_service.register_doctor(payload).await
    };

    match result {
        Ok(id) => {
            session.commit().await.map_err(service_error_to_http)?;
            tracing::info!("doctor {} registered by {}", id, current_user.username);
            Ok(StatusCode::CREATED)
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}
