//! Request shapes for the appointment endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// A patient's request for an appointment with a doctor. The address
/// fields are optional; they matter only for home visits.
#[derive(Debug, Deserialize, Validate)]
pub struct AppointmentRequestPayload {
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "Patronymic too long"))]
    pub patronymic: Option<String>,

    #[validate(range(min = 0, max = 130, message = "Age must be between 0 and 130"))]
    pub age: i32,

    #[validate(length(max = 255, message = "Street too long"))]
    pub street: Option<String>,

    pub apartment: Option<i32>,
    pub entrance: Option<i32>,
    pub floor: Option<i32>,

    pub doctor_id: i32,

    #[validate(range(min = 0, message = "Priority must not be negative"))]
    pub priority: i32,

    pub appointment_date: DateTime<Utc>,
}
