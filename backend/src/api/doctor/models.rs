//! Request and response shapes for the doctor endpoints.

use crate::database::models::DoctorRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hospital as embedded in doctor payloads, both directions.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct HospitalInfo {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Hospital name must be between 1-100 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255, message = "Street too long"))]
    pub street: Option<String>,
}

/// One doctor in the public listing.
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub position: String,
    pub hiring_format: String,
    pub hospital: HospitalInfo,
}

impl From<DoctorRecord> for DoctorResponse {
    fn from(record: DoctorRecord) -> Self {
        DoctorResponse {
            id: record.id,
            last_name: record.last_name,
            first_name: record.first_name,
            patronymic: record.patronymic,
            position: record.position,
            hiring_format: record.hiring_format,
            hospital: HospitalInfo {
                name: record.hospital_name,
                street: record.hospital_street,
            },
        }
    }
}

/// Payload for registering a new doctor. Position, hiring format, and
/// hospital are referenced by name.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDoctorRequest {
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "Patronymic too long"))]
    pub patronymic: Option<String>,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Position must be between 1-30 characters"
    ))]
    pub position: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Hiring format must be between 1-30 characters"
    ))]
    pub hiring_format: String,

    #[validate(nested)]
    pub hospital: HospitalInfo,
}
