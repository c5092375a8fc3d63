//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and
//! retrieved from the database. Note that these may differ from
//! API-specific models.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::Validate;

/// Staff role, stored as a small integer in `user_roles`.
///
/// A closed enumeration: the authorization gate matches on it
/// exhaustively, so adding a role forces every gate to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[repr(i32)]
pub enum UserRole {
    Doctor = 0,
    Admin = 1,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Doctor => "doctor",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staff user as persisted in the credential store. Read-only from the
/// request path; rows are created by the bootstrap path or externally.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    #[sqlx(rename = "role_id")]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateUser {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Username must be between 1-20 characters"
    ))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: UserRole,
}

/// One row of the doctor listing join: an employee together with the
/// resolved names of its position, hiring format, and hospital.
#[derive(Debug, Clone, FromRow)]
pub struct DoctorRecord {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub position: String,
    pub hiring_format: String,
    pub hospital_name: String,
    pub hospital_street: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub hospital_id: i32,
    pub position_id: i32,
    pub hiring_format_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateAppointment {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub age: i32,
    pub street: Option<String>,
    pub apartment: Option<i32>,
    pub entrance: Option<i32>,
    pub floor: Option<i32>,
    pub doctor_id: i32,
    pub priority: i32,
    pub appointment_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names() {
        assert_eq!(UserRole::Doctor.as_str(), "doctor");
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }

    #[test]
    fn create_user_rejects_short_password() {
        let request = CreateUser {
            username: "drhouse".to_string(),
            password: "short".to_string(),
            role: UserRole::Admin,
        };
        assert!(request.validate().is_err());
    }
}
