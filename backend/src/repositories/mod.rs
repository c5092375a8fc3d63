//! Database repositories for the application's entities.
//!
//! Repositories hold the persistence queries; business rules live in the
//! service layer above them.

pub mod appointment_repository;
pub mod employee_repository;
pub mod user_repository;
