//! Module for core business logic services.
//!
//! Services validate input and orchestrate repository calls; handlers stay
//! thin pass-throughs.

pub mod appointment_service;
pub mod doctor_service;
pub mod user_service;
