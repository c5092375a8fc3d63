//! Database repository for patient appointment requests.

use crate::database::models::CreateAppointment;
use crate::database::session::DbSession;
use crate::errors::ServiceResult;

/// Repository for appointment request database operations.
pub struct AppointmentRepository<'a> {
    /// The request's transactional session
    session: &'a mut DbSession,
}

impl<'a> AppointmentRepository<'a> {
    /// Creates a new AppointmentRepository instance.
    ///
    /// # Arguments
    /// * `session` - The request-scoped database session
    pub fn new(session: &'a mut DbSession) -> Self {
        Self { session }
    }

    /// Inserts a new appointment request.
    ///
    /// # Arguments
    /// * `appointment` - CreateAppointment DTO containing patient details
    ///
    /// # Returns
    /// The new appointment request's id
    pub async fn create(&mut self, appointment: CreateAppointment) -> ServiceResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO appointment_requests
                (last_name, first_name, patronymic, age, street, apartment,
                 entrance, floor, doctor_id, priority, appointment_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&appointment.last_name)
        .bind(&appointment.first_name)
        .bind(&appointment.patronymic)
        .bind(appointment.age)
        .bind(&appointment.street)
        .bind(appointment.apartment)
        .bind(appointment.entrance)
        .bind(appointment.floor)
        .bind(appointment.doctor_id)
        .bind(appointment.priority)
        .bind(appointment.appointment_date)
        .fetch_one(self.session.conn())
        .await?;

        Ok(id)
    }
}
