//! Appointment request business logic service.

use crate::api::appointment::models::AppointmentRequestPayload;
use crate::database::models::CreateAppointment;
use crate::database::session::DbSession;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::employee_repository::EmployeeRepository;
use validator::Validate;

pub struct AppointmentService<'a> {
    /// The request-scoped database session
    session: &'a mut DbSession,
}

impl<'a> AppointmentService<'a> {
    /// Creates a new AppointmentService instance.
    pub fn new(session: &'a mut DbSession) -> Self {
        Self { session }
    }

    /// Records a patient's appointment request against a doctor.
    ///
    /// The referenced doctor must exist; requests against the same doctor
    /// and slot are not coordinated beyond the database's transaction
    /// isolation.
    pub async fn create_request(&mut self, payload: AppointmentRequestPayload) -> ServiceResult<i32> {
        payload.validate()?;

        let mut employees = EmployeeRepository::new(self.session);
        if !employees.exists(payload.doctor_id).await? {
            return Err(ServiceError::not_found(
                "Doctor",
                payload.doctor_id.to_string(),
            ));
        }

        let mut repo = AppointmentRepository::new(self.session);
        let id = repo
            .create(CreateAppointment {
                last_name: payload.last_name,
                first_name: payload.first_name,
                patronymic: payload.patronymic,
                age: payload.age,
                street: payload.street,
                apartment: payload.apartment,
                entrance: payload.entrance,
                floor: payload.floor,
                doctor_id: payload.doctor_id,
                priority: payload.priority,
                appointment_date: payload.appointment_date,
            })
            .await?;

        Ok(id)
    }
}
