//! Doctor business logic service.

use crate::api::doctor::models::{DoctorResponse, RegisterDoctorRequest};
use crate::database::models::CreateEmployee;
use crate::database::session::DbSession;
use crate::errors::ServiceResult;
use crate::repositories::employee_repository::EmployeeRepository;
use validator::Validate;

pub struct DoctorService<'a> {
    /// The request-scoped database session
    session: &'a mut DbSession,
}

impl<'a> DoctorService<'a> {
    /// Creates a new DoctorService instance.
    pub fn new(session: &'a mut DbSession) -> Self {
        Self { session }
    }

    /// Lists all registered doctors with their reference data resolved.
    pub async fn list_doctors(&mut self) -> ServiceResult<Vec<DoctorResponse>> {
        let mut repo = EmployeeRepository::new(self.session);
        let records = repo.list_with_details().await?;

        Ok(records.into_iter().map(DoctorResponse::from).collect())
    }

    /// Registers a new doctor.
    ///
    /// Position, hiring format, and hospital arrive as names; each is
    /// resolved to a reference row inside the request's transaction and
    /// created when missing, so a failed registration leaves nothing
    /// behind.
    pub async fn register_doctor(&mut self, request: RegisterDoctorRequest) -> ServiceResult<i32> {
        request.validate()?;

        let mut repo = EmployeeRepository::new(self.session);

        let hospital_id = repo
            .resolve_hospital(&request.hospital.name, request.hospital.street.as_deref())
            .await?;
        let position_id = repo.resolve_position(&request.position).await?;
        let hiring_format_id = repo.resolve_hiring_format(&request.hiring_format).await?;

        let id = repo
            .create(CreateEmployee {
                last_name: request.last_name,
                first_name: request.first_name,
                patronymic: request.patronymic,
                hospital_id,
                position_id,
                hiring_format_id,
            })
            .await?;

        Ok(id)
    }
}
