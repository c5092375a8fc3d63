//! Database repository for doctor (employee) operations.
//!
//! Covers the doctor listing join, resolution of the reference rows an
//! employee points at (hospital, position, hiring format), and the
//! employee insert itself. All queries run on the request's session so a
//! registration is all-or-nothing.

use crate::database::models::{CreateEmployee, DoctorRecord};
use crate::database::session::DbSession;
use crate::errors::ServiceResult;

/// Repository for employee database operations.
pub struct EmployeeRepository<'a> {
    /// The request's transactional session
    session: &'a mut DbSession,
}

impl<'a> EmployeeRepository<'a> {
    /// Creates a new EmployeeRepository instance.
    ///
    /// # Arguments
    /// * `session` - The request-scoped database session
    pub fn new(session: &'a mut DbSession) -> Self {
        Self { session }
    }

    /// Retrieves all doctors with their position, hiring format, and
    /// hospital resolved to names.
    pub async fn list_with_details(&mut self) -> ServiceResult<Vec<DoctorRecord>> {
        let doctors = sqlx::query_as::<_, DoctorRecord>(
            r#"
            SELECT
                e.id,
                e.last_name,
                e.first_name,
                e.patronymic,
                p.title AS position,
                f.name AS hiring_format,
                h.name AS hospital_name,
                h.street AS hospital_street
            FROM employees e
            JOIN employee_positions p ON p.id = e.position_id
            JOIN employee_hiring_formats f ON f.id = e.hiring_format_id
            JOIN hospitals h ON h.id = e.hospital_id
            ORDER BY e.id
            "#,
        )
        .fetch_all(self.session.conn())
        .await?;

        Ok(doctors)
    }

    /// Checks whether an employee with the given id exists.
    pub async fn exists(&mut self, id: i32) -> ServiceResult<bool> {
        let found = sqlx::query_scalar::<_, i32>("SELECT id FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(self.session.conn())
            .await?;

        Ok(found.is_some())
    }

    /// Resolves a hospital by name and street, creating it when missing.
    ///
    /// # Returns
    /// The hospital's id
    pub async fn resolve_hospital(
        &mut self,
        name: &str,
        street: Option<&str>,
    ) -> ServiceResult<i32> {
        let existing = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM hospitals WHERE name = $1 AND street IS NOT DISTINCT FROM $2",
        )
        .bind(name)
        .bind(street)
        .fetch_optional(self.session.conn())
        .await?;

        if let Some(id) = existing {
            return Ok(id);
        }

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO hospitals (name, street) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(street)
        .fetch_one(self.session.conn())
        .await?;

        Ok(id)
    }

    /// Resolves a position by title, creating it when missing.
    ///
    /// # Returns
    /// The position's id
    pub async fn resolve_position(&mut self, title: &str) -> ServiceResult<i32> {
        let existing =
            sqlx::query_scalar::<_, i32>("SELECT id FROM employee_positions WHERE title = $1")
                .bind(title)
                .fetch_optional(self.session.conn())
                .await?;

        if let Some(id) = existing {
            return Ok(id);
        }

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO employee_positions (title) VALUES ($1) RETURNING id",
        )
        .bind(title)
        .fetch_one(self.session.conn())
        .await?;

        Ok(id)
    }

    /// Resolves a hiring format by name, creating it when missing.
    ///
    /// # Returns
    /// The hiring format's id
    pub async fn resolve_hiring_format(&mut self, name: &str) -> ServiceResult<i32> {
        let existing =
            sqlx::query_scalar::<_, i32>("SELECT id FROM employee_hiring_formats WHERE name = $1")
                .bind(name)
                .fetch_optional(self.session.conn())
                .await?;

        if let Some(id) = existing {
            return Ok(id);
        }

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO employee_hiring_formats (name) VALUES ($1) RETURNING id",
        )
        .bind(name)
        .fetch_one(self.session.conn())
        .await?;

        Ok(id)
    }

    /// Inserts a new employee row.
    ///
    /// # Arguments
    /// * `employee` - CreateEmployee DTO with resolved reference ids
    ///
    /// # Returns
    /// The new employee's id
    pub async fn create(&mut self, employee: CreateEmployee) -> ServiceResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO employees
                (last_name, first_name, patronymic, hospital_id, position_id, hiring_format_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.patronymic)
        .bind(employee.hospital_id)
        .bind(employee.position_id)
        .bind(employee.hiring_format_id)
        .fetch_one(self.session.conn())
        .await?;

        Ok(id)
    }
}
