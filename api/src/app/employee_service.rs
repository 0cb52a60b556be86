//! Employee service
//!
//! Runs write requests through their validators, then drives the stores.

use std::sync::Arc;

use crate::app::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::entities::{Employee, EmployeeBenefit, EmployeeFilter, EmployeeId};
use crate::domain::ports::{BenefitRepository, EmployeeRepository};
use crate::error::{AppError, DomainError};
use crate::validation::Validator;

/// Service for managing employees and reading their benefits
pub struct EmployeeService<ER, BR>
where
    ER: EmployeeRepository,
    BR: BenefitRepository,
{
    employees: Arc<ER>,
    benefits: Arc<BR>,
    create_validator: Validator<CreateEmployeeRequest>,
    update_validator: Validator<UpdateEmployeeRequest>,
}

impl<ER, BR> EmployeeService<ER, BR>
where
    ER: EmployeeRepository,
    BR: BenefitRepository,
{
    pub fn new(
        employees: Arc<ER>,
        benefits: Arc<BR>,
        create_validator: Validator<CreateEmployeeRequest>,
        update_validator: Validator<UpdateEmployeeRequest>,
    ) -> Self {
        Self {
            employees,
            benefits,
            create_validator,
            update_validator,
        }
    }

    /// List employees, optionally filtered by first name
    pub async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.list(filter).await?)
    }

    /// Get a single employee
    pub async fn get(&self, id: EmployeeId) -> Result<Employee, AppError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Validate and persist a new employee
    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, AppError> {
        self.create_validator.validate(&request)?;

        let employee = self.employees.create(&request.into_new_employee()).await?;
        tracing::info!(employee_id = %employee.id, "Employee created");

        Ok(employee)
    }

    /// Replace an employee's address and contact details.
    ///
    /// Validation runs before the existence check, so an invalid body is
    /// rejected with field errors even when the id is unknown.
    pub async fn update(
        &self,
        id: EmployeeId,
        request: UpdateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        self.update_validator.validate(&request)?;

        let employee = self
            .employees
            .update_contact(id, &request.into_contact())
            .await?;
        tracing::info!(employee_id = %id, "Employee updated");

        Ok(employee)
    }

    /// Delete an employee along with their benefits
    pub async fn delete(&self, id: EmployeeId) -> Result<(), AppError> {
        self.employees.delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    /// List the benefits of an existing employee
    pub async fn benefits(&self, id: EmployeeId) -> Result<Vec<EmployeeBenefit>, AppError> {
        if self.employees.find_by_id(id).await?.is_none() {
            return Err(employee_not_found(id));
        }

        Ok(self.benefits.list_for_employee(id).await?)
    }
}

fn employee_not_found(id: EmployeeId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Employee {} not found", id)))
}
