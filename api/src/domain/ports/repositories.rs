//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM).

use async_trait::async_trait;

use crate::domain::entities::{
    ContactDetails, Employee, EmployeeBenefit, EmployeeFilter, EmployeeId, NewEmployee,
    NewEmployeeBenefit,
};
use crate::error::DomainError;

/// Repository for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// List employees matching the filter, in insertion order
    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError>;

    /// Create a new employee, assigning its ID
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Replace the address and contact fields of an employee.
    /// Fails with `DomainError::NotFound` if the employee does not exist.
    async fn update_contact(
        &self,
        id: EmployeeId,
        contact: &ContactDetails,
    ) -> Result<Employee, DomainError>;

    /// Delete an employee and everything it owns.
    /// Fails with `DomainError::NotFound` if the employee does not exist.
    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError>;

    /// Count all employees
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for EmployeeBenefit entities
#[async_trait]
pub trait BenefitRepository: Send + Sync {
    /// List the benefits owned by an employee
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<EmployeeBenefit>, DomainError>;

    /// Enroll an employee in a benefit
    async fn create(&self, benefit: &NewEmployeeBenefit) -> Result<EmployeeBenefit, DomainError>;
}
