//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    ContactDetails, Employee, EmployeeBenefit, EmployeeFilter, EmployeeId, NewEmployee,
    NewEmployeeBenefit,
};
use crate::domain::ports::{BenefitRepository, EmployeeRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
    /// Highest id handed out so far; ids are never reused after a delete
    last_id: Arc<AtomicI32>,
    /// Benefits owned by these employees, shared with `benefit_repository()`
    benefits: BenefitMap,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an employee for testing
    pub fn with_employee(self, employee: Employee) -> Self {
        self.last_id.fetch_max(employee.id.0, Ordering::SeqCst);
        self.employees
            .write()
            .unwrap()
            .insert(employee.id, employee);
        self
    }

    /// A benefit repository over the same benefit rows, so deletes cascade
    pub fn benefit_repository(&self) -> InMemoryBenefitRepository {
        InMemoryBenefitRepository {
            benefits: Arc::clone(&self.benefits),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.get(&id).cloned())
    }

    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();

        let next_id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let employee = Employee {
            id: EmployeeId(next_id),
            first_name: new_employee.first_name.clone(),
            last_name: new_employee.last_name.clone(),
            social_security_number: new_employee.social_security_number.clone(),
            contact: new_employee.contact.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };

        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update_contact(
        &self,
        id: EmployeeId,
        contact: &ContactDetails,
    ) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();
        if let Some(employee) = employees.get_mut(&id) {
            employee.contact = contact.clone();
            employee.updated_at = Some(Utc::now());
            Ok(employee.clone())
        } else {
            Err(DomainError::NotFound(format!("Employee {} not found", id)))
        }
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        let mut employees = self.employees.write().unwrap();
        if employees.remove(&id).is_none() {
            return Err(DomainError::NotFound(format!("Employee {} not found", id)));
        }

        self.benefits
            .write()
            .unwrap()
            .retain(|_, benefit| benefit.employee_id != id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.employees.read().unwrap().len() as u64)
    }
}

// ============================================================================
// In-Memory Benefit Repository
// ============================================================================

type BenefitMap = Arc<RwLock<BTreeMap<i32, EmployeeBenefit>>>;

#[derive(Default)]
pub struct InMemoryBenefitRepository {
    benefits: BenefitMap,
}

impl InMemoryBenefitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a benefit for testing
    pub fn with_benefit(self, benefit: EmployeeBenefit) -> Self {
        self.benefits.write().unwrap().insert(benefit.id, benefit);
        self
    }
}

#[async_trait]
impl BenefitRepository for InMemoryBenefitRepository {
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<EmployeeBenefit>, DomainError> {
        let benefits = self.benefits.read().unwrap();
        Ok(benefits
            .values()
            .filter(|b| b.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn create(&self, benefit: &NewEmployeeBenefit) -> Result<EmployeeBenefit, DomainError> {
        let mut benefits = self.benefits.write().unwrap();

        let next_id = benefits.keys().next_back().map_or(1, |id| id + 1);
        let created = EmployeeBenefit {
            id: next_id,
            employee_id: benefit.employee_id,
            benefit_type: benefit.benefit_type,
            description: benefit.description.clone(),
        };

        benefits.insert(created.id, created.clone());
        Ok(created)
    }
}
