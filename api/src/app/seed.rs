//! Demo data seeding
//!
//! Populates an empty store with a small, known set of employees and benefits.
//! Test setup calls this against a fresh store before every scenario; the
//! server calls it at startup when `SEED_DATA` is enabled.

use crate::domain::entities::{
    BenefitType, ContactDetails, Employee, NewEmployee, NewEmployeeBenefit,
};
use crate::domain::ports::{BenefitRepository, EmployeeRepository};
use crate::error::DomainError;

/// What `seed_demo_data` inserted, in insertion order.
/// The first employee, John Doe, owns two benefits.
#[derive(Debug, Clone)]
pub struct SeededData {
    pub employees: Vec<Employee>,
}

fn demo_employees() -> Vec<(NewEmployee, Vec<BenefitType>)> {
    vec![
        (
            NewEmployee {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                social_security_number: Some("123-45-6789".to_string()),
                contact: ContactDetails {
                    address1: Some("123 Main St".to_string()),
                    city: Some("Springfield".to_string()),
                    state: Some("IL".to_string()),
                    zip_code: Some("62701".to_string()),
                    phone_number: Some("555-0100".to_string()),
                    email: Some("john.doe@example.com".to_string()),
                    ..Default::default()
                },
            },
            vec![BenefitType::Health, BenefitType::Dental],
        ),
        (
            NewEmployee {
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                social_security_number: Some("987-65-4321".to_string()),
                contact: ContactDetails {
                    address1: Some("456 Oak Ave".to_string()),
                    city: Some("Shelbyville".to_string()),
                    state: Some("IL".to_string()),
                    zip_code: Some("62565".to_string()),
                    email: Some("jane.smith@example.com".to_string()),
                    ..Default::default()
                },
            },
            vec![BenefitType::Vision],
        ),
    ]
}

/// Insert the demo employees and their benefits
pub async fn seed_demo_data<ER, BR>(
    employees: &ER,
    benefits: &BR,
) -> Result<SeededData, DomainError>
where
    ER: EmployeeRepository,
    BR: BenefitRepository,
{
    let mut seeded = Vec::new();

    for (new_employee, benefit_types) in demo_employees() {
        let employee = employees.create(&new_employee).await?;

        for benefit_type in benefit_types {
            benefits
                .create(&NewEmployeeBenefit {
                    employee_id: employee.id,
                    benefit_type,
                    description: Some(format!("{} coverage", benefit_type)),
                })
                .await?;
        }

        tracing::debug!(
            employee_id = %employee.id,
            name = %employee.full_name(),
            "Seeded employee"
        );
        seeded.push(employee);
    }

    Ok(SeededData { employees: seeded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EmployeeFilter;
    use crate::test_utils::{InMemoryBenefitRepository, InMemoryEmployeeRepository};

    #[tokio::test]
    async fn seeds_employees_and_benefits() {
        let employees = InMemoryEmployeeRepository::new();
        let benefits = InMemoryBenefitRepository::new();

        let seeded = seed_demo_data(&employees, &benefits).await.unwrap();

        assert_eq!(seeded.employees.len(), 2);
        let john = &seeded.employees[0];
        assert_eq!(john.full_name(), "John Doe");
        assert_eq!(
            employees.list(&EmployeeFilter::default()).await.unwrap().len(),
            2
        );

        let johns = benefits.list_for_employee(john.id).await.unwrap();
        assert_eq!(johns.len(), 2);
        assert_eq!(johns[0].description.as_deref(), Some("health coverage"));
    }
}
