//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    BenefitType, ContactDetails, Employee, EmployeeBenefit, EmployeeId,
};

/// Create a test employee with default values
pub fn test_employee() -> Employee {
    Employee {
        id: EmployeeId(1),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        social_security_number: Some("123-45-6789".to_string()),
        contact: ContactDetails {
            address1: Some("123 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip_code: Some("62701".to_string()),
            ..Default::default()
        },
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Create a test employee with a specific id and first name
pub fn test_employee_named(id: i32, first_name: &str) -> Employee {
    Employee {
        id: EmployeeId(id),
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        social_security_number: None,
        contact: ContactDetails::default(),
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Create a health benefit owned by `employee_id`
pub fn test_benefit(id: i32, employee_id: EmployeeId) -> EmployeeBenefit {
    EmployeeBenefit {
        id,
        employee_id,
        benefit_type: BenefitType::Health,
        description: Some("Test health plan".to_string()),
    }
}
