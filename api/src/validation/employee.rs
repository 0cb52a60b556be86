//! Rule sets for employee write requests

use super::Validator;
use crate::app::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};

/// Rules applied to `POST /employees`
pub fn create_employee_validator() -> Validator<CreateEmployeeRequest> {
    Validator::new()
        .not_empty("FirstName", "First Name", |r: &CreateEmployeeRequest| {
            r.first_name.as_deref()
        })
        .not_empty("LastName", "Last Name", |r: &CreateEmployeeRequest| {
            r.last_name.as_deref()
        })
}

/// Rules applied to `PUT /employees/:id`
pub fn update_employee_validator() -> Validator<UpdateEmployeeRequest> {
    Validator::new().not_empty("Address1", "Address1", |r: &UpdateEmployeeRequest| {
        r.address1.as_deref()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_first_and_last_name() {
        let errors = create_employee_validator()
            .validate(&CreateEmployeeRequest::default())
            .unwrap_err();

        assert_eq!(
            errors.messages("FirstName"),
            ["'First Name' must not be empty."]
        );
        assert_eq!(errors.messages("LastName"), ["'Last Name' must not be empty."]);
    }

    #[test]
    fn create_accepts_names_only() {
        let request = CreateEmployeeRequest {
            first_name: Some("Toki".into()),
            last_name: Some("theDog".into()),
            ..Default::default()
        };
        assert!(create_employee_validator().validate(&request).is_ok());
    }

    #[test]
    fn create_rejects_blank_last_name() {
        let request = CreateEmployeeRequest {
            first_name: Some("Toki".into()),
            last_name: Some(" ".into()),
            ..Default::default()
        };
        let errors = create_employee_validator().validate(&request).unwrap_err();
        assert!(!errors.contains("FirstName"));
        assert!(errors.contains("LastName"));
    }

    #[test]
    fn update_requires_address1() {
        let errors = update_employee_validator()
            .validate(&UpdateEmployeeRequest::default())
            .unwrap_err();
        assert_eq!(errors.messages("Address1"), ["'Address1' must not be empty."]);
    }

    #[test]
    fn update_accepts_address1() {
        let request = UpdateEmployeeRequest {
            address1: Some("1 Main St".into()),
            ..Default::default()
        };
        assert!(update_employee_validator().validate(&request).is_ok());
    }
}
