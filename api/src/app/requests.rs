//! Write request shapes
//!
//! Every field is optional on the wire so that an empty body still reaches
//! validation and produces a field-error map instead of a parse failure.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ContactDetails, NewEmployee};

/// Body of `POST /employees`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub social_security_number: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl CreateEmployeeRequest {
    /// Map a validated request onto the store input
    pub fn into_new_employee(self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            social_security_number: self.social_security_number,
            contact: ContactDetails {
                address1: self.address1,
                address2: self.address2,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code,
                phone_number: self.phone_number,
                email: self.email,
            },
        }
    }
}

/// Body of `PUT /employees/:id`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateEmployeeRequest {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl UpdateEmployeeRequest {
    pub fn into_contact(self) -> ContactDetails {
        ContactDetails {
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            phone_number: self.phone_number,
            email: self.email,
        }
    }
}
