//! Employee domain entity
//!
//! Represents a person on the payroll along with their address and contact details.

use chrono::{DateTime, Utc};

/// Unique identifier for an employee, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(pub i32);

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address and contact fields. Replaced as a group on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// A persisted employee record
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: Option<String>,
    pub contact: ContactDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// "First Last", used in log lines and seed output
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on the first name
    pub fn first_name_contains(&self, needle: &str) -> bool {
        self.first_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Data needed to create a new employee
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: Option<String>,
    pub contact: ContactDetails,
}

/// Criteria for listing employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub first_name_contains: Option<String>,
}

impl EmployeeFilter {
    pub fn first_name_contains(needle: impl Into<String>) -> Self {
        Self {
            first_name_contains: Some(needle.into()),
        }
    }

    /// The filter needle, ignoring empty strings
    pub fn needle(&self) -> Option<&str> {
        self.first_name_contains
            .as_deref()
            .filter(|needle| !needle.is_empty())
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self.needle() {
            Some(needle) => employee.first_name_contains(needle),
            None => true,
        }
    }
}
