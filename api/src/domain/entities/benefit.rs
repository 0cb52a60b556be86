//! Employee benefit domain entity
//!
//! Benefits are owned by a single employee and are read-only over the API.

use serde::{Deserialize, Serialize};

use super::employee::EmployeeId;

/// Kind of benefit an employee is enrolled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitType {
    Health,
    Dental,
    Vision,
    Life,
    Retirement,
}

impl std::fmt::Display for BenefitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenefitType::Health => write!(f, "health"),
            BenefitType::Dental => write!(f, "dental"),
            BenefitType::Vision => write!(f, "vision"),
            BenefitType::Life => write!(f, "life"),
            BenefitType::Retirement => write!(f, "retirement"),
        }
    }
}

impl std::str::FromStr for BenefitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "health" => Ok(BenefitType::Health),
            "dental" => Ok(BenefitType::Dental),
            "vision" => Ok(BenefitType::Vision),
            "life" => Ok(BenefitType::Life),
            "retirement" => Ok(BenefitType::Retirement),
            _ => Err(format!("Unknown benefit type: {}", s)),
        }
    }
}

/// A benefit enrollment belonging to one employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeBenefit {
    pub id: i32,
    pub employee_id: EmployeeId,
    pub benefit_type: BenefitType,
    pub description: Option<String>,
}

/// Data needed to enroll an employee in a benefit
#[derive(Debug, Clone)]
pub struct NewEmployeeBenefit {
    pub employee_id: EmployeeId,
    pub benefit_type: BenefitType,
    pub description: Option<String>,
}
