//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod benefit;
pub mod employee;

pub use benefit::{BenefitType, EmployeeBenefit, NewEmployeeBenefit};
pub use employee::{ContactDetails, Employee, EmployeeFilter, EmployeeId, NewEmployee};
