//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod benefits;
pub mod employees;

pub use benefits::list_benefits;
pub use employees::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};
