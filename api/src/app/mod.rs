//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between request validation, domain entities, and ports.

pub mod employee_service;
pub mod requests;
pub mod seed;

pub use employee_service::EmployeeService;
pub use requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
pub use seed::seed_demo_data;
#[allow(unused_imports)]
pub use seed::SeededData;
