//! Relational database adapters
//!
//! Implementations of repository traits using SeaORM. The same adapters run
//! against PostgreSQL in production and SQLite for local use and tests.

pub mod benefit_repo;
pub mod employee_repo;
pub mod schema;


pub use benefit_repo::SeaOrmBenefitRepository;
pub use employee_repo::SeaOrmEmployeeRepository;
pub use schema::{connect, ensure_schema};
