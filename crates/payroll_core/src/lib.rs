//! Payroll read model: employees, organizations and their payments.
//!
//! Callers own the SQLite session; this crate only reads through it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::Employee;
pub use model::entity::{EntityId, Identifiable};
pub use model::organization::Organization;
pub use model::payment::Payment;
pub use repo::employee_repo::{
    EmployeeAveragePayment, EmployeeRepository, OrganizationAveragePayment,
    SqliteEmployeeRepository,
};
pub use service::payroll_service::PayrollService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
