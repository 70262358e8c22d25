//! Read-only payroll data access.
//!
//! # Responsibility
//! - Define the fixed set of payroll read queries.
//! - Keep SQL and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Repositories never write; they only read through the borrowed session.
//! - Storage errors surface unchanged as `DbError::Sqlite`.

pub mod employee_repo;
