//! Payroll use-case services.
//!
//! # Responsibility
//! - Expose payroll report queries to callers (CLI, embedding apps).
//! - Keep callers decoupled from the SQLite repository type.

pub mod payroll_service;
