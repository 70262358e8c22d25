//! Payroll domain model.
//!
//! # Responsibility
//! - Define the mapped records read by the payroll queries.
//! - Share one surrogate-identity contract across all records.
//!
//! # Invariants
//! - Every record exposes its storage-generated id through `Identifiable`.
//! - Related records (organization, receiver) are loaded eagerly.

pub mod employee;
pub mod entity;
pub mod organization;
pub mod payment;
