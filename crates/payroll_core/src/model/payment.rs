//! Payment record.
//!
//! # Invariants
//! - `receiver` always refers to a persisted employee.

use super::employee::Employee;
use super::entity::{EntityId, Identifiable};
use serde::{Deserialize, Serialize};

/// One amount paid to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Option<EntityId>,
    /// Whole currency units.
    pub amount: i64,
    /// Loaded together with the payment, including the receiver's organization.
    pub receiver: Employee,
}

impl Identifiable for Payment {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
