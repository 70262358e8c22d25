//! Organization record.

use super::entity::{EntityId, Identifiable};
use serde::{Deserialize, Serialize};

/// Employer of zero or more employees.
///
/// The employee side of the relationship lives in `employees.organization_id`
/// and is not materialized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<EntityId>,
    pub name: String,
}

impl Organization {
    /// Creates an unsaved organization.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Identifiable for Organization {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
