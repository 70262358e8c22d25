//! Employee record.
//!
//! # Invariants
//! - `organization`, when present, refers to a persisted organization.

use super::entity::{EntityId, Identifiable};
use super::organization::Organization;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Person on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    /// Stored as ISO-8601 `YYYY-MM-DD` text, so text order is date order.
    pub birthday: NaiveDate,
    /// Employer; loaded together with the employee.
    pub organization: Option<Organization>,
}

impl Employee {
    /// Creates an unsaved employee without an organization.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday,
            organization: None,
        }
    }

    /// Returns `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the employer name, if any.
    pub fn organization_name(&self) -> Option<&str> {
        self.organization.as_ref().map(|org| org.name.as_str())
    }
}

impl Identifiable for Employee {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::Employee;
    use crate::model::entity::Identifiable;
    use crate::model::organization::Organization;
    use chrono::NaiveDate;

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
    }

    #[test]
    fn new_employee_is_unsaved_and_unassigned() {
        let employee = Employee::new("Ivan", "Petrov", birthday());
        assert!(!employee.is_persisted());
        assert_eq!(employee.organization_name(), None);
        assert_eq!(employee.full_name(), "Ivan Petrov");
    }

    #[test]
    fn organization_name_reads_through_relation() {
        let mut employee = Employee::new("Ivan", "Petrov", birthday());
        employee.organization = Some(Organization {
            id: Some(3),
            name: "Acme".to_string(),
        });
        assert_eq!(employee.organization_name(), Some("Acme"));
    }

    #[test]
    fn birthday_serializes_as_iso_date() {
        let employee = Employee::new("Ivan", "Petrov", birthday());
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["birthday"], "1990-04-12");
        assert_eq!(json["first_name"], "Ivan");
        assert!(json["id"].is_null());
    }
}
