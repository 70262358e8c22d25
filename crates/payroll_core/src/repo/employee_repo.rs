//! Employee/payment query contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the payroll read queries over `employees`, `organizations` and
//!   `payments`.
//! - Materialize every result eagerly, relations included.
//!
//! # Invariants
//! - Each query is a fixed SQL statement with named, exactly bound parameters.
//! - Empty result sets are empty `Vec`s; only the single-employee average is
//!   optional.
//! - "Above average" is strict: an employee whose average equals the global
//!   average is not returned.

use crate::db::DbResult;
use crate::model::employee::Employee;
use crate::model::organization::Organization;
use crate::model::payment::Payment;
use rusqlite::{named_params, Connection, Row, ToSql};
use serde::{Deserialize, Serialize};

/// Expands to the employee + organization projection followed by `$tail`.
macro_rules! employee_select {
    ($tail:literal) => {
        concat!(
            "SELECT
    e.id AS employee_id,
    e.first_name,
    e.last_name,
    e.birthday,
    o.id AS organization_id,
    o.name AS organization_name
FROM employees e
LEFT JOIN organizations o ON o.id = e.organization_id
",
            $tail
        )
    };
}

const FIND_ALL_SQL: &str = employee_select!("ORDER BY e.id;");

const FIND_BY_FIRST_NAME_SQL: &str = employee_select!(
    "WHERE e.first_name = :first_name
     ORDER BY e.id;"
);

const FIND_LIMITED_BY_BIRTHDAY_SQL: &str = employee_select!(
    "ORDER BY e.birthday ASC, e.id ASC
     LIMIT :limit;"
);

const FIND_BY_ORGANIZATION_NAME_SQL: &str = employee_select!(
    "WHERE o.name = :organization_name
     ORDER BY e.id;"
);

const FIND_PAYMENTS_BY_ORGANIZATION_NAME_SQL: &str = "SELECT
    p.id AS payment_id,
    p.amount,
    e.id AS employee_id,
    e.first_name,
    e.last_name,
    e.birthday,
    o.id AS organization_id,
    o.name AS organization_name
FROM payments p
JOIN employees e ON e.id = p.receiver_id
JOIN organizations o ON o.id = e.organization_id
WHERE o.name = :organization_name
ORDER BY e.first_name ASC, p.amount ASC, p.id ASC;";

const AVERAGE_BY_FULL_NAME_SQL: &str = "SELECT AVG(p.amount)
FROM payments p
JOIN employees e ON e.id = p.receiver_id
WHERE e.first_name = :first_name
  AND e.last_name = :last_name;";

const AVERAGE_PER_ORGANIZATION_SQL: &str = "SELECT
    o.name AS organization_name,
    AVG(p.amount) AS average_amount
FROM payments p
JOIN employees e ON e.id = p.receiver_id
JOIN organizations o ON o.id = e.organization_id
GROUP BY o.name
ORDER BY o.name ASC;";

const EMPLOYEES_ABOVE_AVERAGE_SQL: &str = "SELECT
    e.id AS employee_id,
    e.first_name,
    e.last_name,
    e.birthday,
    o.id AS organization_id,
    o.name AS organization_name,
    AVG(p.amount) AS average_amount
FROM payments p
JOIN employees e ON e.id = p.receiver_id
LEFT JOIN organizations o ON o.id = e.organization_id
GROUP BY e.id
HAVING AVG(p.amount) > (SELECT AVG(p2.amount) FROM payments p2)
ORDER BY e.first_name ASC, e.id ASC;";

/// Average payment of one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationAveragePayment {
    pub organization_name: String,
    pub average_amount: f64,
}

/// Employee together with the average of their payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAveragePayment {
    pub employee: Employee,
    pub average_amount: f64,
}

/// Read-only payroll queries.
pub trait EmployeeRepository {
    /// Returns every employee.
    fn find_all(&self) -> DbResult<Vec<Employee>>;
    /// Returns employees whose first name equals `first_name` exactly.
    fn find_all_by_first_name(&self, first_name: &str) -> DbResult<Vec<Employee>>;
    /// Returns at most `limit` employees, oldest birthday first.
    fn find_limited_ordered_by_birthday(&self, limit: u32) -> DbResult<Vec<Employee>>;
    /// Returns employees of every organization named `organization_name`.
    fn find_all_by_organization_name(&self, organization_name: &str) -> DbResult<Vec<Employee>>;
    /// Returns payments received by employees of the named organization,
    /// ordered by receiver first name, then amount.
    fn find_all_payments_by_organization_name(
        &self,
        organization_name: &str,
    ) -> DbResult<Vec<Payment>>;
    /// Returns the mean payment amount of the employee(s) with this full name,
    /// or `None` when they received no payments.
    fn find_average_payment_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<f64>>;
    /// Returns the mean payment amount per organization name, ordered by name.
    fn find_average_payment_per_organization(&self) -> DbResult<Vec<OrganizationAveragePayment>>;
    /// Returns employees whose mean payment is strictly greater than the mean
    /// of all payments, ordered by first name.
    fn find_employees_above_average_payment(&self) -> DbResult<Vec<EmployeeAveragePayment>>;
}

/// SQLite-backed payroll queries over a caller-owned session.
///
/// Holds only the borrowed connection, so it is cheap to build per session.
/// A `rusqlite::Transaction` can be passed as well, since it derefs to a
/// `Connection`.
#[derive(Debug, Clone, Copy)]
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_employees(
        &self,
        sql: &str,
        params: &[(&str, &dyn ToSql)],
    ) -> DbResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let mut rows = stmt.query(params)?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_all(&self) -> DbResult<Vec<Employee>> {
        self.query_employees(FIND_ALL_SQL, named_params! {})
    }

    fn find_all_by_first_name(&self, first_name: &str) -> DbResult<Vec<Employee>> {
        self.query_employees(
            FIND_BY_FIRST_NAME_SQL,
            named_params! { ":first_name": first_name },
        )
    }

    fn find_limited_ordered_by_birthday(&self, limit: u32) -> DbResult<Vec<Employee>> {
        self.query_employees(
            FIND_LIMITED_BY_BIRTHDAY_SQL,
            named_params! { ":limit": i64::from(limit) },
        )
    }

    fn find_all_by_organization_name(&self, organization_name: &str) -> DbResult<Vec<Employee>> {
        self.query_employees(
            FIND_BY_ORGANIZATION_NAME_SQL,
            named_params! { ":organization_name": organization_name },
        )
    }

    fn find_all_payments_by_organization_name(
        &self,
        organization_name: &str,
    ) -> DbResult<Vec<Payment>> {
        let mut stmt = self
            .conn
            .prepare_cached(FIND_PAYMENTS_BY_ORGANIZATION_NAME_SQL)?;
        let mut rows = stmt.query(named_params! { ":organization_name": organization_name })?;
        let mut payments = Vec::new();

        while let Some(row) = rows.next()? {
            payments.push(Payment {
                id: row.get("payment_id")?,
                amount: row.get("amount")?,
                receiver: parse_employee_row(row)?,
            });
        }

        Ok(payments)
    }

    fn find_average_payment_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<f64>> {
        let mut stmt = self.conn.prepare_cached(AVERAGE_BY_FULL_NAME_SQL)?;
        let average = stmt.query_row(
            named_params! {
                ":first_name": first_name,
                ":last_name": last_name,
            },
            |row| row.get::<_, Option<f64>>(0),
        )?;
        Ok(average)
    }

    fn find_average_payment_per_organization(&self) -> DbResult<Vec<OrganizationAveragePayment>> {
        let mut stmt = self.conn.prepare_cached(AVERAGE_PER_ORGANIZATION_SQL)?;
        let mut rows = stmt.query([])?;
        let mut averages = Vec::new();

        while let Some(row) = rows.next()? {
            averages.push(OrganizationAveragePayment {
                organization_name: row.get("organization_name")?,
                average_amount: row.get("average_amount")?,
            });
        }

        Ok(averages)
    }

    fn find_employees_above_average_payment(&self) -> DbResult<Vec<EmployeeAveragePayment>> {
        let mut stmt = self.conn.prepare_cached(EMPLOYEES_ABOVE_AVERAGE_SQL)?;
        let mut rows = stmt.query([])?;
        let mut result = Vec::new();

        while let Some(row) = rows.next()? {
            result.push(EmployeeAveragePayment {
                employee: parse_employee_row(row)?,
                average_amount: row.get("average_amount")?,
            });
        }

        Ok(result)
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    let organization = match (
        row.get::<_, Option<i64>>("organization_id")?,
        row.get::<_, Option<String>>("organization_name")?,
    ) {
        (Some(id), Some(name)) => Some(Organization { id: Some(id), name }),
        _ => None,
    };

    Ok(Employee {
        id: row.get("employee_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        birthday: row.get("birthday")?,
        organization,
    })
}
