//! Payroll report service.
//!
//! # Responsibility
//! - Provide one entry point per payroll query.
//! - Emit metadata-only diagnostics (row counts, durations) per call.
//!
//! # Invariants
//! - Results and errors from the repository are returned unchanged.
//! - Query parameters (names) are never logged.

use crate::db::DbResult;
use crate::model::employee::Employee;
use crate::model::payment::Payment;
use crate::repo::employee_repo::{
    EmployeeAveragePayment, EmployeeRepository, OrganizationAveragePayment,
};
use log::{debug, warn};
use std::time::Instant;

/// Use-case wrapper over an `EmployeeRepository`.
///
/// Construct once per session and pass it to the code that needs reports.
pub struct PayrollService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> PayrollService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_employees(&self) -> DbResult<Vec<Employee>> {
        observe("employees_list", || self.repo.find_all())
    }

    pub fn list_employees_by_first_name(&self, first_name: &str) -> DbResult<Vec<Employee>> {
        observe("employees_by_first_name", || {
            self.repo.find_all_by_first_name(first_name)
        })
    }

    /// Returns at most `limit` employees, oldest first. `limit = 0` yields an
    /// empty list.
    pub fn list_oldest_employees(&self, limit: u32) -> DbResult<Vec<Employee>> {
        observe("employees_by_birthday", || {
            self.repo.find_limited_ordered_by_birthday(limit)
        })
    }

    pub fn list_employees_by_organization(
        &self,
        organization_name: &str,
    ) -> DbResult<Vec<Employee>> {
        observe("employees_by_organization", || {
            self.repo.find_all_by_organization_name(organization_name)
        })
    }

    pub fn list_payments_by_organization(
        &self,
        organization_name: &str,
    ) -> DbResult<Vec<Payment>> {
        observe("payments_by_organization", || {
            self.repo
                .find_all_payments_by_organization_name(organization_name)
        })
    }

    /// Mean payment of one employee; `None` when they were never paid.
    pub fn average_payment_for(&self, first_name: &str, last_name: &str) -> DbResult<Option<f64>> {
        observe("average_payment_by_full_name", || {
            self.repo
                .find_average_payment_by_full_name(first_name, last_name)
        })
    }

    pub fn average_payment_per_organization(&self) -> DbResult<Vec<OrganizationAveragePayment>> {
        observe("average_payment_per_organization", || {
            self.repo.find_average_payment_per_organization()
        })
    }

    pub fn employees_above_average_payment(&self) -> DbResult<Vec<EmployeeAveragePayment>> {
        observe("employees_above_average_payment", || {
            self.repo.find_employees_above_average_payment()
        })
    }
}

/// Number of rows a query result carries, for diagnostics.
trait RowCount {
    fn row_count(&self) -> usize;
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> usize {
        self.len()
    }
}

impl RowCount for Option<f64> {
    fn row_count(&self) -> usize {
        usize::from(self.is_some())
    }
}

fn observe<T, Q>(event: &'static str, query: Q) -> DbResult<T>
where
    T: RowCount,
    Q: FnOnce() -> DbResult<T>,
{
    let started_at = Instant::now();
    let result = query();

    match &result {
        Ok(value) => debug!(
            "event={event} module=payroll status=ok rows={} duration_ms={}",
            value.row_count(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => warn!(
            "event={event} module=payroll status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}
