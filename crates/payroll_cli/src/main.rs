//! Payroll report runner.
//!
//! # Responsibility
//! - Open a payroll database and run one read query per invocation.
//! - Print rows as plain text or JSON.

use clap::{Parser, Subcommand};
use log::error;
use payroll_core::{
    default_log_level, init_logging, open_db, Employee, EmployeeAveragePayment,
    OrganizationAveragePayment, Payment, PayrollService, SqliteEmployeeRepository,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "payroll", version, about = "Payroll read-model reports")]
struct Cli {
    /// SQLite database file; created and migrated when missing.
    #[arg(long)]
    db: PathBuf,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    /// Print JSON instead of one line per row.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// All employees.
    Employees,
    /// Employees with this exact first name.
    ByFirstName { first_name: String },
    /// The oldest employees, oldest first.
    ByBirthday {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Employees of the named organization.
    ByOrganization { organization_name: String },
    /// Payments received by the named organization's employees.
    Payments { organization_name: String },
    /// Average payment of one employee.
    Average {
        first_name: String,
        last_name: String,
    },
    /// Average payment per organization.
    OrgAverages,
    /// Employees paid above the overall average.
    AboveAverage,
}

enum Report {
    Employees(Vec<Employee>),
    Payments(Vec<Payment>),
    Average(Option<f64>),
    OrganizationAverages(Vec<OrganizationAveragePayment>),
    EmployeeAverages(Vec<EmployeeAveragePayment>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("payroll: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let service = PayrollService::new(SqliteEmployeeRepository::new(&conn));

    let report = match &cli.command {
        Command::Employees => Report::Employees(service.list_employees()?),
        Command::ByFirstName { first_name } => {
            Report::Employees(service.list_employees_by_first_name(first_name)?)
        }
        Command::ByBirthday { limit } => Report::Employees(service.list_oldest_employees(*limit)?),
        Command::ByOrganization { organization_name } => {
            Report::Employees(service.list_employees_by_organization(organization_name)?)
        }
        Command::Payments { organization_name } => {
            Report::Payments(service.list_payments_by_organization(organization_name)?)
        }
        Command::Average {
            first_name,
            last_name,
        } => Report::Average(service.average_payment_for(first_name, last_name)?),
        Command::OrgAverages => {
            Report::OrganizationAverages(service.average_payment_per_organization()?)
        }
        Command::AboveAverage => {
            Report::EmployeeAverages(service.employees_above_average_payment()?)
        }
    };

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        for line in render_lines(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

fn render_json(report: &Report) -> serde_json::Result<String> {
    match report {
        Report::Employees(rows) => serde_json::to_string_pretty(rows),
        Report::Payments(rows) => serde_json::to_string_pretty(rows),
        Report::Average(value) => serde_json::to_string_pretty(value),
        Report::OrganizationAverages(rows) => serde_json::to_string_pretty(rows),
        Report::EmployeeAverages(rows) => serde_json::to_string_pretty(rows),
    }
}

fn render_lines(report: &Report) -> Vec<String> {
    match report {
        Report::Employees(rows) => rows.iter().map(employee_line).collect(),
        Report::Payments(rows) => rows
            .iter()
            .map(|payment| format!("{}\t{}", payment.amount, employee_line(&payment.receiver)))
            .collect(),
        Report::Average(Some(value)) => vec![format!("{value:.2}")],
        Report::Average(None) => vec!["no payments".to_string()],
        Report::OrganizationAverages(rows) => rows
            .iter()
            .map(|row| format!("{}\t{:.2}", row.organization_name, row.average_amount))
            .collect(),
        Report::EmployeeAverages(rows) => rows
            .iter()
            .map(|row| format!("{:.2}\t{}", row.average_amount, employee_line(&row.employee)))
            .collect(),
    }
}

fn employee_line(employee: &Employee) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        employee.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
        employee.full_name(),
        employee.birthday,
        employee.organization_name().unwrap_or("-")
    )
}
