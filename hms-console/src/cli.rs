//! Command-line definitions for `hms`

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hms_console::AppConfig;
use rust_decimal::Decimal;
use shared::models::{LeaveType, PaymentMethod, RoleType, StayStatus, TimeOffStatus};

#[derive(Debug, Parser)]
#[command(name = "hms", version, about = "Hospital administration console")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "HMS_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// File holding the login session
    #[arg(long, env = "HMS_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "HMS_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Log filter, e.g. "debug" or "hms_client=debug"
    #[arg(long, env = "HMS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Command-line values override the environment
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(path) = &self.token_file {
            config.token_file = Some(path.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and keep the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "HMS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Employee records
    #[command(subcommand)]
    Employees(EmployeeCommand),
    /// Login accounts
    #[command(subcommand)]
    Accounts(AccountCommand),
    /// Doctor clinic sessions
    #[command(subcommand)]
    DoctorSchedules(DoctorScheduleCommand),
    /// Work shift templates
    #[command(subcommand)]
    Shifts(ShiftCommand),
    /// Leave requests
    #[command(subcommand)]
    TimeOff(TimeOffCommand),
    /// Leave balance per type for one employee
    LeaveBalance {
        #[arg(long)]
        employee: i64,
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Inpatient billing
    #[command(subcommand)]
    Inpatient(InpatientCommand),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, default_value_t = hms_console::crud::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees with optional client-side filters
    List {
        /// Matches code or name
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        role: Option<RoleType>,
        #[arg(long)]
        department: Option<i64>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show one employee
    Show { id: i64 },
    /// Server-side search; the first given criterion is used
    Search {
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<i64>,
        #[arg(long)]
        role: Option<RoleType>,
    },
    /// Add an employee
    Create(EmployeeCreateArgs),
    /// Delete an employee
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct EmployeeCreateArgs {
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub department: Option<i64>,
    #[arg(long)]
    pub role: Option<RoleType>,
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub hire_date: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    List {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        locked: Option<bool>,
        #[command(flatten)]
        paging: PageArgs,
    },
    ResetPassword {
        id: i64,
        #[arg(long, env = "HMS_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Lock { id: i64 },
    Unlock { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum DoctorScheduleCommand {
    List {
        #[arg(long)]
        doctor: Option<i64>,
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum ShiftCommand {
    List {
        /// Only shifts the server reports as active
        #[arg(long)]
        active: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TimeOffCommand {
    List {
        #[arg(long)]
        status: Option<TimeOffStatus>,
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
    },
    /// Submit a leave request
    Request {
        #[arg(long)]
        employee: i64,
        #[arg(long = "type")]
        leave_type: LeaveType,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long)]
        reason: Option<String>,
    },
    Approve {
        id: i64,
        #[arg(long, default_value = "")]
        note: String,
    },
    Reject {
        id: i64,
        #[arg(long, default_value = "")]
        reason: String,
    },
    Withdraw { id: i64 },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum InpatientCommand {
    /// List stays
    Stays {
        #[arg(long)]
        status: Option<StayStatus>,
    },
    /// Stay details, balance, invoices and transactions
    Show { stay: i64 },
    Deposit {
        stay: i64,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "CASH")]
        method: PaymentMethod,
        #[arg(long)]
        note: Option<String>,
    },
    GenerateInvoice { stay: i64 },
    Pay {
        stay: i64,
        invoice: i64,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "CASH")]
        method: PaymentMethod,
        /// Draw from the deposit balance
        #[arg(long)]
        use_deposit: bool,
    },
    Refund {
        stay: i64,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "CASH")]
        method: PaymentMethod,
        #[arg(long)]
        reason: String,
    },
    Settle { stay: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pay() {
        let cli = Cli::try_parse_from([
            "hms",
            "--base-url",
            "http://his:8080",
            "inpatient",
            "pay",
            "21",
            "5",
            "--amount",
            "1500000",
            "--method",
            "bank-transfer",
            "--use-deposit",
        ])
        .unwrap();
        match &cli.command {
            Command::Inpatient(InpatientCommand::Pay {
                stay,
                invoice,
                amount,
                method,
                use_deposit,
            }) => {
                assert_eq!((*stay, *invoice), (21, 5));
                assert_eq!(*amount, Decimal::new(1_500_000, 0));
                assert_eq!(*method, PaymentMethod::BankTransfer);
                assert!(*use_deposit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        let config = cli.apply(AppConfig::default());
        assert_eq!(config.api_base_url, "http://his:8080");
    }

    #[test]
    fn test_date_range_needs_both_ends() {
        let err = Cli::try_parse_from(["hms", "time-off", "list", "--from", "2024-06-01"]);
        assert!(err.is_err());

        let cli = Cli::try_parse_from([
            "hms",
            "time-off",
            "list",
            "--status",
            "pending",
            "--from",
            "2024-06-01",
            "--to",
            "2024-06-30",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::TimeOff(TimeOffCommand::List {
                status: Some(TimeOffStatus::Pending),
                from: Some(_),
                to: Some(_),
            })
        ));
    }
}
