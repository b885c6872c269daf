//! hms - hospital administration console
//!
//! Reads `.env`, then the environment, then command-line flags. Output goes to
//! stdout; logs go to stderr (and to daily files when HMS_LOG_DIR is set).

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use hms_client::{ApiClient, CrudResource};
use hms_console::cards::{
    AccountCard, EmployeeCard, InvoiceCard, LeaveBalanceCard, SettlementCard, StayCard,
    TextTable, TimeOffCard, account_table, doctor_schedule_table, employee_table, format_money,
    time_off_table, transaction_table, work_shift_table,
};
use hms_console::forms::{DepositForm, EmployeeForm, PayInvoiceForm, RefundForm, TimeOffForm};
use hms_console::pages::{
    AccountFilter, AccountPage, DoctorScheduleFilter, DoctorSchedulePage, EmployeeFilter,
    EmployeePage, EmployeeSearch, InpatientPaymentPage, LeaveBalanceWidget, TimeOffPage,
    WorkShiftPage,
};
use hms_console::{AppConfig, CrudList, ListFilter, init_logger};
use shared::models::{Employee, StayStatus, UserRole};

use cli::{
    AccountCommand, Cli, Command, DoctorScheduleCommand, EmployeeCommand, InpatientCommand,
    PageArgs, ShiftCommand, TimeOffCommand,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.apply(AppConfig::from_env());

    if let Err(e) = init_logger(&config.log_level, config.log_json, config.log_dir.as_deref()) {
        eprintln!("Không khởi tạo được log: {e:#}");
    }

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Lỗi: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let client =
        ApiClient::new(&config.client_config()).context("Cấu hình máy chủ không hợp lệ")?;
    tracing::debug!(base_url = client.base_url(), "Client ready");

    match command {
        Command::Login { username, password } => {
            let user = client.auth().login(&username, &password).await?;
            println!(
                "Đã đăng nhập: {} ({})",
                user.full_name.as_deref().unwrap_or(&user.username),
                user.role
            );
        }
        Command::Logout => {
            client.auth().logout().await?;
            println!("Đã đăng xuất");
        }
        Command::Whoami => {
            let user = client.auth().me().await?;
            println!("{} ({})", user.username, user.role);
            if let Some(name) = user.full_name {
                println!("{name}");
            }
        }
        Command::Employees(cmd) => employees(&client, cmd).await?,
        Command::Accounts(cmd) => accounts(&client, cmd).await?,
        Command::DoctorSchedules(cmd) => doctor_schedules(&client, cmd).await?,
        Command::Shifts(cmd) => shifts(&client, cmd).await?,
        Command::TimeOff(cmd) => time_off(&client, cmd).await?,
        Command::LeaveBalance { employee, year } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            let mut widget = LeaveBalanceWidget::new(&client, employee, year);
            let failed = widget.load().await;
            print!("{}", LeaveBalanceCard(&widget));
            if failed > 0 {
                eprintln!("Không tải được {failed} loại phép, hiển thị 0");
            }
        }
        Command::Inpatient(cmd) => inpatient(&client, cmd).await?,
    }
    Ok(())
}

/// Print one page of a filtered list with a "Trang x/y" footer
fn print_page<R, F>(
    list: &mut CrudList<R, F>,
    paging: PageArgs,
    table: impl FnOnce(&[&R::Item]) -> TextTable,
) where
    R: CrudResource,
    F: ListFilter<R::Item>,
{
    list.go_to_page(paging.page);
    let items = list.page_items();
    print!("{}", table(&items));
    println!(
        "Trang {}/{} ({} bản ghi)",
        list.page(),
        list.total_pages(),
        list.visible().len()
    );
}

async fn employees(client: &ApiClient, cmd: EmployeeCommand) -> anyhow::Result<()> {
    let mut page = EmployeePage::new(client);

    match cmd {
        EmployeeCommand::List {
            text,
            role,
            department,
            active,
            paging,
        } => {
            page.load().await?;
            let list = page.list_mut();
            list.set_page_size(paging.page_size);
            list.set_filter(EmployeeFilter {
                text,
                role,
                department_id: department,
                active,
            });
            print_page(list, paging, employee_table);
        }
        EmployeeCommand::Show { id } => {
            let employee = page.get(id).await?;
            print!("{}", EmployeeCard(&employee));
        }
        EmployeeCommand::Search {
            code,
            name,
            department,
            role,
        } => {
            let criteria = EmployeeSearch {
                code,
                name,
                department_id: department,
                role,
            };
            page.search(&criteria).await?;
            print!("{}", employee_table(&page.list().visible()));
        }
        EmployeeCommand::Create(args) => {
            let form = EmployeeForm {
                employee_code: args.code,
                first_name: args.first_name,
                last_name: args.last_name,
                date_of_birth: args.date_of_birth,
                phone: args.phone,
                email: args.email,
                department_id: args.department,
                role_type: args.role,
                hire_date: args.hire_date,
                ..EmployeeForm::default()
            };
            let employee = page.create(&form).await?;
            println!("{}", created_line(&employee));
            print!("{}", EmployeeCard(&employee));
        }
        EmployeeCommand::Delete { id } => {
            page.delete(id).await?;
            println!("Đã xóa nhân viên #{id}");
        }
    }
    Ok(())
}

fn created_line(employee: &Employee) -> String {
    format!(
        "Đã thêm nhân viên #{} ({})",
        employee.id, employee.employee_code
    )
}

async fn accounts(client: &ApiClient, cmd: AccountCommand) -> anyhow::Result<()> {
    let mut page = AccountPage::new(client);

    match cmd {
        AccountCommand::List {
            text,
            locked,
            paging,
        } => {
            page.load().await?;
            let list = page.list_mut();
            list.set_page_size(paging.page_size);
            list.set_filter(AccountFilter {
                text,
                locked,
                ..AccountFilter::default()
            });
            print_page(list, paging, account_table);
        }
        AccountCommand::ResetPassword { id, password } => {
            page.reset_password(id, &password).await?;
            println!("Đã đặt lại mật khẩu cho tài khoản #{id}");
        }
        AccountCommand::Lock { id } => {
            page.set_locked(id, true).await?;
            show_account(&page, id)?;
        }
        AccountCommand::Unlock { id } => {
            page.set_locked(id, false).await?;
            show_account(&page, id)?;
        }
    }
    Ok(())
}

fn show_account(page: &AccountPage, id: i64) -> anyhow::Result<()> {
    let account = page
        .list()
        .items()
        .iter()
        .find(|a| a.account_id == id)
        .with_context(|| format!("Không tìm thấy tài khoản #{id}"))?;
    print!("{}", AccountCard(account));
    Ok(())
}

async fn doctor_schedules(client: &ApiClient, cmd: DoctorScheduleCommand) -> anyhow::Result<()> {
    let mut page = DoctorSchedulePage::new(client);

    match cmd {
        DoctorScheduleCommand::List {
            doctor,
            from,
            to,
            paging,
        } => {
            match (from, to) {
                (Some(from), Some(to)) => {
                    page.load_range(from, to).await?;
                    // Range results are narrowed to the doctor locally
                    page.list_mut().set_filter(DoctorScheduleFilter {
                        doctor_employee_id: doctor,
                        ..DoctorScheduleFilter::default()
                    });
                }
                _ => {
                    match doctor {
                        Some(doctor) => page.load_for_doctor(doctor).await?,
                        None => page.load().await?,
                    };
                }
            }
            let list = page.list_mut();
            list.set_page_size(paging.page_size);
            print_page(list, paging, doctor_schedule_table);
        }
    }
    Ok(())
}

async fn shifts(client: &ApiClient, cmd: ShiftCommand) -> anyhow::Result<()> {
    let mut page = WorkShiftPage::new(client);

    match cmd {
        ShiftCommand::List { active } => {
            if active {
                page.load_active().await?;
            } else {
                page.load().await?;
            }
            print!("{}", work_shift_table(&page.list().visible()));
        }
    }
    Ok(())
}

async fn time_off(client: &ApiClient, cmd: TimeOffCommand) -> anyhow::Result<()> {
    let role = if client.auth().me().await?.is_hr() {
        UserRole::Hr
    } else {
        UserRole::Employee
    };
    let mut page = TimeOffPage::new(client, role);

    match cmd {
        TimeOffCommand::List { status, from, to } => {
            page.set_status_filter(status);
            if let (Some(from), Some(to)) = (from, to) {
                page.set_date_range(Some(from), Some(to))?;
                page.set_use_date_range(true);
            }
            page.refresh().await?;
            println!(
                "Đang nghỉ: {} | Sắp nghỉ: {}",
                page.current_count(),
                page.upcoming_count()
            );
            print!("{}", time_off_table(&page.displayed(), role));
        }
        TimeOffCommand::Request {
            employee,
            leave_type,
            from,
            to,
            reason,
        } => {
            let form = TimeOffForm {
                employee_id: Some(employee),
                leave_type: Some(leave_type),
                start_date: Some(from),
                end_date: Some(to),
                reason,
            };
            let request = page.submit(&form).await?;
            print!("{}", TimeOffCard { request: &request, role });
        }
        TimeOffCommand::Approve { id, note } => {
            page.approve(id, &note).await?;
            show_request(&page, id);
        }
        TimeOffCommand::Reject { id, reason } => {
            page.reject(id, &reason).await?;
            show_request(&page, id);
        }
        TimeOffCommand::Withdraw { id } => {
            page.withdraw(id).await?;
            show_request(&page, id);
        }
        TimeOffCommand::Delete { id } => {
            page.delete(id).await?;
            println!("Đã xóa đơn nghỉ #{id}");
        }
    }
    Ok(())
}

fn show_request(page: &TimeOffPage, id: i64) {
    match page.all_requests().iter().find(|r| r.request_id == id) {
        Some(request) => print!(
            "{}",
            TimeOffCard {
                request,
                role: page.role()
            }
        ),
        None => println!("Đã cập nhật đơn nghỉ #{id}"),
    }
}

async fn inpatient(client: &ApiClient, cmd: InpatientCommand) -> anyhow::Result<()> {
    let stay_id = match &cmd {
        InpatientCommand::Stays { status } => return list_stays(client, *status).await,
        InpatientCommand::Show { stay }
        | InpatientCommand::Deposit { stay, .. }
        | InpatientCommand::GenerateInvoice { stay }
        | InpatientCommand::Pay { stay, .. }
        | InpatientCommand::Refund { stay, .. }
        | InpatientCommand::Settle { stay } => *stay,
    };
    let mut page = InpatientPaymentPage::new(client, stay_id);
    page.load().await?;

    match cmd {
        InpatientCommand::Stays { .. } | InpatientCommand::Show { .. } => {}
        InpatientCommand::Deposit {
            amount,
            method,
            note,
            ..
        } => {
            let form = DepositForm {
                amount,
                payment_method: method,
                note,
            };
            let tx = page.deposit(&form).await?;
            println!(
                "Đã thu tạm ứng {} (giao dịch #{})",
                format_money(tx.amount),
                tx.transaction_id
            );
        }
        InpatientCommand::GenerateInvoice { .. } => {
            let invoice = page.generate_invoice().await?;
            print!("{}", InvoiceCard(&invoice));
        }
        InpatientCommand::Pay {
            invoice,
            amount,
            method,
            use_deposit,
            ..
        } => {
            let form = PayInvoiceForm {
                amount,
                payment_method: method,
                use_deposit,
            };
            let tx = page.pay_invoice(invoice, &form).await?;
            println!("Đã thanh toán {} cho hóa đơn #{invoice}", format_money(tx.amount));
        }
        InpatientCommand::Refund {
            amount,
            method,
            reason,
            ..
        } => {
            let form = RefundForm {
                amount,
                payment_method: method,
                reason,
            };
            let tx = page.refund(&form).await?;
            println!(
                "Đã hoàn {} (giao dịch #{})",
                format_money(tx.amount),
                tx.transaction_id
            );
        }
        InpatientCommand::Settle { .. } => {
            let result = page.settle().await?;
            print!("{}", SettlementCard(&result));
        }
    }

    print!(
        "{}",
        StayCard {
            stay: page.stay()?,
            balance: page.balance().ok(),
        }
    );
    for invoice in page.invoices() {
        print!("{}", InvoiceCard(invoice));
    }
    print!("{}", transaction_table(page.transactions()));
    Ok(())
}

async fn list_stays(client: &ApiClient, status: Option<StayStatus>) -> anyhow::Result<()> {
    let stays = client.inpatient().list_stays(status).await?;
    let mut table = TextTable::new(&["ID", "Bệnh nhân", "Khoa", "Nhập viện", "Trạng thái"]);
    for s in &stays {
        table.push(vec![
            s.stay_id.to_string(),
            s.patient_name.clone(),
            s.department_name.clone().unwrap_or_else(|| "-".into()),
            s.admission_date.to_string(),
            s.status.as_str().to_string(),
        ]);
    }
    print!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Person, RoleType};

    #[test]
    fn test_created_line_uses_record_id() {
        let employee = Employee {
            id: 42,
            employee_code: "NV042".into(),
            person: Person {
                first_name: "Hoa".into(),
                last_name: "Đỗ".into(),
                ..Person::default()
            },
            department_id: Some(1),
            department_name: None,
            role_type: RoleType::Nurse,
            is_active: true,
            has_account: false,
            hire_date: None,
        };
        assert_eq!(created_line(&employee), "Đã thêm nhân viên #42 (NV042)");
    }
}
