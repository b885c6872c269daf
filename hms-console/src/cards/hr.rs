//! HR record cards and list tables

use std::fmt;

use shared::models::{
    Account, DoctorSchedule, Employee, ScheduleStatus, ShiftType, TimeOffAction, TimeOffRequest,
    TimeOffStatus, UserRole, WorkShift,
};

use super::{TextTable, format_days, line, or_dash, yes_no};
use crate::pages::LeaveBalanceWidget;

fn status_label(status: TimeOffStatus) -> &'static str {
    match status {
        TimeOffStatus::Pending => "Chờ duyệt",
        TimeOffStatus::Approved => "Đã duyệt",
        TimeOffStatus::Rejected => "Từ chối",
        TimeOffStatus::Withdrawn => "Đã rút",
        TimeOffStatus::Cancelled => "Đã hủy",
    }
}

fn action_label(action: TimeOffAction) -> &'static str {
    match action {
        TimeOffAction::Approve => "duyệt",
        TimeOffAction::Reject => "từ chối",
        TimeOffAction::Withdraw => "rút đơn",
        TimeOffAction::Delete => "xóa",
    }
}

fn schedule_status_label(status: ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::Scheduled => "Đã lên lịch",
        ScheduleStatus::Completed => "Hoàn thành",
        ScheduleStatus::Cancelled => "Đã hủy",
    }
}

fn shift_type_label(shift_type: ShiftType) -> &'static str {
    match shift_type {
        ShiftType::Morning => "Sáng",
        ShiftType::Afternoon => "Chiều",
        ShiftType::Night => "Đêm",
        ShiftType::FullDay => "Cả ngày",
        ShiftType::OnCall => "Trực",
    }
}

pub struct EmployeeCard<'a>(pub &'a Employee);

impl fmt::Display for EmployeeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        let p = &e.person;
        writeln!(f, "Nhân viên #{} ({})", e.id, e.employee_code)?;
        line(f, "Họ tên", p.full_name())?;
        line(f, "Vai trò", e.role_type)?;
        line(f, "Khoa/phòng", or_dash(e.department_name.as_deref()))?;
        line(
            f,
            "Ngày sinh",
            p.date_of_birth.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
        )?;
        line(f, "Điện thoại", or_dash(p.phone.as_deref()))?;
        line(f, "Email", or_dash(p.email.as_deref()))?;
        line(f, "Địa chỉ", or_dash(p.address.as_deref()))?;
        line(f, "Đang làm việc", yes_no(e.is_active))?;
        line(f, "Có tài khoản", yes_no(e.has_account))
    }
}

pub struct AccountCard<'a>(pub &'a Account);

impl fmt::Display for AccountCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.0;
        writeln!(f, "Tài khoản #{} ({})", a.account_id, a.username)?;
        line(f, "Nhân viên", or_dash(a.employee_name.as_deref()))?;
        line(f, "Vai trò", &a.role)?;
        line(f, "Kích hoạt", yes_no(a.is_active))?;
        line(f, "Bị khóa", yes_no(a.is_locked))?;
        line(
            f,
            "Đăng nhập cuối",
            a.last_login_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".into()),
        )
    }
}

pub struct DoctorScheduleCard<'a>(pub &'a DoctorSchedule);

impl fmt::Display for DoctorScheduleCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Lịch khám #{}", s.doctor_schedule_id)?;
        line(f, "Bác sĩ", or_dash(s.doctor_name.as_deref()))?;
        line(f, "Phòng khám", or_dash(s.clinic_name.as_deref()))?;
        line(f, "Ngày", s.schedule_date)?;
        line(
            f,
            "Giờ",
            format!("{} - {}", s.start_time.format("%H:%M"), s.end_time.format("%H:%M")),
        )?;
        if let (Some(bs), Some(be)) = (s.break_start, s.break_end) {
            line(f, "Nghỉ", format!("{} - {}", bs.format("%H:%M"), be.format("%H:%M")))?;
        }
        line(
            f,
            "Lượt khám",
            format!("{} x {} phút", s.slot_count(), s.slot_duration_minutes),
        )?;
        line(f, "Trạng thái", schedule_status_label(s.status))
    }
}

pub struct TimeOffCard<'a> {
    pub request: &'a TimeOffRequest,
    pub role: UserRole,
}

impl fmt::Display for TimeOffCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.request;
        writeln!(f, "Đơn nghỉ #{}", r.request_id)?;
        line(
            f,
            "Nhân viên",
            r.employee_name
                .clone()
                .unwrap_or_else(|| format!("#{}", r.employee_id)),
        )?;
        line(f, "Loại nghỉ", r.leave_type.label())?;
        line(f, "Thời gian", format!("{} → {}", r.start_date, r.end_date))?;
        line(f, "Số ngày", format_days(r.total_days))?;
        line(f, "Lý do", or_dash(r.reason.as_deref()))?;
        line(f, "Trạng thái", status_label(r.status))?;
        if let Some(note) = r.approver_note.as_deref() {
            line(f, "Ghi chú duyệt", note)?;
        }
        if let Some(reason) = r.reject_reason.as_deref() {
            line(f, "Lý do từ chối", reason)?;
        }
        let actions = r.actions_for(self.role);
        if !actions.is_empty() {
            let names: Vec<&str> = actions.iter().map(|a| action_label(*a)).collect();
            line(f, "Thao tác", names.join(", "))?;
        }
        Ok(())
    }
}

pub struct LeaveBalanceCard<'a>(pub &'a LeaveBalanceWidget);

impl fmt::Display for LeaveBalanceCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widget = self.0;
        writeln!(
            f,
            "Số ngày phép của nhân viên #{} năm {}",
            widget.employee_id(),
            widget.year()
        )?;

        let mut table = TextTable::new(&["Loại nghỉ", "Tổng", "Đã dùng", "Còn lại"]);
        for entry in widget.entries() {
            let mut label = entry.leave_type.label().to_string();
            if entry.failed {
                label.push_str(" (!)");
            }
            table.push(vec![
                label,
                format_days(entry.balance.total_days),
                format_days(entry.balance.used_days),
                format_days(entry.balance.remaining_days),
            ]);
        }
        let totals = widget.totals();
        table.push(vec![
            "Tổng cộng".into(),
            format_days(totals.total_days),
            format_days(totals.used_days),
            format_days(totals.remaining_days),
        ]);
        write!(f, "{table}")
    }
}

// ========== List tables ==========

pub fn employee_table(items: &[&Employee]) -> TextTable {
    let mut table = TextTable::new(&["ID", "Mã", "Họ tên", "Vai trò", "Khoa/phòng", "Hoạt động"]);
    for e in items {
        table.push(vec![
            e.id.to_string(),
            e.employee_code.clone(),
            e.person.full_name(),
            e.role_type.to_string(),
            or_dash(e.department_name.as_deref()).to_string(),
            yes_no(e.is_active).to_string(),
        ]);
    }
    table
}

pub fn account_table(items: &[&Account]) -> TextTable {
    let mut table = TextTable::new(&["ID", "Tên đăng nhập", "Nhân viên", "Vai trò", "Khóa"]);
    for a in items {
        table.push(vec![
            a.account_id.to_string(),
            a.username.clone(),
            or_dash(a.employee_name.as_deref()).to_string(),
            a.role.clone(),
            yes_no(a.is_locked).to_string(),
        ]);
    }
    table
}

pub fn doctor_schedule_table(items: &[&DoctorSchedule]) -> TextTable {
    let mut table = TextTable::new(&["ID", "Ngày", "Giờ", "Bác sĩ", "Phòng khám", "Trạng thái"]);
    for s in items {
        table.push(vec![
            s.doctor_schedule_id.to_string(),
            s.schedule_date.to_string(),
            format!("{}-{}", s.start_time.format("%H:%M"), s.end_time.format("%H:%M")),
            or_dash(s.doctor_name.as_deref()).to_string(),
            or_dash(s.clinic_name.as_deref()).to_string(),
            schedule_status_label(s.status).to_string(),
        ]);
    }
    table
}

pub fn work_shift_table(items: &[&WorkShift]) -> TextTable {
    let mut table = TextTable::new(&["ID", "Tên ca", "Loại", "Giờ", "Hoạt động"]);
    for s in items {
        table.push(vec![
            s.work_shift_id.to_string(),
            s.shift_name.clone(),
            shift_type_label(s.shift_type).to_string(),
            format!("{}-{}", s.start_time.format("%H:%M"), s.end_time.format("%H:%M")),
            yes_no(s.is_active).to_string(),
        ]);
    }
    table
}

pub fn time_off_table(items: &[&TimeOffRequest], role: UserRole) -> TextTable {
    let mut table = TextTable::new(&[
        "ID",
        "Nhân viên",
        "Loại nghỉ",
        "Từ",
        "Đến",
        "Ngày",
        "Trạng thái",
        "Thao tác",
    ]);
    for r in items {
        let actions: Vec<&str> = r
            .actions_for(role)
            .iter()
            .map(|a| action_label(*a))
            .collect();
        table.push(vec![
            r.request_id.to_string(),
            r.employee_name
                .clone()
                .unwrap_or_else(|| format!("#{}", r.employee_id)),
            r.leave_type.label().to_string(),
            r.start_date.to_string(),
            r.end_date.to_string(),
            format_days(r.total_days),
            status_label(r.status).to_string(),
            actions.join(", "),
        ]);
    }
    table
}
