//! Read-only renderers
//!
//! Cards render one record as labelled lines; [`TextTable`] renders lists.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

mod finance;
mod hr;

pub use finance::{InvoiceCard, SettlementCard, StayCard, TransactionRow, transaction_table};
pub use hr::{
    AccountCard, DoctorScheduleCard, EmployeeCard, LeaveBalanceCard, TimeOffCard, account_table,
    doctor_schedule_table, employee_table, time_off_table, work_shift_table,
};

/// Whole đồng with thousands separators, e.g. `1,250,000 VND`
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped} VND")
}

/// Days with at most one decimal, without a trailing `.0`
pub fn format_days(days: f64) -> String {
    let rounded = (days * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "Có" } else { "Không" }
}

/// Write one `label: value` line with aligned labels
pub(crate) fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    let pad = LABEL_WIDTH.saturating_sub(label.chars().count());
    writeln!(f, "  {label}{:pad$} : {value}", "")
}

const LABEL_WIDTH: usize = 18;

/// Column-aligned plain text table
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = cell.chars().count();
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        let write_row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let mut out = String::new();
            for (i, width) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = width - cell.chars().count();
                if i > 0 {
                    out.push_str("  ");
                }
                out.push_str(cell);
                out.extend(std::iter::repeat_n(' ', pad));
            }
            writeln!(f, "{}", out.trim_end())
        };

        write_row(f, &self.headers)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(f, &rule)?;
        for row in &self.rows {
            write_row(f, row)?;
        }
        if self.rows.is_empty() {
            writeln!(f, "(không có dữ liệu)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(1_250_000, 0)), "1,250,000 VND");
        assert_eq!(format_money(Decimal::new(999, 0)), "999 VND");
        assert_eq!(format_money(Decimal::new(1000, 0)), "1,000 VND");
        assert_eq!(format_money(Decimal::ZERO), "0 VND");
        assert_eq!(format_money(Decimal::new(-4_500_005, 1)), "-450,001 VND");
        assert_eq!(format_money(Decimal::new(-4, 1)), "0 VND");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(12.0), "12");
        assert_eq!(format_days(3.5), "3.5");
        assert_eq!(format_days(0.0), "0");
    }

    #[test]
    fn test_table_alignment() {
        let mut table = TextTable::new(&["Mã", "Họ tên"]);
        table.push(vec!["NV001".into(), "Trần An".into()]);
        table.push(vec!["B2".into(), "Lê Bình".into()]);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Mã     Họ tên");
        assert_eq!(lines[1], "-----  -------");
        assert_eq!(lines[2], "NV001  Trần An");
        assert_eq!(lines[3], "B2     Lê Bình");
    }

    #[test]
    fn test_empty_table_says_so() {
        let table = TextTable::new(&["A"]);
        assert!(table.to_string().contains("không có dữ liệu"));
    }
}
