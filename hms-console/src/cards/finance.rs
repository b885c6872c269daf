//! Inpatient finance cards

use std::fmt;

use shared::models::{
    DepositBalance, InpatientStay, Invoice, InvoiceStatus, SettlementResult, SettlementStatus,
    Transaction, TransactionStatus, TransactionType,
};

use super::{TextTable, format_money, line, or_dash};

fn invoice_status_label(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Unpaid => "Chưa thanh toán",
        InvoiceStatus::PartiallyPaid => "Thanh toán một phần",
        InvoiceStatus::Paid => "Đã thanh toán",
        InvoiceStatus::Cancelled => "Đã hủy",
    }
}

fn transaction_type_label(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Deposit => "Tạm ứng",
        TransactionType::Payment => "Thanh toán",
        TransactionType::Refund => "Hoàn tiền",
    }
}

fn transaction_status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "Đang xử lý",
        TransactionStatus::Completed => "Hoàn tất",
        TransactionStatus::Failed => "Thất bại",
        TransactionStatus::Voided => "Đã hủy",
    }
}

/// Stay header plus the deposit balance when loaded
pub struct StayCard<'a> {
    pub stay: &'a InpatientStay,
    pub balance: Option<&'a DepositBalance>,
}

impl fmt::Display for StayCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stay;
        writeln!(f, "Đợt điều trị #{} ({})", s.stay_id, s.status.as_str())?;
        line(f, "Bệnh nhân", &s.patient_name)?;
        line(f, "Mã bệnh nhân", or_dash(s.patient_code.as_deref()))?;
        line(f, "Khoa", or_dash(s.department_name.as_deref()))?;
        line(f, "Giường", or_dash(s.bed_number.as_deref()))?;
        line(f, "Ngày nhập viện", s.admission_date)?;
        line(
            f,
            "Ngày ra viện",
            s.discharge_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".into()),
        )?;

        if let Some(b) = self.balance {
            line(f, "Tổng tạm ứng", format_money(b.total_deposit))?;
            line(f, "Tổng chi phí", format_money(b.total_charges))?;
            line(f, "Đã hoàn", format_money(b.total_refunded))?;
            line(f, "Số dư", format_money(b.balance))?;
        }
        Ok(())
    }
}

pub struct InvoiceCard<'a>(pub &'a Invoice);

impl fmt::Display for InvoiceCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inv = self.0;
        writeln!(f, "Hóa đơn {} (#{})", inv.invoice_number, inv.invoice_id)?;
        line(f, "Ngày lập", inv.issued_at.format("%Y-%m-%d %H:%M"))?;
        line(f, "Trạng thái", invoice_status_label(inv.status))?;

        if !inv.lines.is_empty() {
            let mut table = TextTable::new(&["Nội dung", "SL", "Đơn giá", "Thành tiền"]);
            for l in &inv.lines {
                table.push(vec![
                    l.description.clone(),
                    l.quantity.normalize().to_string(),
                    format_money(l.unit_price),
                    format_money(l.amount),
                ]);
            }
            write!(f, "{table}")?;
        }

        line(f, "Tổng cộng", format_money(inv.total_amount))?;
        line(f, "BHYT chi trả", format_money(inv.insurance_covered))?;
        line(f, "Đã thanh toán", format_money(inv.paid_amount))?;
        line(f, "Còn phải trả", format_money(inv.due_amount))
    }
}

/// One transaction on a single line
pub struct TransactionRow<'a>(pub &'a Transaction);

impl fmt::Display for TransactionRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            "{} {} {} ({}, {})",
            t.created_at.format("%Y-%m-%d %H:%M"),
            transaction_type_label(t.transaction_type),
            format_money(t.amount),
            t.payment_method,
            transaction_status_label(t.status),
        )?;
        if let Some(note) = t.note.as_deref().filter(|n| !n.trim().is_empty()) {
            write!(f, " - {note}")?;
        }
        Ok(())
    }
}

pub fn transaction_table(items: &[Transaction]) -> TextTable {
    let mut table =
        TextTable::new(&["ID", "Thời gian", "Loại", "Số tiền", "Hình thức", "Trạng thái"]);
    for t in items {
        table.push(vec![
            t.transaction_id.to_string(),
            t.created_at.format("%Y-%m-%d %H:%M").to_string(),
            transaction_type_label(t.transaction_type).to_string(),
            format_money(t.amount),
            t.payment_method.to_string(),
            transaction_status_label(t.status).to_string(),
        ]);
    }
    table
}

pub struct SettlementCard<'a>(pub &'a SettlementResult);

impl fmt::Display for SettlementCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Quyết toán đợt điều trị #{}", s.stay_id)?;
        line(f, "Tổng tạm ứng", format_money(s.total_deposit))?;
        line(f, "Tổng hóa đơn", format_money(s.total_invoiced))?;
        line(f, "Đã thanh toán", format_money(s.total_paid))?;
        match s.status {
            SettlementStatus::Refund => line(f, "Hoàn lại", format_money(s.refund_amount)),
            SettlementStatus::AmountDue => line(f, "Còn phải thu", format_money(s.amount_due)),
            SettlementStatus::Balanced => line(f, "Kết quả", "Đã cân đối"),
        }
    }
}
