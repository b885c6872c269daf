//! Inpatient Finance Model (stays, deposits, invoices, settlement)
//!
//! All amounts are computed by the backend; the client only displays them.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StayStatus {
    Admitted,
    Discharged,
    Settled,
}

impl StayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admitted => "ADMITTED",
            Self::Discharged => "DISCHARGED",
            Self::Settled => "SETTLED",
        }
    }
}

impl std::str::FromStr for StayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMITTED" => Ok(Self::Admitted),
            "DISCHARGED" => Ok(Self::Discharged),
            "SETTLED" => Ok(Self::Settled),
            _ => Err(format!("unknown stay status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    Insurance,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Card => "CARD",
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Insurance => "INSURANCE",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "CASH" => Ok(Self::Cash),
            "CARD" => Ok(Self::Card),
            "BANK_TRANSFER" | "TRANSFER" => Ok(Self::BankTransfer),
            "INSURANCE" => Ok(Self::Insurance),
            _ => Err(format!("unknown payment method: {s}")),
        }
    }
}

/// Inpatient stay (admission)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InpatientStay {
    pub stay_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    #[serde(default)]
    pub patient_code: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub bed_number: Option<String>,
    pub admission_date: NaiveDate,
    #[serde(default)]
    pub discharge_date: Option<NaiveDate>,
    pub status: StayStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Payment,
    Refund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Voided,
}

/// Money movement on a stay (deposit, invoice payment, refund)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: i64,
    pub stay_id: i64,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_id: i64,
    pub invoice_number: String,
    pub stay_id: i64,
    pub total_amount: Decimal,
    #[serde(default)]
    pub insurance_covered: Decimal,
    pub paid_amount: Decimal,
    pub due_amount: Decimal,
    pub status: InvoiceStatus,
    pub issued_at: NaiveDateTime,
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,
}

/// Deposit balance summary for a stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositBalance {
    pub stay_id: i64,
    pub total_deposit: Decimal,
    pub total_charges: Decimal,
    pub total_refunded: Decimal,
    /// Positive = credit held for the patient, negative = amount owed
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositCreate {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayment {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    /// Draw from the deposit balance instead of collecting new money
    #[serde(default)]
    pub use_deposit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundCreate {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementStatus {
    /// Deposit covered everything; `refund_amount` goes back to the patient
    Refund,
    /// Deposit fell short; `amount_due` must still be collected
    AmountDue,
    /// Deposit matched charges exactly
    Balanced,
}

/// Result of the backend settlement of a stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    pub stay_id: i64,
    pub total_deposit: Decimal,
    pub total_invoiced: Decimal,
    pub total_paid: Decimal,
    pub refund_amount: Decimal,
    pub amount_due: Decimal,
    pub status: SettlementStatus,
    #[serde(default)]
    pub settled_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_settlement_deserialize_numbers() {
        let json = r#"{
            "stayId": 4, "totalDeposit": 5000000, "totalInvoiced": 3250000.5,
            "totalPaid": 0, "refundAmount": 1749999.5, "amountDue": 0,
            "status": "REFUND"
        }"#;
        let result: SettlementResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_deposit, Decimal::from(5_000_000));
        assert_eq!(result.refund_amount, Decimal::from_str("1749999.5").unwrap());
        assert_eq!(result.status, SettlementStatus::Refund);
        assert!(result.settled_at.is_none());
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!("bank-transfer".parse::<PaymentMethod>(), Ok(PaymentMethod::BankTransfer));
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_deposit_serialize() {
        let deposit = DepositCreate {
            amount: Decimal::from(2_000_000),
            payment_method: PaymentMethod::Card,
            note: None,
        };
        let json = serde_json::to_value(&deposit).unwrap();
        assert_eq!(json["paymentMethod"], "CARD");
        assert!(json.get("note").is_none());
    }
}
