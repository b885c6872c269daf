//! Inpatient payment forms

use rust_decimal::Decimal;
use shared::models::{DepositCreate, InvoicePayment, PaymentMethod, RefundCreate};
use validator::Validate;

use super::{Form, FormErrors, not_blank, optional_text, positive};

#[derive(Debug, Clone, Validate)]
pub struct DepositForm {
    #[validate(custom(function = "positive"))]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

impl Form for DepositForm {
    type Create = DepositCreate;

    fn to_create(&self) -> Result<DepositCreate, FormErrors> {
        self.check()?;
        Ok(DepositCreate {
            amount: self.amount,
            payment_method: self.payment_method,
            note: optional_text(&self.note),
        })
    }
}

#[derive(Debug, Clone, Validate)]
pub struct PayInvoiceForm {
    #[validate(custom(function = "positive"))]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub use_deposit: bool,
}

impl Form for PayInvoiceForm {
    type Create = InvoicePayment;

    fn to_create(&self) -> Result<InvoicePayment, FormErrors> {
        self.check()?;
        Ok(InvoicePayment {
            amount: self.amount,
            payment_method: self.payment_method,
            use_deposit: self.use_deposit,
        })
    }
}

#[derive(Debug, Clone, Validate)]
pub struct RefundForm {
    #[validate(custom(function = "positive"))]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[validate(custom(function = "not_blank"), length(max = 500))]
    pub reason: String,
}

impl Form for RefundForm {
    type Create = RefundCreate;

    fn to_create(&self) -> Result<RefundCreate, FormErrors> {
        self.check()?;
        Ok(RefundCreate {
            amount: self.amount,
            payment_method: self.payment_method,
            reason: self.reason.trim().to_string(),
        })
    }
}
