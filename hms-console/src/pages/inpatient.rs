//! Inpatient payment page for one stay

use hms_client::{ApiClient, InpatientApi};
use rust_decimal::Decimal;
use shared::models::{
    DepositBalance, InpatientStay, Invoice, InvoiceStatus, SettlementResult, Transaction,
};

use crate::error::{PageError, PageResult};
use crate::forms::{DepositForm, Form, PayInvoiceForm, RefundForm};

pub struct InpatientPaymentPage {
    api: InpatientApi,
    stay_id: i64,
    stay: Option<InpatientStay>,
    transactions: Vec<Transaction>,
    invoices: Vec<Invoice>,
    balance: Option<DepositBalance>,
    settlement: Option<SettlementResult>,
}

impl InpatientPaymentPage {
    pub fn new(client: &ApiClient, stay_id: i64) -> Self {
        Self {
            api: client.inpatient(),
            stay_id,
            stay: None,
            transactions: Vec::new(),
            invoices: Vec::new(),
            balance: None,
            settlement: None,
        }
    }

    pub fn stay_id(&self) -> i64 {
        self.stay_id
    }

    pub fn stay(&self) -> PageResult<&InpatientStay> {
        self.stay.as_ref().ok_or(PageError::NotLoaded)
    }

    pub fn balance(&self) -> PageResult<&DepositBalance> {
        self.balance.as_ref().ok_or(PageError::NotLoaded)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Invoices with money still owed
    pub fn outstanding_invoices(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.iter().filter(|i| {
            matches!(i.status, InvoiceStatus::Unpaid | InvoiceStatus::PartiallyPaid)
                && i.due_amount > Decimal::ZERO
        })
    }

    /// Result of the last `settle()` in this session
    pub fn settlement(&self) -> Option<&SettlementResult> {
        self.settlement.as_ref()
    }

    pub async fn load(&mut self) -> PageResult<()> {
        let id = self.stay_id;
        let (stay, transactions, invoices, balance) = futures::try_join!(
            self.api.get_stay(id),
            self.api.transactions(id),
            self.api.invoices(id),
            self.api.deposit_balance(id),
        )?;
        self.stay = Some(stay);
        self.transactions = transactions;
        self.invoices = invoices;
        self.balance = Some(balance);
        tracing::debug!(stay_id = id, "Stay loaded");
        Ok(())
    }

    pub async fn deposit(&mut self, form: &DepositForm) -> PageResult<Transaction> {
        let payload = form.to_create()?;
        let tx = self.api.create_deposit(self.stay_id, &payload).await?;
        tracing::info!(stay_id = self.stay_id, amount = %payload.amount, "Deposit recorded");
        self.load().await?;
        Ok(tx)
    }

    pub async fn generate_invoice(&mut self) -> PageResult<Invoice> {
        let invoice = self.api.generate_invoice(self.stay_id).await?;
        tracing::info!(
            stay_id = self.stay_id,
            invoice = %invoice.invoice_number,
            "Invoice generated"
        );
        self.load().await?;
        Ok(invoice)
    }

    pub async fn pay_invoice(
        &mut self,
        invoice_id: i64,
        form: &PayInvoiceForm,
    ) -> PageResult<Transaction> {
        let payload = form.to_create()?;
        let tx = self.api.pay_invoice(invoice_id, &payload).await?;
        tracing::info!(
            stay_id = self.stay_id,
            invoice_id,
            amount = %payload.amount,
            "Invoice paid"
        );
        self.load().await?;
        Ok(tx)
    }

    pub async fn refund(&mut self, form: &RefundForm) -> PageResult<Transaction> {
        let payload = form.to_create()?;
        let tx = self.api.create_refund(self.stay_id, &payload).await?;
        tracing::info!(stay_id = self.stay_id, amount = %payload.amount, "Refund issued");
        self.load().await?;
        Ok(tx)
    }

    pub async fn settle(&mut self) -> PageResult<SettlementResult> {
        let result = self.api.settle(self.stay_id).await?;
        tracing::info!(stay_id = self.stay_id, status = ?result.status, "Stay settled");
        self.settlement = Some(result.clone());
        self.load().await?;
        Ok(result)
    }
}
