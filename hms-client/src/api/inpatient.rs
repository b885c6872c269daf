//! Inpatient Payment API
//!
//! Stays are read-only from here; money moves through deposits, invoice
//! payments, refunds and the final settlement.

use shared::models::{
    DepositBalance, DepositCreate, InpatientStay, Invoice, InvoicePayment, RefundCreate,
    SettlementResult, StayStatus, Transaction,
};

use crate::{ApiClient, ClientResult};

const BASE: &str = "api/v1/finance/inpatient";

#[derive(Debug, Clone)]
pub struct InpatientApi {
    client: ApiClient,
}

impl InpatientApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ========== Stays ==========

    /// List stays, optionally filtered by status
    pub async fn list_stays(
        &self,
        status: Option<StayStatus>,
    ) -> ClientResult<Vec<InpatientStay>> {
        let query: Vec<(&str, String)> = status
            .map(|s| vec![("status", s.as_str().to_string())])
            .unwrap_or_default();
        self.client.get_list(&format!("{BASE}/stays"), &query).await
    }

    pub async fn get_stay(&self, stay_id: i64) -> ClientResult<InpatientStay> {
        self.client.get(&format!("{BASE}/stays/{stay_id}")).await
    }

    pub async fn transactions(&self, stay_id: i64) -> ClientResult<Vec<Transaction>> {
        self.client
            .get_list(&format!("{BASE}/stays/{stay_id}/transactions"), &[])
            .await
    }

    pub async fn invoices(&self, stay_id: i64) -> ClientResult<Vec<Invoice>> {
        self.client
            .get_list(&format!("{BASE}/stays/{stay_id}/invoices"), &[])
            .await
    }

    pub async fn deposit_balance(&self, stay_id: i64) -> ClientResult<DepositBalance> {
        self.client
            .get(&format!("{BASE}/stays/{stay_id}/balance"))
            .await
    }

    // ========== Money movements ==========

    pub async fn create_deposit(
        &self,
        stay_id: i64,
        data: &DepositCreate,
    ) -> ClientResult<Transaction> {
        self.client
            .post(&format!("{BASE}/stays/{stay_id}/deposits"), data)
            .await
    }

    /// Generate an invoice from the charges accrued so far
    pub async fn generate_invoice(&self, stay_id: i64) -> ClientResult<Invoice> {
        self.client
            .post_empty(&format!("{BASE}/stays/{stay_id}/invoices/generate"))
            .await
    }

    pub async fn pay_invoice(
        &self,
        invoice_id: i64,
        data: &InvoicePayment,
    ) -> ClientResult<Transaction> {
        self.client
            .post(&format!("{BASE}/invoices/{invoice_id}/pay"), data)
            .await
    }

    pub async fn create_refund(
        &self,
        stay_id: i64,
        data: &RefundCreate,
    ) -> ClientResult<Transaction> {
        self.client
            .post(&format!("{BASE}/stays/{stay_id}/refunds"), data)
            .await
    }

    /// Close the stay's account: refund what is left or report the amount due
    pub async fn settle(&self, stay_id: i64) -> ClientResult<SettlementResult> {
        self.client
            .post_empty(&format!("{BASE}/stays/{stay_id}/settle"))
            .await
    }
}
