// hms-console/tests/inpatient_page.rs
// Inpatient payment page: load, money actions, settlement

mod common;

use common::MockBackend;
use hms_console::PageError;
use hms_console::forms::{DepositForm, MSG_POSITIVE, RefundForm};
use hms_console::pages::InpatientPaymentPage;
use rust_decimal::Decimal;
use serde_json::json;
use shared::models::{InvoiceStatus, PaymentMethod, SettlementStatus};

const STAY: &str = "/api/v1/finance/inpatient/stays/21";

fn stay_routes(mock: &MockBackend, deposit: i64) {
    mock.json(
        "GET",
        STAY,
        json!({
            "stayId": 21,
            "patientId": 300,
            "patientName": "Nguyễn Văn Hùng",
            "departmentName": "Ngoại khoa",
            "admissionDate": "2024-05-02",
            "status": "ADMITTED"
        }),
    );
    mock.json("GET", &format!("{STAY}/transactions"), json!([]));
    mock.json(
        "GET",
        &format!("{STAY}/invoices"),
        json!([{
            "invoiceId": 5,
            "invoiceNumber": "HD-0005",
            "stayId": 21,
            "totalAmount": 3200000,
            "paidAmount": 0,
            "dueAmount": 3200000,
            "status": "UNPAID",
            "issuedAt": "2024-05-06T10:00:00"
        }]),
    );
    mock.json(
        "GET",
        &format!("{STAY}/balance"),
        json!({
            "stayId": 21,
            "totalDeposit": deposit,
            "totalCharges": 3200000,
            "totalRefunded": 0,
            "balance": deposit - 3_200_000
        }),
    );
}

#[tokio::test]
async fn test_accessors_before_load() {
    let mock = MockBackend::start().await;
    let client = mock.client_with_token("t");
    let page = InpatientPaymentPage::new(&client, 21);

    assert!(matches!(page.stay(), Err(PageError::NotLoaded)));
    assert!(matches!(page.balance(), Err(PageError::NotLoaded)));
    assert!(page.invoices().is_empty());
    assert!(page.settlement().is_none());
}

#[tokio::test]
async fn test_load_fetches_stay_bundle() {
    let mock = MockBackend::start().await;
    stay_routes(&mock, 5_000_000);
    let client = mock.client_with_token("t");
    let mut page = InpatientPaymentPage::new(&client, 21);

    page.load().await.unwrap();

    assert_eq!(mock.request_count(), 4);
    assert_eq!(page.stay().unwrap().patient_name, "Nguyễn Văn Hùng");
    assert_eq!(page.balance().unwrap().balance, Decimal::new(1_800_000, 0));
    let outstanding: Vec<_> = page.outstanding_invoices().collect();
    assert_eq!(outstanding.len(), 1);
    assert_eq!(outstanding[0].status, InvoiceStatus::Unpaid);
}

#[tokio::test]
async fn test_deposit_posts_and_reloads() {
    let mock = MockBackend::start().await;
    stay_routes(&mock, 5_000_000);
    mock.json(
        "POST",
        &format!("{STAY}/deposits"),
        json!({
            "transactionId": 31,
            "stayId": 21,
            "transactionType": "DEPOSIT",
            "amount": 2000000,
            "paymentMethod": "CARD",
            "status": "COMPLETED",
            "createdAt": "2024-05-03T08:15:00"
        }),
    );
    let client = mock.client_with_token("t");
    let mut page = InpatientPaymentPage::new(&client, 21);

    let form = DepositForm {
        amount: Decimal::new(2_000_000, 0),
        payment_method: PaymentMethod::Card,
        note: Some("  ".into()),
    };
    let tx = page.deposit(&form).await.unwrap();

    assert_eq!(tx.transaction_id, 31);
    assert_eq!(
        mock.requests()[0].json(),
        json!({"amount": 2000000.0, "paymentMethod": "CARD"})
    );
    assert_eq!(mock.hits("GET", &format!("{STAY}/balance")), 1);
    assert!(page.stay().is_ok());
}

#[tokio::test]
async fn test_non_positive_amounts_are_rejected_locally() {
    let mock = MockBackend::start().await;
    let client = mock.client_with_token("t");
    let mut page = InpatientPaymentPage::new(&client, 21);

    let deposit = DepositForm {
        amount: Decimal::ZERO,
        payment_method: PaymentMethod::Cash,
        note: None,
    };
    let err = page.deposit(&deposit).await.unwrap_err();
    assert_eq!(&err.form_errors().unwrap()["amount"], MSG_POSITIVE);

    let refund = RefundForm {
        amount: Decimal::new(-5, 0),
        payment_method: PaymentMethod::Cash,
        reason: " ".into(),
    };
    let errors = page.refund(&refund).await.unwrap_err();
    let errors = errors.form_errors().unwrap();
    assert!(errors.contains("amount"));
    assert!(errors.contains("reason"));

    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_settle_keeps_result() {
    let mock = MockBackend::start().await;
    stay_routes(&mock, 5_000_000);
    mock.json(
        "POST",
        &format!("{STAY}/settle"),
        json!({
            "stayId": 21,
            "totalDeposit": 5000000,
            "totalInvoiced": 3200000,
            "totalPaid": 3200000,
            "refundAmount": 1800000,
            "amountDue": 0,
            "status": "REFUND",
            "settledAt": "2024-05-08T16:30:00"
        }),
    );
    let client = mock.client_with_token("t");
    let mut page = InpatientPaymentPage::new(&client, 21);

    let result = page.settle().await.unwrap();

    assert_eq!(result.status, SettlementStatus::Refund);
    assert_eq!(result.refund_amount, Decimal::new(1_800_000, 0));
    assert_eq!(page.settlement(), Some(&result));
    assert_eq!(mock.hits("POST", &format!("{STAY}/settle")), 1);
    assert_eq!(mock.hits("GET", STAY), 1);
}

#[tokio::test]
async fn test_settle_failure_leaves_state_untouched() {
    let mock = MockBackend::start().await;
    mock.route(
        "POST",
        &format!("{STAY}/settle"),
        400,
        r#"{"message":"Còn hóa đơn chưa thanh toán"}"#,
    );
    let client = mock.client_with_token("t");
    let mut page = InpatientPaymentPage::new(&client, 21);

    let err = page.settle().await.unwrap_err();
    assert_eq!(err.to_string(), "Còn hóa đơn chưa thanh toán");
    assert!(page.settlement().is_none());
    assert_eq!(mock.request_count(), 1);
}
