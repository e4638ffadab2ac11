//! Request order (pending payment) endpoints.

use super::{TIMEOUT_READ, TIMEOUT_WRITE};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{MerchantOrderItem, MoneyAmount, OpaResponse, Payment, ResultInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body of [`create_pending_payment`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePendingPaymentPayload {
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_receipt_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_items: Vec<MerchantOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// A payment request sent to a user.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PendingPayment {
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    pub expiry_date: Option<i64>,
    pub store_id: String,
    pub terminal_id: String,
    pub order_receipt_number: String,
    pub order_description: String,
    pub order_items: Vec<MerchantOrderItem>,
    pub metadata: Option<Value>,
}

/// Sends a payment request to the user's PayPay app.
///
/// `POST /v1/requestOrder`
pub async fn create_pending_payment(
    client: &OpaClient,
    req: &CreatePendingPaymentPayload,
) -> Result<OpaResponse<PendingPayment>> {
    client.post("/v1/requestOrder", &[], req, TIMEOUT_WRITE).await
}

/// Cancels a payment request the user has not yet accepted.
///
/// `DELETE /v1/requestOrder/{merchantPaymentId}`
pub async fn cancel_pending_order(
    client: &OpaClient,
    merchant_payment_id: &str,
) -> Result<ResultInfo> {
    client
        .delete(
            &format!("/v1/requestOrder/{}", merchant_payment_id),
            TIMEOUT_READ,
        )
        .await
}

/// Retrieves the payment behind a payment request.
///
/// `GET /v1/requestOrder/{merchantPaymentId}`
pub async fn get_requested_payment_details(
    client: &OpaClient,
    merchant_payment_id: &str,
) -> Result<OpaResponse<Payment>> {
    client
        .get(
            &format!("/v1/requestOrder/{}", merchant_payment_id),
            &[],
            TIMEOUT_READ,
        )
        .await
}
