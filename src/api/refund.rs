//! Refund endpoints.

use super::{TIMEOUT_READ, TIMEOUT_WRITE};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{MoneyAmount, OpaResponse, Refund};
use serde::Serialize;

/// Request body of [`refund_payment`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefundPaymentPayload {
    pub merchant_refund_id: String,
    pub payment_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Refunds all or part of a payment.
///
/// `POST /v2/refunds`
pub async fn refund_payment(
    client: &OpaClient,
    req: &RefundPaymentPayload,
) -> Result<OpaResponse<Refund>> {
    client.post("/v2/refunds", &[], req, TIMEOUT_WRITE).await
}

/// Retrieves a refund.
///
/// `GET /v2/refunds/{merchantRefundId}`
pub async fn get_refund_details(
    client: &OpaClient,
    merchant_refund_id: &str,
) -> Result<OpaResponse<Refund>> {
    client
        .get(&format!("/v2/refunds/{}", merchant_refund_id), &[], TIMEOUT_READ)
        .await
}
