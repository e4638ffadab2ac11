//! Pre-authorization endpoints: authorize, capture and revert.

use super::TIMEOUT_WRITE;
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{MerchantOrderItem, MoneyAmount, OpaResponse, Payment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result code returned by a capture that still needs the user's approval.
pub const USER_CONFIRMATION_REQUIRED: &str = "USER_CONFIRMATION_REQUIRED";

/// Request body of [`create_payment_authorization`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentAuthorizationPayload {
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
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

    /// Sent as the `agreeSimilarTransaction` query parameter
    #[serde(skip)]
    pub agree_similar_transaction: bool,
}

/// Blocks the payment amount on the user's balance.
///
/// `POST /v2/payments/preauthorize`
pub async fn create_payment_authorization(
    client: &OpaClient,
    req: &CreatePaymentAuthorizationPayload,
) -> Result<OpaResponse<Payment>> {
    let agree = req.agree_similar_transaction.to_string();
    client
        .post(
            "/v2/payments/preauthorize",
            &[("agreeSimilarTransaction", agree.as_str())],
            req,
            TIMEOUT_WRITE,
        )
        .await
}

/// Request body of [`capture_payment_authorization`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CapturePaymentAuthorizationPayload {
    pub merchant_payment_id: String,
    pub amount: MoneyAmount,
    pub merchant_capture_id: String,
    pub requested_at: i64,
    pub order_description: String,
}

/// Captures an authorized payment.
///
/// When the capture exceeds the authorized amount the API answers
/// [`USER_CONFIRMATION_REQUIRED`]; in that case no payment data is returned
/// even though the call succeeded.
///
/// `POST /v2/payments/capture`
pub async fn capture_payment_authorization(
    client: &OpaClient,
    req: &CapturePaymentAuthorizationPayload,
) -> Result<OpaResponse<Payment>> {
    let response = client
        .post("/v2/payments/capture", &[], req, TIMEOUT_WRITE)
        .await?;

    if response.result_info.code == USER_CONFIRMATION_REQUIRED {
        return Ok(response.without_data());
    }

    Ok(response)
}

/// Request body of [`revert_payment_authorization`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevertPaymentAuthorizationPayload {
    pub merchant_revert_id: String,
    pub payment_id: String,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A reverted authorization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RevertedPaymentResponse {
    pub status: String,
    pub accepted_at: i64,
    pub payment_id: String,
    pub requested_at: i64,
    pub reason: String,
}

/// Releases the blocked amount of an authorization.
///
/// `POST /v2/payments/preauthorize/revert`
pub async fn revert_payment_authorization(
    client: &OpaClient,
    req: &RevertPaymentAuthorizationPayload,
) -> Result<OpaResponse<RevertedPaymentResponse>> {
    client
        .post("/v2/payments/preauthorize/revert", &[], req, TIMEOUT_WRITE)
        .await
}
