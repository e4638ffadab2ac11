//! Payment endpoints: create, look up and cancel payments, cashback
//! consultation and continuous payments.

use super::{TIMEOUT_READ, TIMEOUT_WRITE};
use crate::client::{OpaClient, HEADER_LANG};
use crate::errors::Result;
use crate::types::{
    Lang, MerchantOrderItem, MoneyAmount, OpaResponse, Payment, ProductType, ResultInfo,
};
use reqwest::header::HeaderValue;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body of [`create_payment`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPayload {
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    /// Sent as the `agreeSimilarTransaction` query parameter
    #[serde(skip)]
    pub agree_similar_transaction: bool,
}

/// Creates a payment and starts the money transfer.
///
/// `POST /v2/payments`
pub async fn create_payment(
    client: &OpaClient,
    req: &CreatePaymentPayload,
) -> Result<OpaResponse<Payment>> {
    let agree = req.agree_similar_transaction.to_string();
    client
        .post(
            "/v2/payments",
            &[("agreeSimilarTransaction", agree.as_str())],
            req,
            TIMEOUT_WRITE,
        )
        .await
}

/// Cancels a payment.
///
/// `DELETE /v2/payments/{merchantPaymentId}`
pub async fn cancel_payment(client: &OpaClient, merchant_payment_id: &str) -> Result<ResultInfo> {
    client
        .delete(&format!("/v2/payments/{}", merchant_payment_id), TIMEOUT_READ)
        .await
}

/// Retrieves the details of a payment.
///
/// `GET /v2/payments/{merchantPaymentId}`
pub async fn get_payment_details(
    client: &OpaClient,
    merchant_payment_id: &str,
) -> Result<OpaResponse<Payment>> {
    client
        .get(&format!("/v2/payments/{}", merchant_payment_id), &[], TIMEOUT_READ)
        .await
}

/// Request body of [`consult_expected_cashback_info`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsultExpectedCashbackInfoPayload {
    pub request_id: String,
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_items: Vec<MerchantOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    /// Sent as the `lang` header; the API defaults to Japanese
    #[serde(skip)]
    pub lang: Option<Lang>,
}

/// Expected cashback for a payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CashbackInfoResponse {
    pub campaign_message: String,
}

/// Asks how much cashback a payment is expected to earn.
///
/// `POST /v1/payments/cashback/expected`
pub async fn consult_expected_cashback_info(
    client: &OpaClient,
    req: &ConsultExpectedCashbackInfoPayload,
) -> Result<OpaResponse<CashbackInfoResponse>> {
    let mut request = client.request(
        Method::POST,
        "/v1/payments/cashback/expected",
        &[],
        Some(req),
    )?;

    if let Some(lang) = req.lang {
        request
            .headers_mut()
            .insert(HEADER_LANG, HeaderValue::from_static(lang.as_str()));
    }

    client.execute(request, TIMEOUT_READ).await
}

/// Request body of [`create_continuous_payment`].
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateContinuousPaymentPayload {
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
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

/// Creates a payment against a continuous payments authorization.
///
/// `POST /v1/subscription/payments`
pub async fn create_continuous_payment(
    client: &OpaClient,
    req: &CreateContinuousPaymentPayload,
) -> Result<OpaResponse<Payment>> {
    client
        .post("/v1/subscription/payments", &[], req, TIMEOUT_WRITE)
        .await
}
