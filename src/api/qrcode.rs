//! Dynamic QR code endpoints.

use super::{TIMEOUT_READ, TIMEOUT_WRITE};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{
    CodeType, MerchantOrderItem, MoneyAmount, OpaResponse, Payment, RedirectType, ResultInfo,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body of [`create_qr_code`].
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateQrCodePayload {
    pub merchant_payment_id: String,
    pub amount: MoneyAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_items: Vec<MerchantOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub code_type: CodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<RedirectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Creates a pre-authorization instead of a direct payment
    pub is_authorization: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_expiry: Option<i64>,
}

impl Default for CreateQrCodePayload {
    fn default() -> Self {
        Self {
            merchant_payment_id: String::new(),
            amount: MoneyAmount::default(),
            order_description: None,
            order_items: Vec::new(),
            metadata: None,
            code_type: CodeType::OrderQr,
            store_info: None,
            store_id: None,
            terminal_id: None,
            requested_at: 0,
            redirect_url: None,
            redirect_type: None,
            user_agent: None,
            is_authorization: false,
            authorization_expiry: None,
        }
    }
}

/// Order item as echoed back in a QR code response.
///
/// The API spells the unit price `unit_price` here, unlike everywhere else.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MerchantOrderItemResponse {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub product_id: String,
    #[serde(rename = "unit_price")]
    pub unit_price: Option<MoneyAmount>,
}

/// A created QR code.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct QrCodeResponse {
    pub code_id: String,
    pub url: String,
    #[serde(rename = "deeplink")]
    pub deep_link: String,
    pub expiry_date: i64,
    pub merchant_payment_id: String,
    pub amount: MoneyAmount,
    pub order_description: String,
    pub order_items: Vec<MerchantOrderItemResponse>,
    pub metadata: Option<Value>,
    pub code_type: String,
    pub store_info: String,
    pub store_id: String,
    pub terminal_id: String,
    pub requested_at: i64,
    pub redirect_url: String,
    pub redirect_type: Option<RedirectType>,
    pub is_authorization: bool,
    pub authorization_expiry: Option<i64>,
}

/// Creates a QR code the user can scan to pay.
///
/// `POST /v2/codes`
pub async fn create_qr_code(
    client: &OpaClient,
    req: &CreateQrCodePayload,
) -> Result<OpaResponse<QrCodeResponse>> {
    client.post("/v2/codes", &[], req, TIMEOUT_WRITE).await
}

/// Deletes a QR code.
///
/// `DELETE /v2/codes/{codeId}`
pub async fn delete_qr_code(client: &OpaClient, code_id: &str) -> Result<ResultInfo> {
    client
        .delete(&format!("/v2/codes/{}", code_id), TIMEOUT_READ)
        .await
}

/// Retrieves the payment made through a QR code.
///
/// `GET /v2/codes/payments/{merchantPaymentId}`
pub async fn get_code_payment_details(
    client: &OpaClient,
    merchant_payment_id: &str,
) -> Result<OpaResponse<Payment>> {
    client
        .get(
            &format!("/v2/codes/payments/{}", merchant_payment_id),
            &[],
            TIMEOUT_READ,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload_defaults() {
        let payload = CreateQrCodePayload {
            merchant_payment_id: "M1".to_string(),
            amount: MoneyAmount::jpy(1000),
            requested_at: 1_600_000_000,
            redirect_type: Some(RedirectType::WebLink),
            redirect_url: Some("https://example.com/done".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "merchantPaymentId": "M1",
                "amount": { "amount": 1000, "currency": "JPY" },
                "codeType": "ORDER_QR",
                "requestedAt": 1600000000,
                "redirectUrl": "https://example.com/done",
                "redirectType": "WEB_LINK",
                "isAuthorization": false
            })
        );
    }

    #[test]
    fn test_response_irregular_names() {
        let response: QrCodeResponse = serde_json::from_value(json!({
            "codeId": "04-abc",
            "url": "https://qr-stg.sandbox.paypay.ne.jp/28180104abc",
            "deeplink": "paypay://payment?link_key=abc",
            "orderItems": [{
                "name": "Cake",
                "quantity": 1,
                "unit_price": { "amount": 20, "currency": "JPY" }
            }],
            "redirectType": "WEB_LINK"
        }))
        .unwrap();

        assert_eq!(response.code_id, "04-abc");
        assert_eq!(response.deep_link, "paypay://payment?link_key=abc");
        assert_eq!(response.order_items[0].unit_price, Some(MoneyAmount::jpy(20)));
        assert_eq!(response.redirect_type, Some(RedirectType::WebLink));
    }
}
