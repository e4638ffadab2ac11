//! Wallet balance and top-up endpoints.

use super::{TIMEOUT_READ, TIMEOUT_WRITE};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{CodeType, Currency, MoneyAmount, OpaResponse, ProductType, RedirectType, ResultInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query of [`get_user_wallet_balance`].
#[derive(Debug, Clone, Default)]
pub struct GetUserWalletBalancePayload {
    pub user_authorization_id: String,
    pub currency: Currency,
    pub product_type: Option<ProductType>,
}

impl GetUserWalletBalancePayload {
    fn query(&self) -> Vec<(&str, &str)> {
        let mut query = vec![
            ("userAuthorizationId", self.user_authorization_id.as_str()),
            ("currency", self.currency.as_str()),
        ];
        if let Some(product_type) = self.product_type {
            query.push(("productType", product_type.as_str()));
        }
        query
    }
}

/// Query of [`check_user_wallet_balance`].
#[derive(Debug, Clone, Default)]
pub struct CheckUserWalletBalancePayload {
    pub user_authorization_id: String,
    pub amount: i64,
    pub currency: Currency,
    pub product_type: Option<ProductType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckUserWalletBalance {
    pub has_enough_balance: bool,
}

/// Checks whether the user's balance covers an amount.
///
/// `GET /v2/wallet/check_balance`
pub async fn check_user_wallet_balance(
    client: &OpaClient,
    req: &CheckUserWalletBalancePayload,
) -> Result<OpaResponse<CheckUserWalletBalance>> {
    let amount = req.amount.to_string();
    let mut query = vec![
        ("userAuthorizationId", req.user_authorization_id.as_str()),
        ("amount", amount.as_str()),
        ("currency", req.currency.as_str()),
    ];
    if let Some(product_type) = req.product_type {
        query.push(("productType", product_type.as_str()));
    }

    client
        .get("/v2/wallet/check_balance", &query, TIMEOUT_READ)
        .await
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletPreference {
    pub use_cashback: bool,
    pub cashback_auto_investment: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserWalletBalance {
    pub user_authorization_id: String,
    pub total_balance: MoneyAmount,
    pub preference: WalletPreference,
}

/// Retrieves the user's wallet balance.
///
/// `GET /v6/wallet/balance`
pub async fn get_user_wallet_balance(
    client: &OpaClient,
    req: &GetUserWalletBalancePayload,
) -> Result<OpaResponse<UserWalletBalance>> {
    client
        .get("/v6/wallet/balance", &req.query(), TIMEOUT_READ)
        .await
}

/// Request body of [`create_topup_qr_code`].
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopupQrCodePayload {
    #[serde(rename = "merchantTopUpId")]
    pub merchant_topup_id: String,
    pub user_authorization_id: String,
    #[serde(rename = "minimumTopUpAmount")]
    pub minimum_topup_amount: MoneyAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub code_type: CodeType,
    pub requested_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<RedirectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for CreateTopupQrCodePayload {
    fn default() -> Self {
        Self {
            merchant_topup_id: String::new(),
            user_authorization_id: String::new(),
            minimum_topup_amount: MoneyAmount::default(),
            metadata: None,
            code_type: CodeType::TopupQr,
            requested_at: 0,
            redirect_type: None,
            redirect_url: None,
            user_agent: None,
        }
    }
}

/// A created top-up QR code.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TopupQrCodeResponse {
    pub code_id: String,
    pub url: String,
    pub status: String,
    #[serde(rename = "merchantTopUpId")]
    pub merchant_topup_id: String,
    pub user_authorization_id: String,
    #[serde(rename = "minimumTopUpAmount")]
    pub minimum_topup_amount: MoneyAmount,
    pub metadata: Option<Value>,
    pub expiry_date: i64,
    pub code_type: Option<CodeType>,
    pub requested_at: i64,
    pub redirect_type: Option<RedirectType>,
    pub redirect_url: String,
    pub user_agent: String,
}

/// State of a top-up.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TopupQrCodeDetails {
    #[serde(rename = "topUpId")]
    pub topup_id: String,
    #[serde(rename = "merchantTopUpId")]
    pub merchant_topup_id: String,
    pub user_authorization_id: String,
    pub requested_at: i64,
    pub accepted_at: i64,
    pub expiry_date: i64,
    pub status: String,
    pub metadata: Option<Value>,
}

/// Creates a QR code the user scans to top up their wallet.
///
/// `POST /v1/code/topup`
pub async fn create_topup_qr_code(
    client: &OpaClient,
    req: &CreateTopupQrCodePayload,
) -> Result<OpaResponse<TopupQrCodeResponse>> {
    client.post("/v1/code/topup", &[], req, TIMEOUT_WRITE).await
}

/// Deletes a top-up QR code.
///
/// `DELETE /v1/code/topup/{codeId}`
pub async fn delete_topup_qr_code(client: &OpaClient, code_id: &str) -> Result<ResultInfo> {
    client
        .delete(&format!("/v1/code/topup/{}", code_id), TIMEOUT_WRITE)
        .await
}

/// Retrieves a top-up.
///
/// `GET /v1/code/topup/{merchantTopUpId}`
pub async fn get_topup_details(
    client: &OpaClient,
    merchant_topup_id: &str,
) -> Result<OpaResponse<TopupQrCodeDetails>> {
    client
        .get(
            &format!("/v1/code/topup/{}", merchant_topup_id),
            &[],
            TIMEOUT_WRITE,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_balance_query() {
        let req = GetUserWalletBalancePayload {
            user_authorization_id: "U1".to_string(),
            currency: Currency::Jpy,
            product_type: Some(ProductType::VirtualBonusInvestment),
        };

        assert_eq!(
            req.query(),
            vec![
                ("userAuthorizationId", "U1"),
                ("currency", "JPY"),
                ("productType", "VIRTUAL_BONUS_INVESTMENT"),
            ]
        );

        let req = GetUserWalletBalancePayload {
            product_type: None,
            ..req
        };
        assert_eq!(req.query().len(), 2);
    }

    #[test]
    fn test_topup_payload_names() {
        let payload = CreateTopupQrCodePayload {
            merchant_topup_id: "T1".to_string(),
            user_authorization_id: "U1".to_string(),
            minimum_topup_amount: MoneyAmount::jpy(1000),
            requested_at: 1,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "merchantTopUpId": "T1",
                "userAuthorizationId": "U1",
                "minimumTopUpAmount": { "amount": 1000, "currency": "JPY" },
                "codeType": "TOPUP_QR",
                "requestedAt": 1
            })
        );
    }

    #[test]
    fn test_topup_details_names() {
        let details: TopupQrCodeDetails = serde_json::from_value(json!({
            "topUpId": "X1",
            "merchantTopUpId": "T1",
            "status": "COMPLETED"
        }))
        .unwrap();

        assert_eq!(details.topup_id, "X1");
        assert_eq!(details.merchant_topup_id, "T1");
        assert_eq!(details.metadata, None);
    }

    #[test]
    fn test_wallet_balance_preference() {
        let balance: UserWalletBalance = serde_json::from_value(json!({
            "userAuthorizationId": "U1",
            "totalBalance": { "amount": 5000, "currency": "JPY" },
            "preference": { "useCashback": true, "cashbackAutoInvestment": false }
        }))
        .unwrap();

        assert_eq!(balance.total_balance, MoneyAmount::jpy(5000));
        assert!(balance.preference.use_cashback);
        assert!(!balance.preference.cashback_auto_investment);
    }
}
