//! Core type definitions shared across the PayPay API.
//!
//! Every response from the API is wrapped in an envelope:
//!
//! ```json
//! {
//!   "resultInfo": { "code": "SUCCESS", "message": "Success", "codeId": "08100001" },
//!   "data": { ... }
//! }
//! ```
//!
//! The envelope is decoded by the client; endpoint functions hand back an
//! [`OpaResponse`] holding the [`ResultInfo`] and the typed `data`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Processing result reported by the API.
///
/// The HTTP status is not part of the JSON; the client stores it in
/// `status_code` for convenience.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ResultInfo {
    /// Result code, e.g. `SUCCESS` or `DUPLICATE_DYNAMIC_QR_REQUEST`
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Result code identifier
    #[serde(rename = "codeId")]
    pub code_id: String,

    /// HTTP status code of the response
    #[serde(skip)]
    pub status_code: u16,
}

impl ResultInfo {
    /// Whether the call succeeded. Any status below 400 counts as success.
    ///
    /// # Examples
    ///
    /// ```
    /// use paypayopa::types::ResultInfo;
    ///
    /// let info = ResultInfo { status_code: 201, ..Default::default() };
    /// assert!(info.is_success());
    ///
    /// let info = ResultInfo { status_code: 400, ..Default::default() };
    /// assert!(!info.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }
}

/// Result of an endpoint call: the processing result plus the decoded `data`.
///
/// `data` is `None` whenever the call did not succeed, and also when the API
/// returned no data.
#[derive(Debug, Clone)]
pub struct OpaResponse<T> {
    /// Processing result
    pub result_info: ResultInfo,

    /// Decoded response data
    pub data: Option<T>,
}

impl<T> OpaResponse<T> {
    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        self.result_info.is_success()
    }

    /// Drops `data`, keeping only the processing result.
    pub(crate) fn without_data(self) -> Self {
        Self {
            result_info: self.result_info,
            data: None,
        }
    }
}

/// Currency of an amount.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Currency {
    /// Japanese yen
    #[default]
    #[serde(rename = "JPY")]
    Jpy,
}

impl Currency {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Jpy => "JPY",
        }
    }
}

/// An amount of money.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoneyAmount {
    /// Amount in the smallest unit of the currency
    pub amount: i64,

    /// Currency
    pub currency: Currency,
}

impl MoneyAmount {
    /// Creates an amount in Japanese yen.
    pub fn jpy(amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::Jpy,
        }
    }
}

/// An item of a merchant order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MerchantOrderItem {
    /// Item name
    pub name: String,

    /// Item category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Quantity
    pub quantity: i64,

    /// Product ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<MoneyAmount>,
}

/// Code type required when creating QR codes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeType {
    /// QR code for an order payment
    #[serde(rename = "ORDER_QR")]
    OrderQr,

    /// QR code for a wallet top-up
    #[serde(rename = "TOPUP_QR")]
    TopupQr,
}

/// Where the user is redirected after a QR code flow.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectType {
    /// The payment happens in a web browser
    #[serde(rename = "WEB_LINK")]
    WebLink,

    /// The payment happens in an app
    #[serde(rename = "APP_DEEP_LINK")]
    AppDeepLink,
}

/// Language of cashback messages, sent in the `lang` header.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// English
    #[serde(rename = "EN")]
    En,

    /// Japanese (the API default)
    #[serde(rename = "JA")]
    Ja,
}

impl Lang {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ja => "JA",
        }
    }
}

/// Product type of a payment or balance query.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Bonus investment
    VirtualBonusInvestment,
    /// Pay-later repayment
    PayLaterRepayment,
    /// Real investment
    RealInvestment,
}

impl ProductType {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::VirtualBonusInvestment => "VIRTUAL_BONUS_INVESTMENT",
            ProductType::PayLaterRepayment => "PAY_LATER_REPAYMENT",
            ProductType::RealInvestment => "REAL_INVESTMENT",
        }
    }
}

/// Scope of a user authorization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    DirectDebit,
    Cashback,
    GetBalance,
    QuickPay,
    ContinuousPayments,
    MerchantTopup,
    PendingPayments,
    UserNotification,
    UserTopup,
    UserProfile,
    PreauthCaptureNative,
    PreauthCaptureTransaction,
    PushNotification,
    NotificationCenterOg,
    NotificationCenterAb,
    NotificationCenterTl,
    BankRegistration,
}

/// Outcome of a user authorization, as reported in the response token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserAuthorizeResult {
    /// The user granted the authorization
    Succeeded,
    /// The user declined the authorization
    Declined,
    /// Any value this SDK does not know about
    #[serde(other)]
    Unknown,
}

/// Wrapper the API uses for nested lists, e.g. `{"refunds": {"data": [...]}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DataList<T> {
    /// Items
    pub data: Vec<T>,
}

impl<T> Default for DataList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

/// A capture of an authorized payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Capture {
    pub accepted_at: i64,
    pub merchant_capture_id: String,
    pub amount: MoneyAmount,
    pub order_description: String,
    pub requested_at: i64,
    pub expires_at: Option<i64>,
    pub status: String,
}

/// A revert of an authorized payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Revert {
    pub accepted_at: i64,
    pub merchant_revert_id: String,
    pub requested_at: i64,
    pub reason: String,
}

/// A refund, as returned by the refund endpoints and nested in payments.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Refund {
    pub status: String,
    pub accepted_at: i64,
    pub merchant_refund_id: String,
    pub payment_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    pub reason: String,
    pub assume_merchant: String,
}

/// Payment details.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: String,
    pub status: String,
    pub accepted_at: i64,
    pub refunds: DataList<Refund>,
    pub captures: DataList<Capture>,
    pub revert: Option<Revert>,
    pub merchant_payment_id: String,
    pub user_authorization_id: String,
    pub amount: MoneyAmount,
    pub requested_at: i64,
    pub expires_at: Option<i64>,
    pub canceled_at: Option<i64>,
    pub store_id: String,
    pub terminal_id: String,
    pub order_receipt_number: String,
    pub order_description: String,
    pub order_items: Vec<MerchantOrderItem>,
    pub metadata: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_info_deserialization() {
        let info: ResultInfo = serde_json::from_value(json!({
            "code": "SUCCESS",
            "message": "Success",
            "codeId": "08100001"
        }))
        .unwrap();

        assert_eq!(info.code, "SUCCESS");
        assert_eq!(info.code_id, "08100001");
        assert_eq!(info.status_code, 0);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&CodeType::OrderQr).unwrap(), r#""ORDER_QR""#);
        assert_eq!(
            serde_json::to_string(&RedirectType::AppDeepLink).unwrap(),
            r#""APP_DEEP_LINK""#
        );
        assert_eq!(
            serde_json::to_string(&Scope::PreauthCaptureNative).unwrap(),
            r#""preauth_capture_native""#
        );
        assert_eq!(
            serde_json::to_string(&ProductType::PayLaterRepayment).unwrap(),
            format!(r#""{}""#, ProductType::PayLaterRepayment.as_str())
        );
        assert_eq!(serde_json::to_string(&Currency::Jpy).unwrap(), r#""JPY""#);
    }

    #[test]
    fn test_user_authorize_result_unknown() {
        let result: UserAuthorizeResult = serde_json::from_str(r#""succeeded""#).unwrap();
        assert_eq!(result, UserAuthorizeResult::Succeeded);

        let result: UserAuthorizeResult = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(result, UserAuthorizeResult::Unknown);
    }

    #[test]
    fn test_payment_with_nested_lists() {
        let payment: Payment = serde_json::from_value(json!({
            "paymentId": "P1",
            "status": "COMPLETED",
            "acceptedAt": 1600000000,
            "refunds": { "data": [{ "merchantRefundId": "R1", "amount": { "amount": 100, "currency": "JPY" } }] },
            "merchantPaymentId": "M1",
            "amount": { "amount": 1000, "currency": "JPY" },
            "metadata": { "k": "v" }
        }))
        .unwrap();

        assert_eq!(payment.payment_id, "P1");
        assert_eq!(payment.refunds.data.len(), 1);
        assert_eq!(payment.refunds.data[0].amount, MoneyAmount::jpy(100));
        assert!(payment.captures.data.is_empty());
        assert_eq!(payment.metadata, Some(json!({ "k": "v" })));
    }

    #[test]
    fn test_order_item_skips_unset_fields() {
        let item = MerchantOrderItem {
            name: "Tea".to_string(),
            quantity: 2,
            ..Default::default()
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({ "name": "Tea", "quantity": 2 }));
    }
}
