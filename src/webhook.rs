//! Payloads PayPay posts to the merchant's webhook endpoint.
//!
//! The field names are irregular: some notifications use `snake_case`, some
//! `camelCase`, and some mix both. They are mapped field by field.

use serde::{Deserialize, Serialize};

/// The user completed the account link flow.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerAuthorizationSucceeded {
    #[serde(rename = "notification_type")]
    pub notification_type: String,
    #[serde(rename = "notification_id")]
    pub notification_id: String,
    pub created_at: String,
    pub reference_id: String,
    pub nonce: String,
    pub scopes: String,
    pub user_authorization_id: String,
    pub profile_identifier: String,
    pub expiry: i64,
}

/// The account link flow failed or was declined.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerAuthorizationFailed {
    #[serde(rename = "notification_type")]
    pub notification_type: String,
    #[serde(rename = "notification_id")]
    pub notification_id: String,
    pub created_at: String,
    pub reference_id: String,
    pub nonce: String,
    pub result: String,
    pub reason: String,
}

/// The user revoked an authorization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerAuthorizationRevoked {
    #[serde(rename = "notification_type")]
    pub notification_type: String,
    #[serde(rename = "notification_id")]
    pub notification_id: String,
    pub created_at: String,
    pub user_authorization_id: String,
    pub reference_id: String,
}

/// An authorization was extended.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerAuthorizationExtended {
    #[serde(rename = "notification_type")]
    pub notification_type: String,
    #[serde(rename = "notification_id")]
    pub notification_id: String,
    pub created_at: String,
    pub scopes: String,
    pub user_authorization_id: String,
    pub expiry: i64,
}

/// A reconciliation file is ready for download.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReconFile {
    #[serde(rename = "notification_type")]
    pub notification_type: String,
    #[serde(rename = "notification_id")]
    pub notification_id: String,
    pub file_type: String,
    pub path: String,
    pub requested_at: String,
}

/// A payment changed state.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Transaction {
    pub notification_type: String,
    pub merchant_id: String,
    pub store_id: String,
    pub pos_id: String,
    pub order_id: String,
    pub merchant_order_id: String,
    pub authorized_at: String,
    pub expires_at: String,
    pub paid_at: String,
    pub order_amount: i64,
    pub state: String,
}
