//! Account link and user authorization endpoints.

use super::{TIMEOUT_ACCOUNT_LINK, TIMEOUT_READ};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{OpaResponse, RedirectType, ResultInfo, Scope};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body of [`create_account_link_qr_code`].
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountLinkQrCodePayload {
    pub scopes: Vec<Scope>,

    /// Echoed back in the authorization response token
    pub nonce: String,
    pub redirect_type: RedirectType,
    pub redirect_url: String,
    pub reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreateAccountLinkQrCodeResponse {
    /// URL of the account link QR code
    #[serde(rename = "linkQRCodeURL")]
    pub link_qr_code_url: String,
}

/// Starts the account link flow by creating a QR code for the user to scan.
///
/// `POST /v1/qr/sessions`
pub async fn create_account_link_qr_code(
    client: &OpaClient,
    req: &CreateAccountLinkQrCodePayload,
) -> Result<OpaResponse<CreateAccountLinkQrCodeResponse>> {
    client
        .post("/v1/qr/sessions", &[], req, TIMEOUT_ACCOUNT_LINK)
        .await
}

/// State of a user authorization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAuthorizationStatus {
    pub user_authorization_id: String,
    pub reference_ids: Option<Value>,
    pub status: String,
    pub scopes: Vec<String>,
    pub expire_at: i64,
    pub issued_at: i64,
}

/// Retrieves the state of a user authorization.
///
/// `GET /v2/user/authorizations?userAuthorizationId=`
pub async fn get_user_authorization_status(
    client: &OpaClient,
    user_authorization_id: &str,
) -> Result<OpaResponse<UserAuthorizationStatus>> {
    client
        .get(
            "/v2/user/authorizations",
            &[("userAuthorizationId", user_authorization_id)],
            TIMEOUT_READ,
        )
        .await
}

/// Revokes a user authorization.
///
/// `DELETE /v2/user/authorizations/{userAuthorizationId}`
pub async fn unlink_user(client: &OpaClient, user_authorization_id: &str) -> Result<ResultInfo> {
    client
        .delete(
            &format!("/v2/user/authorizations/{}", user_authorization_id),
            TIMEOUT_READ,
        )
        .await
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskedUserProfile {
    /// Phone number with all but the last digits masked
    pub phone_number: String,
}

/// Retrieves the masked phone number of a linked user.
///
/// `GET /v2/user/profile/secure?userAuthorizationId=`
pub async fn get_masked_user_profile(
    client: &OpaClient,
    user_authorization_id: &str,
) -> Result<OpaResponse<MaskedUserProfile>> {
    client
        .get(
            "/v2/user/profile/secure",
            &[("userAuthorizationId", user_authorization_id)],
            TIMEOUT_READ,
        )
        .await
}
