use crate::api::refund::{self, RefundPaymentPayload};
use crate::api::request_order::{self, CreatePendingPaymentPayload, PendingPayment};
use crate::api::user::{
    self, CreateAccountLinkQrCodePayload, CreateAccountLinkQrCodeResponse, MaskedUserProfile,
};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::jwt::{self, AuthorizationResponseToken};
use crate::types::{OpaResponse, Payment, Refund, ResultInfo};

/// Request Money: the merchant sends a payment request that the user
/// accepts in the PayPay app.
///
/// <https://developer.paypay.ne.jp/products/docs/pendingpayment>
#[derive(Debug, Clone)]
pub struct RequestMoney {
    client: OpaClient,
}

impl_constructors!(RequestMoney);

impl RequestMoney {
    /// Sends a payment request to the user.
    pub async fn create_pending_payment(
        &self,
        req: &CreatePendingPaymentPayload,
    ) -> Result<OpaResponse<PendingPayment>> {
        request_order::create_pending_payment(&self.client, req).await
    }

    /// Retrieves the payment behind a payment request.
    pub async fn get_payment_details(
        &self,
        merchant_payment_id: &str,
    ) -> Result<OpaResponse<Payment>> {
        request_order::get_requested_payment_details(&self.client, merchant_payment_id).await
    }

    pub async fn cancel_pending_order(&self, merchant_payment_id: &str) -> Result<ResultInfo> {
        request_order::cancel_pending_order(&self.client, merchant_payment_id).await
    }

    pub async fn refund_payment(&self, req: &RefundPaymentPayload) -> Result<OpaResponse<Refund>> {
        refund::refund_payment(&self.client, req).await
    }

    pub async fn get_refund_details(
        &self,
        merchant_refund_id: &str,
    ) -> Result<OpaResponse<Refund>> {
        refund::get_refund_details(&self.client, merchant_refund_id).await
    }

    pub async fn create_account_link_qr_code(
        &self,
        req: &CreateAccountLinkQrCodePayload,
    ) -> Result<OpaResponse<CreateAccountLinkQrCodeResponse>> {
        user::create_account_link_qr_code(&self.client, req).await
    }

    pub async fn get_masked_user_profile(
        &self,
        user_authorization_id: &str,
    ) -> Result<OpaResponse<MaskedUserProfile>> {
        user::get_masked_user_profile(&self.client, user_authorization_id).await
    }

    /// Decodes the `responseToken` returned at the end of the account link
    /// flow.
    pub fn decode_response_token(&self, token: &str) -> Result<AuthorizationResponseToken> {
        jwt::decode_authorization_response_token(self.client.credentials(), token)
    }
}
