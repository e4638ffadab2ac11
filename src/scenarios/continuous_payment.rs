use crate::api::payment::{self, CreateContinuousPaymentPayload};
use crate::api::refund::{self, RefundPaymentPayload};
use crate::api::user::{
    self, CreateAccountLinkQrCodePayload, CreateAccountLinkQrCodeResponse, MaskedUserProfile,
    UserAuthorizationStatus,
};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{OpaResponse, Payment, Refund, ResultInfo};

/// Continuous Payment: recurring charges against a subscription
/// authorization.
///
/// <https://developer.paypay.ne.jp/products/docs/continuouspayment>
#[derive(Debug, Clone)]
pub struct ContinuousPayment {
    client: OpaClient,
}

impl_constructors!(ContinuousPayment);

impl ContinuousPayment {
    /// Charges the user under their continuous payments authorization.
    pub async fn create_continuous_payment(
        &self,
        req: &CreateContinuousPaymentPayload,
    ) -> Result<OpaResponse<Payment>> {
        payment::create_continuous_payment(&self.client, req).await
    }

    pub async fn get_payment_details(
        &self,
        merchant_payment_id: &str,
    ) -> Result<OpaResponse<Payment>> {
        payment::get_payment_details(&self.client, merchant_payment_id).await
    }

    pub async fn cancel_payment(&self, merchant_payment_id: &str) -> Result<ResultInfo> {
        payment::cancel_payment(&self.client, merchant_payment_id).await
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

    pub async fn unlink_user(&self, user_authorization_id: &str) -> Result<ResultInfo> {
        user::unlink_user(&self.client, user_authorization_id).await
    }

    pub async fn get_user_authorization_status(
        &self,
        user_authorization_id: &str,
    ) -> Result<OpaResponse<UserAuthorizationStatus>> {
        user::get_user_authorization_status(&self.client, user_authorization_id).await
    }

    pub async fn get_masked_user_profile(
        &self,
        user_authorization_id: &str,
    ) -> Result<OpaResponse<MaskedUserProfile>> {
        user::get_masked_user_profile(&self.client, user_authorization_id).await
    }
}
