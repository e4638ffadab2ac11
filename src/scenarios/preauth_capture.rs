use crate::api::payment::{self, CashbackInfoResponse, ConsultExpectedCashbackInfoPayload};
use crate::api::payment_auth::{
    self, CapturePaymentAuthorizationPayload, CreatePaymentAuthorizationPayload,
    RevertPaymentAuthorizationPayload, RevertedPaymentResponse,
};
use crate::api::refund::{self, RefundPaymentPayload};
use crate::api::user::{
    self, CreateAccountLinkQrCodePayload, CreateAccountLinkQrCodeResponse, MaskedUserProfile,
    UserAuthorizationStatus,
};
use crate::api::wallet::{
    self, CheckUserWalletBalance, CheckUserWalletBalancePayload, CreateTopupQrCodePayload,
    GetUserWalletBalancePayload, TopupQrCodeDetails, TopupQrCodeResponse, UserWalletBalance,
};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{OpaResponse, Payment, Refund, ResultInfo};

/// PreAuth & Capture: an amount is blocked on the user's balance first and
/// captured (or released) later.
///
/// <https://developer.paypay.ne.jp/products/docs/preauthcapture>
#[derive(Debug, Clone)]
pub struct PreAuthCapture {
    client: OpaClient,
}

impl_constructors!(PreAuthCapture);

impl PreAuthCapture {
    pub async fn consult_expected_cashback_info(
        &self,
        req: &ConsultExpectedCashbackInfoPayload,
    ) -> Result<OpaResponse<CashbackInfoResponse>> {
        payment::consult_expected_cashback_info(&self.client, req).await
    }

    /// Blocks the amount on the user's balance.
    pub async fn create_payment_authorization(
        &self,
        req: &CreatePaymentAuthorizationPayload,
    ) -> Result<OpaResponse<Payment>> {
        payment_auth::create_payment_authorization(&self.client, req).await
    }

    pub async fn get_payment_details(
        &self,
        merchant_payment_id: &str,
    ) -> Result<OpaResponse<Payment>> {
        payment::get_payment_details(&self.client, merchant_payment_id).await
    }

    /// Cancels an authorization that has not been captured yet.
    pub async fn cancel_payment_authorization(
        &self,
        merchant_payment_id: &str,
    ) -> Result<ResultInfo> {
        payment::cancel_payment(&self.client, merchant_payment_id).await
    }

    /// Captures the blocked amount, or part of it.
    pub async fn capture_payment_authorization(
        &self,
        req: &CapturePaymentAuthorizationPayload,
    ) -> Result<OpaResponse<Payment>> {
        payment_auth::capture_payment_authorization(&self.client, req).await
    }

    /// Releases the blocked amount.
    pub async fn revert_payment_authorization(
        &self,
        req: &RevertPaymentAuthorizationPayload,
    ) -> Result<OpaResponse<RevertedPaymentResponse>> {
        payment_auth::revert_payment_authorization(&self.client, req).await
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

    pub async fn create_topup_qr_code(
        &self,
        req: &CreateTopupQrCodePayload,
    ) -> Result<OpaResponse<TopupQrCodeResponse>> {
        wallet::create_topup_qr_code(&self.client, req).await
    }

    pub async fn get_topup_details(
        &self,
        merchant_topup_id: &str,
    ) -> Result<OpaResponse<TopupQrCodeDetails>> {
        wallet::get_topup_details(&self.client, merchant_topup_id).await
    }

    pub async fn delete_topup_qr_code(&self, code_id: &str) -> Result<ResultInfo> {
        wallet::delete_topup_qr_code(&self.client, code_id).await
    }

    pub async fn get_user_wallet_balance(
        &self,
        req: &GetUserWalletBalancePayload,
    ) -> Result<OpaResponse<UserWalletBalance>> {
        wallet::get_user_wallet_balance(&self.client, req).await
    }

    pub async fn check_user_wallet_balance(
        &self,
        req: &CheckUserWalletBalancePayload,
    ) -> Result<OpaResponse<CheckUserWalletBalance>> {
        wallet::check_user_wallet_balance(&self.client, req).await
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
