use crate::api::payment::{
    self, CashbackInfoResponse, ConsultExpectedCashbackInfoPayload, CreatePaymentPayload,
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
use crate::jwt::{self, AuthorizationResponseToken};
use crate::types::{OpaResponse, Payment, Refund, ResultInfo};

/// Native Payment: the merchant charges a linked user's balance directly,
/// without the user scanning anything at payment time.
///
/// <https://developer.paypay.ne.jp/products/docs/nativepayment>
#[derive(Debug, Clone)]
pub struct NativePayment {
    client: OpaClient,
}

impl_constructors!(NativePayment);

impl NativePayment {
    /// Looks up the cashback a payment would earn before placing it.
    pub async fn consult_expected_cashback_info(
        &self,
        req: &ConsultExpectedCashbackInfoPayload,
    ) -> Result<OpaResponse<CashbackInfoResponse>> {
        payment::consult_expected_cashback_info(&self.client, req).await
    }

    /// Charges the user.
    pub async fn create_payment(&self, req: &CreatePaymentPayload) -> Result<OpaResponse<Payment>> {
        payment::create_payment(&self.client, req).await
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

    /// Starts linking a PayPay account to the merchant.
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

    /// Decodes the `responseToken` returned at the end of the account link
    /// flow.
    pub fn decode_response_token(&self, token: &str) -> Result<AuthorizationResponseToken> {
        jwt::decode_authorization_response_token(self.client.credentials(), token)
    }
}
