use crate::api::payment;
use crate::api::payment_auth::{
    self, CapturePaymentAuthorizationPayload, RevertPaymentAuthorizationPayload,
    RevertedPaymentResponse,
};
use crate::api::qrcode::{self, CreateQrCodePayload, QrCodeResponse};
use crate::api::refund::{self, RefundPaymentPayload};
use crate::client::OpaClient;
use crate::errors::Result;
use crate::types::{OpaResponse, Payment, Refund, ResultInfo};

/// Web Payment: the user pays by scanning a dynamic QR code on a web page,
/// or by following its link on a smartphone.
///
/// <https://developer.paypay.ne.jp/products/docs/webpayment>
#[derive(Debug, Clone)]
pub struct WebPayment {
    client: OpaClient,
}

/// App Invoke: the merchant app opens PayPay through the QR code deep link.
pub type AppInvoke = WebPayment;

/// Dynamic QR: a QR code generated per order, shown on a POS or screen.
pub type DynamicQr = WebPayment;

impl_constructors!(WebPayment);

impl WebPayment {
    /// Creates a payment QR code.
    pub async fn create_qr_code(
        &self,
        req: &CreateQrCodePayload,
    ) -> Result<OpaResponse<QrCodeResponse>> {
        qrcode::create_qr_code(&self.client, req).await
    }

    /// Deletes a payment QR code.
    pub async fn delete_qr_code(&self, code_id: &str) -> Result<ResultInfo> {
        qrcode::delete_qr_code(&self.client, code_id).await
    }

    /// Retrieves the payment made through a QR code.
    pub async fn get_payment_details(
        &self,
        merchant_payment_id: &str,
    ) -> Result<OpaResponse<Payment>> {
        qrcode::get_code_payment_details(&self.client, merchant_payment_id).await
    }

    /// Cancels a payment. Use this when the payment status is unknown,
    /// e.g. after a timeout.
    pub async fn cancel_payment(&self, merchant_payment_id: &str) -> Result<ResultInfo> {
        payment::cancel_payment(&self.client, merchant_payment_id).await
    }

    /// Captures a payment authorized through a QR code.
    pub async fn capture_payment_authorization(
        &self,
        req: &CapturePaymentAuthorizationPayload,
    ) -> Result<OpaResponse<Payment>> {
        payment_auth::capture_payment_authorization(&self.client, req).await
    }

    /// Reverts a payment authorized through a QR code.
    pub async fn revert_payment_authorization(
        &self,
        req: &RevertPaymentAuthorizationPayload,
    ) -> Result<OpaResponse<RevertedPaymentResponse>> {
        payment_auth::revert_payment_authorization(&self.client, req).await
    }

    /// Refunds a payment.
    pub async fn refund_payment(&self, req: &RefundPaymentPayload) -> Result<OpaResponse<Refund>> {
        refund::refund_payment(&self.client, req).await
    }

    /// Retrieves a refund.
    pub async fn get_refund_details(
        &self,
        merchant_refund_id: &str,
    ) -> Result<OpaResponse<Refund>> {
        refund::get_refund_details(&self.client, merchant_refund_id).await
    }
}
