//! Example Web Payment flow against the PayPay sandbox.
//!
//! Creates a payment QR code, prints its URL, then deletes it.
//!
//! Run with:
//! ```bash
//! cargo run --example web_payment
//! ```
//!
//! Environment variables (a `.env` file is read if present):
//! - PAYPAYOPA_API_KEY: API key issued by PayPay for Developers
//! - PAYPAYOPA_API_KEY_SECRET: API key secret
//! - PAYPAYOPA_MERCHANT_ID: Merchant ID (optional)
//! - PAYPAYOPA_ENV: `sandbox` (default), `staging`, `production` or a base URL

use anyhow::Context;
use paypayopa::api::qrcode::CreateQrCodePayload;
use paypayopa::types::{MerchantOrderItem, MoneyAmount, RedirectType};
use paypayopa::{nonce, Credentials, WebPayment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let creds = Credentials::from_env().context("loading PayPay credentials")?;
    println!("PayPay Web Payment example");
    println!("   Environment: {}", creds.env().base_url());
    println!();

    let web_payment = WebPayment::new(creds)?;
    let merchant_payment_id = format!("demo-{}", nonce(16));

    let response = web_payment
        .create_qr_code(&CreateQrCodePayload {
            merchant_payment_id: merchant_payment_id.clone(),
            amount: MoneyAmount::jpy(1000),
            order_description: Some("Example order".to_string()),
            order_items: vec![MerchantOrderItem {
                name: "Coffee".to_string(),
                quantity: 2,
                unit_price: Some(MoneyAmount::jpy(500)),
                ..Default::default()
            }],
            requested_at: chrono::Utc::now().timestamp(),
            redirect_type: Some(RedirectType::WebLink),
            redirect_url: Some("https://example.com/orders/complete".to_string()),
            ..Default::default()
        })
        .await?;

    let Some(code) = response.data else {
        anyhow::bail!(
            "QR code rejected: {} {} ({})",
            response.result_info.status_code,
            response.result_info.code,
            response.result_info.message
        );
    };

    println!("QR code created for {}", merchant_payment_id);
    println!("   URL:       {}", code.url);
    println!("   Deep link: {}", code.deep_link);
    println!();

    let details = web_payment.get_payment_details(&merchant_payment_id).await?;
    println!("Payment lookup: {}", details.result_info.code);

    let info = web_payment.delete_qr_code(&code.code_id).await?;
    println!("QR code deleted: {}", info.code);

    Ok(())
}
