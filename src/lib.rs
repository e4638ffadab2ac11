//! # paypayopa-rs
//!
//! A typed Rust client for the [PayPay Open Payment API](https://developer.paypay.ne.jp/).
//!
//! Every request is signed with PayPay's HMAC scheme (see [`signer`]) and
//! every endpoint has a typed request payload and response. Endpoints are
//! grouped into facades matching PayPay's products.
//!
//! ## Features
//!
//! - **Request signing**: `hmac OPA-Auth` headers computed per request, with a
//!   fresh nonce and timestamp
//! - **Products**: Web Payment, App Invoke, Dynamic QR, Native Payment,
//!   PreAuth & Capture, Continuous Payment and Request Money
//! - **Account linking**: account link QR codes and verification of the
//!   authorization response token
//! - **Webhooks**: typed notification payloads
//! - **Pluggable transport**: any [`client::Transport`] can be signed and used
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypayopa::api::qrcode::CreateQrCodePayload;
//! use paypayopa::credentials::{Credentials, Environment};
//! use paypayopa::scenarios::WebPayment;
//! use paypayopa::types::{MoneyAmount, RedirectType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::new(
//!     Environment::Sandbox,
//!     "YOUR_API_KEY",
//!     "YOUR_API_KEY_SECRET",
//!     "YOUR_MERCHANT_ID",
//! );
//! let web_payment = WebPayment::new(creds)?;
//!
//! let response = web_payment
//!     .create_qr_code(&CreateQrCodePayload {
//!         merchant_payment_id: "order-0001".to_string(),
//!         amount: MoneyAmount::jpy(1000),
//!         requested_at: chrono::Utc::now().timestamp(),
//!         redirect_type: Some(RedirectType::WebLink),
//!         redirect_url: Some("https://example.com/thanks".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! match response.data {
//!     Some(code) => println!("pay at {}", code.url),
//!     None => println!("rejected: {}", response.result_info.code),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Results and errors
//!
//! A call returns `Err` only when the request could not be sent or its
//! response could not be read. Anything PayPay answers, including 4xx and
//! 5xx, comes back as [`types::OpaResponse`] whose
//! [`result_info`](types::OpaResponse::result_info) carries the HTTP status
//! and PayPay's result code.
//!
//! ## Environments
//!
//! - Production: `https://api.paypay.ne.jp`
//! - Staging: `https://stg-api.paypay.ne.jp`
//! - Sandbox: `https://stg-api.sandbox.paypay.ne.jp`
//!
//! ## References
//!
//! - [API reference](https://www.paypay.ne.jp/opa/doc/v1.0/webcashier)
//! - [Developer docs](https://developer.paypay.ne.jp/products/docs/webpayment)

#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod client;
pub mod credentials;
pub mod errors;
pub mod jwt;
pub mod scenarios;
pub mod signer;
pub mod types;
pub mod webhook;

// Re-export commonly used items
pub use client::OpaClient;
pub use credentials::{Credentials, Environment};
pub use errors::{OpaError, Result};
pub use jwt::{decode_authorization_response_token, AuthorizationResponseToken};
pub use scenarios::{
    AppInvoke, ContinuousPayment, DynamicQr, NativePayment, PreAuthCapture, RequestMoney,
    WebPayment,
};
pub use signer::{nonce, Signer};
pub use types::{MoneyAmount, OpaResponse, ResultInfo};
