//! Facades grouping the endpoints used by each PayPay product.
//!
//! Every facade owns an [`OpaClient`](crate::client::OpaClient) and exposes
//! the operations its product needs. They are cheap to clone and share one
//! connection pool per underlying [`reqwest::Client`].

/// Implements the constructors shared by every facade.
macro_rules! impl_constructors {
    ($facade:ident) => {
        impl $facade {
            /// Creates the facade with a default HTTP client.
            pub fn new(creds: $crate::credentials::Credentials) -> $crate::errors::Result<Self> {
                Ok(Self::from_client($crate::client::OpaClient::new(creds)?))
            }

            /// Creates the facade sending requests through a pre-configured
            /// [`reqwest::Client`].
            pub fn with_http_client(
                creds: $crate::credentials::Credentials,
                http: reqwest::Client,
            ) -> $crate::errors::Result<Self> {
                Ok(Self::from_client(
                    $crate::client::OpaClient::with_http_client(creds, http)?,
                ))
            }

            /// Wraps an existing client.
            pub fn from_client(client: $crate::client::OpaClient) -> Self {
                Self { client }
            }

            /// Underlying client.
            pub fn client(&self) -> &$crate::client::OpaClient {
                &self.client
            }
        }
    };
}

mod continuous_payment;
mod native_payment;
mod preauth_capture;
mod request_money;
mod web_payment;

pub use continuous_payment::ContinuousPayment;
pub use native_payment::NativePayment;
pub use preauth_capture::PreAuthCapture;
pub use request_money::RequestMoney;
pub use web_payment::{AppInvoke, DynamicQr, WebPayment};
