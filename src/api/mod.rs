//! One function per PayPay API endpoint.
//!
//! Each function takes an [`OpaClient`](crate::client::OpaClient), sends a
//! single request with the endpoint's own timeout and returns the typed
//! result. The scenario facades in [`crate::scenarios`] are thin wrappers
//! over these functions.

pub mod payment;
pub mod payment_auth;
pub mod qrcode;
pub mod refund;
pub mod request_order;
pub mod user;
pub mod wallet;

use std::time::Duration;

/// Timeout of requests that create or change resources.
pub(crate) const TIMEOUT_WRITE: Duration = Duration::from_secs(30);

/// Timeout of lookups and cancellations.
pub(crate) const TIMEOUT_READ: Duration = Duration::from_secs(15);

/// Timeout of account link QR code creation.
pub(crate) const TIMEOUT_ACCOUNT_LINK: Duration = Duration::from_secs(10);
