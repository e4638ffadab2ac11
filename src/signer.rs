//! HMAC request signing for the PayPay Open Payment API.
//!
//! Every request carries an `Authorization` header of the form
//!
//! ```text
//! hmac OPA-Auth:<apiKey>:<base64 HMAC-SHA256>:<nonce>:<epoch>:<content digest>
//! ```
//!
//! built in four steps:
//!
//! 1. **Content digest**: `base64(MD5(contentType ++ body))`, or the literal
//!    `empty` when there is no body.
//! 2. **MAC data**: `uri`, `method`, `nonce`, `epoch`, `contentType` and the
//!    digest joined with `\n`.
//! 3. **MAC**: `base64(HMAC-SHA256(apiKeySecret, macData))`.
//! 4. **Header**: `hmac OPA-Auth`, `apiKey`, MAC, `nonce`, `epoch` and the
//!    digest joined with `:`.
//!
//! The server recomputes the same value, so every byte matters.
//!
//! ## References
//!
//! - [HMAC auth](https://www.paypay.ne.jp/opa/doc/v1.0/webcashier#section/HMAC-auth)

use crate::errors::{OpaError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::Sha256;

/// `Content-Type` sent with a JSON body.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8;";

/// `Content-Type` and content digest used when the body is empty.
pub const CONTENT_TYPE_EMPTY: &str = "empty";

/// Prefix of the `Authorization` header value.
pub const AUTH_HEADER_PREFIX: &str = "hmac OPA-Auth";

/// Nonce length recommended by PayPay.
pub const RECOMMENDED_NONCE_LEN: usize = 8;

type HmacSha256 = Hmac<Sha256>;

/// Signing context for a single outgoing request.
///
/// Create one per request and drop it once the headers are set. The content
/// digest is computed once at construction.
///
/// # Examples
///
/// ```
/// use paypayopa::signer::Signer;
///
/// let signer = Signer::new("API_KEY", "API_KEY_SECRET", "GET", "/v2/payments/abc", b"");
/// assert_eq!(signer.content_type(), "empty");
///
/// let header = signer.sign();
/// assert!(header.starts_with("hmac OPA-Auth:API_KEY:"));
/// assert_eq!(header.split(':').count(), 6);
/// ```
#[derive(Clone)]
pub struct Signer {
    api_key: String,
    api_key_secret: String,
    method: String,
    uri: String,
    nonce: String,
    epoch: i64,
    content_type: &'static str,
    digest: String,
}

impl Signer {
    /// Creates a signing context, capturing the current time and a fresh nonce.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key
    /// * `api_key_secret` - API key secret (HMAC key)
    /// * `method` - HTTP verb of the request
    /// * `uri` - Path of the request URL, without host or query string
    /// * `body` - Raw request body, may be empty
    pub fn new(
        api_key: impl Into<String>,
        api_key_secret: impl Into<String>,
        method: impl Into<String>,
        uri: impl Into<String>,
        body: &[u8],
    ) -> Self {
        let content_type = content_type_for(body);

        Self {
            api_key: api_key.into(),
            api_key_secret: api_key_secret.into(),
            method: method.into(),
            uri: uri.into(),
            nonce: nonce(RECOMMENDED_NONCE_LEN),
            epoch: chrono::Utc::now().timestamp(),
            content_type,
            digest: content_digest(content_type, body),
        }
    }

    /// Creates a signing context from an outgoing request.
    ///
    /// The body is read through [`reqwest::Body::as_bytes`], which leaves it
    /// in place for transmission. Streaming bodies cannot be replayed and
    /// fail with [`OpaError::BodyRead`].
    pub fn from_request(
        api_key: impl Into<String>,
        api_key_secret: impl Into<String>,
        request: &reqwest::Request,
    ) -> Result<Self> {
        Ok(Self::new(
            api_key,
            api_key_secret,
            request.method().as_str(),
            request.url().path(),
            request_body(request)?,
        ))
    }

    /// Replaces the generated nonce.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }

    /// Replaces the captured timestamp (Unix seconds).
    pub fn with_epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Value for the `Content-Type` header: `empty` when the body is empty,
    /// otherwise `application/json;charset=UTF-8;`.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Nonce bound to this request.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Unix timestamp in seconds bound to this request.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Content digest (step 1).
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Step 2.
    fn mac_data(&self) -> String {
        let epoch = self.epoch.to_string();
        [
            self.uri.as_str(),
            self.method.as_str(),
            self.nonce.as_str(),
            epoch.as_str(),
            self.content_type,
            self.digest.as_str(),
        ]
        .join("\n")
    }

    /// Step 3.
    fn base64_hmac(&self) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_key_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(self.mac_data().as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Builds the `Authorization` header value (step 4).
    pub fn sign(&self) -> String {
        let epoch = self.epoch.to_string();
        [
            AUTH_HEADER_PREFIX,
            self.api_key.as_str(),
            self.base64_hmac().as_str(),
            self.nonce.as_str(),
            epoch.as_str(),
            self.digest.as_str(),
        ]
        .join(":")
    }
}

/// Borrows the body of `request` without consuming it. Streaming bodies
/// cannot be replayed and fail with [`OpaError::BodyRead`].
pub(crate) fn request_body(request: &reqwest::Request) -> Result<&[u8]> {
    match request.body() {
        None => Ok(&[]),
        Some(body) => body.as_bytes().ok_or_else(|| {
            OpaError::BodyRead("streaming request bodies cannot be signed".to_string())
        }),
    }
}

fn content_type_for(body: &[u8]) -> &'static str {
    if body.is_empty() {
        CONTENT_TYPE_EMPTY
    } else {
        CONTENT_TYPE_JSON
    }
}

/// Step 1. An empty body short-circuits to the literal `empty`, not to a
/// hash of the content type alone.
fn content_digest(content_type: &str, body: &[u8]) -> String {
    if body.is_empty() {
        return CONTENT_TYPE_EMPTY.to_string();
    }

    let mut hasher = Md5::new();
    hasher.update(content_type.as_bytes());
    hasher.update(body);
    BASE64.encode(hasher.finalize())
}

/// Generates a random string of `n` characters from `[a-zA-Z0-9]`.
///
/// Uses the thread-local generator, so concurrent callers never share state.
///
/// # Examples
///
/// ```
/// use paypayopa::signer::nonce;
///
/// let n = nonce(8);
/// assert_eq!(n.len(), 8);
/// assert!(n.chars().all(|c| c.is_ascii_alphanumeric()));
/// assert!(nonce(0).is_empty());
/// ```
pub fn nonce(n: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(n)
        .map(char::from)
        .collect()
}
