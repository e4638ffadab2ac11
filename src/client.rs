//! HTTP client for the PayPay API.
//!
//! Requests flow through a [`Transport`]. The default stack is
//! [`Authenticated`] wrapping a [`reqwest::Client`]: every outgoing request is
//! signed with a fresh [`Signer`] right before it is handed to the inner
//! transport. Any other transport (a proxy, a recording test double) can be
//! wrapped the same way with [`OpaClient::with_transport`].

use crate::credentials::Credentials;
use crate::errors::{OpaError, Result};
use crate::signer::{self, Signer};
use crate::types::{OpaResponse, ResultInfo};
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request, Response, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Longest time any request may take. PayPay recommends 30s or more, so
/// this is doubled.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(60);

/// Header carrying the merchant ID when one is configured.
pub const HEADER_ASSUME_MERCHANT: &str = "x-assume-merchant";

/// Header selecting the language of cashback messages.
pub const HEADER_LANG: &str = "lang";

/// Something that can send a request and return its response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request.
    async fn execute(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request).await
    }
}

/// Transport decorator that signs each request before forwarding it.
///
/// Sets `Content-Type`, `Authorization` and, when a merchant ID is
/// configured, `X-ASSUME-MERCHANT`. The signed URI is the API path: any path
/// prefix of the environment base URL is stripped before signing.
pub struct Authenticated<T> {
    creds: Credentials,
    base_path: String,
    next: T,
}

impl<T: Transport> Authenticated<T> {
    /// Wraps `next` so that every request it sends is signed with `creds`.
    pub fn new(creds: Credentials, next: T) -> Self {
        let base_path = Url::parse(creds.env().base_url())
            .map(|url| base_path(&url).to_string())
            .unwrap_or_default();

        Self {
            creds,
            base_path,
            next,
        }
    }

    /// Signs `request` in place.
    pub fn authenticate(&self, request: &mut Request) -> Result<()> {
        let path = request.url().path();
        let uri = path.strip_prefix(self.base_path.as_str()).unwrap_or(path);

        let signer = Signer::new(
            self.creds.api_key(),
            self.creds.api_key_secret(),
            request.method().as_str(),
            uri,
            signer::request_body(request)?,
        );

        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(signer.content_type()));
        headers.insert(AUTHORIZATION, header_value(&signer.sign())?);

        let merchant_id = self.creds.merchant_id();
        if !merchant_id.is_empty() {
            headers.insert(
                HeaderName::from_static(HEADER_ASSUME_MERCHANT),
                header_value(merchant_id)?,
            );
        }

        Ok(())
    }
}

#[async_trait]
impl<T: Transport> Transport for Authenticated<T> {
    async fn execute(&self, mut request: Request) -> Result<Response> {
        self.authenticate(&mut request)?;
        self.next.execute(request).await
    }
}

/// Path of the base URL without its trailing `/`, empty for a bare host.
fn base_path(url: &Url) -> &str {
    url.path().trim_end_matches('/')
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| OpaError::InvalidHeader(e.to_string()))
}

/// Root object of every API response.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "resultInfo", default)]
    result_info: ResultInfo,

    #[serde(default)]
    data: Option<Value>,
}

/// Client handling requests to and responses from the PayPay API.
#[derive(Clone)]
pub struct OpaClient {
    creds: Credentials,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for OpaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpaClient")
            .field("creds", &self.creds)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl OpaClient {
    /// Creates a client with a default [`reqwest::Client`] limited to
    /// [`MAX_TIMEOUT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use paypayopa::client::OpaClient;
    /// use paypayopa::credentials::{Credentials, Environment};
    ///
    /// let creds = Credentials::new(Environment::Sandbox, "API_KEY", "API_KEY_SECRET", "");
    /// let client = OpaClient::new(creds).unwrap();
    /// assert_eq!(client.base_url().as_str(), "https://stg-api.sandbox.paypay.ne.jp/");
    /// ```
    pub fn new(creds: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(MAX_TIMEOUT).build()?;
        Self::with_http_client(creds, http)
    }

    /// Creates a client sending requests through a pre-configured
    /// [`reqwest::Client`].
    pub fn with_http_client(creds: Credentials, http: reqwest::Client) -> Result<Self> {
        Self::with_transport(creds, Arc::new(http))
    }

    /// Creates a client sending requests through `transport`, wrapped in
    /// [`Authenticated`].
    pub fn with_transport(creds: Credentials, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = Url::parse(creds.env().base_url())?;
        let transport = Arc::new(Authenticated::new(creds.clone(), transport));

        Ok(Self {
            creds,
            base_url,
            transport,
        })
    }

    /// Credentials used to sign requests.
    pub fn credentials(&self) -> &Credentials {
        &self.creds
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a request for `path` with optional query parameters and JSON body.
    ///
    /// Most callers go through the scenario facades. Use this together with
    /// [`OpaClient::execute`] when a request needs extra configuration.
    pub fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Request> {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{}", base_path(&self.base_url), path));
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut request = Request::new(method, url);
        if let Some(body) = body {
            *request.body_mut() = Some(serde_json::to_vec(body)?.into());
        }

        Ok(request)
    }

    /// Sends a request and decodes the response envelope.
    ///
    /// HTTP errors reported by the API are not turned into `Err`: inspect
    /// [`OpaResponse::result_info`]. `data` is decoded only on success.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        mut request: Request,
        timeout: Duration,
    ) -> Result<OpaResponse<T>> {
        *request.timeout_mut() = Some(timeout.min(MAX_TIMEOUT));

        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %path, error = %e, "paypay request failed");
            map_timeout(e)
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| map_timeout(OpaError::HttpError(e)))?;

        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        let mut result_info = envelope.result_info;
        result_info.status_code = status;

        tracing::debug!(
            %method,
            %path,
            status,
            code = %result_info.code,
            "paypay response"
        );

        let data = match envelope.data {
            Some(value) if result_info.is_success() && !value.is_null() => {
                Some(serde_json::from_value(value)?)
            }
            _ => None,
        };

        Ok(OpaResponse { result_info, data })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<OpaResponse<T>> {
        let request = self.request::<()>(Method::GET, path, query, None)?;
        self.execute(request, timeout).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
        timeout: Duration,
    ) -> Result<OpaResponse<T>> {
        let request = self.request(Method::POST, path, query, Some(body))?;
        self.execute(request, timeout).await
    }

    pub(crate) async fn delete(&self, path: &str, timeout: Duration) -> Result<ResultInfo> {
        let request = self.request::<()>(Method::DELETE, path, &[], None)?;
        let response = self.execute::<IgnoredAny>(request, timeout).await?;
        Ok(response.result_info)
    }
}

fn map_timeout(err: OpaError) -> OpaError {
    match err {
        OpaError::HttpError(e) if e.is_timeout() => OpaError::TimeoutExceeded,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Environment;
    use crate::signer::{CONTENT_TYPE_EMPTY, CONTENT_TYPE_JSON};
    use serde_json::json;

    fn creds(merchant_id: &str) -> Credentials {
        Credentials::new(Environment::Sandbox, "API_KEY", "API_KEY_SECRET", merchant_id)
    }

    #[test]
    fn test_request_building() {
        let client = OpaClient::new(creds("MERCHANT_ID")).unwrap();
        let request = client
            .request(
                Method::POST,
                "/v2/payments",
                &[("agreeSimilarTransaction", "true")],
                Some(&json!({ "merchantPaymentId": "M1" })),
            )
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://stg-api.sandbox.paypay.ne.jp/v2/payments?agreeSimilarTransaction=true"
        );
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()).unwrap(),
            br#"{"merchantPaymentId":"M1"}"#
        );
    }

    #[test]
    fn test_query_is_encoded() {
        let client = OpaClient::new(creds("")).unwrap();
        let request = client
            .request::<()>(
                Method::GET,
                "/v2/user/authorizations",
                &[("userAuthorizationId", "a b&c")],
                None,
            )
            .unwrap();

        assert_eq!(request.url().query(), Some("userAuthorizationId=a+b%26c"));
        assert!(request.body().is_none());
    }

    #[test]
    fn test_authenticate_sets_headers() {
        let auth = Authenticated::new(creds("MERCHANT_ID"), reqwest::Client::new());
        let url = Url::parse("https://example.com/v2/codes").unwrap();
        let mut request = Request::new(Method::POST, url);
        *request.body_mut() = Some(br#"{"a":1}"#.to_vec().into());

        auth.authenticate(&mut request).unwrap();

        let headers = request.headers();
        assert_eq!(headers[CONTENT_TYPE], CONTENT_TYPE_JSON);
        assert_eq!(headers[HEADER_ASSUME_MERCHANT], "MERCHANT_ID");

        let authorization = headers[AUTHORIZATION].to_str().unwrap();
        assert!(authorization.starts_with("hmac OPA-Auth:API_KEY:"));
        assert_eq!(authorization.split(':').count(), 6);
    }

    #[test]
    fn test_authenticate_without_merchant() {
        let auth = Authenticated::new(creds(""), reqwest::Client::new());
        let url = Url::parse("https://example.com/v2/payments/abc").unwrap();
        let mut request = Request::new(Method::GET, url);

        auth.authenticate(&mut request).unwrap();

        let headers = request.headers();
        assert_eq!(headers[CONTENT_TYPE], CONTENT_TYPE_EMPTY);
        assert!(headers.get(HEADER_ASSUME_MERCHANT).is_none());
        assert!(headers[AUTHORIZATION].to_str().unwrap().ends_with(":empty"));
    }

    #[test]
    fn test_base_url_path_prefix_is_kept_but_not_signed() {
        let creds = Credentials::new(
            Environment::Custom("https://proxy.example/paypay".into()),
            "K",
            "S",
            "",
        );
        let client = OpaClient::new(creds.clone()).unwrap();
        let mut request = client
            .request::<()>(Method::GET, "/v2/payments/abc", &[], None)
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://proxy.example/paypay/v2/payments/abc"
        );

        let auth = Authenticated::new(creds, reqwest::Client::new());
        auth.authenticate(&mut request).unwrap();

        let authorization = request.headers()[AUTHORIZATION].to_str().unwrap();
        let fields: Vec<&str> = authorization.split(':').collect();
        let expected = Signer::new("K", "S", "GET", "/v2/payments/abc", b"")
            .with_nonce(fields[3])
            .with_epoch(fields[4].parse().unwrap());
        assert_eq!(authorization, expected.sign());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let creds = Credentials::new(
            Environment::Custom("https://proxy.example/paypay/".into()),
            "K",
            "S",
            "",
        );
        let client = OpaClient::new(creds).unwrap();
        let request = client
            .request::<()>(Method::GET, "/v2/codes", &[("a", "1")], None)
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://proxy.example/paypay/v2/codes?a=1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let creds = Credentials::new(Environment::Custom("not a url".into()), "K", "S", "");
        assert!(matches!(
            OpaClient::new(creds),
            Err(OpaError::UrlParseError(_))
        ));
    }
}
