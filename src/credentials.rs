//! Credentials and target environment for PayPay API requests.

use crate::errors::{OpaError, Result};
use std::fmt;
use std::str::FromStr;

/// Environment variable holding the target environment name or base URL.
pub const ENV_ENVIRONMENT: &str = "PAYPAYOPA_ENV";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "PAYPAYOPA_API_KEY";
/// Environment variable holding the API key secret.
pub const ENV_API_KEY_SECRET: &str = "PAYPAYOPA_API_KEY_SECRET";
/// Environment variable holding the merchant ID.
pub const ENV_MERCHANT_ID: &str = "PAYPAYOPA_MERCHANT_ID";

/// Destination of the requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    /// `https://api.paypay.ne.jp`
    Production,
    /// `https://stg-api.paypay.ne.jp`
    Staging,
    /// `https://stg-api.sandbox.paypay.ne.jp`
    Sandbox,
    /// Any other base URL, e.g. a local mock of the API.
    Custom(String),
}

impl Environment {
    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        match self {
            Environment::Production => "https://api.paypay.ne.jp",
            Environment::Staging => "https://stg-api.paypay.ne.jp",
            Environment::Sandbox => "https://stg-api.sandbox.paypay.ne.jp",
            Environment::Custom(url) => url,
        }
    }
}

impl FromStr for Environment {
    type Err = OpaError;

    /// Accepts `production`, `staging`, `sandbox` (case-insensitive) or an
    /// `http(s)://` base URL.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" | "stg" => Ok(Environment::Staging),
            "sandbox" => Ok(Environment::Sandbox),
            _ if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Environment::Custom(s.trim_end_matches('/').to_string()))
            }
            _ => Err(OpaError::ConfigError(format!("unknown environment: {}", s))),
        }
    }
}

/// API credentials issued by PayPay for Developers.
#[derive(Clone)]
pub struct Credentials {
    env: Environment,
    api_key: String,
    api_key_secret: String,
    merchant_id: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    ///
    /// # Arguments
    ///
    /// * `env` - Where to send the requests
    /// * `api_key` - API key created in PayPay for Developers
    /// * `api_key_secret` - Secret key created in PayPay for Developers
    /// * `merchant_id` - Merchant ID; pass an empty string to omit the
    ///   `X-ASSUME-MERCHANT` header
    ///
    /// # Examples
    ///
    /// ```
    /// use paypayopa::credentials::{Credentials, Environment};
    ///
    /// let creds = Credentials::new(
    ///     Environment::Sandbox,
    ///     "API_KEY",
    ///     "API_KEY_SECRET",
    ///     "MERCHANT_ID",
    /// );
    /// assert_eq!(creds.merchant_id(), "MERCHANT_ID");
    /// ```
    pub fn new(
        env: Environment,
        api_key: impl Into<String>,
        api_key_secret: impl Into<String>,
        merchant_id: impl Into<String>,
    ) -> Self {
        Self {
            env,
            api_key: api_key.into(),
            api_key_secret: api_key_secret.into(),
            merchant_id: merchant_id.into(),
        }
    }

    /// Loads credentials from `PAYPAYOPA_*` environment variables.
    ///
    /// `PAYPAYOPA_ENV` defaults to the sandbox and `PAYPAYOPA_MERCHANT_ID`
    /// may be unset; the key and secret are required.
    pub fn from_env() -> Result<Self> {
        let env = match std::env::var(ENV_ENVIRONMENT) {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Sandbox,
        };

        let api_key = required_var(ENV_API_KEY)?;
        let api_key_secret = required_var(ENV_API_KEY_SECRET)?;
        let merchant_id = std::env::var(ENV_MERCHANT_ID).unwrap_or_default();

        Ok(Self::new(env, api_key, api_key_secret, merchant_id))
    }

    /// Target environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// API key secret. Used as HMAC key material only.
    pub fn api_key_secret(&self) -> &str {
        &self.api_key_secret
    }

    /// Merchant ID, empty when not configured.
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("env", &self.env)
            .field("api_key", &self.api_key)
            .field("api_key_secret", &"<redacted>")
            .field("merchant_id", &self.merchant_id)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(OpaError::ConfigError(format!("{} is not set", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://api.paypay.ne.jp");
        assert_eq!(Environment::Staging.base_url(), "https://stg-api.paypay.ne.jp");
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://stg-api.sandbox.paypay.ne.jp"
        );
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!(
            "http://127.0.0.1:8080/".parse::<Environment>().unwrap(),
            Environment::Custom("http://127.0.0.1:8080".to_string())
        );
        assert!(matches!(
            "mars".parse::<Environment>(),
            Err(OpaError::ConfigError(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new(Environment::Sandbox, "KEY", "TOP_SECRET", "");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("KEY"));
        assert!(!debug.contains("TOP_SECRET"));
    }
}
