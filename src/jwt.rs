//! Decoding of the authorization response token.
//!
//! After the account link flow PayPay redirects the user back with a
//! `responseToken` query parameter. It is an HS256 JWT signed with the API
//! key secret whose audience is the merchant ID.

use crate::credentials::Credentials;
use crate::errors::{OpaError, Result};
use crate::types::UserAuthorizeResult;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Only algorithm PayPay signs response tokens with.
pub const ALGORITHM: &str = "HS256";

/// Decoded claims of an authorization response token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResponseToken {
    /// Merchant ID the token was issued for (`aud`)
    pub audience: String,

    /// Issuer (`iss`)
    pub issuer: String,

    /// Expiry as a Unix timestamp (`exp`), 0 when absent
    pub expires_at: i64,

    /// Whether the user granted the authorization
    pub result: UserAuthorizeResult,

    pub profile_identifier: String,

    /// Nonce sent when the account link QR code was created
    pub nonce: String,

    pub user_authorization_id: String,

    /// Reference ID sent when the account link QR code was created
    pub reference_id: String,
}

#[derive(Deserialize)]
struct Header {
    alg: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    #[serde(default)]
    aud: String,
    #[serde(default)]
    iss: String,
    #[serde(default)]
    exp: i64,
    #[serde(default)]
    iat: i64,
    #[serde(default)]
    nbf: i64,
    result: Option<UserAuthorizeResult>,
    #[serde(default)]
    profile_identifier: String,
    #[serde(default)]
    nonce: String,
    #[serde(default)]
    user_authorization_id: String,
    #[serde(default)]
    reference_id: String,
}

impl From<Claims> for AuthorizationResponseToken {
    fn from(claims: Claims) -> Self {
        Self {
            audience: claims.aud,
            issuer: claims.iss,
            expires_at: claims.exp,
            result: claims.result.unwrap_or(UserAuthorizeResult::Unknown),
            profile_identifier: claims.profile_identifier,
            nonce: claims.nonce,
            user_authorization_id: claims.user_authorization_id,
            reference_id: claims.reference_id,
        }
    }
}

/// Verifies and decodes an authorization response token.
///
/// The signature is checked with the API key secret of `creds`, and the
/// audience must equal its merchant ID. A token whose `exp` has passed is
/// reported as [`OpaError::TokenExpired`], which still carries the decoded
/// claims. A token with `iat` or `nbf` in the future is rejected as
/// [`OpaError::InvalidToken`].
pub fn decode_authorization_response_token(
    creds: &Credentials,
    token: &str,
) -> Result<AuthorizationResponseToken> {
    let mut segments = token.split('.');
    let (header_segment, payload, signature) = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(h), Some(p), Some(s), None) => (h, p, s),
        _ => {
            return Err(OpaError::InvalidToken(
                "token contains an invalid number of segments".to_string(),
            ))
        }
    };

    let header: Header = serde_json::from_slice(&decode_segment(header_segment)?)
        .map_err(|e| OpaError::InvalidToken(e.to_string()))?;
    if header.alg != ALGORITHM {
        return Err(OpaError::InvalidToken(format!(
            "signing method {} is invalid",
            header.alg
        )));
    }

    let signature = decode_segment(signature)?;
    let mut mac = HmacSha256::new_from_slice(creds.api_key_secret().as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(header_segment.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| OpaError::InvalidToken("signature is invalid".to_string()))?;

    let claims: Claims = serde_json::from_slice(&decode_segment(payload)?)
        .map_err(|e| OpaError::InvalidToken(e.to_string()))?;
    let (issued_at, not_before) = (claims.iat, claims.nbf);
    let token = AuthorizationResponseToken::from(claims);

    if token.audience != creds.merchant_id() {
        return Err(OpaError::AudienceMismatch {
            expected: creds.merchant_id().to_string(),
            actual: token.audience,
        });
    }

    let now = chrono::Utc::now().timestamp();
    if token.expires_at != 0 && token.expires_at <= now {
        tracing::debug!(exp = token.expires_at, "authorization response token expired");
        return Err(OpaError::TokenExpired(Box::new(token)));
    }
    if issued_at > now {
        return Err(OpaError::InvalidToken("token used before issued".to_string()));
    }
    if not_before > now {
        return Err(OpaError::InvalidToken("token is not valid yet".to_string()));
    }

    Ok(token)
}

fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| OpaError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Environment;
    use serde_json::json;

    const SECRET: &str = "API_KEY_SECRET";

    fn creds() -> Credentials {
        Credentials::new(Environment::Sandbox, "API_KEY", SECRET, "MERCHANT_ID")
    }

    fn encode(header: &serde_json::Value, claims: &serde_json::Value, secret: &str) -> String {
        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(claims.to_string())
        );
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(signing_input.as_bytes());
        format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
        )
    }

    fn hs256() -> serde_json::Value {
        json!({ "alg": "HS256", "typ": "JWT" })
    }

    fn claims(aud: &str, exp: i64) -> serde_json::Value {
        json!({
            "aud": aud,
            "iss": "paypay.ne.jp",
            "exp": exp,
            "result": "succeeded",
            "profileIdentifier": "*********5678",
            "nonce": "n0nce",
            "userAuthorizationId": "U1",
            "referenceId": "ref-1"
        })
    }

    fn future() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_decode_valid_token() {
        let exp = future();
        let token = encode(&hs256(), &claims("MERCHANT_ID", exp), SECRET);

        let decoded = decode_authorization_response_token(&creds(), &token).unwrap();
        assert_eq!(
            decoded,
            AuthorizationResponseToken {
                audience: "MERCHANT_ID".to_string(),
                issuer: "paypay.ne.jp".to_string(),
                expires_at: exp,
                result: UserAuthorizeResult::Succeeded,
                profile_identifier: "*********5678".to_string(),
                nonce: "n0nce".to_string(),
                user_authorization_id: "U1".to_string(),
                reference_id: "ref-1".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_secret() {
        let token = encode(&hs256(), &claims("MERCHANT_ID", future()), "other");
        assert!(matches!(
            decode_authorization_response_token(&creds(), &token),
            Err(OpaError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_tampered_payload() {
        let token = encode(&hs256(), &claims("MERCHANT_ID", future()), SECRET);
        let parts: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(claims("OTHER", future()).to_string());
        let tampered = format!("{}.{}.{}", parts[0], forged, parts[2]);

        assert!(matches!(
            decode_authorization_response_token(&creds(), &tampered),
            Err(OpaError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_rejects_other_algorithms() {
        let header = json!({ "alg": "none" });
        let token = encode(&header, &claims("MERCHANT_ID", future()), SECRET);

        let err = decode_authorization_response_token(&creds(), &token).unwrap_err();
        assert!(err.to_string().contains("signing method none"));
    }

    #[test]
    fn test_malformed_token() {
        for token in ["", "a.b", "a.b.c.d", "!!.??.**"] {
            assert!(matches!(
                decode_authorization_response_token(&creds(), token),
                Err(OpaError::InvalidToken(_))
            ));
        }
    }

    #[test]
    fn test_audience_mismatch() {
        let token = encode(&hs256(), &claims("SOMEONE_ELSE", future()), SECRET);

        match decode_authorization_response_token(&creds(), &token) {
            Err(OpaError::AudienceMismatch { expected, actual }) => {
                assert_eq!(expected, "MERCHANT_ID");
                assert_eq!(actual, "SOMEONE_ELSE");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_carries_claims() {
        let token = encode(&hs256(), &claims("MERCHANT_ID", 1_000), SECRET);

        match decode_authorization_response_token(&creds(), &token) {
            Err(OpaError::TokenExpired(decoded)) => {
                assert_eq!(decoded.user_authorization_id, "U1");
                assert_eq!(decoded.expires_at, 1_000);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_issued_in_the_future() {
        let mut claims = claims("MERCHANT_ID", future());
        claims["iat"] = json!(future());
        let token = encode(&hs256(), &claims, SECRET);

        let err = decode_authorization_response_token(&creds(), &token).unwrap_err();
        assert!(matches!(err, OpaError::InvalidToken(_)));
        assert!(err.to_string().contains("used before issued"));
    }

    #[test]
    fn test_not_valid_yet() {
        let mut claims = claims("MERCHANT_ID", future());
        claims["nbf"] = json!(future());
        let token = encode(&hs256(), &claims, SECRET);

        let err = decode_authorization_response_token(&creds(), &token).unwrap_err();
        assert!(matches!(err, OpaError::InvalidToken(_)));
        assert!(err.to_string().contains("not valid yet"));
    }

    #[test]
    fn test_past_iat_and_nbf_are_accepted() {
        let now = chrono::Utc::now().timestamp();
        let mut claims = claims("MERCHANT_ID", future());
        claims["iat"] = json!(now - 60);
        claims["nbf"] = json!(now - 60);
        let token = encode(&hs256(), &claims, SECRET);

        assert!(decode_authorization_response_token(&creds(), &token).is_ok());
    }

    #[test]
    fn test_missing_optional_claims() {
        let token = encode(&hs256(), &json!({ "aud": "MERCHANT_ID" }), SECRET);

        let decoded = decode_authorization_response_token(&creds(), &token).unwrap();
        assert_eq!(decoded.expires_at, 0);
        assert_eq!(decoded.result, UserAuthorizeResult::Unknown);
        assert!(decoded.nonce.is_empty());
    }
}
