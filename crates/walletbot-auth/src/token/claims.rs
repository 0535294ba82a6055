/*
[INPUT]:  Algorithm, key identity, request method/URL and issue time
[OUTPUT]: Serializable token header and registered claims
[POS]:    Token layer - JWS header and payload model
[UPDATE]: When claim names or the token lifetime change
*/

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{IssuerConfig, TOKEN_LIFETIME_SECS};
use crate::error::{AuthError, Result};
use crate::key::Algorithm;

/// Protected header of an issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: Algorithm,
    /// Key identity, same value as the `sub` claim
    pub kid: String,
    /// Fresh UUIDv4 per token
    pub nonce: String,
}

impl TokenHeader {
    /// Build a header with a freshly generated nonce
    pub fn new(alg: Algorithm, key_identity: &str) -> Self {
        Self {
            alg,
            kid: key_identity.to_string(),
            nonce: Uuid::new_v4().to_string(),
        }
    }
}

/// Registered claims of an issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub aud: Vec<String>,
    /// `"<METHOD> <URL>"` the token is bound to
    pub uri: String,
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(
        config: &IssuerConfig,
        method: &str,
        url: &str,
        key_identity: &str,
        issued_at: i64,
    ) -> Result<Self> {
        let exp = issued_at.checked_add(TOKEN_LIFETIME_SECS).ok_or_else(|| {
            AuthError::signing(format!("token expiry overflows for iat {issued_at}"))
        })?;

        Ok(Self {
            aud: vec![config.audience.clone()],
            uri: request_uri(method, url),
            sub: key_identity.to_string(),
            iss: config.issuer.clone(),
            iat: issued_at,
            nbf: issued_at,
            exp,
        })
    }
}

/// The `uri` claim value: method as supplied, one space, URL
pub fn request_uri(method: &str, url: &str) -> String {
    format!("{method} {url}")
}

/// Decode header and claims of a compact token without checking its signature
pub fn decode_unverified(token: &str) -> Result<(TokenHeader, TokenClaims)> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [header_b64, claims_b64, signature_b64] = segments.as_slice() else {
        return Err(AuthError::MalformedToken(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    };
    if signature_b64.is_empty() {
        return Err(AuthError::MalformedToken("empty signature segment".to_string()));
    }

    let header = decode_segment(header_b64, "header")?;
    let claims = decode_segment(claims_b64, "payload")?;
    Ok((header, claims))
}

fn decode_segment<T: DeserializeOwned>(segment: &str, name: &str) -> Result<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AuthError::MalformedToken(format!("invalid {name} base64: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::MalformedToken(format!("invalid {name} JSON: {e}")))
}
