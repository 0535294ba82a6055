/*
[INPUT]:  HTTP method, absolute URL, key identity and private key string
[OUTPUT]: Compact signed bearer token (ES256 or EdDSA)
[POS]:    Token layer - per-call credential issuance for outbound API requests
[UPDATE]: When changing the token format, claims, or signing algorithms
*/

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use tracing::debug;

use crate::config::IssuerConfig;
use crate::error::{AuthError, Result};
use crate::key::{SigningKeyHandle, classify};
use crate::token::{TokenClaims, TokenHeader};

/// Issues short-lived bearer tokens for outbound API calls
///
/// Holds only immutable identity configuration. Key material is classified,
/// imported and dropped inside each call.
#[derive(Debug, Clone, Default)]
pub struct TokenIssuer {
    config: IssuerConfig,
}

impl TokenIssuer {
    /// Create an issuer with the given identity configuration
    pub fn new(config: IssuerConfig) -> Self {
        Self { config }
    }

    /// Get the issuer configuration
    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Issue a token for `"<method> <url>"` valid from now
    pub fn issue(
        &self,
        method: &str,
        url: &str,
        key_identity: &str,
        private_key: &str,
    ) -> Result<String> {
        self.issue_at(method, url, key_identity, private_key, Utc::now().timestamp())
    }

    /// Issue a token with an explicit `iat` in epoch seconds
    pub fn issue_at(
        &self,
        method: &str,
        url: &str,
        key_identity: &str,
        private_key: &str,
        issued_at: i64,
    ) -> Result<String> {
        let classified = classify(private_key)?;
        let signing_key = SigningKeyHandle::import(&classified)?;
        drop(classified);

        let header = TokenHeader::new(signing_key.algorithm(), key_identity);
        let claims = TokenClaims::new(&self.config, method, url, key_identity, issued_at)?;
        let token = sign_compact(&header, &claims, &signing_key)?;

        debug!(
            alg = %header.alg,
            kid = key_identity,
            uri = %claims.uri,
            exp = claims.exp,
            "issued api token"
        );
        Ok(token)
    }
}

/// Issue a token with the default issuer identity
pub fn issue(method: &str, url: &str, key_identity: &str, private_key: &str) -> Result<String> {
    TokenIssuer::default().issue(method, url, key_identity, private_key)
}

/// Format: `base64url(header).base64url(claims).base64url(signature)`
fn sign_compact(
    header: &TokenHeader,
    claims: &TokenClaims,
    signing_key: &SigningKeyHandle,
) -> Result<String> {
    let header_json = serde_json::to_vec(header)
        .map_err(|e| AuthError::signing(format!("Failed to serialize token header: {e}")))?;
    let claims_json = serde_json::to_vec(claims)
        .map_err(|e| AuthError::signing(format!("Failed to serialize token claims: {e}")))?;

    let mut signing_input = URL_SAFE_NO_PAD.encode(header_json);
    signing_input.push('.');
    signing_input.push_str(&URL_SAFE_NO_PAD.encode(claims_json));

    let signature = signing_key.sign(signing_input.as_bytes())?;

    let mut token = signing_input;
    token.push('.');
    token.push_str(&URL_SAFE_NO_PAD.encode(signature));
    Ok(token)
}
