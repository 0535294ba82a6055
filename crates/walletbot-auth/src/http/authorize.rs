/*
[INPUT]:  API credentials, HTTP method and URL, reqwest client
[OUTPUT]: Request builders carrying per-call bearer and wallet tokens
[POS]:    HTTP layer - decorates outbound custodial API requests
[UPDATE]: When auth header names or token binding rules change
*/

use std::fmt;

use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::token::TokenIssuer;

/// Header carrying the wallet-scoped token
pub const WALLET_AUTH_HEADER: &str = "x-wallet-auth";

/// Credentials for authenticated API requests
#[derive(Clone)]
pub struct ApiCredentials {
    key_name: String,
    private_key: Zeroizing<String>,
    wallet_secret: Option<Zeroizing<String>>,
}

impl ApiCredentials {
    /// Create credentials from an API key name and its private key string
    pub fn new(key_name: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            private_key: Zeroizing::new(private_key.into()),
            wallet_secret: None,
        }
    }

    /// Attach a wallet secret used to sign `X-Wallet-Auth` tokens
    pub fn with_wallet_secret(mut self, wallet_secret: impl Into<String>) -> Self {
        self.wallet_secret = Some(Zeroizing::new(wallet_secret.into()));
        self
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn has_wallet_secret(&self) -> bool {
        self.wallet_secret.is_some()
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key_name", &self.key_name)
            .field("private_key", &"<redacted>")
            .field("wallet_secret", &self.wallet_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Mints fresh tokens for each outbound request
#[derive(Debug, Clone)]
pub struct RequestAuthorizer {
    issuer: TokenIssuer,
    credentials: ApiCredentials,
}

impl RequestAuthorizer {
    pub fn new(issuer: TokenIssuer, credentials: ApiCredentials) -> Self {
        Self {
            issuer,
            credentials,
        }
    }

    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// Token for the `Authorization: Bearer` header
    pub fn bearer_token(&self, method: &Method, url: &Url) -> Result<String> {
        self.issuer.issue(
            method.as_str(),
            url.as_str(),
            &self.credentials.key_name,
            &self.credentials.private_key,
        )
    }

    /// Token for the `X-Wallet-Auth` header, if a wallet secret is configured
    pub fn wallet_token(&self, method: &Method, url: &Url) -> Result<Option<String>> {
        self.credentials
            .wallet_secret
            .as_ref()
            .map(|secret| {
                self.issuer.issue(
                    method.as_str(),
                    url.as_str(),
                    &self.credentials.key_name,
                    secret,
                )
            })
            .transpose()
    }

    /// Build a request whose tokens are bound to exactly `method` and `url`
    pub fn request(&self, client: &Client, method: Method, url: Url) -> Result<RequestBuilder> {
        let bearer = self.bearer_token(&method, &url)?;
        let wallet = self.wallet_token(&method, &url)?;

        debug!(
            method = %method,
            url = %url,
            wallet_auth = wallet.is_some(),
            "authorizing api request"
        );

        let mut builder = client.request(method, url).bearer_auth(bearer);
        if let Some(wallet) = wallet {
            builder = builder.header(WALLET_AUTH_HEADER, wallet);
        }
        Ok(builder)
    }
}
