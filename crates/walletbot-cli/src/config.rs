/*
[INPUT]:  Optional YAML configuration file and environment variables
[OUTPUT]: Parsed CLI configuration with credentials and webhook secret
[POS]:    Configuration layer - operator credentials
[UPDATE]: When adding new configuration options or env variables
*/

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use walletbot_auth::{ApiCredentials, AuthError, IssuerConfig};

pub const ENV_API_KEY_NAME: &str = "COINBASE_API_KEY_NAME";
pub const ENV_API_KEY_PRIVATE_KEY: &str = "COINBASE_API_KEY_PRIVATE_KEY";
pub const ENV_WALLET_SECRET: &str = "COINBASE_WALLET_SECRET";
pub const ENV_SIGNING_SECRET: &str = "SLACK_SIGNING_SECRET";

/// Top-level configuration for the walletbot CLI
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key name, used as `kid` and `sub`
    #[serde(default)]
    pub api_key_name: Option<String>,
    /// API private key (PEM, base64 PKCS#8 or base64 raw Ed25519)
    #[serde(default)]
    pub api_key_private_key: Option<String>,
    /// Wallet secret for `X-Wallet-Auth` tokens
    #[serde(default)]
    pub wallet_secret: Option<String>,
    /// Webhook signing secret
    #[serde(default)]
    pub signing_secret: Option<String>,
    /// Token identity values
    #[serde(default)]
    pub issuer: IssuerConfig,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config YAML")?;
        Ok(config)
    }

    /// Load the optional file, then let environment variables override it
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Override fields from a variable lookup; empty values are ignored
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = lookup(ENV_API_KEY_NAME) {
            self.api_key_name = Some(value);
        }
        if let Some(value) = lookup(ENV_API_KEY_PRIVATE_KEY) {
            self.api_key_private_key = Some(value);
        }
        if let Some(value) = lookup(ENV_WALLET_SECRET) {
            self.wallet_secret = Some(value);
        }
        if let Some(value) = lookup(ENV_SIGNING_SECRET) {
            self.signing_secret = Some(value);
        }
    }

    /// API credentials, failing when the key name or private key is missing
    pub fn credentials(&self) -> Result<ApiCredentials, AuthError> {
        let key_name = self
            .api_key_name
            .as_deref()
            .ok_or_else(|| missing("api_key_name", ENV_API_KEY_NAME))?;
        let private_key = self
            .api_key_private_key
            .as_deref()
            .ok_or_else(|| missing("api_key_private_key", ENV_API_KEY_PRIVATE_KEY))?;

        let credentials = ApiCredentials::new(key_name, private_key);
        Ok(match self.wallet_secret.as_deref() {
            Some(secret) => credentials.with_wallet_secret(secret),
            None => credentials,
        })
    }

    pub fn signing_secret(&self) -> Result<&str, AuthError> {
        self.signing_secret
            .as_deref()
            .ok_or_else(|| missing("signing_secret", ENV_SIGNING_SECRET))
    }
}

fn missing(field: &str, env: &str) -> AuthError {
    AuthError::Config(format!("missing {field} (set it in the config file or {env})"))
}
