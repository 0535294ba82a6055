/*
[INPUT]:  Issuer identity values (defaults or deserialized config)
[OUTPUT]: Immutable issuer configuration and fixed protocol constants
[POS]:    Configuration layer - passed explicitly into issuer functions
[UPDATE]: When the API audience or platform identity changes
*/

use serde::{Deserialize, Serialize};

/// Lifetime of every issued token, in seconds
pub const TOKEN_LIFETIME_SECS: i64 = 120;

/// Maximum allowed skew between a webhook timestamp and the verifier clock
pub const WEBHOOK_FRESHNESS_WINDOW_SECS: i64 = 300;

const DEFAULT_AUDIENCE: &str = "cdp_service";
const DEFAULT_ISSUER: &str = "coinbase-cloud";

/// Identity values stamped into every token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssuerConfig {
    /// Service identifier placed in the single-element `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Platform identity placed in the `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            audience: default_audience(),
            issuer: default_issuer(),
        }
    }
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}
