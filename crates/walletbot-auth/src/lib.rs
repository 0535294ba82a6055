/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public walletbot-auth crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod error;
pub mod http;
pub mod key;
pub mod token;
pub mod webhook;

pub use config::{IssuerConfig, TOKEN_LIFETIME_SECS, WEBHOOK_FRESHNESS_WINDOW_SECS};
pub use error::{AuthError, Result};

// Re-export commonly used types from key
pub use key::{Algorithm, ClassifiedKey, Encoding, SigningKeyHandle, classify};

// Re-export commonly used types from token
pub use token::{TokenClaims, TokenHeader, TokenIssuer, decode_unverified, issue};

// Re-export commonly used types from webhook
pub use webhook::{WebhookVerifier, compute_signature, verify};

// Re-export commonly used types from http
pub use http::{ApiCredentials, RequestAuthorizer};
