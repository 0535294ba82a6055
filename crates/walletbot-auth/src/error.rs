/*
[INPUT]:  Error sources (key parsing, signing, token decoding, configuration)
[OUTPUT]: Structured error types for credential issuance
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for walletbot authentication
///
/// Webhook verification never produces one of these; a rejected webhook is a
/// plain `false`.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Private key input could not be parsed or imported
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// The signing primitive rejected the operation
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    /// A compact token could not be split or decoded
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Check if the error was caused by the supplied private key
    pub fn is_key_error(&self) -> bool {
        matches!(self, AuthError::InvalidKeyMaterial(_))
    }

    pub(crate) fn invalid_key(message: impl Into<String>) -> Self {
        AuthError::InvalidKeyMaterial(message.into())
    }

    /// Raw key decoded to the wrong number of bytes
    pub(crate) fn key_length(expected: usize, actual: usize) -> Self {
        AuthError::InvalidKeyMaterial(format!(
            "expected {expected} key bytes, got {actual}"
        ))
    }

    pub(crate) fn signing(message: impl Into<String>) -> Self {
        AuthError::SigningFailure(message.into())
    }
}

/// Result type alias for walletbot auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_key_error() {
        assert!(AuthError::invalid_key("bad pem").is_key_error());
        assert!(AuthError::key_length(64, 32).is_key_error());
        assert!(!AuthError::signing("rejected").is_key_error());
        assert!(!AuthError::Config("missing".to_string()).is_key_error());
    }

    #[test]
    fn test_key_length_message() {
        let err = AuthError::key_length(64, 31);
        assert!(matches!(err, AuthError::InvalidKeyMaterial(_)));
        assert_eq!(
            err.to_string(),
            "Invalid key material: expected 64 key bytes, got 31"
        );
    }
}
