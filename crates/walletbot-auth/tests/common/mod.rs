/*
[INPUT]:  Test key requirements
[OUTPUT]: Shared key fixtures and token helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new key formats or fixtures
*/

//! Common test utilities for walletbot-auth tests

use base64::{Engine as _, engine::general_purpose::STANDARD, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::pkcs8::{EncodePrivateKey, LineEnding};
use rand::rngs::OsRng;

pub const KEY_NAME: &str = "organizations/6f8a/apiKeys/41c2";
#[allow(dead_code)]
pub const WALLETS_URL: &str = "https://api.cdp.coinbase.com/platform/v1/wallets";

/// PKCS#8 PEM for a fresh P-256 key
pub fn p256_pkcs8_pem() -> String {
    let secret = p256::SecretKey::random(&mut OsRng);
    secret.to_pkcs8_pem(LineEnding::LF).unwrap().to_string()
}

/// SEC1 PEM for a fresh P-256 key
#[allow(dead_code)]
pub fn p256_sec1_pem() -> String {
    let secret = p256::SecretKey::random(&mut OsRng);
    secret.to_sec1_pem(LineEnding::LF).unwrap().to_string()
}

/// Base64 of a fresh Ed25519 seed followed by its public key
pub fn ed25519_keypair_b64() -> String {
    let signing_key = ed25519_dalek::SigningKey::generate(&mut OsRng);
    STANDARD.encode(signing_key.to_keypair_bytes())
}

/// Split a compact token and decode the header and payload as JSON
#[allow(dead_code)]
pub fn decode_json_segments(token: &str) -> (serde_json::Value, serde_json::Value) {
    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3, "token must have 3 segments");
    let header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segments[0]).unwrap()).unwrap();
    let payload = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segments[1]).unwrap()).unwrap();
    (header, payload)
}
