/*
[INPUT]:  Signature/timestamp headers, raw request body, shared signing secret, clock
[OUTPUT]: Accept/reject decision for inbound webhooks
[POS]:    Webhook layer - gates inbound requests before any business logic
[UPDATE]: When the signature version, header names, or freshness window change
*/

use std::fmt;

use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::HeaderMap;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::WEBHOOK_FRESHNESS_WINDOW_SECS;
use crate::error::{AuthError, Result};

/// Header carrying `v0=<hex hmac>`
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Header carrying the decimal epoch-seconds request timestamp
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

const SIGNATURE_VERSION: &str = "v0";

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected signature header value
///
/// Format: `"v0=" + hex(HMAC-SHA256(secret, "v0:{timestamp}:{body}"))`, with
/// the timestamp text and body bytes exactly as received.
pub fn compute_signature(shared_secret: &[u8], timestamp: &str, raw_body: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(shared_secret)
        .map_err(|_| AuthError::invalid_key("Invalid webhook signing secret"))?;
    mac.update(SIGNATURE_VERSION.as_bytes());
    mac.update(b":");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(raw_body);

    Ok(format!(
        "{SIGNATURE_VERSION}={}",
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Verify an inbound webhook
///
/// Returns `true` only when both headers are present, the timestamp is within
/// the freshness window of `now`, and the signature matches. Every failure is
/// the same `false`.
pub fn verify(
    signature: Option<&str>,
    timestamp: Option<&str>,
    raw_body: &[u8],
    shared_secret: &[u8],
    now: i64,
) -> bool {
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        debug!("webhook rejected: missing signature or timestamp header");
        return false;
    };

    let Ok(sent_at) = timestamp.parse::<i64>() else {
        debug!("webhook rejected: timestamp is not an integer");
        return false;
    };

    let skew = now.abs_diff(sent_at);
    if skew > WEBHOOK_FRESHNESS_WINDOW_SECS.unsigned_abs() {
        debug!(skew, "webhook rejected: timestamp outside freshness window");
        return false;
    }

    let Ok(expected) = compute_signature(shared_secret, timestamp, raw_body) else {
        debug!("webhook rejected: unusable signing secret");
        return false;
    };

    let matches: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();
    if !matches {
        debug!("webhook rejected: signature mismatch");
    }
    matches
}

/// Webhook verifier bound to one signing secret
#[derive(Clone)]
pub struct WebhookVerifier {
    signing_secret: Zeroizing<Vec<u8>>,
}

impl WebhookVerifier {
    pub fn new(signing_secret: impl AsRef<[u8]>) -> Self {
        Self {
            signing_secret: Zeroizing::new(signing_secret.as_ref().to_vec()),
        }
    }

    /// Verify explicit header values against `now` (epoch seconds)
    pub fn verify(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        raw_body: &[u8],
        now: i64,
    ) -> bool {
        verify(signature, timestamp, raw_body, &self.signing_secret, now)
    }

    /// Verify using the signature and timestamp headers of a request
    ///
    /// Header values that are not valid UTF-8 count as absent.
    pub fn verify_headers(&self, headers: &HeaderMap, raw_body: &[u8], now: i64) -> bool {
        let signature = header_str(headers, SIGNATURE_HEADER);
        let timestamp = header_str(headers, TIMESTAMP_HEADER);
        self.verify(signature, timestamp, raw_body, now)
    }

    /// Verify request headers against the system clock
    pub fn verify_now(&self, headers: &HeaderMap, raw_body: &[u8]) -> bool {
        self.verify_headers(headers, raw_body, Utc::now().timestamp())
    }
}

impl fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("signing_secret", &"<redacted>")
            .finish()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
