/*
[INPUT]:  Inbound webhook headers, body bytes and signing secret
[OUTPUT]: Boolean verification result
[POS]:    Webhook layer - inbound request authentication
[UPDATE]: When webhook signing scheme changes
*/

pub mod verifier;

pub use verifier::{
    SIGNATURE_HEADER, TIMESTAMP_HEADER, WebhookVerifier, compute_signature, verify,
};
