/*
[INPUT]:  Request method/URL, key identity and private key material
[OUTPUT]: Compact signed tokens and decoded token contents
[POS]:    Token layer - outbound API authentication
[UPDATE]: When token claims or signing flow change
*/

pub mod claims;
pub mod issuer;

pub use claims::{TokenClaims, TokenHeader, decode_unverified, request_uri};
pub use issuer::{TokenIssuer, issue};
