/*
[INPUT]:  Raw private-key strings from configuration
[OUTPUT]: Classified key material and imported signing keys
[POS]:    Key layer - feeds the token issuer
[UPDATE]: When key formats or algorithm families change
*/

pub mod classifier;
pub mod handle;

pub use classifier::{ClassifiedKey, ED25519_KEYPAIR_LEN, Encoding, classify};
pub use handle::{Algorithm, SigningKeyHandle};
