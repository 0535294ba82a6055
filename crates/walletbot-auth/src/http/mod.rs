/*
[INPUT]:  API credentials and outbound request targets
[OUTPUT]: Authorized reqwest request builders
[POS]:    HTTP layer - outbound request authentication
[UPDATE]: When adding new auth headers
*/

pub mod authorize;

pub use authorize::{ApiCredentials, RequestAuthorizer, WALLET_AUTH_HEADER};
pub use reqwest::{Method, Url};
