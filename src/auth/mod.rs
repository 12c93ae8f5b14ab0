//! Credential provider
//!
//! Supplies the two fixed header bundles used by the suite: a valid set
//! carrying the configured bearer token, and an invalid set carrying a token
//! guaranteed to be rejected server-side. Both are immutable once built and
//! injected into the client layer, never read from globals.

/// Accept header value for the Gist API
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// API version marker sent with every request
pub const API_VERSION: &str = "2022-11-28";

/// User-Agent sent with every request
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.3659.806 Safari/537.36";

/// Token that is syntactically valid but rejected by the service
const DUMMY_TOKEN: &str = "MY_DUMMY_TOKEN";

/// An immutable authentication header bundle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialSet {
    authorization: String,
}

impl CredentialSet {
    /// Headers carrying a working bearer token
    pub fn valid(token: impl AsRef<str>) -> Self {
        Self {
            authorization: format!("Bearer {}", token.as_ref()),
        }
    }

    /// Headers carrying a token guaranteed to fail authentication
    pub fn invalid() -> Self {
        Self {
            authorization: format!("Bearer {DUMMY_TOKEN}"),
        }
    }

    /// Header name/value pairs for one request
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Authorization".to_string(), self.authorization.clone()),
            ("Accept".to_string(), ACCEPT_GITHUB_JSON.to_string()),
            ("X-GitHub-Api-Version".to_string(), API_VERSION.to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ]
    }
}
