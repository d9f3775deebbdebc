use http::StatusCode;
use thiserror::Error;

/// Failure kinds at the proxy's component boundaries.
///
/// Every upstream failure is logged with detail server-side and
/// collapsed to an opaque client-facing error by the HTTP layer.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The identity provider refused or could not complete a token refresh.
    #[error("token refresh rejected by provider ({status}): {body}")]
    Auth { status: StatusCode, body: String },

    /// The provider answered 2xx but the token payload misses a required field.
    #[error("token response missing required field '{field}'")]
    MalformedToken { field: &'static str },

    /// The catalog API returned a non-2xx status for a search request.
    #[error("catalog search failed ({status}): {body}")]
    Upstream { status: StatusCode, body: String },

    /// The catalog API answered 2xx with a body that is not valid JSON.
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport-level failure (DNS, TLS, timeout) before any status arrived.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProxyError {
    /// Auth-side failures, malformed token payloads included.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ProxyError::Auth { .. } | ProxyError::MalformedToken { .. }
        )
    }
}
