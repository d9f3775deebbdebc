use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Args;

/// Spotify application credentials.
///
/// Supplied as flags or environment variables; clap refuses to start
/// the process when either is absent, so startup fails fast before any
/// socket is bound.
#[derive(Debug, Clone, Args)]
pub struct Credentials {
    /// Application client id
    #[arg(long, env = "CLIENT_ID")]
    pub client_id: String,

    /// Application client secret
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,
}

impl Credentials {
    /// `base64(id:secret)` for HTTP Basic auth on the token endpoint.
    pub fn basic_auth(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
    }
}
