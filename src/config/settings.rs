use clap::Args;

/// ================================
/// Listener settings
/// ================================
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address the service listens on
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// ================================
/// Upstream provider settings
/// ================================
#[derive(Debug, Clone, Args)]
pub struct SpotifyConfig {
    /// Identity provider base URL (token endpoint lives under /api/token)
    #[arg(
        long,
        env = "SPOTIFY_ACCOUNTS_URL",
        default_value = "https://accounts.spotify.com"
    )]
    pub accounts_url: String,

    /// Catalog API base URL
    #[arg(long, env = "SPOTIFY_API_URL", default_value = "https://api.spotify.com")]
    pub api_url: String,

    /// Fixed number of tracks requested per search
    #[arg(long, env = "SEARCH_LIMIT", default_value_t = 5)]
    pub search_limit: u32,

    /// Timeout applied to every upstream request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS", default_value_t = 5)]
    pub request_timeout_seconds: u64,
}

impl SpotifyConfig {
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url)
    }

    pub fn authorize_url(&self) -> String {
        format!("{}/authorize", self.accounts_url)
    }

    pub fn search_url(&self) -> String {
        format!("{}/v1/search", self.api_url)
    }
}

/// ================================
/// Metrics endpoint settings
/// ================================
#[derive(Debug, Clone, Args)]
pub struct MetricsConfig {
    /// Expose a Prometheus scrape endpoint on the proxy server
    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = false)]
    pub is_enabled: bool,

    #[arg(long, env = "METRICS_PATH", default_value = "/metrics")]
    pub path: String,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
