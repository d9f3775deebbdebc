use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::token::AccessToken;
use crate::cache::token_cache::TokenCache;
use crate::config::credentials::Credentials;
use crate::config::settings::SpotifyConfig;
use crate::error::ProxyError;
use crate::observability::metrics::get_metrics;
use crate::spotify::types::TokenResponse;

/// Token-gated access to the provider: holds the single cached access
/// token and performs refresh-token exchanges when it is absent or
/// expired. Injected into the proxy as its only token entry point.
pub struct TokenService {
    client: Client,
    token_url: String,
    basic_auth: String,
    refresh_token: String,
    cache: TokenCache,
    /// One refresh in flight at a time; waiters re-check the slot.
    refresh_gate: Mutex<()>,
}

impl TokenService {
    pub fn new(
        client: Client,
        spotify: &SpotifyConfig,
        credentials: &Credentials,
        refresh_token: String,
    ) -> Self {
        Self {
            client,
            token_url: spotify.token_url(),
            basic_auth: credentials.basic_auth(),
            refresh_token,
            cache: TokenCache::new(),
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Return a bearer token valid at the time of the check.
    ///
    /// A still-valid cached token is served with zero network calls;
    /// otherwise a refresh exchange replaces the cache entry wholesale.
    /// A failed exchange leaves the previous entry untouched.
    pub async fn get_valid_token(&self) -> Result<String, ProxyError> {
        let metrics = get_metrics().await;

        if let Some(token) = self.cache.get().await {
            debug!("serving cached access token, expires_at={}", token.expires_at);
            metrics.token_cache_hits.inc();
            return Ok(token.value);
        }

        let _gate = self.refresh_gate.lock().await;

        // another caller may have finished a refresh while we waited
        if let Some(token) = self.cache.get().await {
            metrics.token_cache_hits.inc();
            return Ok(token.value);
        }

        metrics.token_refreshes.inc();
        let token = match self.refresh().await {
            Ok(token) => token,
            Err(err) => {
                metrics.token_refresh_failures.inc();
                return Err(err);
            }
        };

        info!("access token refreshed, valid until {}", token.expires_at);
        let value = token.value.clone();
        self.cache.set(token).await;
        Ok(value)
    }

    async fn refresh(&self) -> Result<AccessToken, ProxyError> {
        let response = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {}", self.basic_auth))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProxyError::Auth { status, body });
        }

        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|_| ProxyError::MalformedToken { field: "access_token" })?;
        let value = parsed
            .access_token
            .ok_or(ProxyError::MalformedToken { field: "access_token" })?;
        let expires_in = parsed
            .expires_in
            .ok_or(ProxyError::MalformedToken { field: "expires_in" })?;

        Ok(AccessToken::issued_now(value, expires_in))
    }
}
