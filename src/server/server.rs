use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use reqwest::Client;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::credentials::Credentials;
use crate::config::settings::{MetricsConfig, ServerConfig, SpotifyConfig};
use crate::observability::metrics::{get_metrics, Metrics};
use crate::observability::routes::MetricsState;
use crate::server::routes;
use crate::spotify::search::SearchClient;
use crate::spotify::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub search: SearchClient,
    pub metrics_state: MetricsState,
}

impl AppState {
    pub fn new(
        metrics: &Metrics,
        spotify: &SpotifyConfig,
        credentials: &Credentials,
        refresh_token: String,
    ) -> Result<Self> {
        // one shared client; explicit deadline on every upstream call
        let client = Client::builder()
            .timeout(Duration::from_secs(spotify.request_timeout_seconds))
            .build()?;

        Ok(Self {
            tokens: Arc::new(TokenService::new(
                client.clone(),
                spotify,
                credentials,
                refresh_token,
            )),
            search: SearchClient::new(client, spotify),
            metrics_state: MetricsState::new(metrics.registry.clone()),
        })
    }
}

pub fn router(metrics_config: &MetricsConfig, state: AppState) -> Router {
    // browser clients call the proxy cross-origin
    Router::new()
        .merge(routes::router())
        .merge(state.metrics_state.router(metrics_config))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the proxy server on the configured address.
pub async fn start(
    server_config: &ServerConfig,
    metrics_config: &MetricsConfig,
    spotify: &SpotifyConfig,
    credentials: &Credentials,
    refresh_token: String,
) -> Result<()> {
    let metrics = get_metrics().await;
    let state = AppState::new(metrics, spotify, credentials, refresh_token)?;
    let app = router(metrics_config, state);

    let bind_addr = server_config.bind_addr();
    info!("listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    metrics.up.set(1);
    axum::serve(listener, app).await?;

    Ok(())
}
