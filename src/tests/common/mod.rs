// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;

use reqwest::Client;

use crate::config::credentials::Credentials;
use crate::config::settings::{MetricsConfig, SpotifyConfig};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Provider config pointed at stub servers.
pub fn stub_spotify_config(accounts_url: &str, api_url: &str) -> SpotifyConfig {
    SpotifyConfig {
        accounts_url: accounts_url.to_string(),
        api_url: api_url.to_string(),
        search_limit: 5,
        request_timeout_seconds: 5,
    }
}

pub fn stub_credentials() -> Credentials {
    Credentials {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
    }
}

pub fn metrics_disabled() -> MetricsConfig {
    MetricsConfig {
        is_enabled: false,
        path: "/metrics".to_string(),
    }
}
