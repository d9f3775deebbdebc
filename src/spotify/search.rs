use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::config::settings::SpotifyConfig;
use crate::error::ProxyError;
use crate::observability::metrics::get_metrics;
use crate::spotify::types::{SearchResponse, Track};

/// Catalog search client: forwards an escaped mood string as a
/// track-type search and maps the result items into `Track` records.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    search_url: String,
    limit: u32,
}

impl SearchClient {
    pub fn new(client: Client, spotify: &SpotifyConfig) -> Self {
        Self {
            client,
            search_url: spotify.search_url(),
            limit: spotify.search_limit,
        }
    }

    /// The mood is used verbatim, URL-escaped; no further validation.
    fn query_url(&self, mood: &str) -> String {
        format!(
            "{}?q={}&type=track&limit={}",
            self.search_url,
            urlencoding::encode(mood),
            self.limit
        )
    }

    /// Search the catalog for tracks matching a mood.
    ///
    /// An absent `tracks.items` block is a valid empty result, not an
    /// error. Items come back in provider order, never re-sorted.
    pub async fn search_tracks(&self, mood: &str, bearer: &str) -> Result<Vec<Track>, ProxyError> {
        let metrics = get_metrics().await;
        let start = Instant::now();

        let url = self.query_url(mood);
        debug!("search request: {}", url);

        let response = self.client.get(&url).bearer_auth(bearer).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::Upstream { status, body });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        metrics
            .search_duration
            .observe(start.elapsed().as_secs_f64());

        let items = parsed.tracks.map(|page| page.items).unwrap_or_default();
        Ok(items.into_iter().map(Track::from).collect())
    }
}
