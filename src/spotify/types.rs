use serde::{Deserialize, Serialize};

/// Token endpoint response.
///
/// Both fields are optional so a 2xx answer with a hollow body is
/// rejected on ingress instead of blowing up later in the cache.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
}

/// Authorization-code exchange response shown to the operator during
/// the one-time `authorize` flow.
#[derive(Debug, Deserialize)]
pub struct AuthorizationTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// `GET /v1/search` response, reduced to the fields the proxy reads.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
pub struct TrackItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub album: AlbumRef,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

/// Normalized track record returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub name: String,
    /// Comma-joined artist display names
    pub artists: String,
    /// External playable link
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<TrackItem> for Track {
    fn from(item: TrackItem) -> Self {
        let artists = item
            .artists
            .into_iter()
            .map(|a| a.name)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: item.name,
            artists,
            url: item.external_urls.spotify,
            image: item.album.images.into_iter().next().map(|i| i.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn track_mapping_joins_artists_and_takes_first_image() {
        let item: TrackItem = serde_json::from_value(json!({
            "name": "Good Vibrations",
            "artists": [{"name": "The Beach Boys"}, {"name": "Someone Else"}],
            "external_urls": {"spotify": "https://open.spotify.com/track/abc"},
            "album": {"images": [{"url": "https://img/1"}, {"url": "https://img/2"}]}
        }))
        .unwrap();

        let track = Track::from(item);
        assert_eq!(track.name, "Good Vibrations");
        assert_eq!(track.artists, "The Beach Boys, Someone Else");
        assert_eq!(track.url, "https://open.spotify.com/track/abc");
        assert_eq!(track.image.as_deref(), Some("https://img/1"));
    }

    #[test]
    fn track_with_empty_images_serializes_without_image_key() {
        let item: TrackItem = serde_json::from_value(json!({
            "name": "No Artwork",
            "artists": [{"name": "Solo"}],
            "external_urls": {"spotify": "https://open.spotify.com/track/xyz"},
            "album": {"images": []}
        }))
        .unwrap();

        let track = Track::from(item);
        assert!(track.image.is_none());

        let value = serde_json::to_value(&track).unwrap();
        assert!(value.get("image").is_none());
    }

    #[test]
    fn search_response_without_tracks_block_parses_to_none() {
        let parsed: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.tracks.is_none());

        let parsed: SearchResponse = serde_json::from_value(json!({"tracks": null})).unwrap();
        assert!(parsed.tracks.is_none());
    }
}
