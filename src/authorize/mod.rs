//! One-time interactive authorization-code flow.
//!
//! Runs once per setup, not per request: serves a login link to the
//! provider's authorize endpoint, receives the redirect callback with
//! the authorization code, exchanges it for an access/refresh token
//! pair and displays both for manual copy into configuration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use http::StatusCode;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::credentials::Credentials;
use crate::config::settings::{ServerConfig, SpotifyConfig};
use crate::error::ProxyError;
use crate::spotify::types::AuthorizationTokens;

const SCOPES: &[&str] = &[
    "user-read-private",
    "user-read-email",
    "playlist-modify-public",
    "playlist-modify-private",
];

#[derive(Clone)]
pub struct AuthorizeState {
    client: Client,
    credentials: Credentials,
    redirect_uri: String,
    authorize_url: String,
    token_url: String,
}

impl AuthorizeState {
    pub fn new(
        spotify: &SpotifyConfig,
        credentials: Credentials,
        redirect_uri: String,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(spotify.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            credentials,
            redirect_uri,
            authorize_url: spotify.authorize_url(),
            token_url: spotify.token_url(),
        })
    }
}

pub fn router(state: Arc<AuthorizeState>) -> Router {
    Router::new()
        .route("/", get(login))
        .route("/callback", get(callback))
        .with_state(state)
}

/// Serve the login and callback pages until the operator stops the process.
pub async fn run(
    server_config: &ServerConfig,
    spotify: &SpotifyConfig,
    credentials: Credentials,
    redirect_uri: String,
) -> Result<()> {
    let state = Arc::new(AuthorizeState::new(spotify, credentials, redirect_uri)?);
    let app = router(state);

    let bind_addr = server_config.bind_addr();
    info!("open http://{} in a browser to authorize", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_auth_url(state: &AuthorizeState) -> String {
    format!(
        "{}?response_type=code&client_id={}&scope={}&redirect_uri={}&show_dialog=true",
        state.authorize_url,
        urlencoding::encode(&state.credentials.client_id),
        urlencoding::encode(&SCOPES.join(" ")),
        urlencoding::encode(&state.redirect_uri),
    )
}

async fn login(State(state): State<Arc<AuthorizeState>>) -> Html<String> {
    let auth_url = build_auth_url(&state);
    Html(format!(
        "<html>\
           <head><title>Spotify Auth</title></head>\
           <body style=\"font-family: sans-serif; text-align: center; padding: 2rem;\">\
             <h1>Spotify Authentication</h1>\
             <a href=\"{}\">Login with Spotify</a>\
           </body>\
         </html>",
        auth_url
    ))
}

async fn callback(
    State(state): State<Arc<AuthorizeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(provider_error) = params.get("error") {
        warn!("authorization refused by provider: {}", provider_error);
        return (
            StatusCode::BAD_REQUEST,
            Html(format!(
                "<h1>Authorization Failed</h1><p>{}</p>",
                provider_error
            )),
        )
            .into_response();
    }

    let Some(code) = params.get("code") else {
        return (
            StatusCode::BAD_REQUEST,
            Html("<h1>Missing authorization code.</h1>".to_string()),
        )
            .into_response();
    };

    match exchange_code(&state, code).await {
        Ok(tokens) => Html(format!(
            "<html>\
               <head><title>Auth Success</title></head>\
               <body style=\"font-family: sans-serif; padding: 2rem;\">\
                 <h1>Authentication Successful</h1>\
                 <p><strong>Access Token:</strong> (expires in {} seconds)</p>\
                 <pre>{}</pre>\
                 <p><strong>Refresh Token:</strong> copy into SPOTIFY_REFRESH_TOKEN</p>\
                 <pre>{}</pre>\
               </body>\
             </html>",
            tokens.expires_in, tokens.access_token, tokens.refresh_token
        ))
        .into_response(),
        Err(err) => {
            error!("token exchange failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Token Exchange Failed</h1><p>Check server logs for details.</p>".to_string()),
            )
                .into_response()
        }
    }
}

async fn exchange_code(state: &AuthorizeState, code: &str) -> Result<AuthorizationTokens, ProxyError> {
    let response = state
        .client
        .post(&state.token_url)
        .header(AUTHORIZATION, format!("Basic {}", state.credentials.basic_auth()))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", state.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ProxyError::Auth { status, body });
    }

    serde_json::from_str(&body).map_err(|_| ProxyError::MalformedToken {
        field: "refresh_token",
    })
}
