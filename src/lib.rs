//! # Mood Proxy Service
//!
//! Forwards a user-supplied mood word to the Spotify catalog search API
//! and returns a compact track list, authenticating server-to-API calls
//! with a single cached OAuth2 access token obtained through
//! refresh-token exchanges.
//!
//! Modules:
//! - `config` — runtime settings and application credentials
//! - `cache` — single-slot access-token cache
//! - `spotify` — token refresh and catalog search clients
//! - `server` — HTTP surface of the proxy
//! - `authorize` — one-time interactive authorization flow
//! - `observability` — Prometheus metrics

pub mod authorize;
pub mod cache;
pub mod config;
pub mod error;
pub mod observability;
pub mod server;
pub mod spotify;
pub mod tests;
pub mod utils;
