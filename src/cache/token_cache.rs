use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::token::AccessToken;

/// Single-slot token cache: one process-wide access token, overwritten
/// wholesale on refresh. Lives only in memory, lost on restart.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<AccessToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the cached token
    pub async fn set(&self, token: AccessToken) {
        let mut slot = self.inner.write().await;
        *slot = Some(token);
    }

    /// Get the token if it exists and is not expired
    pub async fn get(&self) -> Option<AccessToken> {
        let slot = self.inner.read().await;
        slot.clone().filter(|t| t.is_valid())
    }
}
