use chrono::Utc;

/// Access token holding the opaque value and computed expiration
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: i64, // UNIX timestamp
}

impl AccessToken {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// Derive the expiry from the provider-declared lifetime at the
    /// moment of issuance. A token is never stored without an expiry.
    pub fn issued_now(value: String, expires_in_seconds: i64) -> Self {
        Self {
            value,
            expires_at: Utc::now().timestamp() + expires_in_seconds,
        }
    }

    /// Expiry check against the local clock at the instant of the call.
    pub fn is_valid(&self) -> bool {
        Utc::now().timestamp() < self.expires_at
    }
}
