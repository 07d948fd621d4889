use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims embedded in a session token.
///
/// Ephemeral by design: constructed at login, signed into the token string,
/// and discarded. The token itself is the only record of a session; no
/// server-side state is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject user id
    pub uid: i64,

    /// Subject email
    pub email: String,

    /// Application the token was issued for
    pub app_id: i64,

    /// Expiration (Unix timestamp), fixed at issuance as now + TTL
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a verified user against one application.
    ///
    /// The expiration is computed exactly once, here; claims are never
    /// mutated afterwards.
    pub fn new(uid: i64, email: impl Into<String>, app_id: i64, ttl: Duration) -> Self {
        let expiration = Utc::now() + ttl;

        Self {
            uid,
            email: email.into(),
            app_id,
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
