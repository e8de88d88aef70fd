use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// JWT claims carried between requests after sign-in.
///
/// `id` and `role` are filled by the token-issue callback and are frozen
/// copies of the user record at mint time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl SessionToken {
    pub fn new(sub: impl Into<String>, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            id: None,
            role: None,
            name: None,
            email: None,
            iat: now.timestamp(),
            exp: now
                .checked_add_signed(lifetime)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
                .timestamp(),
        }
    }
}

/// Lifetime used when the configured hours do not fit a `Duration`
pub const DEFAULT_LIFETIME_HOURS: i64 = 24;

/// HS256 signing and verification of [`SessionToken`]s
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    lifetime: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl Into<String>, expiry_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            lifetime: i64::try_from(expiry_hours)
                .ok()
                .and_then(Duration::try_hours)
                .unwrap_or_else(|| Duration::hours(DEFAULT_LIFETIME_HOURS)),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn encode(&self, token: &SessionToken) -> Result<String, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        Ok(encode(&Header::default(), token, &key)?)
    }

    pub fn decode(&self, token: &str) -> Result<SessionToken, AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let key = DecodingKey::from_secret(self.secret.as_bytes());
        decode::<SessionToken>(token, &key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
