use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::token::SessionToken;

/// Session object handed to clients. Derived from the token on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// Base session before callbacks run: profile fields and expiry only
    pub fn from_token(token: &SessionToken) -> Self {
        let expires = Utc
            .timestamp_opt(token.exp, 0)
            .single()
            .unwrap_or_else(Utc::now);

        Self {
            user: SessionUser {
                id: None,
                role: None,
                name: token.name.clone(),
                email: token.email.clone(),
            },
            expires,
        }
    }
}
