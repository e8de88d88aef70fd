use serde::{Deserialize, Serialize};

use super::session::Session;
use super::token::SessionToken;
use crate::database::User;

/// The user record as seen by the token-issue hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub role: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            name: user.name,
            email: Some(user.email),
        }
    }
}

/// Hooks run at fixed points of the token lifecycle.
pub trait AuthCallbacks: Send + Sync {
    /// Runs whenever a token is written. `user` is only present on the
    /// initial sign-in.
    fn on_token_issue(&self, token: SessionToken, user: Option<&AuthUser>) -> SessionToken;

    /// Runs on every session read to shape what the client sees.
    fn on_session_projection(&self, session: Session, token: Option<&SessionToken>) -> Session;
}

/// Copies `id` and `role` from the user record onto the token, then from
/// the token onto the session user.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleCallbacks;

impl AuthCallbacks for RoleCallbacks {
    fn on_token_issue(&self, mut token: SessionToken, user: Option<&AuthUser>) -> SessionToken {
        if let Some(user) = user {
            token.id = Some(user.id.clone());
            token.role = Some(user.role.clone());
        }
        token
    }

    fn on_session_projection(&self, mut session: Session, token: Option<&SessionToken>) -> Session {
        if let Some(token) = token {
            if let Some(id) = &token.id {
                session.user.id = Some(id.clone());
            }
            if let Some(role) = &token.role {
                session.user.role = Some(role.clone());
            }
        }
        session
    }
}
