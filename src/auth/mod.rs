//! Token-based authentication: the auth options object, its lifecycle
//! callbacks, the credentials provider and the JWT codec.
//!
//! Sessions are never stored server side. A token is minted once at sign-in
//! and every session read is a projection of that token.

pub mod callbacks;
pub mod options;
pub mod provider;
pub mod session;
pub mod token;

use thiserror::Error;

use crate::database::DatabaseError;

pub use callbacks::{AuthCallbacks, AuthUser, RoleCallbacks};
pub use options::{AuthOptions, AuthPages, SessionConfig, SessionStrategy, SignIn};
pub use provider::{hash_password, AuthProvider, Credentials, CredentialsProvider};
pub use session::{Session, SessionUser};
pub use token::{SessionToken, TokenCodec};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unknown auth provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing session token")]
    MissingToken,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("User store error: {0}")]
    Store(#[from] DatabaseError),
}
