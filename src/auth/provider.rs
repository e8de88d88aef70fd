use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use serde::Deserialize;

use super::callbacks::AuthUser;
use super::AuthError;
use crate::database::UserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A sign-in method registered on [`super::AuthOptions`]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// `Ok(None)` means the credentials were understood but rejected
    async fn authorize(&self, credentials: &Credentials) -> Result<Option<AuthUser>, AuthError>;
}

/// Email + password checked against the argon2 hash on the user record
pub struct CredentialsProvider {
    users: Arc<dyn UserRepository>,
}

impl CredentialsProvider {
    pub const ID: &'static str = "credentials";

    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthProvider for CredentialsProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    async fn authorize(&self, credentials: &Credentials) -> Result<Option<AuthUser>, AuthError> {
        let argon2 = Argon2::default();

        let Some(user) = self.users.find_by_email(&credentials.email).await? else {
            // Burn a hash so unknown emails cost the same as wrong passwords
            if let Ok(fake_salt) = SaltString::from_b64("A123B123C123D123E123F1") {
                let _ = std::hint::black_box(
                    argon2.hash_password(credentials.password.as_bytes(), fake_salt.as_salt()),
                );
            }
            tracing::info!("Sign-in rejected: no user with email '{}'", credentials.email);
            return Ok(None);
        };

        let Some(stored) = user.password_hash.as_deref() else {
            tracing::info!("Sign-in rejected: user ({}) has no password set", user.id);
            return Ok(None);
        };

        let parsed = PasswordHash::new(stored).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        match argon2.verify_password(credentials.password.as_bytes(), &parsed) {
            Ok(()) => {
                tracing::info!("User ({}) signed in with credentials", user.id);
                Ok(Some(AuthUser::from(user)))
            }
            Err(argon2::password_hash::Error::Password) => {
                tracing::info!("Sign-in rejected for user ({}): wrong password", user.id);
                Ok(None)
            }
            Err(e) => Err(AuthError::PasswordHash(e.to_string())),
        }
    }
}

/// Hash a password into a PHC string for storage
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}
