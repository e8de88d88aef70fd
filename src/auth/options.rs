use std::sync::Arc;

use serde::Serialize;

use super::callbacks::{AuthCallbacks, RoleCallbacks};
use super::provider::{AuthProvider, Credentials, CredentialsProvider};
use super::session::Session;
use super::token::{SessionToken, TokenCodec};
use super::AuthError;
use crate::config::AppConfig;
use crate::database::UserRepository;

/// Where session state lives. Only stateless tokens are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStrategy {
    Jwt,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionConfig {
    pub strategy: SessionStrategy,
    pub max_age_hours: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPages {
    pub sign_in: String,
    pub sign_up: String,
}

/// Result of a successful sign-in
#[derive(Debug, Clone, Serialize)]
pub struct SignIn {
    pub token: String,
    pub session: Session,
}

/// The auth configuration: adapter, providers, session strategy, callbacks
/// and page routes.
pub struct AuthOptions {
    adapter: Arc<dyn UserRepository>,
    providers: Vec<Arc<dyn AuthProvider>>,
    session: SessionConfig,
    callbacks: Arc<dyn AuthCallbacks>,
    pages: AuthPages,
    codec: TokenCodec,
}

impl AuthOptions {
    /// Options bound to `adapter` with the credentials provider and the
    /// id/role callbacks registered
    pub fn new(config: &AppConfig, adapter: Arc<dyn UserRepository>) -> Self {
        let providers: Vec<Arc<dyn AuthProvider>> = vec![Arc::new(CredentialsProvider::new(adapter.clone()))];

        Self {
            adapter,
            providers,
            session: SessionConfig {
                strategy: SessionStrategy::Jwt,
                max_age_hours: config.security.jwt_expiry_hours,
            },
            callbacks: Arc::new(RoleCallbacks),
            pages: AuthPages {
                sign_in: config.auth.sign_in.clone(),
                sign_up: config.auth.sign_up.clone(),
            },
            codec: TokenCodec::new(config.security.jwt_secret.clone(), config.security.jwt_expiry_hours),
        }
    }

    pub fn adapter(&self) -> &Arc<dyn UserRepository> {
        &self.adapter
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn pages(&self) -> &AuthPages {
        &self.pages
    }

    pub fn provider_ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    fn provider(&self, id: &str) -> Option<&Arc<dyn AuthProvider>> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Authorize through `provider_id`, mint a token and project its session
    pub async fn sign_in(&self, provider_id: &str, credentials: &Credentials) -> Result<SignIn, AuthError> {
        let provider = self
            .provider(provider_id)
            .ok_or_else(|| AuthError::UnknownProvider(provider_id.to_string()))?;

        let user = provider
            .authorize(credentials)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let mut token = SessionToken::new(user.id.clone(), self.codec.lifetime());
        token.name = user.name.clone();
        token.email = user.email.clone();
        let token = self.callbacks.on_token_issue(token, Some(&user));

        let encoded = self.codec.encode(&token)?;
        let session = self.project(&token);

        Ok(SignIn {
            token: encoded,
            session,
        })
    }

    /// Verify a bearer token and project it onto a session
    pub fn session_from_token(&self, token: &str) -> Result<Session, AuthError> {
        let token = self.codec.decode(token)?;
        // Subsequent reads run the issue hook without a user
        let token = self.callbacks.on_token_issue(token, None);
        Ok(self.project(&token))
    }

    fn project(&self, token: &SessionToken) -> Session {
        self.callbacks
            .on_session_projection(Session::from_token(token), Some(token))
    }
}
