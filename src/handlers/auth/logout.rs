use axum::{extract::State, http::HeaderMap};

use crate::middleware::{extract_bearer_token, ApiMessage};
use crate::state::AppState;

/// POST /api/auth/logout - Acknowledge a logout
///
/// The request body is ignored. Sessions are stateless tokens and there is
/// no revocation store, so nothing is invalidated here: the client drops
/// its token and the token stays valid until it expires. No audit entry is
/// written either.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiMessage {
    let session = extract_bearer_token(&headers).and_then(|token| state.auth.session_from_token(token));

    match session {
        Ok(session) => tracing::info!(
            "Logout requested by user {}",
            session.user.id.as_deref().unwrap_or("<unknown>")
        ),
        Err(e) => tracing::debug!("Logout requested without a valid session: {}", e),
    }

    ApiMessage("Logout successful")
}
