use axum::{extract::State, http::HeaderMap};

use crate::auth::Session;
use crate::middleware::{extract_bearer_token, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/auth/session - Project the bearer token onto a session
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "user": { "id": "demo-user-admin", "role": "admin", "name": "Demo Admin", "email": "admin@demo.local" },
///     "expires": "2025-01-08T12:00:00Z"
///   }
/// }
/// ```
pub async fn session_get(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Session> {
    let token = extract_bearer_token(&headers)?;
    let session = state.auth.session_from_token(token)?;
    Ok(ApiResponse::success(session))
}
