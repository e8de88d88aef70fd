use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::auth::{Credentials, CredentialsProvider, SignIn};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

fn default_provider() -> String {
    CredentialsProvider::ID.to_string()
}

/// POST /api/auth/signin - Exchange credentials for a session token
///
/// Expected Input:
/// ```json
/// { "provider": "credentials", "email": "admin@demo.local", "password": "..." }
/// ```
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<SignIn> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected sign-in body: {}", e);
        ApiError::bad_request("Invalid request body")
    })?;

    let signed_in = state.auth.sign_in(&request.provider, &request.credentials).await?;
    Ok(ApiResponse::success(signed_in))
}
