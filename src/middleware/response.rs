use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

/// Wrapper for API responses that adds the `{ success, data }` envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful 200 response
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Internal server error"
                    })),
                )
                    .into_response();
            }
        };

        (StatusCode::OK, Json(envelope(data_value))).into_response()
    }
}

fn envelope(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

/// `{ success: true, message }` for endpoints that only confirm an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMessage(pub &'static str);

impl IntoResponse for ApiMessage {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": self.0
            })),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
