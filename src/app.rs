use std::any::Any;

use axum::{
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyHeader, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(auth_routes())
        .merge(department_routes())
        .merge(seed_routes())
        // Global middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/signin", post(auth::sign_in))
        .route("/api/auth/session", get(auth::session_get))
}

fn department_routes() -> Router<AppState> {
    Router::new().route("/api/departments", get(handlers::departments::department_list))
}

fn seed_routes() -> Router<AppState> {
    use handlers::seed;

    Router::new()
        .route("/api/seed/all", post(seed::seed_all))
        .route("/api/seed/demo-tasks", post(seed::seed_demo_tasks))
        .route("/api/seed/demo-users", post(seed::seed_demo_users))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AnyHeader)
}

/// Panics anywhere in a handler surface as the generic 500 envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::internal_server_error("Internal server error").into_response()
}
