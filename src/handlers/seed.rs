// handlers/seed.rs - POST /api/seed/{all,demo-tasks,demo-users}
//
// Each handler makes exactly one seeder call. Whether reseeding is safe is
// up to the seeder; nothing here adds a transaction or duplicate checks.

use axum::extract::State;

use crate::error::ApiError;
use crate::middleware::ApiMessage;
use crate::seed::SeedError;
use crate::state::AppState;

/// POST /api/seed/all
pub async fn seed_all(State(state): State<AppState>) -> Result<ApiMessage, ApiError> {
    state
        .seeder
        .seed_all()
        .await
        .map_err(|e| seed_failure("all data", e, "Failed to seed all data"))?;

    Ok(ApiMessage("All data seeded successfully"))
}

/// POST /api/seed/demo-tasks
pub async fn seed_demo_tasks(State(state): State<AppState>) -> Result<ApiMessage, ApiError> {
    state
        .seeder
        .seed_demo_tasks()
        .await
        .map_err(|e| seed_failure("demo tasks", e, "Failed to seed demo tasks"))?;

    Ok(ApiMessage("Demo tasks seeded successfully"))
}

/// POST /api/seed/demo-users
pub async fn seed_demo_users(State(state): State<AppState>) -> Result<ApiMessage, ApiError> {
    state
        .seeder
        .seed_demo_users()
        .await
        .map_err(|e| seed_failure("demo users", e, "Failed to seed demo users"))?;

    Ok(ApiMessage("Demo users seeded successfully"))
}

fn seed_failure(what: &str, err: SeedError, message: &'static str) -> ApiError {
    tracing::error!("Error seeding {}: {}", what, err);
    ApiError::internal_server_error(message)
}
