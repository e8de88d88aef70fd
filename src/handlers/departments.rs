// handlers/departments.rs - GET /api/departments

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Deserialize;

use crate::database::Department;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DepartmentQuery {
    #[serde(rename = "workspaceId")]
    pub workspace_id: Option<String>,
}

/// GET /api/departments?workspaceId=... - Active departments of a workspace
///
/// ```json
/// { "success": true, "data": [{ "id": "...", "name": "Engineering", "isActive": true, ... }] }
/// ```
pub async fn department_list(
    State(state): State<AppState>,
    query: Result<Query<DepartmentQuery>, QueryRejection>,
) -> ApiResult<Vec<Department>> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected department query: {}", e);
        ApiError::bad_request("Workspace ID is required")
    })?;

    let workspace_id = query
        .workspace_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Workspace ID is required"))?;

    let departments = state
        .departments
        .find_active_by_workspace(&workspace_id)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching departments for workspace '{}': {}", workspace_id, e);
            ApiError::internal_server_error("Failed to fetch departments")
        })?;

    Ok(ApiResponse::success(departments))
}
