use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Department, User};

/// Department queries scoped to a workspace
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Active departments of `workspace_id`, ordered by name ascending
    async fn find_active_by_workspace(&self, workspace_id: &str) -> Result<Vec<Department>, DatabaseError>;
}

/// User lookups backing the auth adapter
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;
}

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(database: &DatabaseManager) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn find_active_by_workspace(&self, workspace_id: &str) -> Result<Vec<Department>, DatabaseError> {
        let query = r#"
            SELECT id, name, description, is_active, workspace_id, created_at, updated_at
            FROM departments
            WHERE workspace_id = $1
            AND is_active = true
            ORDER BY name ASC
        "#;

        let departments = sqlx::query_as::<_, Department>(query)
            .bind(workspace_id)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} departments for workspace '{}'", departments.len(), workspace_id);
        Ok(departments)
    }
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(database: &DatabaseManager) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let query = r#"
            SELECT id, email, name, role, password_hash, workspace_id
            FROM users
            WHERE lower(email) = lower($1)
        "#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
