use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::info;

use super::fixtures::{self, DEMO_WORKSPACE_ID};
use super::{SeedError, Seeder};
use crate::auth::hash_password;
use crate::database::DatabaseManager;

/// Writes the demo fixtures. Every insert is `ON CONFLICT DO NOTHING` with no
/// conflict target, so reseeding keeps whatever rows already exist, including
/// ones that only collide on `users.email` or `workspaces.slug`.
pub struct PgSeeder {
    pool: PgPool,
}

impl PgSeeder {
    pub fn new(database: &DatabaseManager) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }
}

#[async_trait]
impl Seeder for PgSeeder {
    async fn seed_all(&self) -> Result<(), SeedError> {
        let mut tx = self.pool.begin().await?;
        insert_workspace(&mut tx).await?;
        insert_departments(&mut tx).await?;
        insert_users(&mut tx).await?;
        insert_tasks(&mut tx).await?;
        tx.commit().await?;

        info!("Seeded all demo data into workspace '{}'", DEMO_WORKSPACE_ID);
        Ok(())
    }

    async fn seed_demo_tasks(&self) -> Result<(), SeedError> {
        let mut tx = self.pool.begin().await?;
        insert_workspace(&mut tx).await?;
        insert_tasks(&mut tx).await?;
        tx.commit().await?;

        info!("Seeded {} demo tasks", fixtures::TASKS.len());
        Ok(())
    }

    async fn seed_demo_users(&self) -> Result<(), SeedError> {
        let mut tx = self.pool.begin().await?;
        insert_workspace(&mut tx).await?;
        insert_users(&mut tx).await?;
        tx.commit().await?;

        info!("Seeded {} demo users", fixtures::USERS.len());
        Ok(())
    }
}

async fn insert_workspace(conn: &mut PgConnection) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO workspaces (id, name, slug, created_at, updated_at)
        VALUES ($1, $2, $3, now(), now())
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(DEMO_WORKSPACE_ID)
    .bind(fixtures::DEMO_WORKSPACE_NAME)
    .bind(fixtures::DEMO_WORKSPACE_SLUG)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn insert_departments(conn: &mut PgConnection) -> Result<(), SeedError> {
    for department in fixtures::DEPARTMENTS {
        sqlx::query(
            r#"
            INSERT INTO departments (id, name, description, is_active, workspace_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(department.id)
        .bind(department.name)
        .bind(department.description)
        .bind(department.is_active)
        .bind(DEMO_WORKSPACE_ID)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_users(conn: &mut PgConnection) -> Result<(), SeedError> {
    for user in fixtures::USERS {
        let password_hash = hash_password(fixtures::DEMO_PASSWORD)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, role, password_hash, workspace_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(user.email)
        .bind(user.name)
        .bind(user.role)
        .bind(password_hash)
        .bind(DEMO_WORKSPACE_ID)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn insert_tasks(conn: &mut PgConnection) -> Result<(), SeedError> {
    for task in fixtures::TASKS {
        // Assignee resolves to NULL when demo users have not been seeded
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, status, priority, workspace_id, assignee_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, (SELECT id FROM users WHERE email = $7), now(), now())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(task.id)
        .bind(task.title)
        .bind(task.description)
        .bind(task.status)
        .bind(task.priority)
        .bind(DEMO_WORKSPACE_ID)
        .bind(task.assignee)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
