//! Demo data seeding.
//!
//! The HTTP layer only knows the [`Seeder`] trait; [`PgSeeder`] writes the
//! fixed demo fixtures in [`fixtures`] into Postgres.

pub mod fixtures;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::AuthError;

pub use postgres::PgSeeder;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to prepare demo credentials: {0}")]
    Credentials(#[from] AuthError),
}

#[async_trait]
pub trait Seeder: Send + Sync {
    /// Workspace, departments, users and tasks
    async fn seed_all(&self) -> Result<(), SeedError>;

    async fn seed_demo_tasks(&self) -> Result<(), SeedError>;

    async fn seed_demo_users(&self) -> Result<(), SeedError>;
}
