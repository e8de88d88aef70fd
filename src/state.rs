use std::sync::Arc;

use crate::auth::AuthOptions;
use crate::config::AppConfig;
use crate::database::{DatabaseHealth, DatabaseManager, DepartmentRepository, PgDepartmentRepository, PgUserRepository};
use crate::seed::{PgSeeder, Seeder};

/// Collaborators shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthOptions>,
    pub departments: Arc<dyn DepartmentRepository>,
    pub seeder: Arc<dyn Seeder>,
    pub health: Arc<dyn DatabaseHealth>,
}

impl AppState {
    /// Wire the Postgres-backed collaborators around one pool
    pub fn from_database(config: Arc<AppConfig>, database: &DatabaseManager) -> Self {
        let users = Arc::new(PgUserRepository::new(database));
        let auth = AuthOptions::new(&config, users);

        Self {
            auth: Arc::new(auth),
            departments: Arc::new(PgDepartmentRepository::new(database)),
            seeder: Arc::new(PgSeeder::new(database)),
            health: Arc::new(database.clone()),
            config,
        }
    }
}
