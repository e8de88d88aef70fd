#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Executor, PgPool};
use tokio::net::TcpListener;

use workspace_api::auth::AuthOptions;
use workspace_api::config::{AppConfig, DatabaseConfig};
use workspace_api::database::{
    DatabaseError, DatabaseHealth, DatabaseManager, Department, DepartmentRepository, User, UserRepository,
};
use workspace_api::seed::{SeedError, Seeder};
use workspace_api::{app, AppState};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Bind a free loopback port and serve `router` on the current runtime
    pub async fn spawn(router: axum::Router) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let server = Self { port, base_url };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if client.get(&self.base_url).send().await.is_ok() {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

static SCHEMA_SEQ: AtomicUsize = AtomicUsize::new(0);

/// A private schema on the database named by `DATABASE_URL`, with
/// `sql/schema.sql` applied. Tests get their own schema so they can run in
/// parallel against one server.
pub struct TestDatabase {
    pub manager: DatabaseManager,
    admin: PgPool,
    schema: String,
}

impl TestDatabase {
    /// `None` when `DATABASE_URL` is unset, so suites run without Postgres
    pub async fn connect() -> Result<Option<Self>> {
        let _ = dotenvy::dotenv();
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping Postgres test");
            return Ok(None);
        };

        let schema = format!(
            "workspace_test_{}_{}",
            std::process::id(),
            SCHEMA_SEQ.fetch_add(1, Ordering::SeqCst)
        );

        let admin = PgPool::connect(&url).await.context("failed to connect to DATABASE_URL")?;
        admin
            .execute(format!("DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema}").as_str())
            .await
            .context("failed to create test schema")?;

        // Every pooled connection resolves unqualified tables in the test schema
        let separator = if url.contains('?') { '&' } else { '?' };
        let scoped_url = format!("{url}{separator}options=-c%20search_path%3D{schema}");
        let manager = DatabaseManager::connect(&DatabaseConfig {
            url: Some(scoped_url),
            max_connections: 2,
            connection_timeout: 10,
        })
        .await?;

        manager
            .pool()
            .execute(include_str!("../../sql/schema.sql"))
            .await
            .context("failed to apply sql/schema.sql")?;

        Ok(Some(Self { manager, admin, schema }))
    }

    /// Row counts of `tables`, in order
    pub async fn counts(&self, tables: &[&str]) -> Result<Vec<i64>> {
        let mut counts = Vec::with_capacity(tables.len());
        for table in tables {
            let count: i64 = sqlx::query_scalar(&format!("SELECT count(*) FROM {table}"))
                .fetch_one(self.manager.pool())
                .await?;
            counts.push(count);
        }
        Ok(counts)
    }

    pub async fn cleanup(self) -> Result<()> {
        self.manager.close().await;
        self.admin
            .execute(format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema).as_str())
            .await?;
        self.admin.close().await;
        Ok(())
    }
}

pub struct FixedDepartments(pub Vec<Department>);

#[async_trait]
impl DepartmentRepository for FixedDepartments {
    async fn find_active_by_workspace(&self, workspace_id: &str) -> Result<Vec<Department>, DatabaseError> {
        Ok(self
            .0
            .iter()
            .filter(|d| d.workspace_id == workspace_id && d.is_active)
            .cloned()
            .collect())
    }
}

pub struct NoUsers;

#[async_trait]
impl UserRepository for NoUsers {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DatabaseError> {
        Ok(None)
    }
}

pub struct ToggleSeeder {
    pub fail: bool,
}

impl ToggleSeeder {
    fn outcome(&self) -> Result<(), SeedError> {
        if self.fail {
            Err(SeedError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Seeder for ToggleSeeder {
    async fn seed_all(&self) -> Result<(), SeedError> {
        self.outcome()
    }

    async fn seed_demo_tasks(&self) -> Result<(), SeedError> {
        self.outcome()
    }

    async fn seed_demo_users(&self) -> Result<(), SeedError> {
        self.outcome()
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl DatabaseHealth for AlwaysHealthy {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

pub fn department(id: &str, name: &str, workspace_id: &str, is_active: bool) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(format!("{} team", name)),
        is_active,
        workspace_id: workspace_id.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// API router wired to in-memory collaborators
pub fn stub_app(departments: Vec<Department>, seeder_fails: bool) -> axum::Router {
    let config = Arc::new(AppConfig::from_env());
    let auth = AuthOptions::new(&config, Arc::new(NoUsers));

    app(AppState {
        config,
        auth: Arc::new(auth),
        departments: Arc::new(FixedDepartments(departments)),
        seeder: Arc::new(ToggleSeeder { fail: seeder_fails }),
        health: Arc::new(AlwaysHealthy),
    })
}
