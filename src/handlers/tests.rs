use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::app::app;
use crate::auth::provider::tests::{user_with_password, StubUsers};
use crate::auth::AuthOptions;
use crate::config::AppConfig;
use crate::database::{DatabaseError, DatabaseHealth, Department, DepartmentRepository};
use crate::seed::{SeedError, Seeder};
use crate::state::AppState;

// --- stubs ---

struct StubDepartments {
    rows: Vec<Department>,
    fail: bool,
    requested: Mutex<Vec<String>>,
}

impl StubDepartments {
    fn with_rows(rows: Vec<Department>) -> Self {
        Self {
            rows,
            fail: false,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_rows(Vec::new())
        }
    }
}

#[async_trait]
impl DepartmentRepository for StubDepartments {
    async fn find_active_by_workspace(&self, workspace_id: &str) -> Result<Vec<Department>, DatabaseError> {
        self.requested.lock().unwrap().push(workspace_id.to_string());
        if self.fail {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        let mut rows: Vec<Department> = self
            .rows
            .iter()
            .filter(|d| d.workspace_id == workspace_id && d.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

#[derive(Clone, Copy)]
enum Outcome {
    Succeed,
    Fail,
    Panic,
}

struct StubSeeder(Outcome);

impl StubSeeder {
    fn run(&self) -> Result<(), SeedError> {
        match self.0 {
            Outcome::Succeed => Ok(()),
            Outcome::Fail => Err(SeedError::Database(sqlx::Error::PoolTimedOut)),
            Outcome::Panic => panic!("seeder blew up"),
        }
    }
}

#[async_trait]
impl Seeder for StubSeeder {
    async fn seed_all(&self) -> Result<(), SeedError> {
        self.run()
    }

    async fn seed_demo_tasks(&self) -> Result<(), SeedError> {
        self.run()
    }

    async fn seed_demo_users(&self) -> Result<(), SeedError> {
        self.run()
    }
}

struct StubHealth(bool);

#[async_trait]
impl DatabaseHealth for StubHealth {
    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.0 {
            Ok(())
        } else {
            Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }
}

// --- helpers ---

fn department(id: &str, name: &str, workspace_id: &str, is_active: bool) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        is_active,
        workspace_id: workspace_id.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn state_with(departments: Arc<StubDepartments>, seeder: StubSeeder, healthy: bool) -> AppState {
    let config = Arc::new(AppConfig::development());
    let auth = AuthOptions::new(&config, Arc::new(StubUsers(vec![user_with_password("hunter2")])));

    AppState {
        config,
        auth: Arc::new(auth),
        departments,
        seeder: Arc::new(seeder),
        health: Arc::new(StubHealth(healthy)),
    }
}

fn create_test_app(departments: StubDepartments, seeder: StubSeeder) -> Router {
    app(state_with(Arc::new(departments), seeder, true))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// --- departments ---

#[tokio::test]
async fn departments_without_workspace_id_is_400() {
    for uri in ["/api/departments", "/api/departments?workspaceId="] {
        let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));

        let (status, body) = send(sut, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "Workspace ID is required" }));
    }
}

#[tokio::test]
async fn departments_returns_active_rows_of_workspace_sorted_by_name() {
    let departments = Arc::new(StubDepartments::with_rows(vec![
        department("d1", "Sales", "ws_1", true),
        department("d2", "Engineering", "ws_1", true),
        department("d3", "Archive", "ws_1", false),
        department("d4", "Finance", "ws_2", true),
        department("d5", "Marketing", "ws_1", true),
    ]));
    let sut = app(state_with(departments.clone(), StubSeeder(Outcome::Succeed), true));

    let (status, body) = send(sut, get("/api/departments?workspaceId=ws_1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(departments.requested.lock().unwrap().as_slice(), ["ws_1".to_string()]);

    let data = body["data"].as_array().unwrap();
    let names: Vec<&str> = data.iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Engineering", "Marketing", "Sales"]);
    for d in data {
        assert_eq!(d["isActive"], json!(true));
        assert_eq!(d["workspaceId"], json!("ws_1"));
    }
}

#[tokio::test]
async fn departments_malformed_query_is_enveloped_400() {
    let departments = Arc::new(StubDepartments::with_rows(vec![]));
    let sut = app(state_with(departments.clone(), StubSeeder(Outcome::Succeed), true));

    let (status, body) = send(sut, get("/api/departments?workspaceId=a&workspaceId=b")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "Workspace ID is required" }));
    assert!(departments.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn departments_store_failure_is_500() {
    let sut = create_test_app(StubDepartments::failing(), StubSeeder(Outcome::Succeed));

    let (status, body) = send(sut, get("/api/departments?workspaceId=ws_1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "Failed to fetch departments" }));
}

// --- seeding ---

const SEED_ROUTES: [(&str, &str, &str); 3] = [
    ("/api/seed/all", "All data seeded successfully", "Failed to seed all data"),
    ("/api/seed/demo-tasks", "Demo tasks seeded successfully", "Failed to seed demo tasks"),
    ("/api/seed/demo-users", "Demo users seeded successfully", "Failed to seed demo users"),
];

#[tokio::test]
async fn seed_success_returns_fixed_message() {
    for (uri, message, _) in SEED_ROUTES {
        let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));

        let (status, body) = send(sut, post_json(uri, json!({}))).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "success": true, "message": message }));
    }
}

#[tokio::test]
async fn seed_failure_returns_fixed_error() {
    for (uri, _, error) in SEED_ROUTES {
        let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Fail));

        let (status, body) = send(sut, post_json(uri, json!({}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "success": false, "error": error }));
    }
}

#[tokio::test]
async fn panicking_handler_returns_generic_500() {
    let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Panic));

    let (status, body) = send(sut, post_json("/api/seed/all", json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "Internal server error" }));
}

// --- auth ---

#[tokio::test]
async fn logout_succeeds_whatever_the_body() {
    let requests = vec![
        Request::builder()
            .method(Method::POST)
            .uri("/api/auth/logout")
            .body(Body::empty())
            .unwrap(),
        post_json("/api/auth/logout", json!({ "anything": [1, 2, 3] })),
        Request::builder()
            .method(Method::POST)
            .uri("/api/auth/logout")
            .header(header::AUTHORIZATION, "Bearer not-a-token")
            .body(Body::from("{ not json"))
            .unwrap(),
    ];

    for request in requests {
        let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));

        let (status, body) = send(sut, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "message": "Logout successful" }));
    }
}

#[tokio::test]
async fn signin_then_session_carries_id_and_role() {
    let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));

    let (status, body) = send(
        sut.clone(),
        post_json(
            "/api/auth/signin",
            json!({ "email": "ada@example.com", "password": "hunter2" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["session"]["user"]["id"], json!("u1"));
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/session")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(sut, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["id"], json!("u1"));
    assert_eq!(body["data"]["user"]["role"], json!("admin"));
    assert_eq!(body["data"]["user"]["email"], json!("ada@example.com"));
}

#[tokio::test]
async fn signin_with_wrong_password_is_401() {
    let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));

    let (status, body) = send(
        sut,
        post_json(
            "/api/auth/signin",
            json!({ "email": "ada@example.com", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "error": "Invalid credentials" }));
}

#[tokio::test]
async fn signin_with_unknown_provider_or_bad_body_is_400() {
    let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));
    let (status, body) = send(
        sut,
        post_json(
            "/api/auth/signin",
            json!({ "provider": "github", "email": "ada@example.com", "password": "hunter2" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Unknown auth provider"));

    let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));
    let (status, body) = send(sut, post_json("/api/auth/signin", json!({ "email": "ada@example.com" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "Invalid request body" }));
}

#[tokio::test]
async fn session_without_token_is_401() {
    let sut = create_test_app(StubDepartments::with_rows(vec![]), StubSeeder(Outcome::Succeed));

    let (status, body) = send(sut, get("/api/auth/session")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
}

// --- health ---

#[tokio::test]
async fn health_reports_database_state() {
    let sut = app(state_with(
        Arc::new(StubDepartments::with_rows(vec![])),
        StubSeeder(Outcome::Succeed),
        true,
    ));
    let (status, body) = send(sut, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("ok"));

    let sut = app(state_with(
        Arc::new(StubDepartments::with_rows(vec![])),
        StubSeeder(Outcome::Succeed),
        false,
    ));
    let (status, body) = send(sut, get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "success": false, "error": "Service degraded" }));
}
