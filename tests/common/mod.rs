#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use portfolio_api::app::app;
use portfolio_api::config::{
    AppConfig, DatabaseConfig, Environment, GithubConfig, SecurityConfig, ServerConfig,
    UploadConfig,
};
use portfolio_api::state::AppState;
use portfolio_api::store::{Admin, MemoryStore, PortfolioStore};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_config() -> AppConfig {
    let uploads_dir = std::env::temp_dir()
        .join(format!("portfolio-test-{}", Uuid::new_v4().simple()))
        .to_string_lossy()
        .into_owned();

    AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0 },
        database: DatabaseConfig {
            url: None,
            max_connections: 5,
        },
        security: SecurityConfig {
            jwt_secret: TEST_SECRET.to_string(),
            token_ttl_days: 7,
        },
        uploads: UploadConfig {
            dir: uploads_dir,
            public_base: "/uploads".to_string(),
            max_bytes: 1024 * 1024,
        },
        github: GithubConfig {
            api_base: "https://api.github.com".to_string(),
            per_page: 30,
        },
    }
}

/// Build the full router on the in-memory store, seeded with the one
/// administrator the system assumes.
pub async fn test_app() -> Router {
    test_app_with_github(Some("octocat")).await
}

pub async fn test_app_with_github(github_username: Option<&str>) -> Router {
    let store = Arc::new(MemoryStore::new());

    // Low bcrypt cost to keep the suite fast; production uses DEFAULT_COST
    let password_hash = bcrypt::hash(ADMIN_PASSWORD, 4).expect("hash");
    store
        .upsert_admin(Admin::new(
            "admin",
            "admin@example.com",
            password_hash,
            github_username.map(str::to_string),
        ))
        .await
        .expect("seed admin");

    app(AppState::new(test_config(), store))
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

/// Log in as the seeded administrator and return the bearer token.
pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": ADMIN_PASSWORD })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().expect("token").to_string()
}
