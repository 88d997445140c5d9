mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use portfolio_api::auth::Claims;

use common::{json_request, login, send, test_app, ADMIN_PASSWORD, TEST_SECRET};

#[tokio::test]
async fn login_returns_token_and_redacted_profile() -> Result<()> {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": ADMIN_PASSWORD })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!body["token"].as_str().unwrap_or_default().is_empty());
    assert_eq!(body["admin"]["username"], "admin");
    assert_eq!(body["admin"]["email"], "admin@example.com");
    assert_eq!(body["admin"]["githubUsername"], "octocat");
    // The hash never appears under any spelling
    assert!(body["admin"].get("password_hash").is_none());
    assert!(body["admin"].get("passwordHash").is_none());
    Ok(())
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() -> Result<()> {
    let app = test_app().await;

    let (wrong_status, wrong_body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": "not-the-password" })),
        ),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "nobody", "password": "whatever" })),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["message"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn me_is_idempotent_for_a_valid_token() -> Result<()> {
    let app = test_app().await;
    let token = login(&app).await;

    let (first_status, first) = send(
        &app,
        json_request(Method::GET, "/api/auth/me", Some(&token), None),
    )
    .await;
    let (second_status, second) = send(
        &app,
        json_request(Method::GET, "/api/auth/me", Some(&token), None),
    )
    .await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first["admin"], second["admin"]);
    assert_eq!(first["admin"]["username"], "admin");
    Ok(())
}

#[tokio::test]
async fn missing_header_yields_no_token_provided() -> Result<()> {
    let app = test_app().await;

    let (status, body) = send(&app, json_request(Method::GET, "/api/auth/me", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No token provided");
    Ok(())
}

#[tokio::test]
async fn expired_token_is_rejected() -> Result<()> {
    let app = test_app().await;

    // Syntactically valid, correctly signed, but expired beyond any leeway
    let claims = Claims {
        sub: Uuid::new_v4(),
        iat: Utc::now().timestamp() - 7200,
        exp: Utc::now().timestamp() - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )?;

    let (status, body) = send(
        &app,
        json_request(Method::GET, "/api/auth/me", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
    Ok(())
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() -> Result<()> {
    let app = test_app().await;

    let claims = Claims {
        sub: Uuid::new_v4(),
        iat: Utc::now().timestamp(),
        exp: Utc::now().timestamp() + 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )?;

    let (status, body) = send(
        &app,
        json_request(Method::GET, "/api/auth/me", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
    Ok(())
}

#[tokio::test]
async fn unauthenticated_mutation_never_reaches_the_store() -> Result<()> {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/skills",
            None,
            Some(json!({ "name": "Rust", "category": "Languages", "proficiency": 90 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The public read proves nothing was written
    let (status, body) = send(&app, json_request(Method::GET, "/api/skills", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn one_token_works_across_the_protected_surface() -> Result<()> {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        json_request(Method::GET, "/api/messages", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/projects",
            Some(&token),
            Some(json!({ "title": "Portfolio", "description": "This site" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    Ok(())
}

// The seeded-admin walkthrough: login, create a skill, then watch the same
// endpoint reject an anonymous caller.
#[tokio::test]
async fn login_create_skill_then_anonymous_rejection() -> Result<()> {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": "admin123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token").to_string();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/skills",
            Some(&token),
            Some(json!({ "name": "Rust", "category": "Languages", "proficiency": 90 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Rust");

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/skills",
            None,
            Some(json!({ "name": "Go", "category": "Languages", "proficiency": 70 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}
