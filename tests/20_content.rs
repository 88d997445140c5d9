mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{json_request, login, send, test_app, test_app_with_github};

#[tokio::test]
async fn public_reads_start_empty() -> Result<()> {
    let app = test_app().await;

    for uri in ["/api/projects", "/api/skills", "/api/experience", "/api/achievements"] {
        let (status, body) = send(&app, json_request(Method::GET, uri, None, None)).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["data"], json!([]), "{}", uri);
    }

    for uri in ["/api/about", "/api/contact-info"] {
        let (status, _) = send(&app, json_request(Method::GET, uri, None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn project_crud_lifecycle() -> Result<()> {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/projects",
            Some(&token),
            Some(json!({
                "title": "Portfolio",
                "description": "This very site",
                "technologies": ["rust", "axum"],
                "github_url": "https://github.com/octocat/portfolio",
                "featured": true
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().expect("id").to_string();
    let created_at = body["data"]["created_at"].clone();

    // Public read sees the new project
    let (status, body) = send(
        &app,
        json_request(Method::GET, &format!("/api/projects/{}", id), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Portfolio");

    // Full replacement keeps the creation timestamp
    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/projects/{}", id),
            Some(&token),
            Some(json!({
                "title": "Portfolio v2",
                "description": "Rebuilt",
                "technologies": ["rust"]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Portfolio v2");
    assert_eq!(body["data"]["created_at"], created_at);
    assert_eq!(body["data"]["featured"], false);

    let (status, _) = send(
        &app,
        json_request(Method::DELETE, &format!("/api/projects/{}", id), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request(Method::GET, &format!("/api/projects/{}", id), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_payloads_fail_with_400_not_401() -> Result<()> {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/projects",
            Some(&token),
            Some(json!({ "title": "", "description": "no title" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("title"));

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/skills",
            Some(&token),
            Some(json!({ "name": "Rust", "category": "Languages", "proficiency": 150 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/projects",
            Some(&token),
            Some(json!({
                "title": "Bad link",
                "description": "x",
                "live_url": "javascript:alert(1)"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn singletons_upsert_and_read_back() -> Result<()> {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/about",
            Some(&token),
            Some(json!({ "headline": "Engineer", "bio": "I build backends" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, json_request(Method::GET, "/api/about", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["headline"], "Engineer");

    // Second write replaces, not duplicates
    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/about",
            Some(&token),
            Some(json!({ "headline": "Senior Engineer", "bio": "Still building" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, json_request(Method::GET, "/api/about", None, None)).await;
    assert_eq!(body["data"]["headline"], "Senior Engineer");

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/contact-info",
            Some(&token),
            Some(json!({
                "email": "hello@example.com",
                "location": "Berlin",
                "socials": { "github": "https://github.com/octocat" }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, json_request(Method::GET, "/api/contact-info", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["socials"]["github"], "https://github.com/octocat");
    Ok(())
}

#[tokio::test]
async fn github_import_requires_a_configured_username() -> Result<()> {
    let app = test_app_with_github(None).await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        json_request(Method::GET, "/api/github/repos", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .contains("GitHub username"));
    Ok(())
}

fn multipart_upload(token: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "portfolio-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/uploads")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn upload_store_serve_delete_round_trip() -> Result<()> {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(&app, multipart_upload(&token, "logo.png", b"png bytes")).await;
    assert_eq!(status, StatusCode::CREATED);
    let url = body["url"].as_str().expect("url").to_string();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));

    // Served statically without authentication (body is raw bytes, not JSON)
    let request = Request::builder()
        .method(Method::GET)
        .uri(&url)
        .body(Body::empty())?;
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request(
            Method::DELETE,
            "/api/uploads",
            Some(&token),
            Some(json!({ "url": url })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Gone now
    let (status, _) = send(
        &app,
        json_request(
            Method::DELETE,
            "/api/uploads",
            Some(&token),
            Some(json!({ "url": url })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn uploads_require_authentication() -> Result<()> {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/uploads")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=x")
        .body(Body::from("--x--\r\n"))?;
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");
    Ok(())
}
