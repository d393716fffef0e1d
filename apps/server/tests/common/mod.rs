use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use folio_server::api::app_router;
use folio_server::build_state;
use folio_server::config::Config;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestApp {
    pub router: Router,
    // Dropping the TempDir removes the database file.
    _db_dir: TempDir,
}

/// Builds an application instance backed by a throwaway SQLite file.
pub async fn spawn_app() -> TestApp {
    let db_dir = TempDir::new().expect("failed to create temp dir");
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: db_dir
            .path()
            .join("folio-test.db")
            .to_string_lossy()
            .into_owned(),
        jwt_secret: "test-secret".to_string(),
        token_ttl_hours: 1,
    };
    let state = build_state(&config).await.expect("failed to build state");
    TestApp {
        router: app_router(state),
        _db_dir: db_dir,
    }
}

pub async fn request(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    app.router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}

/// Registers a fresh user and returns their bearer token.
pub async fn register_user(app: &TestApp, email: &str, password: &str) -> String {
    let response = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["token"]
        .as_str()
        .expect("registration response has no token")
        .to_string()
}
