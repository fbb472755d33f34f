//! Shared test harness: tempdir-backed server state and request helpers

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hrm_server::core::{Config, ServerState, build_router};

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    _tmp: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await;
    state.start_background_tasks();
    let router = build_router(state.clone());
    TestApp {
        router,
        state,
        _tmp: tmp,
    }
}

pub async fn send(
    router: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Register an account and return its id
pub async fn register(
    router: &Router,
    role: &str,
    name: &str,
    email: &str,
    extra: serde_json::Value,
) -> String {
    let mut body = serde_json::json!({
        "name": name,
        "email": email,
        "password": "s3cret-pass",
        "department": "General",
    });
    if let (Some(base), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }

    let (status, json) = send(
        router,
        "POST",
        &format!("/auth/register/{role}"),
        None,
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {json}");
    json["id"].as_str().expect("account id").to_string()
}

/// Login and return the bearer token
pub async fn login(router: &Router, email: &str) -> String {
    let (status, json) = send(
        router,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({"email": email, "password": "s3cret-pass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {json}");
    json["token"].as_str().expect("token").to_string()
}
