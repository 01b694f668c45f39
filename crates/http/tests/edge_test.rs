//! Tests for the edge router and its pass-through middleware

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::any,
};
use gatehouse_core::ProviderConfig;
use gatehouse_http::{middleware::edge_middleware, router};
use tower::ServiceExt;

fn provider() -> ProviderConfig {
    ProviderConfig {
        api_key: "key-123".to_string(),
        auth_domain: "demo.firebaseapp.com".to_string(),
        project_id: "demo".to_string(),
        storage_bucket: "demo.appspot.com".to_string(),
        messaging_sender_id: "1234".to_string(),
        app_id: "1:1234:web:abcd".to_string(),
    }
}

/// Echo handler reporting exactly what reached it
async fn echo(request: Request) -> Response {
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let marker = request
        .headers()
        .get("x-marker")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(request.into_body(), usize::MAX).await.unwrap();

    let mut response = format!("{method} {uri} {marker} {}", String::from_utf8_lossy(&body))
        .into_response();
    *response.status_mut() = StatusCode::ACCEPTED;
    response
        .headers_mut()
        .insert("x-echo", HeaderValue::from_static("1"));
    response
}

fn request() -> Request {
    Request::builder()
        .method("POST")
        .uri("/editor/doc?tab=2")
        .header("x-marker", "abc")
        .body(Body::from("payload"))
        .unwrap()
}

async fn into_parts(response: Response) -> (StatusCode, Option<HeaderValue>, String) {
    let status = response.status();
    let echo = response.headers().get("x-echo").cloned();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, echo, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_edge_middleware_forwards_unchanged() {
    let bare = Router::new().route("/{*path}", any(echo));
    let edged = bare.clone().layer(middleware::from_fn(edge_middleware));

    let expected = into_parts(bare.oneshot(request()).await.unwrap()).await;
    let actual = into_parts(edged.oneshot(request()).await.unwrap()).await;

    assert_eq!(actual, expected);
    assert_eq!(actual.0, StatusCode::ACCEPTED);
    assert_eq!(actual.2, "POST /editor/doc?tab=2 abc payload");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let app = router(dir.path(), provider());

    for uri in ["/login?next=%2Feditor", "/editor", "/profile"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<html>app</html>");
    }

    let response = app
        .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"console.log(1)");
}

#[tokio::test]
async fn test_provider_config_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(dir.path(), provider());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/__/firebase/init.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let config: ProviderConfig = serde_json::from_slice(&body).unwrap();
    assert_eq!(config, provider());
}

#[tokio::test]
async fn test_health_check() {
    let dir = tempfile::tempdir().unwrap();
    let response = router(dir.path(), provider())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
}
