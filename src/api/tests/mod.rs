use super::*;
use crate::intake::test_helpers::{create_test_service, seed_outcome};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::time::Duration;
use tower::ServiceExt;


const BOUNDARY: &str = "----WebKitFormBoundary7MA4YWxkTrZu0gW";

/// Build a multipart/form-data upload carrying `content` in the given field
fn multipart_request(field: &str, content: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"numbers.txt\"\r\n\
         Content-Type: text/plain\r\n\
         \r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("Response should be valid JSON")
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_api_server_serves_until_shutdown() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let (service, _temp_dir) = create_test_service().await;

    // Port 0 = OS assigns a free port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let api_handle = tokio::spawn(serve(listener, service.clone(), async move {
        stop_rx.await.ok();
    }));

    let mut stream = tokio::net::TcpStream::connect(address).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"), "unexpected response: {raw}");
    assert!(raw.contains("\"status\":\"ok\""));

    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), api_handle)
        .await
        .expect("server should stop after the shutdown signal")
        .unwrap();
    assert!(result.is_ok());

    service.shutdown().await;
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let (service, _temp_dir) = create_test_service().await;
    let app = create_router(service);

    let request = Request::builder()
        .uri("/stats")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_preflight_allows_any_method_and_header() {
    let (service, _temp_dir) = create_test_service().await;
    let app = create_router(service);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/delete_all")
        .header("Origin", "https://dialer.example.com")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "x-custom-header")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "https://dialer.example.com"
    );
    assert!(
        headers
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("DELETE")
    );
    assert!(
        headers
            .get("access-control-allow-headers")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("x-custom-header")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (service, _temp_dir) = create_test_service().await;
    let app = create_router(service);

    let response = app.oneshot(get("/does-not-exist")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
