//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

use score_gateway::vertex::{StaticTokenProvider, TokenProvider};
use score_gateway::{GatewayConfig, GatewayServer, Shutdown};

/// One request as observed by a mock upstream.
#[allow(dead_code)]
pub struct RecordedRequest {
    pub path: String,
    pub request_id: Option<String>,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

/// Handle to a running mock upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Start a mock upstream that records requests and returns a fixed
/// response after an optional delay.
pub async fn spawn_upstream(
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
    delay: Duration,
) -> MockUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let handler = move |request: Request| {
        let recorded = recorded.clone();
        async move {
            let (parts, request_body) = request.into_parts();
            let bytes = axum::body::to_bytes(request_body, usize::MAX)
                .await
                .unwrap_or_default();
            let header_string = |name: &str| {
                parts
                    .headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            };
            recorded.lock().unwrap().push(RecordedRequest {
                path: parts.uri.path().to_string(),
                request_id: header_string("x-request-id"),
                content_type: header_string("content-type"),
                authorization: header_string("authorization"),
                body: bytes.to_vec(),
            });
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(handler);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, requests }
}

/// Start a mock metadata service answering the project-id and token
/// lookups. The project id is served with surrounding whitespace, as the
/// real service's text endpoint may produce.
#[allow(dead_code)]
pub async fn spawn_metadata_service(
    project_id: &'static str,
    access_token: &'static str,
) -> SocketAddr {
    use axum::routing::get;

    let app = Router::new()
        .route(
            "/computeMetadata/v1/project/project-id",
            get(move || async move { format!(" {project_id}\n") }),
        )
        .route(
            "/computeMetadata/v1/instance/service-accounts/default/token",
            get(move || async move {
                axum::Json(serde_json::json!({
                    "access_token": access_token,
                    "expires_in": 3599,
                    "token_type": "Bearer",
                }))
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Start the gateway under test with a static token provider.
///
/// The returned `Shutdown` must be kept alive for the duration of the test.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    spawn_gateway_with(config, Arc::new(StaticTokenProvider::new("test-token"))).await
}

/// Start the gateway with its default credential source (the metadata
/// service).
#[allow(dead_code)]
pub async fn spawn_gateway_default(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = GatewayServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });
    (addr, shutdown)
}

/// Start the gateway under test with an injected token provider.
#[allow(dead_code)]
pub async fn spawn_gateway_with(
    config: GatewayConfig,
    tokens: Arc<dyn TokenProvider>,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = GatewayServer::with_token_provider(config, tokens);
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });
    (addr, shutdown)
}

/// A URL nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
