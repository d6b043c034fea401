use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Plan the mock service returns for every generation request: two days
/// with two tasks each.
pub fn plan_json() -> Value {
    Value::Array(
        (1..=2)
            .map(|d| {
                json!({
                    "Day": d,
                    "Topics": [format!("Topic {d}")],
                    "Tasks": [format!("Read chapter {d}"), format!("Practice set {d}")],
                    "Quiz": format!("Quiz {d}")
                })
            })
            .collect(),
    )
}

/// Starts a mock plan service on an ephemeral port and returns its base URL.
///
/// Must be called from a multi-threaded runtime: the CLI under test blocks
/// the calling thread while the service keeps answering on another.
pub async fn spawn_mock_service() -> String {
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/test", get(|| async { Json(json!({ "message": "Test endpoint working!" })) }))
        .route("/generate_plan", post(|| async { Json(plan_json()) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock service");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock service failed");
    });
    format!("http://{addr}")
}
