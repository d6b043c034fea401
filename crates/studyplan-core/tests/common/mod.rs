use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use studyplan_core::{ClientConfig, Session, SessionBuilder};

/// What the mock service answers on `POST /generate_plan`.
#[derive(Clone)]
pub enum Behavior {
    Plan { days: u32, tasks: usize },
    Status(StatusCode, Value),
    Raw(StatusCode, &'static str),
    Stall(Duration),
}

#[derive(Clone)]
struct MockState {
    behavior: Behavior,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Handle to a running mock service.
pub struct MockService {
    pub addr: SocketAddr,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl MockService {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub fn plan_json(days: u32, tasks: usize) -> Value {
    Value::Array(
        (1..=days)
            .map(|d| {
                json!({
                    "Day": d,
                    "Topics": [format!("Topic {d}")],
                    "Tasks": (0..tasks).map(|t| format!("Task {t}")).collect::<Vec<_>>(),
                    "Quiz": format!("Quiz {d}")
                })
            })
            .collect(),
    )
}

async fn generate_plan(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    state.received.lock().unwrap().push(body);
    match state.behavior {
        Behavior::Plan { days, tasks } => Json(plan_json(days, tasks)).into_response(),
        Behavior::Status(status, body) => (status, Json(body)).into_response(),
        Behavior::Raw(status, body) => (status, body).into_response(),
        Behavior::Stall(delay) => {
            tokio::time::sleep(delay).await;
            Json(plan_json(1, 1)).into_response()
        }
    }
}

/// Starts a mock plan service on an ephemeral port. Only `/test` and
/// `/generate_plan` exist, so `/health` and `/` answer 404.
pub async fn spawn_mock_service(behavior: Behavior) -> MockService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        behavior,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/test", get(|| async { Json(json!({ "message": "Test endpoint working!" })) }))
        .route("/generate_plan", post(generate_plan))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock service");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock service failed");
    });
    MockService { addr, received }
}

/// An address on which nothing is listening.
pub async fn closed_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    addr
}

/// Config with short timeouts suitable for tests.
pub fn test_config(base_url: &str) -> ClientConfig {
    let mut config = ClientConfig::default().with_base_url(base_url);
    config.probe_timeout = Duration::from_secs(2);
    config.diagnostic_timeout = Duration::from_secs(2);
    config.generate_timeout = Duration::from_secs(5);
    config
}

/// Helper function to create a session against the given config
pub async fn create_test_session(config: ClientConfig) -> Session {
    SessionBuilder::new()
        .with_config(config)
        .build()
        .await
        .expect("Failed to create session")
}
