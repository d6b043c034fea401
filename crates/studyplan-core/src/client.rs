//! Plan request client.
//!
//! Validates a [`PlanRequest`], runs the best-effort diagnostic check, posts
//! the generation request and sorts every outcome into the [`PlanError`]
//! taxonomy. It holds no plan state; see [`crate::store`] and
//! [`crate::session`] for that.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::{
    config::ClientConfig,
    error::{PlanError, Result},
    models::StudyPlan,
    params::PlanRequest,
    response::{error_status_message, PlanResponse},
    transport::{HttpResponse, Transport, TransportError},
};

/// Client for the plan generation endpoint.
#[derive(Clone)]
pub struct PlanClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl PlanClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generates a study plan.
    ///
    /// Invalid input fails before any request is sent. The diagnostic check,
    /// when configured, always finishes before the generation request goes
    /// out and never affects the result.
    pub async fn generate_plan(&self, request: &PlanRequest) -> Result<StudyPlan> {
        let body = request.validate()?;

        self.diagnostic_check().await;

        let url = self.config.url(&self.config.generate_route);
        info!(
            "Requesting {}-day plan for '{}' from {url}",
            body.days, body.topic
        );
        let payload = serde_json::to_value(&body)?;
        let response = self
            .transport
            .post_json(&url, &payload, self.config.generate_timeout)
            .await
            .map_err(|e| self.transport_error(e))?;

        let plan = interpret(&response)?;
        debug!(
            "Received plan with {} days and {} tasks",
            plan.len(),
            plan.total_tasks()
        );
        Ok(plan)
    }

    async fn diagnostic_check(&self) {
        let Some(route) = &self.config.diagnostic_route else {
            return;
        };
        let url = self.config.url(route);
        match self
            .transport
            .get(&url, self.config.diagnostic_timeout)
            .await
        {
            Ok(response) => debug!("Backend test on {url} answered HTTP {}", response.status),
            Err(e) => warn!("Backend test on {url} failed, proceeding anyway: {e}"),
        }
    }

    fn transport_error(&self, err: TransportError) -> PlanError {
        warn!("Plan request failed: {err}");
        match err {
            TransportError::Timeout(timeout) => PlanError::Timeout {
                seconds: round_up_secs(timeout),
            },
            TransportError::Unreachable(message) => PlanError::NetworkUnreachable { message },
            TransportError::Other(message) => PlanError::UnknownClient { message },
        }
    }
}

/// Turns a completed exchange into a plan or a classified error.
fn interpret(response: &HttpResponse) -> Result<StudyPlan> {
    if !response.is_success() {
        let message = error_status_message(&response.body);
        warn!("Server error ({}): {message}", response.status);
        return Err(PlanError::RemoteStatus {
            status: response.status,
            message,
        });
    }

    match PlanResponse::from_body(&response.body) {
        PlanResponse::Success(plan) => Ok(plan),
        PlanResponse::ServiceError(message) => {
            warn!("Service reported an error: {message}");
            Err(PlanError::ServerReported { message })
        }
        PlanResponse::Malformed(reason) => {
            warn!("Invalid response format from server: {reason}");
            Err(PlanError::MalformedResponse { reason })
        }
    }
}

fn round_up_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::scripted::ScriptedTransport;

    const BASE: &str = "http://plans.test";
    const GENERATE: &str = "POST http://plans.test/generate_plan";
    const DIAGNOSTIC: &str = "GET http://plans.test/test";

    fn client(transport: Arc<ScriptedTransport>) -> PlanClient {
        PlanClient::new(transport, ClientConfig::default().with_base_url(BASE))
    }

    fn go_request() -> PlanRequest {
        PlanRequest::new("Go concurrency", 2.0, 3, "interview prep")
    }

    fn plan_body(days: u32, tasks: usize) -> String {
        let days: Vec<_> = (1..=days)
            .map(|d| {
                json!({
                    "Day": d,
                    "Topics": ["Goroutines"],
                    "Tasks": (0..tasks).map(|t| format!("Task {t}")).collect::<Vec<_>>(),
                    "Quiz": "What is a data race?"
                })
            })
            .collect();
        serde_json::to_string(&days).unwrap()
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(DIAGNOSTIC, Ok(HttpResponse::new(200, "{}")))
                .reply(GENERATE, Ok(HttpResponse::new(200, plan_body(3, 4)))),
        );
        let plan = client(transport.clone())
            .generate_plan(&go_request())
            .await
            .expect("generation should succeed");

        assert_eq!(plan.len(), 3);
        assert_eq!(plan.total_tasks(), 12);
        assert!(plan.iter().all(|d| d.task_status().iter().all(|done| !done)));
        assert_eq!(
            transport.bodies(),
            vec![json!({
                "topic": "Go concurrency",
                "hours_per_day": 2,
                "days": 3,
                "goal": "interview prep"
            })]
        );
    }

    #[tokio::test]
    async fn test_diagnostic_runs_before_generation() {
        let transport = Arc::new(
            ScriptedTransport::new().reply(GENERATE, Ok(HttpResponse::new(200, plan_body(1, 1)))),
        );
        client(transport.clone())
            .generate_plan(&go_request())
            .await
            .unwrap();
        assert_eq!(transport.calls(), vec![DIAGNOSTIC, GENERATE]);
    }

    #[tokio::test]
    async fn test_diagnostic_failure_does_not_abort() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(
                    DIAGNOSTIC,
                    Err(TransportError::Timeout(Duration::from_secs(10))),
                )
                .reply(GENERATE, Ok(HttpResponse::new(200, plan_body(2, 1)))),
        );
        let plan = client(transport).generate_plan(&go_request()).await.unwrap();
        assert_eq!(plan.len(), 2);
    }

    #[tokio::test]
    async fn test_diagnostic_can_be_disabled() {
        let transport = Arc::new(
            ScriptedTransport::new().reply(GENERATE, Ok(HttpResponse::new(200, plan_body(1, 1)))),
        );
        let mut config = ClientConfig::default().with_base_url(BASE);
        config.diagnostic_route = None;
        PlanClient::new(transport.clone(), config)
            .generate_plan(&go_request())
            .await
            .unwrap();
        assert_eq!(transport.calls(), vec![GENERATE]);
    }

    #[tokio::test]
    async fn test_validation_issues_no_request() {
        let transport = Arc::new(ScriptedTransport::new());
        let err = client(transport.clone())
            .generate_plan(&PlanRequest::new("  ", 2.0, 3, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Validation { .. }));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_server_reported_error() {
        let transport = Arc::new(ScriptedTransport::new().reply(
            GENERATE,
            Ok(HttpResponse::new(200, r#"{"error":"quota exceeded"}"#)),
        ));
        let err = client(transport)
            .generate_plan(&go_request())
            .await
            .unwrap_err();
        match err {
            PlanError::ServerReported { message } => assert_eq!(message, "quota exceeded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_array_is_malformed() {
        let transport = Arc::new(
            ScriptedTransport::new().reply(GENERATE, Ok(HttpResponse::new(200, "[]"))),
        );
        let err = client(transport)
            .generate_plan(&go_request())
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_error_status_extracts_message() {
        let transport = Arc::new(ScriptedTransport::new().reply(
            GENERATE,
            Ok(HttpResponse::new(400, r#"{"message":"Topic is required"}"#)),
        ));
        let err = client(transport)
            .generate_plan(&go_request())
            .await
            .unwrap_err();
        match err {
            PlanError::RemoteStatus { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Topic is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_plan_body_is_still_an_error() {
        let transport = Arc::new(
            ScriptedTransport::new().reply(GENERATE, Ok(HttpResponse::new(500, plan_body(1, 1)))),
        );
        let err = client(transport)
            .generate_plan(&go_request())
            .await
            .unwrap_err();
        assert!(
            matches!(err, PlanError::RemoteStatus { status: 500, ref message } if message == "Server error")
        );
    }

    #[tokio::test]
    async fn test_transport_failures_are_classified() {
        let cases = [
            (
                TransportError::Timeout(Duration::from_secs(60)),
                "timeout",
            ),
            (
                TransportError::Unreachable("connection refused".to_string()),
                "network",
            ),
            (TransportError::Other("builder error".to_string()), "client"),
        ];
        for (failure, category) in cases {
            let transport = Arc::new(ScriptedTransport::new().reply(GENERATE, Err(failure)));
            let err = client(transport)
                .generate_plan(&go_request())
                .await
                .unwrap_err();
            assert_eq!(err.category(), category);
        }
    }

    #[test]
    fn test_round_up_secs() {
        assert_eq!(round_up_secs(Duration::from_secs(60)), 60);
        assert_eq!(round_up_secs(Duration::from_millis(200)), 1);
        assert_eq!(round_up_secs(Duration::from_millis(1500)), 2);
    }
}
