//! Decoding of plan service responses.
//!
//! A successful HTTP exchange is decoded into exactly one [`PlanResponse`]
//! variant, checked in a fixed order: a truthy `error` field first, then a
//! non-empty array of day records, else malformed.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{StudyPlan, StudyPlanDay};

/// Outcome of decoding a 2xx response body.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanResponse {
    Success(StudyPlan),
    ServiceError(String),
    Malformed(String),
}

/// Day record as sent by the service, with capitalised field names.
#[derive(Debug, Deserialize)]
struct WireDay {
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Topics", default)]
    topics: Option<Vec<String>>,
    #[serde(rename = "Tasks", default)]
    tasks: Option<Vec<String>>,
    #[serde(rename = "Quiz", default)]
    quiz: Option<String>,
}

impl From<WireDay> for StudyPlanDay {
    fn from(wire: WireDay) -> Self {
        StudyPlanDay::new(
            wire.day,
            wire.topics.unwrap_or_default(),
            wire.tasks.unwrap_or_default(),
            wire.quiz.unwrap_or_default(),
        )
    }
}

impl PlanResponse {
    /// Decodes a raw body. Bodies that are not JSON are malformed.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(e) => PlanResponse::Malformed(format!("body is not JSON: {e}")),
        }
    }

    /// Decodes an already parsed body.
    ///
    /// Day records are all-or-nothing: if any element of the array fails to
    /// decode, the whole response is `Malformed` and none of its days are
    /// returned.
    pub fn from_value(value: Value) -> Self {
        if let Some(error) = value.get("error").filter(|v| is_truthy(v)) {
            return PlanResponse::ServiceError(value_message(error));
        }

        let items = match value {
            Value::Array(items) if !items.is_empty() => items,
            Value::Array(_) => return PlanResponse::Malformed("plan is empty".to_string()),
            other => {
                return PlanResponse::Malformed(format!("expected a list of days, got {}", kind(&other)))
            }
        };

        let mut days = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<WireDay>(item) {
                Ok(wire) => days.push(StudyPlanDay::from(wire)),
                Err(e) => {
                    return PlanResponse::Malformed(format!("day record {index} is invalid: {e}"))
                }
            }
        }
        PlanResponse::Success(StudyPlan::new(days))
    }
}

/// Best-effort message from an error-status body: `error`, then `message`,
/// then a generic label.
pub fn error_status_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .filter_map(|key| value.get(*key))
                .find(|v| is_truthy(v))
                .map(value_message)
        })
        .unwrap_or_else(|| "Server error".to_string())
}

/// JSON truthiness: everything except `null`, `false`, `0` and `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn day_json(day: u32, tasks: usize) -> Value {
        json!({
            "Day": day,
            "Topics": ["Basics"],
            "Tasks": (0..tasks).map(|i| format!("Task {i}")).collect::<Vec<_>>(),
            "Quiz": "Quick check"
        })
    }

    #[test]
    fn test_success_maps_wire_fields() {
        let response = PlanResponse::from_value(json!([day_json(1, 4), day_json(2, 4)]));
        let PlanResponse::Success(plan) = response else {
            panic!("expected success");
        };
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].day_number, 1);
        assert_eq!(plan[0].topics, vec!["Basics"]);
        assert_eq!(plan[0].quiz, "Quick check");
        assert_eq!(plan[1].task_status(), &[false; 4]);
    }

    #[test]
    fn test_error_field_wins() {
        assert_eq!(
            PlanResponse::from_value(json!({ "error": "quota exceeded" })),
            PlanResponse::ServiceError("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_falsy_error_field_is_ignored() {
        for error in [json!(null), json!(false), json!(0), json!("")] {
            let response = PlanResponse::from_value(json!({ "error": error }));
            assert!(matches!(response, PlanResponse::Malformed(_)), "error={error}");
        }
    }

    #[test]
    fn test_non_string_error_is_stringified() {
        assert_eq!(
            PlanResponse::from_value(json!({ "error": { "code": 7 } })),
            PlanResponse::ServiceError(r#"{"code":7}"#.to_string())
        );
    }

    #[test]
    fn test_empty_array_is_malformed() {
        assert!(matches!(
            PlanResponse::from_value(json!([])),
            PlanResponse::Malformed(_)
        ));
    }

    #[test]
    fn test_object_without_error_is_malformed() {
        assert!(matches!(
            PlanResponse::from_value(json!({ "plan": [] })),
            PlanResponse::Malformed(_)
        ));
    }

    #[test]
    fn test_missing_tasks_fall_back_to_empty() {
        let response = PlanResponse::from_value(json!([{ "Day": 1, "Tasks": null }]));
        let PlanResponse::Success(plan) = response else {
            panic!("expected success");
        };
        assert_eq!(plan[0].task_count(), 0);
        assert!(plan[0].task_status().is_empty());
        assert_eq!(plan[0].quiz, "");
    }

    #[test]
    fn test_one_bad_day_rejects_whole_plan() {
        let response = PlanResponse::from_value(json!([day_json(1, 2), { "Topics": [] }]));
        match response {
            PlanResponse::Malformed(reason) => assert!(reason.contains("day record 1")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(matches!(
            PlanResponse::from_body("<html>oops</html>"),
            PlanResponse::Malformed(_)
        ));
    }

    #[test]
    fn test_error_status_message_preference() {
        assert_eq!(
            error_status_message(r#"{"error":"bad topic","message":"ignored"}"#),
            "bad topic"
        );
        assert_eq!(error_status_message(r#"{"message":"try later"}"#), "try later");
        assert_eq!(error_status_message(r#"{"detail":"x"}"#), "Server error");
        assert_eq!(error_status_message("Bad Gateway"), "Server error");
    }
}
