//! Parameter structures for study plan operations.
//!
//! These structures carry raw input from whichever front end collects it
//! (the CLI today) into the core without framework-specific derives. Each
//! front end defines its own argument types and converts them with `From`:
//!
//! ```text
//! CLI Args (clap) → Core Params → Session → Plan Request Client
//! ```
//!
//! Validation happens in the core, not in the front end, so every interface
//! gets identical rules.

use serde::{Serialize, Serializer};

use crate::error::{PlanError, Result};

/// Raw input for a plan generation request.
///
/// Built fresh per submission. Call [`PlanRequest::validate`] (the session
/// does this for you) to obtain the normalized body sent to the service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Subject to study; must be non-empty after trimming
    pub topic: String,
    /// Daily time budget in hours; must be positive
    pub hours_per_day: f64,
    /// Plan length in days; must be positive
    pub days: i64,
    /// Free-form learning goal, may be empty
    pub goal: String,
}

impl PlanRequest {
    pub fn new(
        topic: impl Into<String>,
        hours_per_day: f64,
        days: i64,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            hours_per_day,
            days,
            goal: goal.into(),
        }
    }

    /// Checks the request and produces the trimmed wire body.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<GeneratePlanBody> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(PlanError::invalid_input("topic").with_reason("must not be empty"));
        }
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            return Err(PlanError::invalid_input("hours_per_day")
                .with_reason(format!("must be greater than 0, got {}", self.hours_per_day)));
        }
        if self.days <= 0 {
            return Err(PlanError::invalid_input("days")
                .with_reason(format!("must be greater than 0, got {}", self.days)));
        }
        let days = u32::try_from(self.days).map_err(|_| {
            PlanError::invalid_input("days").with_reason(format!("{} is too large", self.days))
        })?;

        Ok(GeneratePlanBody {
            topic: topic.to_string(),
            hours_per_day: self.hours_per_day,
            days,
            goal: self.goal.trim().to_string(),
        })
    }
}

/// JSON body of `POST /generate_plan`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratePlanBody {
    pub topic: String,
    #[serde(serialize_with = "serialize_hours")]
    pub hours_per_day: f64,
    pub days: u32,
    pub goal: String,
}

/// Whole-valued hours go out as integers so strictly integer backends accept
/// them; fractional hours stay floats.
fn serialize_hours<S: Serializer>(hours: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if hours.fract() == 0.0 && *hours <= i64::MAX as f64 {
        serializer.serialize_i64(*hours as i64)
    } else {
        serializer.serialize_f64(*hours)
    }
}

/// Parameters for toggling a task's completion flag.
///
/// Indices are 0-based positions in the current plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleTask {
    pub day_index: usize,
    pub task_index: usize,
}
