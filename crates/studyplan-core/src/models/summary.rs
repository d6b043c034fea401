//! Progress counters for plan days and whole plans.

use serde::Serialize;

use super::{StudyPlan, StudyPlanDay};

/// Completed versus total task counts.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PlanProgress {
    /// Total number of tasks
    pub total_tasks: usize,
    /// Number of tasks marked done
    pub completed_tasks: usize,
}

impl PlanProgress {
    pub fn new(completed_tasks: usize, total_tasks: usize) -> Self {
        Self {
            total_tasks,
            completed_tasks,
        }
    }

    /// Percentage of completed tasks.
    ///
    /// Zero tasks means zero percent rather than a division by zero.
    pub fn percent(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        100.0 * self.completed_tasks as f64 / self.total_tasks as f64
    }

    /// Percentage rounded to the nearest whole number for display.
    pub fn rounded_percent(&self) -> u32 {
        self.percent().round() as u32
    }

    /// Number of tasks not yet done.
    pub fn pending_tasks(&self) -> usize {
        self.total_tasks.saturating_sub(self.completed_tasks)
    }

    pub fn is_complete(&self) -> bool {
        self.total_tasks > 0 && self.completed_tasks == self.total_tasks
    }
}

impl From<&StudyPlanDay> for PlanProgress {
    fn from(day: &StudyPlanDay) -> Self {
        Self::new(day.completed_count(), day.task_count())
    }
}

impl From<&StudyPlan> for PlanProgress {
    fn from(plan: &StudyPlan) -> Self {
        plan.iter()
            .map(PlanProgress::from)
            .fold(PlanProgress::default(), |acc, day| {
                PlanProgress::new(
                    acc.completed_tasks + day.completed_tasks,
                    acc.total_tasks + day.total_tasks,
                )
            })
    }
}
