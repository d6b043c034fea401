//! Plan state store.
//!
//! Holds the current [`StudyPlan`] and applies the only mutations allowed on
//! it: wholesale replacement, clearing, and single-task toggles. Generation
//! results are applied through [`RequestTicket`]s so that a slow response to
//! an older request can never overwrite the result of a newer one.

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{PlanError, Result},
    models::{PlanProgress, StudyPlan},
};

/// Sequence number stamped on a generation request when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Synchronous container for the current plan.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plan: StudyPlan,
    generated_at: Option<Timestamp>,
    latest: u64,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    /// When the current plan was stored, `None` while the store is empty.
    pub fn generated_at(&self) -> Option<Timestamp> {
        self.generated_at
    }

    /// Swaps in a new plan. Nothing of the previous plan survives.
    pub fn replace_plan(&mut self, plan: StudyPlan) {
        self.plan = plan;
        self.generated_at = Some(Timestamp::now());
    }

    pub fn clear(&mut self) {
        self.plan = StudyPlan::empty();
        self.generated_at = None;
    }

    /// Flips one task flag and returns its new value.
    ///
    /// # Errors
    ///
    /// `DayOutOfRange` or `TaskOutOfRange` when an index does not exist in
    /// the current plan; the store is left unchanged.
    pub fn toggle_task(&mut self, day_index: usize, task_index: usize) -> Result<bool> {
        let len = self.plan.len();
        let day = self
            .plan
            .day_mut(day_index)
            .ok_or(PlanError::DayOutOfRange {
                index: day_index,
                len,
            })?;
        let task_count = day.task_count();
        day.toggle(task_index).ok_or(PlanError::TaskOutOfRange {
            day: day_index,
            index: task_index,
            len: task_count,
        })
    }

    /// Completion percentage of one day; `0.0` for a day without tasks.
    pub fn progress(&self, day_index: usize) -> Result<f64> {
        self.plan
            .day(day_index)
            .map(|day| day.progress())
            .ok_or(PlanError::DayOutOfRange {
                index: day_index,
                len: self.plan.len(),
            })
    }

    /// Aggregate progress over the whole plan.
    pub fn plan_progress(&self) -> PlanProgress {
        self.plan.progress()
    }

    /// Issues the ticket for a new generation request. Any ticket issued
    /// earlier becomes stale.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.sequence() == self.latest
    }

    /// Applies a generation result.
    ///
    /// Current successes replace the plan; current failures clear it and are
    /// passed through. Stale results of either kind leave the store alone
    /// and yield `Superseded`.
    pub fn apply(&mut self, ticket: RequestTicket, result: Result<StudyPlan>) -> Result<StudyPlan> {
        if !self.is_current(ticket) {
            debug!(
                "Discarding response for request #{} (latest is #{})",
                ticket.sequence(),
                self.latest
            );
            return Err(PlanError::Superseded {
                sequence: ticket.sequence(),
            });
        }
        match result {
            Ok(plan) => {
                self.replace_plan(plan.clone());
                Ok(plan)
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }
}
