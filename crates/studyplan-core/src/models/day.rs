//! Plan day model definition and task toggling.

use serde::Serialize;

use super::PlanProgress;

/// One day of a study plan: its topics, tasks, completion flags and quiz.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StudyPlanDay {
    /// 1-based day number as sent by the service
    pub day_number: u32,

    /// Subtopics covered on this day
    pub topics: Vec<String>,

    /// Actionable items for the day
    tasks: Vec<String>,

    /// Completion flag per task, index-aligned with `tasks`
    task_status: Vec<bool>,

    /// Self-check prompt for the day
    pub quiz: String,
}

impl StudyPlanDay {
    /// Creates a day with every task marked as not done.
    pub fn new(day_number: u32, topics: Vec<String>, tasks: Vec<String>, quiz: String) -> Self {
        let task_status = vec![false; tasks.len()];
        Self {
            day_number,
            topics,
            tasks,
            task_status,
            quiz,
        }
    }

    /// The tasks for this day.
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Completion flags, one per task.
    pub fn task_status(&self) -> &[bool] {
        &self.task_status
    }

    /// Number of tasks on this day.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks marked as done.
    pub fn completed_count(&self) -> usize {
        self.task_status.iter().filter(|done| **done).count()
    }

    /// Whether the task at `index` is done, or `None` if out of range.
    pub fn is_done(&self, index: usize) -> Option<bool> {
        self.task_status.get(index).copied()
    }

    /// Flips the completion flag of the task at `index`.
    ///
    /// Returns the new value, or `None` without changing anything when the
    /// index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.task_status.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Iterates over `(task, done)` pairs.
    pub fn iter_tasks(&self) -> impl Iterator<Item = (&str, bool)> {
        self.tasks
            .iter()
            .map(String::as_str)
            .zip(self.task_status.iter().copied())
    }

    /// Completion percentage for this day; `0.0` when there are no tasks.
    pub fn progress(&self) -> f64 {
        PlanProgress::from(self).percent()
    }
}
