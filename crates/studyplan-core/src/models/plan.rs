//! Study plan model: the ordered list of plan days.

use std::ops::Index;

use serde::Serialize;

use super::{PlanProgress, StudyPlanDay};

/// A generated study plan, kept in the order the service returned it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StudyPlan {
    days: Vec<StudyPlanDay>,
}

impl StudyPlan {
    /// Wraps the given days without reordering them.
    pub fn new(days: Vec<StudyPlanDay>) -> Self {
        Self { days }
    }

    /// An empty plan.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn day(&self, index: usize) -> Option<&StudyPlanDay> {
        self.days.get(index)
    }

    pub fn day_mut(&mut self, index: usize) -> Option<&mut StudyPlanDay> {
        self.days.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudyPlanDay> {
        self.days.iter()
    }

    /// Total number of tasks across all days.
    pub fn total_tasks(&self) -> usize {
        self.days.iter().map(StudyPlanDay::task_count).sum()
    }

    /// Aggregate progress over every task in the plan.
    pub fn progress(&self) -> PlanProgress {
        PlanProgress::from(self)
    }
}

impl Index<usize> for StudyPlan {
    type Output = StudyPlanDay;

    fn index(&self, index: usize) -> &Self::Output {
        &self.days[index]
    }
}

impl IntoIterator for StudyPlan {
    type Item = StudyPlanDay;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

impl<'a> IntoIterator for &'a StudyPlan {
    type Item = &'a StudyPlanDay;
    type IntoIter = std::slice::Iter<'a, StudyPlanDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
