//! Display implementations for domain models.
//!
//! All output is markdown: plans render as a heading per day with task
//! checkboxes, a progress bar and the day's quiz.

use std::fmt;

use crate::models::{ConnectionStatus, PlanProgress, StudyPlan, StudyPlanDay};

const BAR_WIDTH: usize = 20;

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_icon())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} tasks ({}%)",
            self.completed_tasks,
            self.total_tasks,
            self.rounded_percent()
        )
    }
}

/// Textual progress bar, e.g. `[#####---------------] 25%`.
pub struct ProgressBar {
    progress: PlanProgress,
    width: usize,
}

impl ProgressBar {
    pub fn new(progress: PlanProgress, width: usize) -> Self {
        Self { progress, width }
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = ((self.progress.percent() / 100.0) * self.width as f64).round() as usize;
        let filled = filled.min(self.width);
        write!(
            f,
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(self.width - filled),
            self.progress.rounded_percent()
        )
    }
}

impl fmt::Display for StudyPlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}", self.day_number)?;
        writeln!(f)?;

        if !self.topics.is_empty() {
            writeln!(f, "**Topics:** {}", self.topics.join(", "))?;
            writeln!(f)?;
        }

        if self.task_count() == 0 {
            writeln!(f, "No tasks for this day.")?;
        } else {
            for (index, (task, done)) in self.iter_tasks().enumerate() {
                if done {
                    writeln!(f, "{}. [x] ~~{task}~~", index + 1)?;
                } else {
                    writeln!(f, "{}. [ ] {task}", index + 1)?;
                }
            }
        }
        writeln!(f)?;

        if !self.quiz.is_empty() {
            writeln!(f, "**Quiz:** {}", self.quiz)?;
        }
        writeln!(
            f,
            "Progress: {}",
            ProgressBar::new(PlanProgress::from(self), BAR_WIDTH)
        )
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No study plan generated yet.");
        }

        writeln!(f, "# Study Plan")?;
        writeln!(f)?;
        writeln!(f, "- Days: {}", self.len())?;
        writeln!(f, "- Overall: {}", self.progress())?;

        for day in self {
            writeln!(f)?;
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
