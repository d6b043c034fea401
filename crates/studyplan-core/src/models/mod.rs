//! Data models for study plans, plan days and connection state.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! # Invariants
//!
//! A [`StudyPlanDay`] always carries exactly one completion flag per task.
//! Days are only created through [`StudyPlanDay::new`], which sizes the flag
//! vector from the task list, and flags are only changed through
//! [`StudyPlanDay::toggle`].
//!
//! # Examples
//!
//! ```rust
//! use studyplan_core::models::{StudyPlan, StudyPlanDay};
//!
//! let day = StudyPlanDay::new(
//!     1,
//!     vec!["Ownership".to_string()],
//!     vec!["Read chapter 4".to_string(), "Do exercises".to_string()],
//!     "What does a move do?".to_string(),
//! );
//! let mut plan = StudyPlan::new(vec![day]);
//!
//! plan.day_mut(0).unwrap().toggle(1);
//! assert_eq!(plan.progress().rounded_percent(), 50);
//! ```

pub mod day;
pub mod plan;
pub mod status;
pub mod summary;


pub use day::StudyPlanDay;
pub use plan::StudyPlan;
pub use status::ConnectionStatus;
pub use summary::PlanProgress;
