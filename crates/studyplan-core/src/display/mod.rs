//! Display formatting for plans, progress and notifications.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders with termimad. Wrapper types in
//! this module cover output that needs extra context:
//!
//! - [`Notification`]: the single user-visible message for an operation
//! - [`ProgressBar`]: fixed-width textual progress bar
//! - [`LocalDateTime`]: timestamps in the system timezone
//!
//! # Examples
//!
//! ```rust
//! use studyplan_core::{display::ProgressBar, models::PlanProgress};
//!
//! let bar = ProgressBar::new(PlanProgress::new(1, 4), 8);
//! assert_eq!(bar.to_string(), "[##------] 25%");
//! ```

pub mod datetime;
pub mod models;
pub mod status;

pub use datetime::LocalDateTime;
pub use models::ProgressBar;
pub use status::Notification;
