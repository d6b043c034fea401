//! User-facing notifications for operation outcomes.

use std::fmt;

use crate::error::PlanError;

/// One line of feedback for the user: either a confirmation or an error
/// naming its category.
pub struct Notification {
    pub message: String,
    pub success: bool,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&PlanError> for Notification {
    fn from(err: &PlanError) -> Self {
        Self::failure(format!("[{}] {err}", err.category()))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
