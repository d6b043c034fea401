//! Error types for the study plan library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all study plan operations.
///
/// The first seven variants form the taxonomy surfaced to users when plan
/// generation fails. The rest cover local state and configuration.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Invalid input rejected before any network call
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// The client gave up waiting for the service
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
    /// No response was received at all
    #[error("Cannot connect to server: {message}")]
    NetworkUnreachable { message: String },
    /// The service answered with a non-success status
    #[error("Server error ({status}): {message}")]
    RemoteStatus { status: u16, message: String },
    /// The service answered successfully but reported an error in the body
    #[error("Failed to generate plan: {message}")]
    ServerReported { message: String },
    /// The body was neither an error report nor a non-empty list of days
    #[error("Invalid response format from server: {reason}")]
    MalformedResponse { reason: String },
    /// Any other client-side failure
    #[error("Error: {message}")]
    UnknownClient { message: String },
    /// Day index outside the current plan
    #[error("Day index {index} out of range (plan has {len} days)")]
    DayOutOfRange { index: usize, len: usize },
    /// Task index outside the given day
    #[error("Task index {index} out of range (day {day} has {len} tasks)")]
    TaskOutOfRange { day: usize, index: usize, len: usize },
    /// A newer generation request was issued while this one was in flight
    #[error("Response for request #{sequence} discarded: a newer request was issued")]
    Superseded { sequence: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Short category name used in user-facing notifications.
    pub fn category(&self) -> &'static str {
        match self {
            PlanError::Validation { .. } => "validation",
            PlanError::Timeout { .. } => "timeout",
            PlanError::NetworkUnreachable { .. } => "network",
            PlanError::RemoteStatus { .. } => "server status",
            PlanError::ServerReported { .. } => "server reported",
            PlanError::MalformedResponse { .. } => "malformed response",
            PlanError::UnknownClient { .. } => "client",
            PlanError::DayOutOfRange { .. } | PlanError::TaskOutOfRange { .. } => "index",
            PlanError::Superseded { .. } => "superseded",
            PlanError::FileSystem { .. } => "file system",
            PlanError::Serialization { .. } => "serialization",
            PlanError::Configuration { .. } => "configuration",
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PlanError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PlanError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for study plan operations
pub type Result<T> = std::result::Result<T, PlanError>;
