//! Core library for the study planner.
//!
//! This crate turns a topic, a daily time budget, a duration and a goal into
//! a multi-day study plan by calling a remote plan-generation service, and
//! keeps that plan's task completion state in memory.
//!
//! # Components
//!
//! - [`probe`]: connectivity prober trying liveness routes in order
//! - [`client`]: plan request client with validation and error taxonomy
//! - [`response`]: tagged decoding of service responses
//! - [`store`]: plan state store with task toggles, progress and request
//!   sequencing
//! - [`session`]: orchestrator owning the status, the store and the above
//! - [`transport`]: HTTP seam with a `reqwest` implementation
//! - [`display`]: markdown formatting of plans and notifications
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studyplan_core::{PlanRequest, SessionBuilder, ToggleTask};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new().build().await?;
//!
//! let request = PlanRequest::new("Rust ownership", 1.5, 5, "Pass the quiz");
//! session.generate(&request).await?;
//!
//! session
//!     .toggle_task(&ToggleTask { day_index: 0, task_index: 0 })
//!     .await?;
//! println!("Day 1: {:.0}%", session.progress(0).await?);
//! println!("{}", session.plan().await);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod probe;
pub mod response;
pub mod session;
pub mod store;
pub mod transport;

// Re-export commonly used types
pub use client::PlanClient;
pub use config::ClientConfig;
pub use display::{LocalDateTime, Notification, ProgressBar};
pub use error::{PlanError, Result};
pub use models::{ConnectionStatus, PlanProgress, StudyPlan, StudyPlanDay};
pub use params::{PlanRequest, ToggleTask};
pub use probe::Prober;
pub use response::PlanResponse;
pub use session::{Session, SessionBuilder};
pub use store::{PlanStore, RequestTicket};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
