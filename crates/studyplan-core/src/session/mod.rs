//! High-level session API tying the prober, the plan client and the plan
//! store together.
//!
//! A [`Session`] owns everything a front end needs to render: the current
//! [`ConnectionStatus`] and the current [`StudyPlan`]. Front ends hold the
//! session and call into it; there is no process-wide state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front end     │    │     Session     │    │   Transport     │
//! │  (CLI, etc.)    │───▶│ prober, client, │───▶│   (reqwest)     │
//! │                 │◀───│  store, status  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   render + toggles      orchestration          remote service
//! ```
//!
//! # Overlapping requests
//!
//! Locks are never held across a network call, so two `generate` calls may
//! be in flight at once. Each call takes a ticket from the store before it
//! starts; when it finishes, its result is applied only if no newer call has
//! been issued meanwhile. The stale call returns `PlanError::Superseded` and
//! leaves the newer plan in place.
//!
//! # Example
//!
//! ```rust,no_run
//! use studyplan_core::{PlanRequest, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_base_url(Some("http://localhost:8000"))
//!     .build()
//!     .await?;
//!
//! println!("Backend status: {}", session.connection_status().await.with_icon());
//!
//! let plan = session
//!     .generate(&PlanRequest::new("Go concurrency", 2.0, 3, "interview prep"))
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use log::info;
use tokio::sync::Mutex;

pub mod builder;


pub use builder::SessionBuilder;

use crate::{
    client::PlanClient,
    config::ClientConfig,
    error::Result,
    models::{ConnectionStatus, PlanProgress, StudyPlan},
    params::{PlanRequest, ToggleTask},
    probe::Prober,
    store::PlanStore,
    transport::Transport,
};

/// Main interface for generating and tracking a study plan.
pub struct Session {
    prober: Prober,
    client: PlanClient,
    status: Mutex<ConnectionStatus>,
    store: Mutex<PlanStore>,
}

impl Session {
    /// Creates a session with `Unknown` status and an empty plan.
    pub(crate) fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            prober: Prober::new(transport.clone(), &config),
            client: PlanClient::new(transport, config),
            status: Mutex::new(ConnectionStatus::Unknown),
            store: Mutex::new(PlanStore::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }

    /// Probes the service and records the result.
    pub async fn check_connection(&self) -> ConnectionStatus {
        let status = self.prober.probe().await;
        *self.status.lock().await = status;
        info!("Backend status: {}", status.as_str());
        status
    }

    /// Status recorded by the last probe.
    pub async fn connection_status(&self) -> ConnectionStatus {
        *self.status.lock().await
    }

    /// Generates a plan and makes it the current plan.
    ///
    /// On any failure the current plan is cleared, so a stale plan is never
    /// shown next to an error. If a newer call was issued while this one was
    /// in flight, this call's result is dropped and `Superseded` returned.
    pub async fn generate(&self, request: &PlanRequest) -> Result<StudyPlan> {
        let ticket = self.store.lock().await.begin_request();
        let result = self.client.generate_plan(request).await;
        self.store.lock().await.apply(ticket, result)
    }

    /// Flips one task of the current plan and returns its new value.
    pub async fn toggle_task(&self, params: &ToggleTask) -> Result<bool> {
        self.store
            .lock()
            .await
            .toggle_task(params.day_index, params.task_index)
    }

    /// Snapshot of the current plan.
    pub async fn plan(&self) -> StudyPlan {
        self.store.lock().await.plan().clone()
    }

    /// Completion percentage of one day of the current plan.
    pub async fn progress(&self, day_index: usize) -> Result<f64> {
        self.store.lock().await.progress(day_index)
    }

    pub async fn plan_progress(&self) -> PlanProgress {
        self.store.lock().await.plan_progress()
    }

    /// When the current plan was generated.
    pub async fn generated_at(&self) -> Option<Timestamp> {
        self.store.lock().await.generated_at()
    }
}
