//! Connectivity prober.
//!
//! Tries the configured liveness routes strictly in order and stops at the
//! first one that produces any HTTP response. A 404 or 500 still proves the
//! service is reachable; only transport failures count against a route.
//! The result is advisory and never blocks plan generation.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use crate::{config::ClientConfig, models::ConnectionStatus, transport::Transport};

/// Probes the plan service for reachability.
#[derive(Clone)]
pub struct Prober {
    transport: Arc<dyn Transport>,
    urls: Vec<String>,
    timeout: Duration,
}

impl Prober {
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            urls: config.probe_routes.iter().map(|r| config.url(r)).collect(),
            timeout: config.probe_timeout,
        }
    }

    /// Returns `Connected` as soon as one route answers, `Disconnected` if
    /// none do. Never fails.
    pub async fn probe(&self) -> ConnectionStatus {
        for url in &self.urls {
            match self.transport.get(url, self.timeout).await {
                Ok(response) => {
                    debug!("Connection test succeeded on {url} (HTTP {})", response.status);
                    return ConnectionStatus::Connected;
                }
                Err(e) => info!("Failed to connect to {url}: {e}"),
            }
        }
        info!("All connection tests failed");
        ConnectionStatus::Disconnected
    }
}
