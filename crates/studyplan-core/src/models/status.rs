//! Connection status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reachability of the plan-generation service as last observed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// No probe has completed yet
    #[default]
    Unknown,

    /// A probe route answered
    Connected,

    /// Every probe route failed at the transport level
    Disconnected,
}

impl FromStr for ConnectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(ConnectionStatus::Unknown),
            "connected" => Ok(ConnectionStatus::Connected),
            "disconnected" => Ok(ConnectionStatus::Disconnected),
            _ => Err(format!("Invalid connection status: {s}")),
        }
    }
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "unknown",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
        }
    }

    /// Status label with an icon, as shown next to the backend name.
    ///
    /// ```rust
    /// use studyplan_core::models::ConnectionStatus;
    ///
    /// assert_eq!(ConnectionStatus::Connected.with_icon(), "Connected ✅");
    /// assert_eq!(ConnectionStatus::Disconnected.with_icon(), "Disconnected ❌");
    /// assert_eq!(ConnectionStatus::Unknown.with_icon(), "Unknown");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected ✅",
            ConnectionStatus::Disconnected => "Disconnected ❌",
            ConnectionStatus::Unknown => "Unknown",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}
