//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::Result,
    transport::{HttpTransport, Transport},
};

use super::Session;

/// Builder for creating and configuring Session instances.
#[derive(Clone)]
pub struct SessionBuilder {
    config: Option<ClientConfig>,
    config_path: Option<PathBuf>,
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    initial_probe: bool,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: None,
            config_path: None,
            base_url: None,
            transport: None,
            initial_probe: true,
        }
    }

    /// Uses an already resolved configuration instead of loading one.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets a config file to load.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/studyplan/config.json` is used
    /// when present.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the service base URL after configuration is loaded.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Replaces the HTTP transport.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Controls the connectivity probe run by [`SessionBuilder::build`].
    /// Enabled by default.
    pub fn with_initial_probe(mut self, enabled: bool) -> Self {
        self.initial_probe = enabled;
        self
    }

    /// Builds the session and, unless disabled, probes the service once.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` or `PlanError::Configuration` when the
    /// configuration cannot be loaded.
    pub async fn build(self) -> Result<Session> {
        let mut config = match self.config {
            Some(config) => config,
            None => ClientConfig::load(self.config_path.as_deref())?,
        };
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
            config.check()?;
        }

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HttpTransport::new()));
        let session = Session::new(transport, config);

        if self.initial_probe {
            session.check_connection().await;
        }
        Ok(session)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
