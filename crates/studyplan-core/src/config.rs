//! Client configuration: service location, routes and timeouts.
//!
//! Values are resolved in this order, later sources overriding earlier ones:
//!
//! 1. built-in defaults ([`ClientConfig::default`])
//! 2. a JSON config file (explicit path, else
//!    `$XDG_CONFIG_HOME/studyplan/config.json` when it exists)
//! 3. the `STUDYPLAN_API_BASE` environment variable
//! 4. an explicit base URL passed to the session builder

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PlanError, Result, ResultExt};

/// Environment variable overriding the service base URL.
pub const API_BASE_ENV: &str = "STUDYPLAN_API_BASE";

/// Default origin of the plan-generation service.
pub const DEFAULT_API_BASE: &str = "https://study-plannerback.onrender.com";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service origin, without trailing slash
    pub base_url: String,
    /// Liveness routes tried in order by the prober
    pub probe_routes: Vec<String>,
    /// Timeout per probe route
    pub probe_timeout: Duration,
    /// Route of the best-effort check made before generation; `None` skips it
    pub diagnostic_route: Option<String>,
    pub diagnostic_timeout: Duration,
    /// Plan generation route
    pub generate_route: String,
    /// Generation can involve slow downstream work, hence the long budget
    pub generate_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            probe_routes: vec!["/health".to_string(), "/".to_string(), "/test".to_string()],
            probe_timeout: Duration::from_secs(15),
            diagnostic_route: Some("/test".to_string()),
            diagnostic_timeout: Duration::from_secs(10),
            generate_route: "/generate_plan".to_string(),
            generate_timeout: Duration::from_secs(60),
        }
    }
}

/// On-disk representation; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    probe_routes: Option<Vec<String>>,
    probe_timeout_secs: Option<u64>,
    diagnostic_route: Option<String>,
    diagnostic_enabled: Option<bool>,
    diagnostic_timeout_secs: Option<u64>,
    generate_route: Option<String>,
    generate_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Loads configuration from `path`, or from the XDG config location when
    /// `path` is `None`, then applies the environment override.
    ///
    /// A missing XDG file is not an error; a missing explicit file is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                config = config.with_base_url(base);
            }
        }

        config.check()?;
        Ok(config)
    }

    /// Reads a JSON config file and layers it over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlanError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: ConfigFile = serde_json::from_str(&raw)
            .with_context(format!("Invalid config file '{}'", path.display()))?;

        let mut config = Self::default();
        if let Some(base) = file.base_url {
            config = config.with_base_url(base);
        }
        if let Some(routes) = file.probe_routes {
            config.probe_routes = routes;
        }
        if let Some(secs) = file.probe_timeout_secs {
            config.probe_timeout = Duration::from_secs(secs);
        }
        if let Some(route) = file.diagnostic_route {
            config.diagnostic_route = Some(route);
        }
        if file.diagnostic_enabled == Some(false) {
            config.diagnostic_route = None;
        }
        if let Some(secs) = file.diagnostic_timeout_secs {
            config.diagnostic_timeout = Duration::from_secs(secs);
        }
        if let Some(route) = file.generate_route {
            config.generate_route = route;
        }
        if let Some(secs) = file.generate_timeout_secs {
            config.generate_timeout = Duration::from_secs(secs);
        }

        config.check()?;
        Ok(config)
    }

    /// Replaces the base URL, dropping any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Full URL for a route on the configured service.
    pub fn url(&self, route: &str) -> String {
        if route.starts_with('/') {
            format!("{}{}", self.base_url, route)
        } else {
            format!("{}/{}", self.base_url, route)
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PlanError::Configuration {
                message: format!("base URL must start with http:// or https://: '{}'", self.base_url),
            });
        }
        if self.probe_routes.is_empty() {
            return Err(PlanError::Configuration {
                message: "at least one probe route is required".to_string(),
            });
        }
        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("studyplan").find_config_file("config.json")
    }
}
