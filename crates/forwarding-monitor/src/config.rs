//! Startup configuration loaded from a YAML file.
//!
//! The file carries a single top-level `config` mapping:
//!
//! ```yaml
//! config:
//!   bearerToken: "..."
//!   integrationId: 123
//!   tenantId: 456
//!   region: eu1
//!   pollIntervalSecs: 60
//!   slackWebhookUrl: "https://hooks.slack.com/services/..."
//! ```
//!
//! Any read, parse or validation failure is fatal: the monitor never starts
//! with a partial configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::region::{self, Region, RegionUrls};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    config: Settings,
}

/// Monitor settings, immutable once loaded.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// API token sent as `Authorization: Bearer <token>`
    pub bearer_token: String,
    /// Events-forwarding integration to watch
    pub integration_id: i64,
    /// Tenant owning the integration
    pub tenant_id: i64,
    /// Region code (`us1`, `eu1`, ...). Unknown codes resolve to us1.
    pub region: String,
    /// Seconds between the start of two poll cycles
    pub poll_interval_secs: u64,
    /// Incoming webhook receiving the alerts
    #[serde(alias = "webhookUrl")]
    pub slack_webhook_url: String,
    /// Per-request timeout for both the API and the webhook
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("bearer_token", &"<redacted>")
            .field("integration_id", &self.integration_id)
            .field("tenant_id", &self.tenant_id)
            .field("region", &self.region)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("slack_webhook_url", &self.slack_webhook_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Read and validate the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a configuration document.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(contents)?;
        file.config.validate()?;
        Ok(file.config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bearer_token.trim().is_empty() {
            return Err(ConfigError::Invalid("bearerToken must not be empty".to_string()));
        }
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "pollIntervalSecs must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "requestTimeoutSecs must be greater than zero".to_string(),
            ));
        }

        let webhook = Url::parse(&self.slack_webhook_url).map_err(|e| {
            ConfigError::Invalid(format!(
                "slackWebhookUrl {:?} is not a valid URL: {e}",
                self.slack_webhook_url
            ))
        })?;
        if !matches!(webhook.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "slackWebhookUrl must use http or https, got {}",
                webhook.scheme()
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn region(&self) -> Region {
        Region::from_code(&self.region)
    }

    #[must_use]
    pub fn region_urls(&self) -> RegionUrls {
        region::resolve(&self.region)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
