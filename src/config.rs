//! # Configuration
//!
//! Control-plane client configuration with environment-aware loading.
//!
//! The base URL is immutable once loaded and is consumed at client
//! construction time; orchestrator invocations never mutate it.

use crate::error::{LambdaTaskError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:7002";
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;

/// Configuration for the control-plane client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudDriverConfig {
    /// Base URL of the control-plane service; operation URLs are formed by
    /// appending the `resourceUri` returned from each call
    pub base_url: String,

    /// Connect timeout for the underlying transport, in milliseconds
    pub connect_timeout_ms: u64,
}

impl Default for CloudDriverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

impl CloudDriverConfig {
    /// Load configuration from defaults layered with `LAMBDA_TASKS_*`
    /// environment overrides (e.g. `LAMBDA_TASKS_BASE_URL`).
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)
            .map_err(Self::config_error)?
            .set_default("connect_timeout_ms", DEFAULT_CONNECT_TIMEOUT_MS)
            .map_err(Self::config_error)?
            .add_source(config::Environment::with_prefix("LAMBDA_TASKS").try_parsing(true))
            .build()
            .map_err(Self::config_error)?;

        let config: Self = settings.try_deserialize().map_err(Self::config_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration before any client is constructed
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(LambdaTaskError::Configuration {
                message: "base_url must not be empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(LambdaTaskError::Configuration {
                message: format!("base_url must be an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(LambdaTaskError::Configuration {
                message: "connect_timeout_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    fn config_error(err: config::ConfigError) -> LambdaTaskError {
        LambdaTaskError::Configuration {
            message: err.to_string(),
        }
    }
}
