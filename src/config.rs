//! Generator configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default chat-completion model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the completion client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Model name (default: gpt-4o)
    pub model: String,
    /// API base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Sampling temperature (default: 0.7)
    pub temperature: f32,
    /// Request timeout in seconds (default: 60)
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> Result<Url> {
        let mut base = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| Error::config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;
        base.path_segments_mut()
            .map_err(|_| Error::config("base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(["chat", "completions"]);
        Ok(base)
    }

    /// Check values that would otherwise fail at request time
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::config("model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::config(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout must be at least one second"));
        }
        self.completions_url().map(|_| ())
    }
}

/// Builder for GeneratorConfig
#[derive(Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Set the model
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the API base URL
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
