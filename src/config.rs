//! Runtime configuration parsed from environment variables.

use std::sync::Arc;
use std::time::Duration;

use crate::error::SubmitError;
use crate::quiz::DisplayMode;
use crate::quiztools::submitter::DEFAULT_SUBMIT_TIMEOUT_SECS;
use crate::quiztools::{DelaySubmitter, HttpSubmitter, Submitter};

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizzlyConfig {
    /// Endpoint for the HTTP submitter; the delay submitter is used when absent.
    pub submit_url: Option<String>,
    pub submit_delay: Duration,
    pub submit_timeout: Duration,
    pub display_mode: DisplayMode,
}

impl Default for QuizzlyConfig {
    fn default() -> Self {
        Self {
            submit_url: None,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            submit_timeout: Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS),
            display_mode: DisplayMode::ShowAll,
        }
    }
}

impl QuizzlyConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `QUIZZLY_SUBMIT_URL`: POST tabulations here
    /// - `QUIZZLY_SUBMIT_DELAY_MS`: default 0
    /// - `QUIZZLY_SUBMIT_TIMEOUT_SECS`: default 10
    /// - `QUIZZLY_DISPLAY_MODE`: `all` (default) or `stepwise`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for an unknown display mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for an unknown display mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let submit_url = lookup("QUIZZLY_SUBMIT_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let submit_delay =
            Duration::from_millis(parse_u64(lookup("QUIZZLY_SUBMIT_DELAY_MS").as_deref(), DEFAULT_SUBMIT_DELAY_MS));
        let submit_timeout = Duration::from_secs(parse_u64(
            lookup("QUIZZLY_SUBMIT_TIMEOUT_SECS").as_deref(),
            DEFAULT_SUBMIT_TIMEOUT_SECS,
        ));
        let display_mode = parse_display_mode(lookup("QUIZZLY_DISPLAY_MODE").as_deref())?;

        Ok(Self { submit_url, submit_delay, submit_timeout, display_mode })
    }

    /// The submitter this config selects.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn submitter(&self) -> Result<Arc<dyn Submitter>, SubmitError> {
        match &self.submit_url {
            Some(url) => Ok(Arc::new(HttpSubmitter::new(url.clone(), self.submit_timeout)?)),
            None => Ok(Arc::new(DelaySubmitter::new(self.submit_delay))),
        }
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn parse_display_mode(raw: Option<&str>) -> Result<DisplayMode, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref().unwrap_or("all") {
        "all" | "" => Ok(DisplayMode::ShowAll),
        "stepwise" => Ok(DisplayMode::Stepwise),
        other => Err(ConfigError::Parse(format!(
            "unknown QUIZZLY_DISPLAY_MODE '{other}' (expected 'all' or 'stepwise')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
