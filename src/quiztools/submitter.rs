//! Submitters receive a finished tabulation before the quiz reveals its result.
//!
//! DESIGN
//! ======
//! `Submitter` is the seam between the quiz and whatever backend records
//! answers. `DelaySubmitter` stands in for a network round trip and is the
//! default; `HttpSubmitter` posts the tabulation as JSON.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::SubmitError;
use crate::quiz::Tabulation;

pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 10;

/// Provider-neutral async submission. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver a tabulation.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the backend refuses or cannot be reached.
    async fn submit(&self, tabulation: &Tabulation) -> Result<(), SubmitError>;
}

// =============================================================================
// DELAY
// =============================================================================

/// Waits a fixed delay, then succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaySubmitter {
    pub delay: Duration,
}

impl DelaySubmitter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl Submitter for DelaySubmitter {
    async fn submit(&self, tabulation: &Tabulation) -> Result<(), SubmitError> {
        debug!(delay = ?self.delay, result = tabulation.result_label(), "delay submit");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

// =============================================================================
// HTTP
// =============================================================================

/// POSTs the tabulation JSON to a fixed endpoint.
pub struct HttpSubmitter {
    http: reqwest::Client,
    url: String,
}

impl HttpSubmitter {
    /// Build a submitter for `url` with a whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Http(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, tabulation: &Tabulation) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.url)
            .json(tabulation)
            .send()
            .await
            .map_err(|e| SubmitError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(url = %self.url, error = %e, "failed to read submit error body");
                String::new()
            });
            warn!(url = %self.url, status = status.as_u16(), "submit endpoint refused tabulation");
            return Err(SubmitError::Status { status: status.as_u16(), body });
        }

        debug!(url = %self.url, status = status.as_u16(), "tabulation submitted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "submitter_test.rs"]
mod tests;
