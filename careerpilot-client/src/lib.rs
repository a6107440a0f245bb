//! Careerpilot HTTP Client
//!
//! A type-safe HTTP client for the Career Copilot API: one async method per
//! remote analysis capability, each taking a typed request body and returning
//! a typed report.
//!
//! All intelligence lives behind the API; this client only shapes requests,
//! dispatches them, and decodes responses. It never retries.
//!
//! # Example
//!
//! ```no_run
//! use careerpilot_client::CopilotClient;
//! use careerpilot_core::dto::request::ResumeAndJobRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), careerpilot_client::ClientError> {
//!     let client = CopilotClient::new("http://localhost:8000");
//!
//!     let report = client
//!         .skill_gap(ResumeAndJobRequest {
//!             resume_text: "Senior engineer...".to_string(),
//!             job_description: "We are hiring...".to_string(),
//!         })
//!         .await?;
//!
//!     println!("missing skills: {:?}", report.missing_hard_skills);
//!     Ok(())
//! }
//! ```

pub mod error;

mod career;
mod insights;
mod jobs;
mod resume;

pub use error::{ClientError, Result};

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default base URL of a locally running Copilot API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout used by [`CopilotClient::with_timeout`]
///
/// Generous because every capability call fans out to a language model on
/// the server side.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the Career Copilot API
///
/// Methods are grouped by API area:
/// - Resume analysis (ATS upload, skill gap, role fit, achievements,
///   rewrite, cover letter)
/// - Jobs (one-click optimization, alerts)
/// - Career (path forecast, job market, progress tracker, coach chat)
/// - Insights (visualizations, portfolio, interview readiness, salary)
#[derive(Debug, Clone)]
pub struct CopilotClient {
    /// Base URL of the API (e.g. "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl CopilotClient {
    /// Create a new client without a request timeout
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Copilot API (e.g. "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use careerpilot_client::CopilotClient;
    ///
    /// let client = CopilotClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new client with a per-request timeout
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Copilot API
    /// * `timeout` - Deadline applied to every request, connect through body
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Copilot API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use careerpilot_client::CopilotClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = CopilotClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Plumbing
    // =============================================================================

    /// POST a JSON body to an API path and decode the JSON response
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "dispatching Copilot request");

        let response = self.client.post(&url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful. A 2xx body
    /// that fails to decode is a [`ClientError::ParseError`], which callers
    /// treat exactly like a failed request.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(status = status.as_u16(), "Copilot request failed");
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CopilotClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CopilotClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_with_timeout() {
        let client = CopilotClient::with_timeout(DEFAULT_BASE_URL, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = CopilotClient::with_client("http://localhost:8000", http_client);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
