//! Remote strategy: one JSON POST to the explanation backend.
//!
//! The backend answers `{"explanation": "..."}` on success. A missing or
//! empty `explanation` is not an error; it renders a fixed fallback line.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::request::{ExplanationRequest, ExplanationResult};
use crate::explain::{ExplainError, ExplanationStrategy};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENDPOINT: &str = "/explain";

/// Rendered when the service succeeds but sends no explanation text.
pub const NO_EXPLANATION: &str = "No explanation returned.";

#[derive(Deserialize, Debug)]
struct ExplainResponse {
    #[serde(default)]
    explanation: Option<String>,
}

pub struct RemoteStrategy {
    base_url: String,
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteStrategy {
    /// Creates a new remote strategy.
    ///
    /// # Arguments
    /// * `base_url` - Optional service origin (defaults to the local backend)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full request URL, tolerant of slashes on either side of the join.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ExplanationStrategy for RemoteStrategy {
    fn name(&self) -> &str {
        "remote"
    }

    async fn obtain(&self, request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError> {
        let json_body = serde_json::to_string(request)
            .map_err(|e| ExplainError::Config(format!("Request serialization failed: {e}")))?;
        let url = self.url();

        info!(
            "Explain request: topic={:?}, difficulty={}, url={}",
            request.topic(),
            request.difficulty(),
            url
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await
            .map_err(|e| ExplainError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Explain response status: {}", status);

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            warn!("Explain service error: {} {}", status.as_u16(), status_text);
            return Err(ExplainError::Service {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExplainError::Network(e.to_string()))?;
        let parsed: ExplainResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Explain response was not valid JSON: {}", e);
            ExplainError::Parse(e.to_string())
        })?;

        let html = match parsed.explanation {
            Some(text) if !text.is_empty() => text,
            _ => {
                info!("Explain service returned no explanation text");
                NO_EXPLANATION.to_string()
            }
        };

        Ok(ExplanationResult::new(html))
    }
}
