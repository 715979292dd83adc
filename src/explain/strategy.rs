use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::request::{ExplanationRequest, ExplanationResult};

/// Errors that can occur while obtaining an explanation.
/// Every variant is rendered inline; none of them is fatal to the form.
#[derive(Debug)]
pub enum ExplainError {
    /// Strategy misconfigured (bad base URL, client build failure).
    Config(String),
    /// Transport-level failure (DNS, connection refused, reset).
    Network(String),
    /// The service answered with a non-2xx status.
    Service { status: u16, status_text: String },
    /// The response body was not the expected JSON.
    Parse(String),
    /// No answer within the configured limit.
    Timeout(Duration),
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ExplainError::Network(msg) => write!(f, "Network error: {msg}"),
            ExplainError::Service {
                status,
                status_text,
            } => {
                if status_text.is_empty() {
                    write!(f, "Server error: {status}")
                } else {
                    write!(f, "Server error: {status} {status_text}")
                }
            }
            ExplainError::Parse(msg) => write!(f, "Invalid response: {msg}"),
            ExplainError::Timeout(limit) => {
                write!(f, "Request timed out after {}s", limit.as_secs_f32())
            }
        }
    }
}

impl std::error::Error for ExplainError {}

impl ExplainError {
    /// Text for the inline error fragment. Empty when the error carries no
    /// message of its own, so the renderer falls back to its generic text.
    pub fn detail(&self) -> String {
        match self {
            ExplainError::Config(msg) | ExplainError::Network(msg) | ExplainError::Parse(msg)
                if msg.trim().is_empty() =>
            {
                String::new()
            }
            _ => self.to_string(),
        }
    }
}

/// Something that can turn a validated request into an HTML fragment.
///
/// The controller owns loading state, error rendering and control
/// restoration; implementations only do the fetch.
#[async_trait]
pub trait ExplanationStrategy: Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    async fn obtain(&self, request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError>;
}
