//! # Input Collector
//!
//! Reads the topic field and the checked difficulty radio from the host
//! surface and turns them into an [`ExplanationRequest`].
//!
//! Pure read: nothing on the page is touched, and a failure here means the
//! submission never reaches the loading phase.

use log::debug;
use std::fmt;

use crate::core::page::Page;
use crate::core::request::{Difficulty, ExplanationRequest};

/// Input rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Topic is empty after trimming.
    EmptyTopic,
    /// No difficulty radio is checked (only under `RequireSelection`).
    NoDifficultySelected,
}

impl ValidationError {
    /// Text for the blocking alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyTopic => "Please enter a topic to explain.",
            ValidationError::NoDifficultySelected => "Please select a difficulty level.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTopic => write!(f, "empty topic"),
            ValidationError::NoDifficultySelected => write!(f, "no difficulty selected"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// What to do when no difficulty radio is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Missing selection is a `NoDifficultySelected` error.
    #[default]
    RequireSelection,
    /// The form always has a default checked; fall back to it.
    AssumeDefault(Difficulty),
}

/// Reads the form controls and validates them.
pub fn collect(page: &dyn Page, policy: ValidationPolicy) -> Result<ExplanationRequest, ValidationError> {
    let topic = page.topic_text();
    let checked = page.checked_difficulty();
    validate(&topic, checked.as_deref(), policy)
}

/// Validation on raw control values. Topic is checked first.
///
/// A checked value that isn't a known difficulty is rejected under
/// `RequireSelection` and read as beginner under `AssumeDefault`; the
/// policy's default only fills an unchecked group.
pub fn validate(
    topic: &str,
    checked: Option<&str>,
    policy: ValidationPolicy,
) -> Result<ExplanationRequest, ValidationError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ValidationError::EmptyTopic);
    }

    let difficulty = match (checked, policy) {
        (Some(value), policy) => match value.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(e) if matches!(policy, ValidationPolicy::AssumeDefault(_)) => {
                debug!("Unrecognised radio value, using beginner: {}", e);
                Difficulty::Beginner
            }
            Err(e) => {
                debug!("Ignoring checked radio value: {}", e);
                return Err(ValidationError::NoDifficultySelected);
            }
        },
        (None, ValidationPolicy::AssumeDefault(fallback)) => fallback,
        (None, ValidationPolicy::RequireSelection) => {
            return Err(ValidationError::NoDifficultySelected);
        }
    };

    ExplanationRequest::new(topic, difficulty)
}
