use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::collector::ValidationError;

/// How deep and technical an explanation should be.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Radio order, shallowest first.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Wire value, as sent in the request body and used as the radio value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A radio value that is not one of the three difficulty levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// One submission's worth of input. Serializes to the `/explain` request body.
///
/// The topic is always trimmed and non-empty; the only way to get one is
/// through [`ExplanationRequest::new`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRequest {
    topic: String,
    difficulty: Difficulty,
}

impl ExplanationRequest {
    pub fn new(topic: &str, difficulty: Difficulty) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            difficulty,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// An opaque HTML fragment ready for the result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationResult {
    pub html: String,
}

impl ExplanationResult {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_topic() {
        let request = ExplanationRequest::new("  Gravity \n", Difficulty::Beginner).unwrap();
        assert_eq!(request.topic(), "Gravity");
        assert_eq!(request.difficulty(), Difficulty::Beginner);
    }

    #[test]
    fn test_request_rejects_blank_topic() {
        for topic in ["", "   ", "\t\n"] {
            assert_eq!(
                ExplanationRequest::new(topic, Difficulty::Advanced),
                Err(ValidationError::EmptyTopic)
            );
        }
    }

    #[test]
    fn test_request_body_shape() {
        let request = ExplanationRequest::new("Entropy", Difficulty::Intermediate).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"topic": "Entropy", "difficulty": "intermediate"})
        );
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!(" Advanced ".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_wire_names_match_display() {
        for difficulty in Difficulty::ALL {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{difficulty}\""));
        }
    }
}
