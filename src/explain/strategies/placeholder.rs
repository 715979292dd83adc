//! Local placeholder strategy for running without a backend.
//!
//! Picks one of three canned templates by difficulty and drops the topic in
//! verbatim. The topic is not escaped; the result is opaque HTML like any
//! other. A fixed delay stands in for network latency.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::request::{Difficulty, ExplanationRequest, ExplanationResult};
use crate::explain::{ExplainError, ExplanationStrategy};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

pub struct PlaceholderStrategy {
    delay: Duration,
}

impl Default for PlaceholderStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl PlaceholderStrategy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ExplanationStrategy for PlaceholderStrategy {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn obtain(&self, request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError> {
        debug!("Placeholder delay: {}ms", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;

        info!(
            "Placeholder explanation: topic={:?}, difficulty={}",
            request.topic(),
            request.difficulty()
        );
        Ok(ExplanationResult::new(template_for(
            request.difficulty(),
            request.topic(),
        )))
    }
}

pub fn template_for(difficulty: Difficulty, topic: &str) -> String {
    match difficulty {
        Difficulty::Beginner => format!(
            "<h2>Simple Explanation of {topic}</h2>\n\
             <p>{topic} is an idea you can picture with everyday things around you. \
             Think of it as a pattern that shows up again and again once you know where to look.</p>\n\
             <h3>Key Points:</h3>\n\
             <ul>\n\
             <li>{topic} can be explained without any special vocabulary.</li>\n\
             <li>Everyday examples make it easier to remember.</li>\n\
             <li>You can build on this picture as you learn more.</li>\n\
             </ul>\n\
             <p><em>This is a placeholder explanation. Connect the explanation service for real content.</em></p>"
        ),
        Difficulty::Intermediate => format!(
            "<h2>Understanding {topic}</h2>\n\
             <p>{topic} rests on a few core principles that connect to related concepts. \
             Knowing how those principles interact explains most of its behaviour.</p>\n\
             <h3>Core Concepts:</h3>\n\
             <ul>\n\
             <li>The definition of {topic} and the terms it depends on.</li>\n\
             <li>How {topic} relates to neighbouring ideas.</li>\n\
             <li>Common applications and where the simple picture breaks down.</li>\n\
             </ul>\n\
             <p><em>This is a placeholder explanation. Connect the explanation service for real content.</em></p>"
        ),
        Difficulty::Advanced => format!(
            "<h2>Advanced Analysis of {topic}</h2>\n\
             <p>A rigorous treatment of {topic} starts from its formal definition and the \
             assumptions behind it, then examines the edge cases where those assumptions fail.</p>\n\
             <h3>Technical Details:</h3>\n\
             <ul>\n\
             <li>Formal model and underlying theory of {topic}.</li>\n\
             <li>Limitations, open problems and competing interpretations.</li>\n\
             <li>Current research directions.</li>\n\
             </ul>\n\
             <p><em>This is a placeholder explanation. Connect the explanation service for real content.</em></p>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_per_difficulty() {
        let cases = [
            (Difficulty::Beginner, "<h2>Simple Explanation of Gravity</h2>"),
            (Difficulty::Intermediate, "<h2>Understanding Gravity</h2>"),
            (Difficulty::Advanced, "<h2>Advanced Analysis of Gravity</h2>"),
        ];
        for (difficulty, heading) in cases {
            let html = template_for(difficulty, "Gravity");
            assert!(html.starts_with(heading), "{difficulty}: {html}");
            assert!(html.contains("Gravity"));
        }
    }

    #[test]
    fn test_topic_not_escaped() {
        let html = template_for(Difficulty::Beginner, "<b>Ohm's law</b>");
        assert!(html.contains("<h2>Simple Explanation of <b>Ohm's law</b></h2>"));
    }

    #[tokio::test]
    async fn test_obtain_waits_for_delay() {
        let strategy = PlaceholderStrategy::new(Duration::from_millis(50));
        let request = ExplanationRequest::new("Gravity", Difficulty::Beginner).unwrap();

        let start = std::time::Instant::now();
        let result = strategy.obtain(&request).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(result.html.contains("<h2>Simple Explanation of Gravity</h2>"));
    }
}
