//! # StatusBar Component
//!
//! Single top line showing which strategy is answering and the current
//! presentation state.
//!
//! Purely presentational: both props come from the controller, the bar just
//! renders what it's given.
//!
//! 1. **Idle**: `"Concept Explainer (strategy: remote)"`
//! 2. **Otherwise**: `"Concept Explainer (strategy: remote) | Loading..."`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::core::state::UiState;
use crate::tui::component::Component;

pub struct StatusBar {
    /// Name of the active explanation strategy
    pub strategy_name: String,
    pub state: UiState,
}

impl StatusBar {
    pub fn new(strategy_name: String, state: UiState) -> Self {
        Self {
            strategy_name,
            state,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = match self.state {
            UiState::Idle => format!("Concept Explainer (strategy: {})", self.strategy_name),
            state => format!(
                "Concept Explainer (strategy: {}) | {}",
                self.strategy_name,
                state.label()
            ),
        };

        frame.render_widget(Span::raw(text), area);
    }
}
