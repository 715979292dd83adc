//! # SubmitButton Component
//!
//! Stateless. Label and enabled state come from the page, so whatever the
//! controller writes there is exactly what the user sees.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Label shown when no request is outstanding.
pub const SUBMIT_LABEL: &str = "Explain";

pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
    pub focused: bool,
}

impl SubmitButton {
    pub fn new(label: String, enabled: bool, focused: bool) -> Self {
        Self {
            label,
            enabled,
            focused,
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = match (self.enabled, self.focused) {
            (false, _) => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Green),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if self.enabled { Style::default().fg(Color::Green) } else { style });

        let button = Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        frame.render_widget(button, area);
    }
}
