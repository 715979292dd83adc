//! # DifficultyPicker Component
//!
//! Radio group for the three difficulty levels. One option is highlighted
//! (Left/Right), and at most one is checked (Space). The group can start
//! with nothing checked, which the collector may reject.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::request::Difficulty;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Checked(Difficulty),
}

pub struct DifficultyPicker {
    /// Checked radio, if any (Internal State)
    pub checked: Option<Difficulty>,
    /// Whether the group has keyboard focus (Prop)
    pub focused: bool,
    highlighted: usize,
}

impl DifficultyPicker {
    pub fn new(checked: Option<Difficulty>) -> Self {
        let highlighted = checked
            .and_then(|d| Difficulty::ALL.iter().position(|&x| x == d))
            .unwrap_or(0);
        Self {
            checked,
            focused: false,
            highlighted,
        }
    }

    pub fn highlighted(&self) -> Difficulty {
        Difficulty::ALL[self.highlighted]
    }
}

impl Component for DifficultyPicker {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let mark = if self.checked == Some(*difficulty) {
                "(•)"
            } else {
                "( )"
            };
            let mut style = Style::default();
            if self.focused && i == self.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if self.checked == Some(*difficulty) {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{mark} {}", difficulty.label()), style));
            spans.push(Span::raw("  "));
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Difficulty ")
            .padding(ratatui::widgets::Padding::horizontal(1));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

impl EventHandler for DifficultyPicker {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.highlighted = (self.highlighted + 1).min(Difficulty::ALL.len() - 1);
                None
            }
            TuiEvent::InputChar(' ') => {
                let difficulty = self.highlighted();
                self.checked = Some(difficulty);
                Some(PickerEvent::Checked(difficulty))
            }
            // Digit shortcuts check directly
            TuiEvent::InputChar(c @ '1'..='3') => {
                self.highlighted = (*c as u8 - b'1') as usize;
                let difficulty = self.highlighted();
                self.checked = Some(difficulty);
                Some(PickerEvent::Checked(difficulty))
            }
            _ => None,
        }
    }
}
