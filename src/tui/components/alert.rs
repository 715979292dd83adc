//! # Alert Overlay
//!
//! Blocking notice drawn over the form. While an alert is showing it takes
//! every event; only Enter or Esc dismiss it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Widest the box grows, borders included.
const MAX_WIDTH: u16 = 60;

/// Border (2) + padding (2) on each axis
const OVERHEAD: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    Dismiss,
}

pub struct AlertState {
    pub message: String,
}

impl AlertState {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    /// Rows needed to show the wrapped message at the given box width.
    fn height_for(&self, width: u16) -> u16 {
        let text_width = width.saturating_sub(OVERHEAD).max(1) as usize;
        let lines = textwrap::wrap(&self.message, text_width).len().max(1) as u16;
        lines + OVERHEAD
    }
}

impl EventHandler for AlertState {
    type Event = AlertEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(AlertEvent::Dismiss),
            _ => None,
        }
    }
}

pub struct Alert<'a> {
    state: &'a AlertState,
}

impl<'a> Alert<'a> {
    pub fn new(state: &'a AlertState) -> Self {
        Self { state }
    }
}

impl Component for Alert<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(MAX_WIDTH);
        let height = self.state.height_for(width).min(area.height);
        let overlay = centered_rect(width, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ")
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(self.state.message.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// A `width` x `height` rect centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
