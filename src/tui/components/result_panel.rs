//! # ResultPanel Component
//!
//! The result region. Shows the rendered fragment as-is (it is opaque HTML,
//! not parsed), hidden behind a hint until the page gives it the `visible`
//! class.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultPanelState` lives in `TuiState`
//! - `ResultPanel` is created each frame with borrowed state and page props
//!
//! ## Scroll Into View
//!
//! The panel never leaves the screen, so the nearest edge of the region is
//! always the top of its content. A smooth request moves the offset there a
//! few lines per frame; an instant one jumps.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::page::{ScrollBehavior, ScrollIntoView};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Lines moved per frame during a smooth scroll.
const SMOOTH_STEP: u16 = 2;

const EMPTY_HINT: &str = "Enter a topic, pick a difficulty and press Enter.";

pub struct ResultPanelState {
    pub scroll_state: ScrollViewState,
    /// Where a smooth scroll is heading, if one is running.
    scroll_target: Option<u16>,
    /// Content height from the last render
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
    pub focused: bool,
}

impl Default for ResultPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultPanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            scroll_target: None,
            content_height: 0,
            viewport_height: 0,
            focused: false,
        }
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn set_offset(&mut self, y: u16) {
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    /// True while a smooth scroll is still moving.
    pub fn is_animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    pub fn scroll_into_view(&mut self, options: ScrollIntoView) {
        match options.behavior {
            ScrollBehavior::Smooth => self.scroll_target = Some(0),
            ScrollBehavior::Instant => {
                self.scroll_target = None;
                self.set_offset(0);
            }
        }
    }

    /// Advance a running smooth scroll by one frame.
    pub fn step_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let current = self.offset();
        let next = if current > target {
            current.saturating_sub(SMOOTH_STEP).max(target)
        } else {
            (current + SMOOTH_STEP).min(target)
        };
        self.set_offset(next);
        if next == target {
            self.scroll_target = None;
        }
    }

    /// Keep the offset inside the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        if self.offset() > max_y {
            self.set_offset(max_y);
        }
    }
}

impl EventHandler for ResultPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        // Manual scrolling cancels any animation in progress
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.scroll_target = None;
        self.clamp_scroll();
        None
    }
}

/// Transient render wrapper for the result region.
pub struct ResultPanel<'a> {
    state: &'a mut ResultPanelState,
    html: &'a str,
    visible: bool,
}

impl<'a> ResultPanel<'a> {
    pub fn new(state: &'a mut ResultPanelState, html: &'a str, visible: bool) -> Self {
        Self {
            state,
            html,
            visible,
        }
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.state.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Explanation ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !self.visible {
            let hint = Paragraph::new(EMPTY_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
            return;
        }

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.html).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.step_scroll();
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
