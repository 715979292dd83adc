//! # TopicInput Component
//!
//! Single-line text field for the topic.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (newlines are flattened to spaces)
//! - Handle editing (backspace, delete, cursor movement)
//! - Keep the cursor visible when the text is wider than the field
//!
//! The buffer is internal state; the parent mirrors it into the page after
//! every `Changed` event. Submission is a form-level concern, so Enter is not
//! handled here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum TopicEvent {
    /// Buffer content changed; carries the new text.
    Changed(String),
    /// Cursor moved without changing the text.
    CursorMoved,
}

pub struct TopicInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Display columns scrolled off the left edge
    scroll: u16,
}

impl Default for TopicInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor within the whole buffer.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Adjust horizontal scroll so the cursor stays inside `inner_width`.
    fn update_scroll(&mut self, inner_width: u16) {
        if inner_width == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.cursor_column();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col + 1 - inner_width;
        }
    }

    /// The slice of the buffer that starts at the scroll column.
    fn visible_text(&self) -> &str {
        let mut skipped = 0u16;
        for (i, c) in self.buffer.char_indices() {
            if skipped >= self.scroll {
                return &self.buffer[i..];
            }
            skipped += c.width().unwrap_or(0) as u16;
        }
        ""
    }

    fn insert_str(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor, &flattened);
        self.cursor += flattened.len();
    }
}

impl Component for TopicInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Topic ")
            .padding(ratatui::widgets::Padding::horizontal(1));

        let input = Paragraph::new(self.visible_text()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            let x = area.x + 2 + (self.cursor_column() - self.scroll);
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for TopicInput {
    type Event = TopicEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert_str(c.encode_utf8(&mut [0; 4]));
                Some(TopicEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(TopicEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(TopicEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(TopicEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                TopicEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                TopicEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                TopicEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                TopicEvent::CursorMoved
            }),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut TopicInput, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TopicInput::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(TopicEvent::Changed("a".to_string())));

        type_str(&mut input, "tom");
        assert_eq!(input.buffer, "atom");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(TopicEvent::Changed("ato".to_string())));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TopicInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut input = TopicInput::new();
        type_str(&mut input, "café");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "caf");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "écaf");
        assert_eq!(input.cursor(), 'é'.len_utf8());
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = TopicInput::new();
        input.handle_event(&TuiEvent::Paste("black\nholes".to_string()));
        assert_eq!(input.buffer, "black holes");
        assert_eq!(input.cursor(), input.buffer.len());
    }

    #[test]
    fn test_enter_not_handled() {
        let mut input = TopicInput::new();
        type_str(&mut input, "Gravity");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "Gravity");
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = TopicInput::new();
        type_str(&mut input, "Gravity");

        terminal.draw(|f| {
            input.render(f, f.area());
        }).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("Topic"));
        assert!(text.contains("Gravity"));
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = TopicInput::new();
        type_str(&mut input, "abcdefghijklmnop");

        terminal.draw(|f| {
            input.render(f, f.area());
        }).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("lmnop"));
        assert!(!text.contains("abc"));
    }
}
