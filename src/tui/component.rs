use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// A form control that draws itself into a `Rect`.
///
/// Props are plain struct fields set by the caller before each frame.
/// `render` takes `&mut self` so a control can settle its own presentation
/// state (horizontal scroll, animated offset) while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A control that consumes key events while it has focus.
pub trait EventHandler {
    /// What the control reports back to the event loop.
    type Event;

    /// Returns `None` when the event was ignored or changed nothing the
    /// loop needs to hear about.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
