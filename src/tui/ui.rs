use crate::core::page::PageSnapshot;
use crate::core::render::VISIBLE_CLASS;
use crate::core::state::UiState;
use crate::tui::component::Component;
use crate::tui::components::{Alert, ResultPanel, StatusBar, SubmitButton};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Wide enough for the loading label plus borders.
const BUTTON_WIDTH: u16 = 17;

/// Draw the whole form from the page snapshot and local component state.
pub fn draw_ui(
    frame: &mut Frame,
    snapshot: &PageSnapshot,
    strategy_name: &str,
    state: UiState,
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(3), Min(0)]);
    let [status_area, topic_area, controls_area, result_area] = layout.areas(frame.area());
    let [picker_area, button_area] =
        Layout::horizontal([Min(0), Length(BUTTON_WIDTH)]).areas(controls_area);

    StatusBar::new(strategy_name.to_string(), state).render(frame, status_area);

    tui.topic_input.render(frame, topic_area);
    tui.picker.render(frame, picker_area);

    SubmitButton::new(
        snapshot.submit_label.clone(),
        snapshot.submit_enabled,
        tui.focus == Focus::Submit,
    )
    .render(frame, button_area);

    ResultPanel::new(
        &mut tui.result,
        &snapshot.result_html,
        snapshot.has_result_class(VISIBLE_CLASS),
    )
    .render(frame, result_area);

    // Alert draws last so it sits on top
    if let Some(alert) = &tui.alert {
        Alert::new(alert).render(frame, frame.area());
    }
}
