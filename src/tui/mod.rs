//! # TUI Adapter
//!
//! The ratatui host for the explainer form. Owns a [`PageModel`], mirrors
//! user input into it, and draws whatever the controller writes back.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Submission
//!
//! Enter calls `ExplanationController::begin` synchronously inside the event
//! loop, so the button is disabled before the next frame. The returned
//! submission runs on a tokio task and reports its outcome over a channel.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request in flight, smooth scroll running): draws every ~50ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::Strategy;
use crate::core::config::ResolvedConfig;
use crate::core::controller::{ExplanationController, SubmitOutcome};
use crate::core::page::{Page, PageModel, ScrollBehavior, ScrollIntoView};
use crate::core::request::Difficulty;
use crate::explain::{ExplanationStrategy, PlaceholderStrategy, RemoteStrategy};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AlertEvent, AlertState, DifficultyPicker, PickerEvent, ResultPanelState, SUBMIT_LABEL,
    TopicEvent, TopicInput,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which control receives editing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topic,
    Difficulty,
    Submit,
    Result,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Topic, Focus::Difficulty, Focus::Submit, Focus::Result];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// TUI-specific presentation state (not part of the page)
pub struct TuiState {
    // Persistent component states
    pub topic_input: TopicInput,
    pub picker: DifficultyPicker,
    pub result: ResultPanelState,
    pub focus: Focus,
    // Alert overlay (None = hidden)
    pub alert: Option<AlertState>,
    /// Downgrade smooth scroll requests to instant jumps.
    pub reduce_motion: bool,
}

impl TuiState {
    pub fn new(initial_difficulty: Option<Difficulty>) -> Self {
        let mut state = Self {
            topic_input: TopicInput::new(),
            picker: DifficultyPicker::new(initial_difficulty),
            result: ResultPanelState::new(),
            focus: Focus::Topic, // User expects to type immediately
            alert: None,
            reduce_motion: false,
        };
        state.set_focus(Focus::Topic);
        state
    }

    /// Apply a scroll request taken from the page.
    pub fn request_scroll(&mut self, mut options: ScrollIntoView) {
        if self.reduce_motion {
            options.behavior = ScrollBehavior::Instant;
        }
        self.result.scroll_into_view(options);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.topic_input.focused = focus == Focus::Topic;
        self.picker.focused = focus == Focus::Difficulty;
        self.result.focused = focus == Focus::Result;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for topic editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Runs its closure once when dropped. `run` holds one around
/// `ratatui::restore` so an early `?` still leaves raw mode.
struct RestoreGuard<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self(Some(restore))
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.0.take() {
            restore();
        }
    }
}

/// Build the strategy named by a resolved config.
pub fn build_strategy(config: &ResolvedConfig) -> Arc<dyn ExplanationStrategy> {
    match config.strategy {
        Strategy::Remote => Arc::new(
            RemoteStrategy::new(Some(config.base_url.clone()))
                .with_endpoint(config.endpoint.clone()),
        ),
        Strategy::Placeholder => Arc::new(PlaceholderStrategy::new(config.placeholder_delay)),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let strategy = build_strategy(&config);
    let controller = ExplanationController::from_config(strategy, &config);
    info!(
        "Controller ready: strategy={}, policy={:?}",
        controller.strategy_name(),
        controller.policy()
    );

    let page = Arc::new(PageModel::new(SUBMIT_LABEL));
    page.check(config.initial_difficulty.map(|d| d.as_str()));
    let mut tui = TuiState::new(config.initial_difficulty);
    tui.reduce_motion = config.reduce_motion;

    let mut terminal = ratatui::init();
    // Declared first so it drops last, after the mode guard
    let _terminal_restore = RestoreGuard::new(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Outcomes from background submissions
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Pick up whatever the controller wrote to the page since the last frame
        if let Some(options) = page.take_scroll_request() {
            tui.request_scroll(options);
            needs_redraw = true;
        }
        if tui.alert.is_none()
            && let Some(message) = page.next_alert()
        {
            tui.alert = Some(AlertState::new(message));
            needs_redraw = true;
        }

        let animating = controller.state().is_busy() || tui.result.is_animating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let snapshot = page.snapshot();
            let state = controller.state();
            terminal.draw(|f| {
                ui::draw_ui(f, &snapshot, controller.strategy_name(), state, &mut tui)
            })?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits, alert or not
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                break;
            }

            // An open alert swallows everything until dismissed
            if let Some(alert) = tui.alert.as_mut() {
                if let Some(AlertEvent::Dismiss) = alert.handle_event(&event) {
                    tui.alert = None;
                }
                continue;
            }

            match event {
                TuiEvent::Escape => {
                    should_quit = true;
                    break;
                }
                TuiEvent::FocusNext => tui.set_focus(tui.focus.next()),
                TuiEvent::FocusPrev => tui.set_focus(tui.focus.prev()),
                TuiEvent::Submit => start_submission(&controller, &page, &tx),
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.result.handle_event(&event);
                }
                _ => dispatch_to_focused(&mut tui, &page, &controller, &tx, &event),
            }
        }

        if should_quit {
            break;
        }

        while let Ok(outcome) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received outcome: {:?}", outcome);
        }
    }

    Ok(())
}

/// Route an editing key to whichever control has focus.
fn dispatch_to_focused(
    tui: &mut TuiState,
    page: &Arc<PageModel>,
    controller: &ExplanationController,
    tx: &mpsc::Sender<SubmitOutcome>,
    event: &TuiEvent,
) {
    match tui.focus {
        Focus::Topic => {
            if let Some(TopicEvent::Changed(text)) = tui.topic_input.handle_event(event) {
                page.set_topic(&text);
            }
        }
        Focus::Difficulty => {
            if let Some(PickerEvent::Checked(difficulty)) = tui.picker.handle_event(event) {
                page.check(Some(difficulty.as_str()));
            }
        }
        Focus::Submit => {
            if matches!(event, TuiEvent::InputChar(' ')) {
                start_submission(controller, page, tx);
            }
        }
        Focus::Result => {}
    }
}

fn start_submission(
    controller: &ExplanationController,
    page: &Arc<PageModel>,
    tx: &mpsc::Sender<SubmitOutcome>,
) {
    if !page.submit_enabled() {
        debug!("Submit ignored: button disabled");
        return;
    }

    let host: Arc<dyn Page> = page.clone();
    match controller.begin(host) {
        Ok(submission) => {
            info!("Spawning submission: {:?}", submission.request());
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = submission.run().await;
                if tx.send(outcome).is_err() {
                    warn!("Failed to send submit outcome: receiver dropped");
                }
            });
        }
        Err(SubmitOutcome::Busy) => debug!("Submit ignored: request already in flight"),
        Err(outcome) => info!("Submit rejected: {:?}", outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collector::ValidationPolicy;

    fn config(strategy: Strategy) -> ResolvedConfig {
        ResolvedConfig {
            strategy,
            base_url: "http://localhost:8000".to_string(),
            endpoint: "/explain".to_string(),
            timeout: Some(Duration::from_secs(120)),
            placeholder_delay: Duration::from_millis(800),
            policy: ValidationPolicy::RequireSelection,
            initial_difficulty: None,
            reduce_motion: false,
        }
    }

    #[test]
    fn test_build_strategy_by_name() {
        assert_eq!(build_strategy(&config(Strategy::Remote)).name(), "remote");
        assert_eq!(
            build_strategy(&config(Strategy::Placeholder)).name(),
            "placeholder"
        );
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(Focus::Topic.next(), Focus::Difficulty);
        assert_eq!(Focus::Result.next(), Focus::Topic);
        assert_eq!(Focus::Topic.prev(), Focus::Result);
        assert_eq!(Focus::Submit.prev(), Focus::Difficulty);
    }

    #[test]
    fn test_set_focus_updates_components() {
        let mut tui = TuiState::new(None);
        assert!(tui.topic_input.focused);

        tui.set_focus(Focus::Difficulty);
        assert!(!tui.topic_input.focused);
        assert!(tui.picker.focused);

        tui.set_focus(Focus::Result);
        assert!(!tui.picker.focused);
        assert!(tui.result.focused);
    }

    #[test]
    fn test_typing_and_picking_mirror_into_page() {
        let page = Arc::new(PageModel::new(SUBMIT_LABEL));
        let controller =
            ExplanationController::new(build_strategy(&config(Strategy::Placeholder)));
        let (tx, _rx) = mpsc::channel();
        let mut tui = TuiState::new(None);

        for c in "Gravity".chars() {
            dispatch_to_focused(&mut tui, &page, &controller, &tx, &TuiEvent::InputChar(c));
        }
        tui.set_focus(Focus::Difficulty);
        dispatch_to_focused(&mut tui, &page, &controller, &tx, &TuiEvent::InputChar('2'));

        let snapshot = page.snapshot();
        assert_eq!(snapshot.topic, "Gravity");
        assert_eq!(snapshot.checked.as_deref(), Some("intermediate"));
    }

    #[test]
    fn test_reduce_motion_jumps_instead_of_animating() {
        let mut tui = TuiState::new(None);
        tui.request_scroll(ScrollIntoView::SMOOTH_NEAREST);
        assert!(tui.result.is_animating());

        let mut tui = TuiState::new(None);
        tui.reduce_motion = true;
        tui.request_scroll(ScrollIntoView::SMOOTH_NEAREST);
        assert!(!tui.result.is_animating());
        assert_eq!(tui.result.offset(), 0);
    }

    #[test]
    fn test_restore_runs_on_early_return() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let restored = AtomicBool::new(false);
        let draw_loop = || -> std::io::Result<()> {
            let _restore = RestoreGuard::new(|| restored.store(true, Ordering::SeqCst));
            Err::<(), _>(std::io::Error::other("draw failed"))?;
            Ok(())
        };

        assert!(draw_loop().is_err());
        assert!(restored.load(Ordering::SeqCst));
    }

    #[test]
    fn test_restore_runs_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        drop(RestoreGuard::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rejected_submission_raises_alert() {
        let page = Arc::new(PageModel::new(SUBMIT_LABEL));
        let controller =
            ExplanationController::new(build_strategy(&config(Strategy::Placeholder)));
        let (tx, rx) = mpsc::channel();

        start_submission(&controller, &page, &tx);

        assert_eq!(
            page.next_alert().as_deref(),
            Some("Please enter a topic to explain.")
        );
        assert!(!controller.is_in_flight());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submission_runs_in_background() {
        let mut cfg = config(Strategy::Placeholder);
        cfg.placeholder_delay = Duration::from_millis(10);
        let page = Arc::new(PageModel::new(SUBMIT_LABEL));
        page.set_topic("Gravity");
        page.check(Some("advanced"));
        let controller = ExplanationController::from_config(build_strategy(&cfg), &cfg);
        let (tx, rx) = mpsc::channel();

        start_submission(&controller, &page, &tx);
        assert!(!page.submit_enabled());

        let outcome = tokio::task::spawn_blocking(move || rx.recv()).await.unwrap();
        assert!(matches!(outcome, Ok(SubmitOutcome::Succeeded)));

        let snapshot = page.snapshot();
        assert!(snapshot.submit_enabled);
        assert_eq!(snapshot.submit_label, SUBMIT_LABEL);
        assert!(snapshot.result_html.contains("Advanced Analysis of Gravity"));
    }
}
