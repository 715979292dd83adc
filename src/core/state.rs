//! # Submission State
//!
//! Phases of one submission cycle, owned by the controller.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Success ─┐
//!                     │                     ├──▶ interactive again
//!                     └──err──▶ Error ──────┘
//! ```
//!
//! `Success` and `Error` are reported until the next submission starts.
//! Either way the form is interactive again; only `Loading` blocks it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl UiState {
    /// True while a strategy call is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Idle => "Ready",
            UiState::Loading => "Loading...",
            UiState::Success => "Done",
            UiState::Error => "Failed",
        }
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
