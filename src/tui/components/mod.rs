//! # TUI Components
//!
//! One component per control on the explainer form.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Rebuilt every frame from page and controller data:
//! - `StatusBar`: strategy name and submission state
//! - `SubmitButton`: label and enabled flag written by the controller
//!
//! ### Stateful Components (Event-Driven)
//!
//! Hold local state in `TuiState` and emit events the loop mirrors into the page:
//! - `TopicInput`: single-line topic field
//! - `DifficultyPicker`: three-way radio group
//! - `ResultPanelState` / `ResultPanel`: scrollable fragment view
//! - `AlertState` / `Alert`: blocking notice overlay
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── status_bar.rs         (Top line)
//! ├── topic_input.rs        (Topic field)
//! ├── difficulty_picker.rs  (Radio group)
//! ├── submit_button.rs      (Explain button)
//! ├── result_panel.rs       (Result region)
//! └── alert.rs              (Notice overlay)
//! ```

mod alert;
mod difficulty_picker;
mod result_panel;
mod status_bar;
mod submit_button;
mod topic_input;

pub use alert::{Alert, AlertEvent, AlertState};
pub use difficulty_picker::{DifficultyPicker, PickerEvent};
pub use result_panel::{ResultPanel, ResultPanelState};
pub use status_bar::StatusBar;
pub use submit_button::{SUBMIT_LABEL, SubmitButton};
pub use topic_input::{TopicEvent, TopicInput};
