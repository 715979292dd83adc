//! # Core Application Logic
//!
//! This module contains the explainer's form logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • collector (validate) │
//!                    │  • controller (submit)  │
//!                    │  • render (result area) │
//!                    │                         │
//!                    │  Talks to the host only │
//!                    │  through `page::Page`   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ PageModel  │      │  Browser   │
//!     │   Host     │      │  (tests)   │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`request`]: `ExplanationRequest`, `Difficulty`, `ExplanationResult`
//! - [`collector`]: reads and validates the form controls
//! - [`controller`]: drives one submission cycle around a strategy call
//! - [`render`]: writes HTML into the result region
//! - [`page`]: the host surface contract and its in-memory model
//! - [`state`]: the `UiState` phases
//! - [`config`]: config file, env vars, CLI overrides

pub mod collector;
pub mod config;
pub mod controller;
pub mod page;
pub mod render;
pub mod request;
pub mod state;
