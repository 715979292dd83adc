//! Explainer library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod explain;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which explanation strategy the controller is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// POST to the `/explain` backend.
    #[default]
    Remote,
    /// Canned local templates, no backend needed.
    Placeholder,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Remote => "remote",
            Strategy::Placeholder => "placeholder",
        }
    }
}
