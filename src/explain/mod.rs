pub mod strategies;
pub mod strategy;

pub use strategies::{PlaceholderStrategy, RemoteStrategy};
pub use strategy::{ExplainError, ExplanationStrategy};
