//! Error types for the toggle group.

use thiserror::Error;

/// Errors raised by [`ToggleGroup`](crate::ToggleGroup) and [`SavedState`](crate::SavedState).
#[derive(Debug, Error)]
pub enum MultiButtonError {
    /// A group needs at least one label so that one item can be active.
    #[error("a toggle group requires at least one label")]
    EmptyLabels,
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("failed to encode saved state: {0}")]
    Encode(bincode::Error),
    #[error("failed to decode saved state: {0}")]
    Decode(bincode::Error),
}
