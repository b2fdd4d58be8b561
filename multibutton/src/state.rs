//! Selection state captured before the host view is torn down.

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::error::MultiButtonError;

/// Fixed-width little-endian integers, no trailing bytes.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// The minimal data needed to rebuild a group with the same selection.
///
/// Hosts treat this as opaque: get it from
/// [`ToggleGroup::capture_state`](crate::ToggleGroup::capture_state), store it,
/// and hand it back to
/// [`ToggleGroup::restore_state`](crate::ToggleGroup::restore_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub(crate) selected_position: usize,
}

impl SavedState {
    /// State that restores to `selected_position`.
    pub fn new(selected_position: usize) -> Self {
        Self { selected_position }
    }

    /// The active index at capture time.
    pub fn selected_position(&self) -> usize {
        self.selected_position
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MultiButtonError> {
        codec().serialize(self).map_err(MultiButtonError::Encode)
    }

    /// Decode bytes produced by [`SavedState::to_bytes`]. Anything left over
    /// after the state is treated as corruption.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MultiButtonError> {
        codec().deserialize(bytes).map_err(MultiButtonError::Decode)
    }
}
