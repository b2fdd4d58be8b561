//! An exclusive toggle group: a row of toggles where exactly one is active.
//!
//! The group tracks which item is selected, reports changes to a single
//! listener and hands out a small [`SavedState`] so a host can rebuild the
//! group with the same selection. Drawing is left to the host; see
//! [`MultiButtonStyle`] for the appearance hints it carries.

pub mod error;
pub mod events;
pub mod group;
pub mod item;
pub mod state;
pub mod style;

pub use error::MultiButtonError;
pub use events::{EventResult, Key, KeyCombo, Modifiers};
pub use group::ToggleGroup;
pub use item::ToggleItem;
pub use state::SavedState;
pub use style::{MultiButtonStyle, Rgb};

pub mod prelude {
    pub use crate::error::MultiButtonError;
    pub use crate::events::{EventResult, Key, KeyCombo, Modifiers};
    pub use crate::group::ToggleGroup;
    pub use crate::item::ToggleItem;
    pub use crate::state::SavedState;
    pub use crate::style::{MultiButtonStyle, Rgb};
}
