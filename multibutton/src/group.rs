//! The exclusive toggle group.

use std::fmt;

use log::{debug, warn};

use crate::error::MultiButtonError;
use crate::item::ToggleItem;
use crate::state::SavedState;
use crate::style::MultiButtonStyle;

/// Callback invoked with `(checked, unchecked)` when the active item changes.
type Listener = Box<dyn FnMut(&ToggleItem, &ToggleItem)>;

/// A row of toggles where exactly one item is active.
///
/// The first item is active after construction. [`select`](Self::select) is
/// the only way to change the selection interactively; it notifies the
/// listener at most once per call and never when the item was already
/// active. [`restore_state`](Self::restore_state) updates the selection
/// silently.
///
/// The group is single-threaded. Share it behind your own lock if needed.
///
/// # Example
///
/// ```
/// use multibutton::ToggleGroup;
///
/// let mut group = ToggleGroup::new(["Day", "Week", "Month"]).unwrap();
/// group.set_listener(|checked, unchecked| {
///     println!("{} -> {}", unchecked.label(), checked.label());
/// });
///
/// assert!(group.select(2).unwrap());
/// assert_eq!(group.active().label(), "Month");
///
/// let saved = group.capture_state();
/// let mut rebuilt = ToggleGroup::new(["Day", "Week", "Month"]).unwrap();
/// rebuilt.restore_state(saved);
/// assert_eq!(rebuilt.active_index(), 2);
/// ```
pub struct ToggleGroup {
    items: Vec<ToggleItem>,
    active: usize,
    listener: Option<Listener>,
    style: MultiButtonStyle,
    dirty: bool,
}

impl ToggleGroup {
    /// Build a group with one item per label. The first item starts active.
    pub fn new<I, S>(labels: I) -> Result<Self, MultiButtonError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<ToggleItem> = labels.into_iter().map(ToggleItem::new).collect();
        let Some(first) = items.first_mut() else {
            return Err(MultiButtonError::EmptyLabels);
        };
        first.set_active(true);

        Ok(Self {
            items,
            active: 0,
            listener: None,
            style: MultiButtonStyle::default(),
            dirty: false,
        })
    }

    /// Attach appearance hints for the renderer.
    pub fn with_style(mut self, style: MultiButtonStyle) -> Self {
        self.style = style;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The active item. Always present.
    pub fn active(&self) -> &ToggleItem {
        &self.items[self.active]
    }

    /// Get the index of the active item.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Get all items in display order.
    pub fn items(&self) -> &[ToggleItem] {
        &self.items
    }

    /// Get the item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ToggleItem> {
        self.items.get(index)
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed group.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(ToggleItem::label)
    }

    /// Get the appearance hints for the renderer.
    pub fn style(&self) -> &MultiButtonStyle {
        &self.style
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Make the item at `index` the active one.
    ///
    /// Returns `Ok(true)` when the selection changed and the listener was
    /// notified, `Ok(false)` when the item was already active.
    pub fn select(&mut self, index: usize) -> Result<bool, MultiButtonError> {
        let len = self.items.len();
        if index >= len {
            return Err(MultiButtonError::IndexOutOfRange { index, len });
        }
        if index == self.active {
            return Ok(false);
        }

        let previous = self.set_active(index);
        debug!(
            "Toggle group selection {} -> {} ({:?})",
            previous,
            index,
            self.items[index].label()
        );

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.items[index], &self.items[previous]);
        }
        Ok(true)
    }

    /// Swap the active flag and return the previously active index.
    fn set_active(&mut self, index: usize) -> usize {
        let previous = self.active;
        self.items[previous].set_active(false);
        self.items[index].set_active(true);
        self.active = index;
        self.dirty = true;
        previous
    }

    // -------------------------------------------------------------------------
    // Listener
    // -------------------------------------------------------------------------

    /// Replace the change listener.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ToggleItem, &ToggleItem) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Check if a change listener is installed.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    // -------------------------------------------------------------------------
    // Saved state
    // -------------------------------------------------------------------------

    /// Capture the active index for a later [`restore_state`](Self::restore_state).
    pub fn capture_state(&self) -> SavedState {
        SavedState::new(self.active)
    }

    /// Re-apply a captured selection without notifying the listener.
    ///
    /// A position past the end (the label list shrank since capture) is
    /// clamped to the last item.
    pub fn restore_state(&mut self, state: SavedState) {
        let len = self.items.len();
        let mut index = state.selected_position();
        if index >= len {
            warn!(
                "Saved toggle position {} out of range for {} items, clamping",
                index, len
            );
            index = len - 1;
        }
        if index != self.active {
            self.set_active(index);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Whether the selection changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl fmt::Debug for ToggleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleGroup")
            .field("items", &self.items)
            .field("active", &self.active)
            .field("listener", &self.listener.is_some())
            .field("style", &self.style)
            .field("dirty", &self.dirty)
            .finish()
    }
}
