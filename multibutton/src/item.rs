/// One selectable element of a [`ToggleGroup`](crate::ToggleGroup).
///
/// Items are created by the group and only the group flips their active flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    label: String,
    active: bool,
}

impl ToggleItem {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this item is the group's active item.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
