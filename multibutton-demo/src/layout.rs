//! Horizontal layout of the toggle row and hit testing.

use unicode_width::UnicodeWidthStr;

/// Horizontal padding inside each button, per side.
const PADDING: u16 = 1;
/// Gap between neighbouring buttons.
const GAP: u16 = 1;

/// Screen rectangle of one button (single row high).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl ButtonRect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// Lay buttons out left to right starting at `(x, y)`.
pub fn layout_row<'a>(labels: impl IntoIterator<Item = &'a str>, x: u16, y: u16) -> Vec<ButtonRect> {
    let mut cursor = x;
    labels
        .into_iter()
        .map(|label| {
            let text_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
            let width = text_width.saturating_add(PADDING * 2);
            let rect = ButtonRect {
                x: cursor,
                y,
                width,
            };
            cursor = cursor.saturating_add(width).saturating_add(GAP);
            rect
        })
        .collect()
}

/// Index of the button under `(x, y)`, if any.
pub fn hit_test(rects: &[ButtonRect], x: u16, y: u16) -> Option<usize> {
    rects.iter().position(|rect| rect.contains(x, y))
}
