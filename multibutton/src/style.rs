//! Appearance hints handed to whatever draws the group.

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-button colours for a multi button.
///
/// The last button may carry its own background (rounded end caps and the
/// like). When `background_end` is unset it falls back to `background`.
///
/// # Example
///
/// ```
/// use multibutton::{MultiButtonStyle, Rgb};
///
/// let style = MultiButtonStyle::new()
///     .background(Rgb::new(40, 40, 40))
///     .background_end(Rgb::new(60, 60, 60));
///
/// assert_eq!(style.background_for(0, 3), Some(Rgb::new(40, 40, 40)));
/// assert_eq!(style.background_for(2, 3), Some(Rgb::new(60, 60, 60)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiButtonStyle {
    pub background: Option<Rgb>,
    pub background_end: Option<Rgb>,
    pub active_background: Option<Rgb>,
    pub text: Option<Rgb>,
}

impl MultiButtonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn background_end(mut self, color: Rgb) -> Self {
        self.background_end = Some(color);
        self
    }

    pub fn active_background(mut self, color: Rgb) -> Self {
        self.active_background = Some(color);
        self
    }

    pub fn text(mut self, color: Rgb) -> Self {
        self.text = Some(color);
        self
    }

    /// Background for the button at `index` in a row of `len` buttons.
    pub fn background_for(&self, index: usize, len: usize) -> Option<Rgb> {
        if index + 1 == len {
            self.background_end.or(self.background)
        } else {
            self.background
        }
    }

    /// Background for a button, taking its active flag into account.
    pub fn resolve_background(&self, index: usize, len: usize, active: bool) -> Option<Rgb> {
        if active {
            self.active_background
                .or_else(|| self.background_for(index, len))
        } else {
            self.background_for(index, len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: Rgb = Rgb::new(10, 10, 10);
    const LIGHT: Rgb = Rgb::new(200, 200, 200);
    const ACCENT: Rgb = Rgb::new(0, 120, 215);

    #[test]
    fn end_background_falls_back_to_background() {
        let style = MultiButtonStyle::new().background(DARK);
        assert_eq!(style.background_for(0, 2), Some(DARK));
        assert_eq!(style.background_for(1, 2), Some(DARK));
    }

    #[test]
    fn end_background_only_applies_to_last() {
        let style = MultiButtonStyle::new().background(DARK).background_end(LIGHT);
        assert_eq!(style.background_for(0, 3), Some(DARK));
        assert_eq!(style.background_for(1, 3), Some(DARK));
        assert_eq!(style.background_for(2, 3), Some(LIGHT));
    }

    #[test]
    fn single_button_uses_end_background() {
        let style = MultiButtonStyle::new().background(DARK).background_end(LIGHT);
        assert_eq!(style.background_for(0, 1), Some(LIGHT));
    }

    #[test]
    fn active_background_overrides() {
        let style = MultiButtonStyle::new().background(DARK).active_background(ACCENT);
        assert_eq!(style.resolve_background(0, 2, true), Some(ACCENT));
        assert_eq!(style.resolve_background(0, 2, false), Some(DARK));
    }

    #[test]
    fn unstyled_has_no_colors() {
        let style = MultiButtonStyle::default();
        assert_eq!(style.resolve_background(0, 1, true), None);
        assert_eq!(style.text, None);
    }
}
