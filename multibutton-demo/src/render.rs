//! Draws the toggle row with crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use multibutton::{Rgb, ToggleGroup};

use crate::layout::ButtonRect;

const HELP: &str = "←/→ or h/l move · 1-9 pick · click to select · q quits";

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Redraw the whole screen: the row, the last change and a help line.
pub fn draw<W: Write>(
    out: &mut W,
    group: &ToggleGroup,
    rects: &[ButtonRect],
    status: Option<&str>,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let style = group.style();
    let len = group.len();

    for (index, (item, rect)) in group.items().iter().zip(rects).enumerate() {
        queue!(out, MoveTo(rect.x, rect.y))?;

        let background = style.resolve_background(index, len, item.is_active());
        if let Some(bg) = background {
            queue!(out, SetBackgroundColor(color(bg)))?;
        }
        if let Some(fg) = style.text {
            queue!(out, SetForegroundColor(color(fg)))?;
        }
        if item.is_active() {
            queue!(out, SetAttribute(Attribute::Bold))?;
            if style.active_background.is_none() {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
        }

        queue!(
            out,
            Print(format!(" {} ", item.label())),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }

    let row = rects.first().map(|r| r.y).unwrap_or(0);
    let left = rects.first().map(|r| r.x).unwrap_or(0);

    if let Some(status) = status {
        queue!(out, MoveTo(left, row + 2), Print(status))?;
    }
    queue!(
        out,
        MoveTo(left, row + 4),
        SetAttribute(Attribute::Dim),
        Print(HELP),
        SetAttribute(Attribute::Reset)
    )?;

    out.flush()
}
