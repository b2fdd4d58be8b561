//! Keyboard and click routing for the toggle group.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::group::ToggleGroup;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
}

/// Key codes the group understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Convert a crossterm key event. Keys the group has no use for map to `None`.
    pub fn from_crossterm(event: KeyEvent) -> Option<Self> {
        let key = match event.code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        let modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        };
        Some(Self::new(key, modifiers))
    }
}

/// Whether an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl ToggleGroup {
    /// Handle a key press. Movement wraps around the ends of the row; Up and
    /// Down act as previous and next.
    ///
    /// Every change goes through [`select`](ToggleGroup::select), so the
    /// listener sees keyboard changes exactly like clicks.
    pub fn on_key(&mut self, key: &KeyCombo) -> EventResult {
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        let len = self.len();
        let current = self.active_index();
        let target = match key.key {
            Key::Left | Key::Up | Key::Char('h') | Key::Char('k') => {
                if current == 0 {
                    len - 1
                } else {
                    current - 1
                }
            }
            Key::Right | Key::Down | Key::Char('l') | Key::Char('j') => (current + 1) % len,
            Key::Home => 0,
            Key::End => len - 1,
            Key::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index >= len {
                    return EventResult::Ignored;
                }
                index
            }
            // Re-confirming the active item; nothing to change
            Key::Space | Key::Enter => return EventResult::Consumed,
            _ => return EventResult::Ignored,
        };

        if self.select(target).is_err() {
            return EventResult::Ignored;
        }
        EventResult::Consumed
    }

    /// Handle a click on the item at `index`.
    pub fn on_click(&mut self, index: usize) -> EventResult {
        match self.select(index) {
            Ok(_) => EventResult::Consumed,
            Err(_) => EventResult::Ignored,
        }
    }
}
