//! Keyboard shortcuts for tab navigation.

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `ArrowLeft`
    Left,
    /// `ArrowUp`
    Up,
    /// `ArrowRight`
    Right,
    /// `ArrowDown`
    Down,
    /// A digit key `0`-`9`
    Digit(u8),
    /// Anything else
    Other,
}

impl Key {
    /// Parses a `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowUp" | "Up" => Self::Up,
            "ArrowRight" | "Right" => Self::Right,
            "ArrowDown" | "Down" => Self::Down,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c
                        .to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .map_or(Self::Other, Self::Digit),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyInput {
    /// The key
    pub key: Key,
    /// Control held
    pub ctrl: bool,
    /// Meta (Command / Windows) held
    pub meta: bool,
    /// Alt / Option held
    pub alt: bool,
    /// Shift held
    pub shift: bool,
}

impl KeyInput {
    /// A press without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
        }
    }

    /// A press without modifiers, from the event's `key` string.
    pub fn from_key(key: &str) -> Self {
        Self::plain(Key::parse(key))
    }

    /// Whether any modifier is held. Shortcuts only fire on bare keys.
    pub const fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.alt || self.shift
    }
}

/// Outcome of mapping a key press onto the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Not a navigation key; leave the event alone.
    Ignored,
    /// A navigation key with nothing to activate.
    Consumed,
    /// Activate the tab at this index.
    Activate(usize),
}

/// Maps `key` onto a tab index.
///
/// `current` is the active tab, if any. Previous from the first tab (or from
/// no active tab) wraps to the last; next from the last wraps to the first.
/// Digits `1..=max_digit` select that 1-based tab when it exists.
pub fn target_tab_index(current: Option<usize>, tab_count: usize, key: Key, max_digit: u8) -> KeyAction {
    match key {
        Key::Left | Key::Up => match (current, tab_count) {
            (_, 0) => KeyAction::Consumed,
            (Some(index), _) if index > 0 && index < tab_count => KeyAction::Activate(index - 1),
            _ => KeyAction::Activate(tab_count - 1),
        },
        Key::Right | Key::Down => match (current, tab_count) {
            (_, 0) => KeyAction::Consumed,
            (Some(index), _) if index + 1 < tab_count => KeyAction::Activate(index + 1),
            _ => KeyAction::Activate(0),
        },
        Key::Digit(digit) if (1..=max_digit).contains(&digit) => {
            let index = usize::from(digit - 1);
            if index < tab_count {
                KeyAction::Activate(index)
            } else {
                KeyAction::Consumed
            }
        }
        Key::Digit(_) | Key::Other => KeyAction::Ignored,
    }
}
