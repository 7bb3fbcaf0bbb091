//! Identify keyboard keys.
use smol_str::SmolStr;

/// A key on the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key<C = SmolStr> {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user,
    /// taking into account the user's current locale setting.
    Character(C),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Convert `Key::Character(SmolStr)` to `Key::Character(&str)` to make it
    /// easier to match on.
    pub fn as_ref(&self) -> Key<&str> {
        match self {
            Self::Named(named) => Key::Named(*named),
            Self::Character(c) => Key::Character(c.as_ref()),
            Self::Unidentified => Key::Unidentified,
        }
    }

    /// Returns the first character of a [`Key::Character`], lowercased.
    ///
    /// Shortcut matching is case-insensitive.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Character(c) => c.chars().next().map(|c| c.to_ascii_lowercase()),
            _ => None,
        }
    }
}

impl From<Named> for Key {
    fn from(named: Named) -> Self {
        Self::Named(named)
    }
}

/// A named key.
///
/// Only the keys a menu reacts to are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Named {
    /// The `Alt` (Alternative) key.
    Alt,
    /// The `Control` or `Ctrl` key.
    Control,
    /// The `Shift` key.
    Shift,
    /// The Windows, ⌘, or other OS symbol key.
    Super,
    /// The `Enter` or `↵` key.
    Enter,
    /// The Horizontal Tabulation `Tab` key.
    Tab,
    /// The space bar.
    Space,
    /// The down arrow key.
    ArrowDown,
    /// The left arrow key.
    ArrowLeft,
    /// The right arrow key.
    ArrowRight,
    /// The up arrow key.
    ArrowUp,
    /// The End key.
    End,
    /// The Home key.
    Home,
    /// The `Escape` or `Esc` key.
    Escape,
}
