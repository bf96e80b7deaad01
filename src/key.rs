//! Key representation for engine input

/// Represents a decoded key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+R)
    Ctrl(char),
    /// Platform-primary modifier combination (Cmd on macOS, Win elsewhere)
    Meta(char),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
}

impl Key {
    /// Whether this is a bare ASCII letter with no modifier held.
    ///
    /// Unmatched letters are swallowed in non-Insert modes so they never
    /// self-insert while the engine is modal.
    #[must_use]
    pub fn is_bare_letter(self) -> bool {
        matches!(self, Key::Char(ch) if ch.is_ascii_alphabetic())
    }
}
