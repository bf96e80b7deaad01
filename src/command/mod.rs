//! Command dispatch and keybindings
//! Translates keys into editor commands based on current mode
//!
/// ## command/ Invariants
///
/// - `Command` represents editor-level intent, not key-level input.
/// - Translation is deterministic: one key in, one `Dispatch` out.
/// - The pending prefix is consumed by the very next translated key, or
///   cleared by a mode change; it never survives two commands.
/// - A bare letter that matches nothing is swallowed, so letters cannot
///   self-insert outside Insert mode.
/// - Every executed command leaves the engine in exactly one mode.
use crate::key::Key;
use crate::mode::Mode;

/// Editor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Mode transitions
    EnterInsert,
    AppendAfter,
    AppendEndOfLine,
    EnterVisual,
    EnterVisualLine,
    EnterNormal,

    // Register
    YankSelection,
    YankLine,
    PasteAfter,
    PasteBefore,

    // Editing
    DeleteSelection,
    DeleteToEndOfLine,
    DeleteLine,
    OpenBelow,
    OpenAbove,

    // History (delegated to the host surface)
    Undo,
    Redo,
}

/// What the engine decided to do with one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Execute a command; the key is consumed
    Execute(Command),
    /// Consume the key without executing anything (mode discipline)
    Swallow,
    /// Let the host surface apply its default interpretation
    PassThrough,
}

/// Command dispatcher state
///
/// Owns the current mode and the pending first key of a two-key command.
pub struct Dispatcher {
    mode: Mode,
    pending_key: Option<Key>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Dispatcher {
            mode,
            pending_key: None,
        }
    }

    /// Translate a key into a dispatch decision based on current mode
    pub fn translate_key(&mut self, key: Key) -> Dispatch {
        match self.mode {
            Mode::Insert => Self::translate_insert_mode(key),
            Mode::Normal => self.translate_normal_mode(key),
            Mode::Visual => Self::translate_visual_mode(key),
            Mode::VisualLine => Self::translate_visual_line_mode(key),
        }
    }

    /// Insert mode claims only Escape; everything else is host business
    fn translate_insert_mode(key: Key) -> Dispatch {
        match key {
            Key::Escape => Dispatch::Execute(Command::EnterNormal),
            _ => Dispatch::PassThrough,
        }
    }

    fn translate_normal_mode(&mut self, key: Key) -> Dispatch {
        // Modifier chords are not intercepted, with the single exception of
        // Ctrl+R for redo. The pending prefix is left untouched here.
        match key {
            Key::Ctrl('r') => return Dispatch::Execute(Command::Redo),
            Key::Ctrl(_) | Key::Meta(_) => return Dispatch::PassThrough,
            _ => {}
        }

        // Resolve a held prefix: the same key completes the compound
        // command, any other key clears the prefix and dispatches fresh
        if let Some(pending) = self.pending_key.take() {
            if let Some(cmd) = Self::complete_sequence(pending, key) {
                return Dispatch::Execute(cmd);
            }
        }

        match key {
            Key::Char('d') => {
                // First half of 'dd'; wait for the completing key
                self.pending_key = Some(key);
                Dispatch::Swallow
            }
            Key::Char('i') => Dispatch::Execute(Command::EnterInsert),
            Key::Char('a') => Dispatch::Execute(Command::AppendAfter),
            Key::Char('A') => Dispatch::Execute(Command::AppendEndOfLine),
            Key::Char('v') => Dispatch::Execute(Command::EnterVisual),
            Key::Char('V') => Dispatch::Execute(Command::EnterVisualLine),
            Key::Char('Y') => Dispatch::Execute(Command::YankLine),
            Key::Char('D') => Dispatch::Execute(Command::DeleteToEndOfLine),
            Key::Char('h') => Dispatch::Execute(Command::MoveLeft),
            Key::Char('j') => Dispatch::Execute(Command::MoveDown),
            Key::Char('k') => Dispatch::Execute(Command::MoveUp),
            Key::Char('l') => Dispatch::Execute(Command::MoveRight),
            Key::Char('o') => Dispatch::Execute(Command::OpenBelow),
            Key::Char('O') => Dispatch::Execute(Command::OpenAbove),
            Key::Char('u') => Dispatch::Execute(Command::Undo),
            Key::Char('p') => Dispatch::Execute(Command::PasteAfter),
            Key::Char('P') => Dispatch::Execute(Command::PasteBefore),
            _ if key.is_bare_letter() => Dispatch::Swallow,
            _ => Dispatch::PassThrough,
        }
    }

    fn translate_visual_mode(key: Key) -> Dispatch {
        match key {
            Key::Ctrl(_) | Key::Meta(_) => Dispatch::PassThrough,
            Key::Escape | Key::Char('v') => Dispatch::Execute(Command::EnterNormal),
            Key::Char('y') => Dispatch::Execute(Command::YankSelection),
            Key::Char('d') => Dispatch::Execute(Command::DeleteSelection),
            Key::Char('h') => Dispatch::Execute(Command::MoveLeft),
            Key::Char('j') => Dispatch::Execute(Command::MoveDown),
            Key::Char('k') => Dispatch::Execute(Command::MoveUp),
            Key::Char('l') => Dispatch::Execute(Command::MoveRight),
            _ if key.is_bare_letter() => Dispatch::Swallow,
            _ => Dispatch::PassThrough,
        }
    }

    fn translate_visual_line_mode(key: Key) -> Dispatch {
        match key {
            Key::Ctrl(_) | Key::Meta(_) => Dispatch::PassThrough,
            Key::Escape | Key::Char('V') => Dispatch::Execute(Command::EnterNormal),
            Key::Char('y') => Dispatch::Execute(Command::YankSelection),
            Key::Char('d') => Dispatch::Execute(Command::DeleteSelection),
            Key::Char('j') => Dispatch::Execute(Command::MoveDown),
            Key::Char('k') => Dispatch::Execute(Command::MoveUp),
            _ if key.is_bare_letter() => Dispatch::Swallow,
            _ => Dispatch::PassThrough,
        }
    }

    fn complete_sequence(first: Key, second: Key) -> Option<Command> {
        match (first, second) {
            (Key::Char('d'), Key::Char('d')) => Some(Command::DeleteLine),
            _ => None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode, clearing any pending key
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pending_key = None;
    }

    #[must_use]
    pub fn pending_key(&self) -> Option<Key> {
        self.pending_key
    }
}

impl Default for Dispatcher {
    /// The engine starts in Insert mode
    fn default() -> Self {
        Self::new(Mode::Insert)
    }
}
