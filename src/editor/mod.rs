//! Engine facade
//! Ties key translation, command execution, and engine state together
//!
/// ## editor/ Invariants
///
/// - One key event is consumed fully (translation, handler, state update)
///   before the next is looked at; there is no partial dispatch.
/// - The dispatcher's mode always equals the mode the last handler ended
///   in; handlers cannot leave the engine between modes.
/// - Keys the engine does not claim are reported as `PassThrough` and the
///   host surface applies its default interpretation.
use crate::clipboard::SystemClipboard;
use crate::command::{Command, Dispatch, Dispatcher};
use crate::error::Result;
use crate::executor::execute_command;
use crate::key::Key;
use crate::mode::Mode;
use crate::state::State;
use crate::surface::TextSurface;

/// What the host should do with a key after the engine has seen it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The engine handled (or deliberately swallowed) the key; the host
    /// must suppress its default interpretation
    Consumed,
    /// The engine did not claim the key
    PassThrough,
}

/// The modal editing engine
///
/// Owns the mode state machine, the pending-command buffer, the yank
/// register, and the visual anchor/cursor pair. Drives a [`TextSurface`]
/// host; holds no buffer or history of its own.
pub struct Engine {
    dispatcher: Dispatcher,
    state: State,
    clipboard: SystemClipboard,
}

impl Engine {
    /// Create an engine in Insert mode, with the system clipboard attached
    /// when one is available
    #[must_use]
    pub fn new() -> Self {
        Self::with_clipboard(SystemClipboard::detect())
    }

    /// Create an engine with an explicit clipboard handle (tests and
    /// embedded hosts pass [`SystemClipboard::disabled`])
    #[must_use]
    pub fn with_clipboard(clipboard: SystemClipboard) -> Self {
        Engine {
            dispatcher: Dispatcher::default(),
            state: State::new(),
            clipboard,
        }
    }

    /// Current mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.dispatcher.mode()
    }

    /// Current yank register contents
    #[must_use]
    pub fn register(&self) -> &str {
        &self.state.register
    }

    /// First key of a pending two-key command, if one is held
    #[must_use]
    pub fn pending_key(&self) -> Option<Key> {
        self.dispatcher.pending_key()
    }

    /// Process one key event against the host surface.
    ///
    /// Returns whether the host should suppress its default handling of the
    /// key. Errors come only from the host surface rejecting an operation.
    pub fn handle_key(
        &mut self,
        surface: &mut dyn TextSurface,
        key: Key,
    ) -> Result<KeyDisposition> {
        match self.dispatcher.translate_key(key) {
            Dispatch::PassThrough => Ok(KeyDisposition::PassThrough),
            Dispatch::Swallow => Ok(KeyDisposition::Consumed),
            Dispatch::Execute(cmd) => {
                self.execute(cmd, surface)?;
                Ok(KeyDisposition::Consumed)
            }
        }
    }

    fn execute(&mut self, cmd: Command, surface: &mut dyn TextSurface) -> Result<()> {
        let mode = execute_command(
            cmd,
            self.dispatcher.mode(),
            &mut self.state,
            surface,
            &mut self.clipboard,
        )?;
        self.dispatcher.set_mode(mode);
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
