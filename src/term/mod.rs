//! Terminal backend abstraction
//! Provides a platform-agnostic interface for the demo host's terminal
//!
/// ## term/ Invariants
///
/// - Terminal handling is isolated behind a strict abstraction boundary.
/// - Raw mode is enabled before input processing begins.
/// - Terminal state is restored on normal exit; restoration is best-effort.
/// - Key reads are polled with a timeout so the host loop can run its
///   autosave debounce between keys.
/// - Terminal code never depends on engine internals.
use std::time::Duration;

use crate::error::Result;
use crate::key::Key;

/// Terminal size information
#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend {
    /// Initialize terminal: alternate screen and raw mode
    fn init(&mut self) -> Result<()>;

    /// Restore terminal to its original state
    fn deinit(&mut self);

    /// Wait up to `timeout` for a keypress; `None` when the poll lapses
    fn read_key(&mut self, timeout: Duration) -> Result<Option<Key>>;

    /// Write bytes to the terminal
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Get terminal dimensions
    fn size(&self) -> Result<Size>;

    /// Clear entire screen and home the cursor
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specified position (0-indexed row, column)
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    /// Hide cursor
    fn hide_cursor(&mut self) -> Result<()>;

    /// Show cursor
    fn show_cursor(&mut self) -> Result<()>;

    /// Toggle reverse video for subsequent writes (selection, status line)
    fn set_reverse_video(&mut self, on: bool) -> Result<()>;

    /// Set the terminal window title
    fn set_title(&mut self, title: &str) -> Result<()>;
}

pub mod crossterm;
