//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType, SetTitle},
};

use crate::constants::errors;
use crate::error::{ErrorKind, Result, VimodeError};
use crate::key::Key;
use crate::term::{Size, TerminalBackend};

fn term_err(context: &str, err: impl std::fmt::Display) -> VimodeError {
    VimodeError::new(
        ErrorKind::Terminal,
        errors::TERMINAL_IO,
        format!("{context}: {err}"),
    )
}

/// Crossterm-based terminal backend implementation
pub struct CrosstermTerminal {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Result<Self> {
        Ok(CrosstermTerminal {
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermTerminal {
    fn init(&mut self) -> Result<()> {
        execute!(stdout(), terminal::EnterAlternateScreen)
            .map_err(|e| term_err("failed to enter alternate screen", e))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| term_err("failed to enable raw mode", e))?;
        self.raw_mode_enabled = true;

        execute!(stdout(), cursor::Hide).map_err(|e| term_err("failed to hide cursor", e))?;
        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(stdout(), cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn read_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if !event::poll(timeout).map_err(|e| term_err("failed to poll events", e))? {
            return Ok(None);
        }
        match event::read().map_err(|e| term_err("failed to read event", e))? {
            Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                Ok(translate_key_event(key_event))
            }
            // Resize and key-release events just wake the loop for a redraw
            _ => Ok(None),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        stdout()
            .write_all(bytes)
            .map_err(|e| term_err("write failed", e))?;
        stdout().flush().map_err(|e| term_err("flush failed", e))?;
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        let (cols, rows) =
            terminal::size().map_err(|e| term_err("failed to get terminal size", e))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(stdout(), terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .map_err(|e| term_err("failed to clear screen", e))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        execute!(stdout(), cursor::MoveTo(col, row))
            .map_err(|e| term_err("failed to move cursor", e))
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(stdout(), cursor::Hide).map_err(|e| term_err("failed to hide cursor", e))
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(stdout(), cursor::Show).map_err(|e| term_err("failed to show cursor", e))
    }

    fn set_reverse_video(&mut self, on: bool) -> Result<()> {
        let attribute = if on {
            Attribute::Reverse
        } else {
            Attribute::NoReverse
        };
        execute!(stdout(), SetAttribute(attribute))
            .map_err(|e| term_err("failed to set attribute", e))
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title)).map_err(|e| term_err("failed to set title", e))
    }
}

/// Translate a crossterm `KeyEvent` to our Key enum; chords the engine has
/// no representation for yield `None`
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Option<Key> {
    let modifiers = key_event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);

    match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals deliver Enter as a character
            if ch == '\r' || ch == '\n' {
                return Some(Key::Enter);
            }
            if ctrl {
                Some(Key::Ctrl(ch))
            } else if meta {
                Some(Key::Meta(ch))
            } else {
                Some(Key::Char(ch))
            }
        }
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
#[path = "crossterm_tests.rs"]
mod tests;
