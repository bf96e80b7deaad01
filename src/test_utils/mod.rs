//! Test utilities
//! Shared testing helpers and mocks

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::Result;
use crate::key::Key;
use crate::surface::{MemorySurface, TextSurface};
use crate::term::{Size, TerminalBackend};

/// Names of mutating/selection operations a surface performed, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    SetCaret(usize),
    SetSelection(usize, usize),
    DeleteSelection,
    InsertText,
    InsertLineBreak,
    NativeUndo,
    NativeRedo,
}

/// Host surface double that records every operation for verification,
/// delegating actual behavior to an in-memory surface
pub struct RecordingSurface {
    pub inner: MemorySurface,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create a recording surface over existing content
    pub fn with_text(text: &str) -> Self {
        RecordingSurface {
            inner: MemorySurface::with_text(text),
            ops: Vec::new(),
        }
    }

    /// Operations that mutate buffer content (as opposed to selection moves)
    pub fn mutation_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    SurfaceOp::DeleteSelection
                        | SurfaceOp::InsertText
                        | SurfaceOp::InsertLineBreak
                        | SurfaceOp::NativeUndo
                        | SurfaceOp::NativeRedo
                )
            })
            .count()
    }

    /// Clear recorded operations (useful between test phases)
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl TextSurface for RecordingSurface {
    fn text(&self) -> String {
        self.inner.text()
    }

    fn selection(&self) -> (usize, usize) {
        self.inner.selection()
    }

    fn set_caret(&mut self, offset: usize) -> Result<()> {
        self.ops.push(SurfaceOp::SetCaret(offset));
        self.inner.set_caret(offset)
    }

    fn set_selection(&mut self, start: usize, end: usize) -> Result<()> {
        self.ops.push(SurfaceOp::SetSelection(start, end));
        self.inner.set_selection(start, end)
    }

    fn delete_selection(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::DeleteSelection);
        self.inner.delete_selection()
    }

    fn insert_text(&mut self, text: &str) -> Result<()> {
        self.ops.push(SurfaceOp::InsertText);
        self.inner.insert_text(text)
    }

    fn insert_line_break(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::InsertLineBreak);
        self.inner.insert_line_break()
    }

    fn native_undo(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::NativeUndo);
        self.inner.native_undo()
    }

    fn native_redo(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::NativeRedo);
        self.inner.native_redo()
    }
}

/// Mock terminal backend for testing
/// Records all operations for verification and replays queued keys
pub struct MockTerminal {
    pub writes: Vec<Vec<u8>>,
    pub cursor_moves: Vec<(u16, u16)>,
    pub clear_screen_calls: usize,
    pub titles: Vec<String>,
    pub keys: VecDeque<Key>,
    pub size: (u16, u16),
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            writes: Vec::new(),
            cursor_moves: Vec::new(),
            clear_screen_calls: 0,
            titles: Vec::new(),
            keys: VecDeque::new(),
            size: (rows, cols),
        }
    }

    /// Queue keys to be returned by subsequent `read_key` calls
    pub fn queue_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn written_string(&self) -> String {
        let bytes: Vec<u8> = self.writes.iter().flatten().copied().collect();
        String::from_utf8_lossy(&bytes).to_string()
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn deinit(&mut self) {}

    fn read_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clear_screen_calls += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.cursor_moves.push((row, col));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_reverse_video(&mut self, _on: bool) -> Result<()> {
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.titles.push(title.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
