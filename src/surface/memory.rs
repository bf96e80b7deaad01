//! In-memory reference host surface

use crate::constants::errors;
use crate::error::{ErrorKind, Result, VimodeError};
use crate::surface::TextSurface;

/// One entry in the native edit history
#[derive(Debug, Clone)]
struct Snapshot {
    text: String,
    selection: (usize, usize),
}

/// A host surface over a plain `String`.
///
/// Provides the full `TextSurface` contract, including a snapshot-based
/// native undo/redo history and a monotonic revision counter as the change
/// signal for autosave listeners. Offsets are validated strictly: an
/// out-of-bounds or mid-character offset is a `Surface` error, never a
/// silent clamp.
#[derive(Debug, Default)]
pub struct MemorySurface {
    text: String,
    selection: (usize, usize),
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    revision: u64,
}

impl MemorySurface {
    /// Create an empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface over existing content, caret at the start
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        MemorySurface {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Monotonic change counter; bumped by every content mutation,
    /// including undo and redo
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn validate_offset(&self, offset: usize) -> Result<()> {
        if offset > self.text.len() {
            return Err(VimodeError::new(
                ErrorKind::Surface,
                errors::OFFSET_OUT_OF_BOUNDS,
                format!("offset {} > len {}", offset, self.text.len()),
            ));
        }
        if !self.text.is_char_boundary(offset) {
            return Err(VimodeError::new(
                ErrorKind::Surface,
                errors::NOT_CHAR_BOUNDARY,
                format!("offset {offset} is not a character boundary"),
            ));
        }
        Ok(())
    }

    /// Record the current state as one undo step; a fresh edit clears the
    /// redo branch
    fn checkpoint(&mut self) {
        self.undo.push(Snapshot {
            text: self.text.clone(),
            selection: self.selection,
        });
        self.redo.clear();
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.text = snapshot.text;
        self.selection = snapshot.selection;
        self.revision += 1;
    }
}

impl TextSurface for MemorySurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn set_caret(&mut self, offset: usize) -> Result<()> {
        self.validate_offset(offset)?;
        self.selection = (offset, offset);
        Ok(())
    }

    fn set_selection(&mut self, start: usize, end: usize) -> Result<()> {
        self.validate_offset(start)?;
        self.validate_offset(end)?;
        if start > end {
            return Err(VimodeError::new(
                ErrorKind::Surface,
                errors::INVALID_RANGE,
                format!("selection start {start} > end {end}"),
            ));
        }
        self.selection = (start, end);
        Ok(())
    }

    fn delete_selection(&mut self) -> Result<()> {
        let (start, end) = self.selection;
        if start == end {
            return Ok(());
        }
        self.checkpoint();
        self.text.replace_range(start..end, "");
        self.selection = (start, start);
        self.revision += 1;
        Ok(())
    }

    fn insert_text(&mut self, text: &str) -> Result<()> {
        let (start, end) = self.selection;
        self.checkpoint();
        if start != end {
            self.text.replace_range(start..end, "");
        }
        self.text.insert_str(start, text);
        let caret = start + text.len();
        self.selection = (caret, caret);
        self.revision += 1;
        Ok(())
    }

    fn native_undo(&mut self) -> Result<()> {
        if let Some(snapshot) = self.undo.pop() {
            self.redo.push(Snapshot {
                text: std::mem::take(&mut self.text),
                selection: self.selection,
            });
            self.restore(snapshot);
        }
        Ok(())
    }

    fn native_redo(&mut self) -> Result<()> {
        if let Some(snapshot) = self.redo.pop() {
            self.undo.push(Snapshot {
                text: std::mem::take(&mut self.text),
                selection: self.selection,
            });
            self.restore(snapshot);
        }
        Ok(())
    }
}
