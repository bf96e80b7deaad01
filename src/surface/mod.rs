//! Host text surface abstraction
//!
//! The engine never owns the text it edits. It drives a host surface (an
//! editable text widget, a DOM element, an in-memory buffer) through this
//! trait, and recomputes every position from a fresh `text()` snapshot.
//!
/// ## surface/ Invariants
///
/// - Offsets are UTF-8 byte offsets on character boundaries; hosts reject
///   anything else rather than clamping silently.
/// - `selection()` is a half-open, ordered range; a collapsed caret is a
///   range with `start == end`.
/// - Mutations collapse the selection to the mutation point and must bump
///   the host's change signal so listeners (autosave) can observe edits.
/// - Undo/redo history belongs to the host; the engine never records edits.
use crate::error::Result;

pub mod memory;

pub use memory::MemorySurface;

/// Interface the engine requires from its host text surface
pub trait TextSurface {
    /// Current full buffer content
    fn text(&self) -> String;

    /// Current selection as a half-open byte range (collapsed when equal)
    fn selection(&self) -> (usize, usize);

    /// Caret position: the start of the current selection
    fn caret_offset(&self) -> usize {
        self.selection().0
    }

    /// Text covered by the current selection
    fn selection_text(&self) -> String {
        let (start, end) = self.selection();
        self.text()[start..end].to_string()
    }

    /// Move the caret to `offset`, collapsed
    fn set_caret(&mut self, offset: usize) -> Result<()>;

    /// Select the half-open range `[start, end)`
    fn set_selection(&mut self, start: usize, end: usize) -> Result<()>;

    /// Remove the currently selected text, collapsing to the removal point
    fn delete_selection(&mut self) -> Result<()>;

    /// Insert literal text at the caret, replacing any active selection;
    /// the caret ends up after the inserted text
    fn insert_text(&mut self, text: &str) -> Result<()>;

    /// Insert exactly one line separator
    fn insert_line_break(&mut self) -> Result<()> {
        self.insert_text("\n")
    }

    /// Step the host's native edit history back once (no-op at the start)
    fn native_undo(&mut self) -> Result<()>;

    /// Step the host's native edit history forward once (no-op at the end)
    fn native_redo(&mut self) -> Result<()>;
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
