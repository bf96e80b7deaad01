//! Engine runtime state
//!
/// ## state/ Invariants
///
/// - `cursor` and `anchor` are byte offsets into the current buffer
///   snapshot and lie on character boundaries whenever the engine is not in
///   Insert mode.
/// - `anchor` is meaningful only in the visual modes; `cursor` is the
///   authoritative position there, while Normal and Insert mode defer to
///   the host surface's caret.
/// - `register` holds the most recently yanked text, never deleted text.
/// - State is never partially updated: each command handler runs to
///   completion before the next key is processed.

/// Mutable engine state shared by all command handlers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Single-slot yank register (empty initially)
    pub register: String,
    /// Fixed endpoint of a visual selection
    pub anchor: usize,
    /// Moving endpoint of a visual selection
    pub cursor: usize,
}

impl State {
    /// Create a new state with an empty register and origin offsets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
