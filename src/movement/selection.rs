//! Mode-dependent selection spans
//!
//! Each editor mode represents the cursor as a different half-open byte
//! range over the buffer. Normal mode draws the caret as a one-character
//! block; visual mode spans anchor to cursor inclusive of the cursor's
//! character; visual-line mode spans whole lines.

use super::{line_range_at, next_boundary, prev_boundary};

/// The one-character block selection Normal mode places at `pos`.
///
/// Clamped into the buffer: an offset at or past the end selects the last
/// character. Returns `None` for an empty buffer, where there is nothing to
/// select and the caret state is left alone.
#[must_use]
pub fn char_span(text: &str, pos: usize) -> Option<(usize, usize)> {
    if text.is_empty() {
        return None;
    }
    let start = if pos >= text.len() {
        prev_boundary(text, text.len())
    } else {
        pos
    };
    Some((start, next_boundary(text, start)))
}

/// The visual-mode span for an anchor/cursor pair.
///
/// An inclusive-feeling range implemented as a half-open range one
/// character past the larger endpoint.
#[must_use]
pub fn visual_span(text: &str, anchor: usize, cursor: usize) -> (usize, usize) {
    let lo = anchor.min(cursor);
    let hi = anchor.max(cursor);
    (lo, next_boundary(text, hi))
}

/// The visual-line-mode span: the union of the anchor's full line and the
/// cursor's full line, exclusive of the final trailing newline.
#[must_use]
pub fn line_span(text: &str, anchor: usize, cursor: usize) -> (usize, usize) {
    let a = line_range_at(text, anchor);
    let c = line_range_at(text, cursor);
    (a.start.min(c.start), a.end.max(c.end))
}
