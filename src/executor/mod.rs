//! Command executor
//! Applies editor commands to the host surface
//!
/// ## executor/ Invariants
///
/// - Every handler recomputes positions from a fresh buffer snapshot; no
///   line boundary survives from a previous key.
/// - Each handler performs one logical edit or selection change and returns
///   the mode it ends in; there is no partially-applied command.
/// - Normal mode always leaves a one-character block selection on a
///   non-empty buffer; an empty buffer leaves the caret state alone.
/// - Only yanks touch the register; deletes never do.
/// - History commands delegate to the host surface and hold no edit state.
use crate::clipboard::SystemClipboard;
use crate::command::Command;
use crate::error::Result;
use crate::mode::Mode;
use crate::movement::{self, selection};
use crate::state::State;
use crate::surface::TextSurface;

/// Which side of the current selection a paste lands on
enum PasteSide {
    Before,
    After,
}

/// Execute one command against the host surface, returning the mode the
/// engine is in afterwards
pub fn execute_command(
    cmd: Command,
    mode: Mode,
    state: &mut State,
    surface: &mut dyn TextSurface,
    clipboard: &mut SystemClipboard,
) -> Result<Mode> {
    match cmd {
        Command::MoveLeft => step(mode, state, surface, movement::left),
        Command::MoveRight => step(mode, state, surface, movement::right),
        Command::MoveUp => step(mode, state, surface, movement::up),
        Command::MoveDown => step(mode, state, surface, movement::down),
        Command::EnterInsert => enter_insert_at_selection_start(surface),
        Command::AppendAfter => enter_insert_at_selection_end(surface),
        Command::AppendEndOfLine => append_end_of_line(mode, state, surface),
        Command::EnterVisual => enter_visual(mode, state, surface),
        Command::EnterVisualLine => enter_visual_line(mode, state, surface),
        Command::EnterNormal => enter_normal(surface),
        Command::YankSelection => yank_selection(state, surface, clipboard),
        Command::YankLine => yank_line(mode, state, surface, clipboard),
        Command::DeleteSelection => delete_selection(surface),
        Command::DeleteToEndOfLine => delete_to_end_of_line(mode, state, surface),
        Command::DeleteLine => delete_line(mode, state, surface),
        Command::OpenBelow => open_below(mode, state, surface),
        Command::OpenAbove => open_above(mode, state, surface),
        Command::PasteAfter => paste(state, surface, PasteSide::After),
        Command::PasteBefore => paste(state, surface, PasteSide::Before),
        Command::Undo => {
            surface.native_undo()?;
            enter_normal(surface)
        }
        Command::Redo => {
            surface.native_redo()?;
            enter_normal(surface)
        }
    }
}

/// The position a motion starts from: the host caret in Normal and Insert
/// mode, the engine's logical cursor in the visual modes
fn effective_position(mode: Mode, state: &State, surface: &dyn TextSurface) -> usize {
    match mode {
        Mode::Visual | Mode::VisualLine => state.cursor,
        Mode::Normal | Mode::Insert => surface.caret_offset(),
    }
}

/// Apply one motion function and redraw the mode's selection at the result
fn step(
    mode: Mode,
    state: &mut State,
    surface: &mut dyn TextSurface,
    motion: fn(&str, usize) -> Option<usize>,
) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    if let Some(new_pos) = motion(&text, pos) {
        move_to(mode, state, surface, &text, new_pos)?;
    }
    Ok(mode)
}

/// Move the logical cursor and re-derive the selection the current mode
/// requires at the new offset
fn move_to(
    mode: Mode,
    state: &mut State,
    surface: &mut dyn TextSurface,
    text: &str,
    new_pos: usize,
) -> Result<()> {
    state.cursor = new_pos;
    match mode {
        Mode::Normal | Mode::Insert => select_char_at(surface, text, new_pos),
        Mode::Visual => {
            let (start, end) = selection::visual_span(text, state.anchor, new_pos);
            surface.set_selection(start, end)
        }
        Mode::VisualLine => {
            let (start, end) = selection::line_span(text, state.anchor, new_pos);
            surface.set_selection(start, end)
        }
    }
}

/// Place the Normal-mode one-character block selection at `pos`
fn select_char_at(surface: &mut dyn TextSurface, text: &str, pos: usize) -> Result<()> {
    match selection::char_span(text, pos) {
        Some((start, end)) => surface.set_selection(start, end),
        None => Ok(()),
    }
}

/// Re-select the character at the host caret (Normal-mode block caret)
fn reselect_caret(surface: &mut dyn TextSurface) -> Result<()> {
    let text = surface.text();
    let pos = surface.caret_offset();
    select_char_at(surface, &text, pos)
}

fn enter_normal(surface: &mut dyn TextSurface) -> Result<Mode> {
    reselect_caret(surface)?;
    Ok(Mode::Normal)
}

fn enter_insert_at_selection_start(surface: &mut dyn TextSurface) -> Result<Mode> {
    let (start, _) = surface.selection();
    surface.set_caret(start)?;
    Ok(Mode::Insert)
}

fn enter_insert_at_selection_end(surface: &mut dyn TextSurface) -> Result<Mode> {
    let (_, end) = surface.selection();
    surface.set_caret(end)?;
    Ok(Mode::Insert)
}

fn append_end_of_line(mode: Mode, state: &State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    surface.set_caret(line.end)?;
    Ok(Mode::Insert)
}

fn enter_visual(mode: Mode, state: &mut State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    state.anchor = line.start;
    state.cursor = pos;
    let (start, end) = selection::visual_span(&text, state.anchor, pos);
    surface.set_selection(start, end)?;
    Ok(Mode::Visual)
}

fn enter_visual_line(mode: Mode, state: &mut State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    state.anchor = line.start;
    state.cursor = pos;
    surface.set_selection(line.start, line.end)?;
    Ok(Mode::VisualLine)
}

fn yank_selection(
    state: &mut State,
    surface: &mut dyn TextSurface,
    clipboard: &mut SystemClipboard,
) -> Result<Mode> {
    state.register = surface.selection_text();
    clipboard.copy(&state.register);
    enter_normal(surface)
}

fn yank_line(
    mode: Mode,
    state: &mut State,
    surface: &mut dyn TextSurface,
    clipboard: &mut SystemClipboard,
) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    state.register = text[line.start..line.end].to_string();
    clipboard.copy(&state.register);
    enter_normal(surface)
}

fn delete_selection(surface: &mut dyn TextSurface) -> Result<Mode> {
    surface.delete_selection()?;
    enter_normal(surface)
}

fn delete_to_end_of_line(mode: Mode, state: &State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    if pos < line.end {
        surface.set_selection(pos, line.end)?;
        surface.delete_selection()?;
    }
    enter_normal(surface)
}

fn delete_line(mode: Mode, state: &State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    if text.is_empty() {
        return enter_normal(surface);
    }
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    let (start, end) = if line.end >= text.len() {
        // Last line: consume the preceding newline instead of the trailing
        // one, so deletion doesn't leave a dangling empty final line.
        // Deleting the first line of a multi-line buffer gets no such
        // treatment; the asymmetry is intentional.
        (line.start.saturating_sub(1), line.end)
    } else {
        (line.start, line.end + 1)
    };
    surface.set_selection(start, end)?;
    surface.delete_selection()?;
    enter_normal(surface)
}

fn open_below(mode: Mode, state: &State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    surface.set_caret(line.end)?;
    surface.insert_line_break()?;
    Ok(Mode::Insert)
}

fn open_above(mode: Mode, state: &State, surface: &mut dyn TextSurface) -> Result<Mode> {
    let text = surface.text();
    let pos = effective_position(mode, state, surface).min(text.len());
    let line = movement::line_range_at(&text, pos);
    surface.set_caret(line.start)?;
    surface.insert_line_break()?;
    // The caret returns to the original line start so the fresh blank line
    // precedes the line it was opened above
    surface.set_caret(line.start)?;
    Ok(Mode::Insert)
}

fn paste(state: &State, surface: &mut dyn TextSurface, side: PasteSide) -> Result<Mode> {
    if state.register.is_empty() {
        return Ok(Mode::Normal);
    }
    let (start, end) = surface.selection();
    let point = match side {
        PasteSide::Before => start,
        PasteSide::After => end,
    };
    surface.set_caret(point)?;
    surface.insert_text(&state.register)?;
    enter_normal(surface)
}
