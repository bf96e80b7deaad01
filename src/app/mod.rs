//! Demo host application
//!
//! Embeds the modal engine over the in-memory reference surface and a
//! terminal backend. This is the glue the engine expects a host to supply:
//! native interpretation of passed-through keys, selection-aware rendering,
//! page persistence with a debounced autosave, and a window title derived
//! from the page's heading line.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::{timing, ui};
use crate::editor::{Engine, KeyDisposition};
use crate::error::Result;
use crate::key::Key;
use crate::mode::Mode;
use crate::movement::{line_range_at, next_boundary, prev_boundary};
use crate::page;
use crate::surface::{MemorySurface, TextSurface};
use crate::term::{Size, TerminalBackend};

/// The demo editor application
pub struct App<T: TerminalBackend> {
    term: T,
    engine: Engine,
    surface: MemorySurface,
    path: Option<PathBuf>,
    saved_revision: u64,
    last_change: Option<Instant>,
    top_line: usize,
    should_quit: bool,
}

impl<T: TerminalBackend> App<T> {
    /// Create an app over an empty, unbacked page
    pub fn new(term: T) -> Self {
        App {
            term,
            engine: Engine::new(),
            surface: MemorySurface::new(),
            path: None,
            saved_revision: 0,
            last_change: None,
            top_line: 0,
            should_quit: false,
        }
    }

    /// Create an app backed by a snapshot file.
    ///
    /// A missing or undecodable file yields an empty page; the path is kept
    /// so the next save creates it.
    pub fn open(term: T, path: PathBuf) -> Self {
        let mut app = Self::new(term);
        let text = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| page::decode_snapshot(&raw).ok())
            .unwrap_or_default();
        app.surface = MemorySurface::with_text(text);
        app.saved_revision = app.surface.revision();
        app.path = Some(path);
        app
    }

    /// Run the event loop until quit, restoring the terminal on the way out
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.term
            .init()
            .context("failed to initialize terminal")?;
        self.update_title();
        let result = self.event_loop();
        self.term.deinit();
        result
    }

    fn event_loop(&mut self) -> anyhow::Result<()> {
        while !self.should_quit {
            self.render().context("render failed")?;
            let timeout = Duration::from_millis(timing::POLL_TIMEOUT_MS);
            if let Some(key) = self.term.read_key(timeout)? {
                self.handle_key(key).context("key handling failed")?;
            }
            self.maybe_autosave().context("autosave failed")?;
        }
        Ok(())
    }

    /// Process one key: app chords first, then the engine, then the host's
    /// native interpretation for keys the engine passed through
    fn handle_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Ctrl('q') => {
                self.should_quit = true;
                return Ok(());
            }
            Key::Ctrl('s') => return self.save(),
            _ => {}
        }

        let revision_before = self.surface.revision();
        if self.engine.handle_key(&mut self.surface, key)? == KeyDisposition::PassThrough {
            self.native_edit(key)?;
        }
        if self.surface.revision() != revision_before {
            self.last_change = Some(Instant::now());
        }
        Ok(())
    }

    /// The host surface's default interpretation of a key the engine did
    /// not claim: plain editing, with native caret rules (a caret may rest
    /// at line end, unlike the engine's Normal-mode block)
    fn native_edit(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Char(ch) => {
                let mut buf = [0u8; 4];
                self.surface.insert_text(ch.encode_utf8(&mut buf))
            }
            Key::Enter => self.surface.insert_line_break(),
            Key::Tab => self.surface.insert_text(ui::TAB_SPACES),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_forward(),
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => {
                self.native_caret_move(key)
            }
            _ => Ok(()),
        }
    }

    fn backspace(&mut self) -> Result<()> {
        let (start, end) = self.surface.selection();
        if start == end {
            if start == 0 {
                return Ok(());
            }
            let text = self.surface.text();
            self.surface.set_selection(prev_boundary(&text, start), start)?;
        }
        self.surface.delete_selection()
    }

    fn delete_forward(&mut self) -> Result<()> {
        let (start, end) = self.surface.selection();
        if start == end {
            let text = self.surface.text();
            if start >= text.len() {
                return Ok(());
            }
            self.surface.set_selection(start, next_boundary(&text, start))?;
        }
        self.surface.delete_selection()
    }

    fn native_caret_move(&mut self, key: Key) -> Result<()> {
        let text = self.surface.text();
        let (start, end) = self.surface.selection();
        let caret = match key {
            // An active selection collapses to its edge first
            Key::ArrowLeft if start != end => start,
            Key::ArrowRight if start != end => end,
            Key::ArrowLeft => prev_boundary(&text, start),
            Key::ArrowRight => next_boundary(&text, start),
            Key::ArrowUp => native_vertical(&text, start, true),
            Key::ArrowDown => native_vertical(&text, start, false),
            _ => start,
        };
        self.surface.set_caret(caret)
    }

    /// Write the snapshot to the backing file (if any) and mark the buffer
    /// clean; also refreshes the window title, as the heading may have
    /// changed since the last save
    fn save(&mut self) -> Result<()> {
        if let Some(path) = &self.path {
            let encoded = page::encode_snapshot(&self.surface.text())?;
            fs::write(path, encoded)?;
        }
        self.saved_revision = self.surface.revision();
        self.last_change = None;
        self.update_title();
        Ok(())
    }

    /// Save once the buffer has been quiet for the debounce interval
    fn maybe_autosave(&mut self) -> Result<()> {
        if self.surface.revision() == self.saved_revision {
            return Ok(());
        }
        match self.last_change {
            Some(changed)
                if changed.elapsed() >= Duration::from_millis(timing::AUTOSAVE_DEBOUNCE_MS) =>
            {
                self.save()
            }
            _ => Ok(()),
        }
    }

    fn update_title(&mut self) {
        let text = self.surface.text();
        let title = page::title_of(&text).unwrap_or(ui::NO_NAME);
        let _ = self.term.set_title(title);
    }

    fn render(&mut self) -> Result<()> {
        let size = self.term.size()?;
        let text = self.surface.text();
        let (sel_start, sel_end) = self.surface.selection();
        let caret = self.surface.caret_offset().min(text.len());

        let visible_rows = size.rows.saturating_sub(1) as usize;
        let caret_row = text[..caret].matches('\n').count();
        if caret_row < self.top_line {
            self.top_line = caret_row;
        } else if visible_rows > 0 && caret_row >= self.top_line + visible_rows {
            self.top_line = caret_row + 1 - visible_rows;
        }

        self.term.hide_cursor()?;
        self.term.clear_screen()?;

        let mut offset = 0usize;
        let mut caret_screen = None;
        for (row, line) in text.split('\n').enumerate() {
            let line_start = offset;
            let line_end = offset + line.len();
            offset = line_end + 1;
            if row < self.top_line || row >= self.top_line + visible_rows {
                continue;
            }
            let screen_row = (row - self.top_line) as u16;
            self.term.move_cursor(screen_row, 0)?;
            self.draw_line(line, line_start, line_end, (sel_start, sel_end), size.cols)?;

            if self.engine.mode() == Mode::Insert
                && sel_start == sel_end
                && (line_start..=line_end).contains(&caret)
            {
                let col = UnicodeWidthStr::width(&text[line_start..caret]);
                let col = col.min(size.cols.saturating_sub(1) as usize) as u16;
                caret_screen = Some((screen_row, col));
            }
        }

        self.draw_status_line(&text, size)?;

        if let Some((row, col)) = caret_screen {
            self.term.move_cursor(row, col)?;
            self.term.show_cursor()?;
        }
        Ok(())
    }

    /// Draw one line, rendering the overlap with the selection in reverse
    /// video; a selected line separator shows as a reversed trailing space
    fn draw_line(
        &mut self,
        line: &str,
        line_start: usize,
        line_end: usize,
        (sel_start, sel_end): (usize, usize),
        cols: u16,
    ) -> Result<()> {
        let mut budget = cols as usize;
        let has_selection = sel_start < sel_end;
        let seg_start = sel_start.clamp(line_start, line_end) - line_start;
        let seg_end = sel_end.clamp(line_start, line_end) - line_start;

        if has_selection && seg_start < seg_end {
            self.write_fitted(&line[..seg_start], &mut budget)?;
            self.term.set_reverse_video(true)?;
            self.write_fitted(&line[seg_start..seg_end], &mut budget)?;
            self.term.set_reverse_video(false)?;
            self.write_fitted(&line[seg_end..], &mut budget)?;
        } else {
            self.write_fitted(line, &mut budget)?;
        }

        // The newline itself falls inside the selection
        if has_selection && sel_start <= line_end && line_end < sel_end && budget > 0 {
            self.term.set_reverse_video(true)?;
            self.term.write(b" ")?;
            self.term.set_reverse_video(false)?;
        }
        Ok(())
    }

    /// Write as much of `s` as fits in the remaining column budget
    fn write_fitted(&mut self, s: &str, budget: &mut usize) -> Result<()> {
        let mut fit = 0;
        for (i, ch) in s.char_indices() {
            let width = ch.width().unwrap_or(0);
            if width > *budget {
                break;
            }
            *budget -= width;
            fit = i + ch.len_utf8();
        }
        if fit > 0 {
            self.term.write(s[..fit].as_bytes())?;
        }
        Ok(())
    }

    fn draw_status_line(&mut self, text: &str, size: Size) -> Result<()> {
        if size.rows == 0 {
            return Ok(());
        }
        let title = page::title_of(text).unwrap_or(ui::NO_NAME);
        let dirty = if self.surface.revision() == self.saved_revision {
            ""
        } else {
            " *"
        };
        let mut content = format!(" {}{}  {}", title, dirty, self.engine.mode().label());
        let width = size.cols as usize;
        while UnicodeWidthStr::width(content.as_str()) > width {
            content.pop();
        }
        let pad = width - UnicodeWidthStr::width(content.as_str());
        content.extend(std::iter::repeat(' ').take(pad));

        self.term.move_cursor(size.rows - 1, 0)?;
        self.term.set_reverse_video(true)?;
        self.term.write(content.as_bytes())?;
        self.term.set_reverse_video(false)
    }
}

/// Native vertical caret motion: column preserved in characters, but the
/// caret may rest at the target line's end (host rules, not vim rules)
fn native_vertical(text: &str, pos: usize, upward: bool) -> usize {
    let line = line_range_at(text, pos);
    let target = if upward {
        if line.start == 0 {
            return pos;
        }
        line_range_at(text, line.start - 1)
    } else {
        if line.end >= text.len() {
            return pos;
        }
        line_range_at(text, line.end + 1)
    };
    let col = text[line.start..pos].chars().count();
    let slice = &text[target.start..target.end];
    let mut remaining = col;
    for (i, _) in slice.char_indices() {
        if remaining == 0 {
            return target.start + i;
        }
        remaining -= 1;
    }
    target.end
}
