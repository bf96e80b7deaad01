//! Tests for the engine facade

use crate::clipboard::SystemClipboard;
use crate::editor::{Engine, KeyDisposition};
use crate::key::Key;
use crate::mode::Mode;
use crate::surface::{MemorySurface, TextSurface};

fn engine() -> Engine {
    Engine::with_clipboard(SystemClipboard::disabled())
}

/// Feed a string of keys, asserting each one is consumed
fn press_all(engine: &mut Engine, surface: &mut MemorySurface, keys: &str) {
    for ch in keys.chars() {
        let disposition = engine.handle_key(surface, Key::Char(ch)).unwrap();
        assert_eq!(disposition, KeyDisposition::Consumed, "key {ch:?}");
    }
}

#[test]
fn test_engine_starts_in_insert_mode() {
    let engine = engine();
    assert_eq!(engine.mode(), Mode::Insert);
    assert_eq!(engine.register(), "");
    assert_eq!(engine.pending_key(), None);
}

#[test]
fn test_insert_mode_passes_typing_through() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("ab");

    assert_eq!(
        engine.handle_key(&mut surface, Key::Char('x')).unwrap(),
        KeyDisposition::PassThrough
    );
    assert_eq!(
        engine.handle_key(&mut surface, Key::Enter).unwrap(),
        KeyDisposition::PassThrough
    );
    assert_eq!(surface.text(), "ab");
}

#[test]
fn test_escape_enters_normal_with_block_caret() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("hello");
    surface.set_caret(2).unwrap();

    let disposition = engine.handle_key(&mut surface, Key::Escape).unwrap();
    assert_eq!(disposition, KeyDisposition::Consumed);
    assert_eq!(engine.mode(), Mode::Normal);
    assert_eq!(surface.selection(), (2, 3));
}

#[test]
fn test_escape_on_empty_buffer() {
    let mut engine = engine();
    let mut surface = MemorySurface::new();

    engine.handle_key(&mut surface, Key::Escape).unwrap();
    assert_eq!(engine.mode(), Mode::Normal);
    assert_eq!(surface.selection(), (0, 0));
}

#[test]
fn test_unmapped_letters_are_consumed_in_normal_mode() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("abc");
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    assert_eq!(
        engine.handle_key(&mut surface, Key::Char('x')).unwrap(),
        KeyDisposition::Consumed
    );
    assert_eq!(surface.text(), "abc");
}

#[test]
fn test_delete_line_sequence() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("a\nb\nc");
    surface.set_caret(2).unwrap();
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "dd");
    assert_eq!(surface.text(), "a\nc");
    assert_eq!(engine.mode(), Mode::Normal);
}

#[test]
fn test_delete_line_on_sole_line() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("hello");
    surface.set_caret(4).unwrap();
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "dd");
    assert_eq!(surface.text(), "");
    assert_eq!(engine.mode(), Mode::Normal);
}

#[test]
fn test_interrupted_delete_sequence_runs_fresh_command() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("ab\ncd");
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    engine.handle_key(&mut surface, Key::Char('d')).unwrap();
    assert_eq!(engine.pending_key(), Some(Key::Char('d')));
    // 'l' clears the prefix and moves right instead
    engine.handle_key(&mut surface, Key::Char('l')).unwrap();
    assert_eq!(engine.pending_key(), None);
    assert_eq!(surface.text(), "ab\ncd");
    assert_eq!(surface.selection(), (1, 2));
}

#[test]
fn test_visual_line_extend_and_yank_flow() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("one\ntwo\nthree");
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "Vjy");
    assert_eq!(engine.register(), "one\ntwo");
    assert_eq!(engine.mode(), Mode::Normal);
}

#[test]
fn test_visual_toggle_re_enters_from_new_caret() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("abcdef");
    surface.set_caret(3).unwrap();
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "v");
    assert_eq!(engine.mode(), Mode::Visual);
    assert_eq!(surface.selection(), (0, 4));
    // 'v' again exits; the caret block lands at the selection start
    press_all(&mut engine, &mut surface, "v");
    assert_eq!(engine.mode(), Mode::Normal);
    assert_eq!(surface.selection(), (0, 1));
    // A third 'v' re-derives the anchor from the new caret
    press_all(&mut engine, &mut surface, "v");
    assert_eq!(engine.mode(), Mode::Visual);
    assert_eq!(surface.selection(), (0, 1));
}

#[test]
fn test_yank_delete_paste_flow() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("abc");
    surface.set_caret(0).unwrap();
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "Y");
    assert_eq!(engine.register(), "abc");
    press_all(&mut engine, &mut surface, "dd");
    assert_eq!(surface.text(), "");
    // The register survives the delete
    assert_eq!(engine.register(), "abc");
    press_all(&mut engine, &mut surface, "p");
    assert_eq!(surface.text(), "abc");
    assert_eq!(engine.mode(), Mode::Normal);
}

#[test]
fn test_insert_round_trip_via_open_below() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("ab");
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "o");
    assert_eq!(engine.mode(), Mode::Insert);
    assert_eq!(surface.text(), "ab\n");
    // Typing is host business again
    assert_eq!(
        engine.handle_key(&mut surface, Key::Char('c')).unwrap(),
        KeyDisposition::PassThrough
    );
}

#[test]
fn test_ctrl_r_redoes_only_in_normal_mode() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("abc");
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    press_all(&mut engine, &mut surface, "dd");
    assert_eq!(surface.text(), "");
    press_all(&mut engine, &mut surface, "u");
    assert_eq!(surface.text(), "abc");

    let disposition = engine.handle_key(&mut surface, Key::Ctrl('r')).unwrap();
    assert_eq!(disposition, KeyDisposition::Consumed);
    assert_eq!(surface.text(), "");

    // In insert mode the chord is host business
    press_all(&mut engine, &mut surface, "i");
    assert_eq!(
        engine.handle_key(&mut surface, Key::Ctrl('r')).unwrap(),
        KeyDisposition::PassThrough
    );
}

#[test]
fn test_swallowed_keys_never_touch_the_surface() {
    use crate::test_utils::RecordingSurface;

    let mut engine = engine();
    let mut surface = RecordingSurface::with_text("abc");
    engine.handle_key(&mut surface, Key::Escape).unwrap();
    surface.clear();

    // Unmapped letter: consumed, but no surface call at all
    engine.handle_key(&mut surface, Key::Char('x')).unwrap();
    assert!(surface.ops.is_empty());

    // Prefix key: armed and swallowed without touching the surface
    engine.handle_key(&mut surface, Key::Char('d')).unwrap();
    assert!(surface.ops.is_empty());

    // Passed-through chord: still nothing
    engine.handle_key(&mut surface, Key::Meta('v')).unwrap();
    assert!(surface.ops.is_empty());
}

#[test]
fn test_motion_commands_never_mutate() {
    use crate::test_utils::RecordingSurface;

    let mut engine = engine();
    let mut surface = RecordingSurface::with_text("ab\ncd");
    engine.handle_key(&mut surface, Key::Escape).unwrap();
    surface.clear();

    for ch in "ljhk".chars() {
        engine.handle_key(&mut surface, Key::Char(ch)).unwrap();
    }
    assert_eq!(surface.mutation_count(), 0);
    assert!(!surface.ops.is_empty());
}

#[test]
fn test_other_modifier_chords_pass_through() {
    let mut engine = engine();
    let mut surface = MemorySurface::with_text("abc");
    engine.handle_key(&mut surface, Key::Escape).unwrap();

    assert_eq!(
        engine.handle_key(&mut surface, Key::Meta('c')).unwrap(),
        KeyDisposition::PassThrough
    );
    assert_eq!(
        engine.handle_key(&mut surface, Key::Ctrl('z')).unwrap(),
        KeyDisposition::PassThrough
    );
}
