//! Tests for the host surface contract and the in-memory reference host

use crate::surface::{MemorySurface, TextSurface};

#[test]
fn test_new_surface_is_empty() {
    let surface = MemorySurface::new();
    assert_eq!(surface.text(), "");
    assert_eq!(surface.selection(), (0, 0));
    assert_eq!(surface.revision(), 0);
}

#[test]
fn test_caret_offset_is_selection_start() {
    let mut surface = MemorySurface::with_text("hello");
    surface.set_selection(1, 4).unwrap();
    assert_eq!(surface.caret_offset(), 1);
    assert_eq!(surface.selection_text(), "ell");
}

#[test]
fn test_set_caret_rejects_out_of_bounds() {
    let mut surface = MemorySurface::with_text("ab");
    assert!(surface.set_caret(3).is_err());
    assert!(surface.set_caret(2).is_ok());
}

#[test]
fn test_set_caret_rejects_mid_character() {
    let mut surface = MemorySurface::with_text("€");
    assert!(surface.set_caret(1).is_err());
    assert!(surface.set_caret(3).is_ok());
}

#[test]
fn test_set_selection_rejects_inverted_range() {
    let mut surface = MemorySurface::with_text("abc");
    assert!(surface.set_selection(2, 1).is_err());
}

#[test]
fn test_delete_selection_removes_range() {
    let mut surface = MemorySurface::with_text("hello world");
    surface.set_selection(5, 11).unwrap();
    surface.delete_selection().unwrap();
    assert_eq!(surface.text(), "hello");
    assert_eq!(surface.selection(), (5, 5));
}

#[test]
fn test_delete_collapsed_selection_is_noop() {
    let mut surface = MemorySurface::with_text("abc");
    surface.set_caret(1).unwrap();
    let before = surface.revision();
    surface.delete_selection().unwrap();
    assert_eq!(surface.text(), "abc");
    assert_eq!(surface.revision(), before);
}

#[test]
fn test_insert_text_at_caret() {
    let mut surface = MemorySurface::with_text("ac");
    surface.set_caret(1).unwrap();
    surface.insert_text("b").unwrap();
    assert_eq!(surface.text(), "abc");
    assert_eq!(surface.selection(), (2, 2));
}

#[test]
fn test_insert_text_replaces_active_selection() {
    let mut surface = MemorySurface::with_text("abcdef");
    surface.set_selection(1, 5).unwrap();
    surface.insert_text("X").unwrap();
    assert_eq!(surface.text(), "aXf");
    assert_eq!(surface.selection(), (2, 2));
}

#[test]
fn test_insert_line_break() {
    let mut surface = MemorySurface::with_text("ab");
    surface.set_caret(1).unwrap();
    surface.insert_line_break().unwrap();
    assert_eq!(surface.text(), "a\nb");
    assert_eq!(surface.caret_offset(), 2);
}

#[test]
fn test_native_undo_restores_text_and_selection() {
    let mut surface = MemorySurface::with_text("hello");
    surface.set_selection(0, 5).unwrap();
    surface.delete_selection().unwrap();
    assert_eq!(surface.text(), "");

    surface.native_undo().unwrap();
    assert_eq!(surface.text(), "hello");
    assert_eq!(surface.selection(), (0, 5));
}

#[test]
fn test_native_redo_after_undo() {
    let mut surface = MemorySurface::with_text("ab");
    surface.set_caret(2).unwrap();
    surface.insert_text("c").unwrap();
    surface.native_undo().unwrap();
    assert_eq!(surface.text(), "ab");
    surface.native_redo().unwrap();
    assert_eq!(surface.text(), "abc");
}

#[test]
fn test_fresh_edit_clears_redo_branch() {
    let mut surface = MemorySurface::with_text("a");
    surface.set_caret(1).unwrap();
    surface.insert_text("b").unwrap();
    surface.native_undo().unwrap();
    surface.insert_text("c").unwrap();
    surface.native_redo().unwrap();
    assert_eq!(surface.text(), "ac");
}

#[test]
fn test_undo_redo_at_history_edges_are_noops() {
    let mut surface = MemorySurface::with_text("x");
    surface.native_undo().unwrap();
    surface.native_redo().unwrap();
    assert_eq!(surface.text(), "x");
}

#[test]
fn test_revision_increases_across_mutations_and_undo() {
    let mut surface = MemorySurface::with_text("a");
    let r0 = surface.revision();
    surface.set_caret(1).unwrap();
    surface.insert_text("b").unwrap();
    let r1 = surface.revision();
    assert!(r1 > r0);
    surface.native_undo().unwrap();
    assert!(surface.revision() > r1);
}
