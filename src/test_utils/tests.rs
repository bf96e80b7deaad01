//! Tests for the test utilities themselves

use crate::surface::TextSurface;
use crate::test_utils::{RecordingSurface, SurfaceOp};

#[test]
fn test_recording_surface_records_and_delegates() {
    let mut surface = RecordingSurface::with_text("abc");
    surface.set_caret(1).unwrap();
    surface.insert_text("x").unwrap();

    assert_eq!(surface.text(), "axbc");
    assert_eq!(surface.ops, vec![SurfaceOp::SetCaret(1), SurfaceOp::InsertText]);
    assert_eq!(surface.mutation_count(), 1);
}

#[test]
fn test_clear_resets_recording_only() {
    let mut surface = RecordingSurface::with_text("abc");
    surface.set_caret(1).unwrap();
    surface.clear();
    assert!(surface.ops.is_empty());
    assert_eq!(surface.selection(), (1, 1));
}
