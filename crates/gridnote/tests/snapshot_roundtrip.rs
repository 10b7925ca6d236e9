//! Tests for snapshot derivation and replay

use gridnote::prelude::*;

fn addr(s: &str) -> CellAddress {
    CellAddress::parse(s).unwrap()
}

fn build_sheet() -> SheetEngine {
    let mut engine = SheetEngine::new();
    engine.on_cell_edited(addr("A1"), "5");
    engine.on_cell_edited(addr("B2"), "rent");
    engine.on_cell_edited(addr("A2"), "=A1+1");
    engine.on_cell_edited(addr("C1"), "=A2*2");
    engine
}

/// Snapshots separate literal cells from formula cells, keyed "row,col"
#[test]
fn test_snapshot_shape() {
    let engine = build_sheet();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.cells.get("0,0").map(String::as_str), Some("5"));
    assert_eq!(snapshot.cells.get("1,1").map(String::as_str), Some("rent"));
    assert_eq!(snapshot.cells.len(), 2);

    assert_eq!(
        snapshot.formulas.get("1,0").map(String::as_str),
        Some("=A1+1")
    );
    assert_eq!(
        snapshot.formulas.get("0,2").map(String::as_str),
        Some("=A2*2")
    );
    assert_eq!(snapshot.formulas.len(), 2);
}

/// Saving and reloading reproduces contents, formulas, and displays
#[test]
fn test_roundtrip_reproduces_sheet() {
    let engine = build_sheet();
    let snapshot = engine.snapshot();

    let mut restored = SheetEngine::new();
    restored.load_snapshot(&snapshot);

    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.raw_text(addr("A2")), "=A1+1");
    assert_eq!(restored.display_text(addr("A1")), "5");
    assert_eq!(restored.display_text(addr("A2")), "6");
    assert_eq!(restored.display_text(addr("C1")), "12");
    assert_eq!(restored.display_text(addr("B2")), "rent");
}

/// Loading is not a user edit: the dirty flag stays clear
#[test]
fn test_load_does_not_dirty() {
    let snapshot = build_sheet().snapshot();

    let mut restored = SheetEngine::new();
    restored.load_snapshot(&snapshot);
    assert!(!restored.is_dirty());

    // The first real edit after a load dirties as usual
    restored.on_cell_edited(addr("D1"), "1");
    assert!(restored.is_dirty());
}

/// Load emits a display update for every restored cell, formulas included
#[test]
fn test_load_emits_displays() {
    let snapshot = build_sheet().snapshot();

    let mut restored = SheetEngine::new();
    let updates = restored.load_snapshot(&snapshot);
    assert_eq!(updates.len(), 4);

    // C1 references A2, which sorts after it in the snapshot; the display
    // must still come out computed, not empty
    let c1 = updates.iter().find(|u| u.address == addr("C1")).unwrap();
    assert_eq!(c1.text, "12");
    assert_eq!(c1.alignment, Alignment::Right);
}

/// Propagation works identically after a reload
#[test]
fn test_dependencies_rebuilt_on_load() {
    let snapshot = build_sheet().snapshot();

    let mut restored = SheetEngine::new();
    restored.load_snapshot(&snapshot);

    let updates = restored.on_cell_edited(addr("A1"), "10");
    assert_eq!(updates.len(), 3);
    assert_eq!(restored.display_text(addr("A2")), "11");
    assert_eq!(restored.display_text(addr("C1")), "22");
}

/// Damaged snapshot entries are skipped, the rest of the sheet loads
#[test]
fn test_malformed_keys_are_skipped() {
    let mut snapshot = SheetSnapshot::new();
    snapshot.cells.insert("0,0".into(), "7".into());
    snapshot.cells.insert("not-a-key".into(), "junk".into());
    snapshot.cells.insert("99,99".into(), "junk".into());
    snapshot.formulas.insert("1,0".into(), "=A1".into());
    snapshot.formulas.insert("50,0".into(), "=A1".into());

    let mut engine = SheetEngine::new();
    let updates = engine.load_snapshot(&snapshot);

    assert_eq!(updates.len(), 2);
    assert_eq!(engine.display_text(addr("A1")), "7");
    assert_eq!(engine.display_text(addr("A2")), "7");
}

/// Loading replaces the previous sheet wholesale
#[test]
fn test_load_replaces_previous_contents() {
    let mut engine = SheetEngine::new();
    engine.on_cell_edited(addr("T50"), "leftover");

    let mut snapshot = SheetSnapshot::new();
    snapshot.cells.insert("0,0".into(), "fresh".into());
    engine.load_snapshot(&snapshot);

    assert_eq!(engine.display_text(addr("T50")), "");
    assert_eq!(engine.display_text(addr("A1")), "fresh");
    assert_eq!(engine.sheet().len(), 1);
}
