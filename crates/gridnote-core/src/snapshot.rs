//! Persisted sheet snapshot
//!
//! The structure exchanged with the host application's save/load layer.
//! Only raw cell text is persisted; computed display values are transient
//! and recomputed after load.

use std::collections::BTreeMap;

/// Address-keyed snapshot of a sheet's persistent state
///
/// Keys use the `"<row>,<col>"` format (0-based, base-10) produced by
/// [`CellAddress::key`](crate::CellAddress::key). `BTreeMap` keeps
/// enumeration order deterministic across saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSnapshot {
    /// Literal cells: address key → raw text
    pub cells: BTreeMap<String, String>,
    /// Formula cells: address key → raw text (including the leading `=`)
    pub formulas: BTreeMap<String, String>,
}

impl SheetSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the snapshot carries no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.formulas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = SheetSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.cells.len(), 0);
        assert_eq!(snapshot.formulas.len(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let mut snapshot = SheetSnapshot::new();
        snapshot.cells.insert("0,0".into(), "5".into());
        snapshot.cells.insert("1,2".into(), "note".into());
        snapshot.formulas.insert("1,0".into(), "=A1+1".into());

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SheetSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
