//! The sparse cell store
//!
//! One [`Sheet`] backs each open note's grid mode. Only non-empty cells are
//! stored; unset cells read back as the empty literal.

use ahash::AHashMap;

use crate::cell::{CellAddress, CellContent};

/// The authoritative raw text per cell address
///
/// The single source of truth for "what the user typed." Setting content is
/// the only mutation path and has no side effects on other cells;
/// recalculation of dependents is a separate, explicit step driven by the
/// engine.
#[derive(Debug, Default)]
pub struct Sheet {
    cells: AHashMap<CellAddress, CellContent>,
}

impl Sheet {
    /// Create a new empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell's content, defaulting to the empty literal for unset cells
    pub fn get_content(&self, address: CellAddress) -> CellContent {
        self.cells.get(&address).cloned().unwrap_or_default()
    }

    /// Get a cell's raw text as the user typed it ("" for unset cells)
    pub fn raw_text(&self, address: CellAddress) -> String {
        self.cells
            .get(&address)
            .map(CellContent::raw_text)
            .unwrap_or_default()
    }

    /// Store raw text at an address, classifying it as formula or literal
    ///
    /// Empty text removes the entry so the store stays sparse.
    pub fn set(&mut self, address: CellAddress, raw_text: &str) {
        if raw_text.is_empty() {
            self.cells.remove(&address);
        } else {
            self.cells.insert(address, CellContent::from_raw(raw_text));
        }
    }

    /// Iterate over all non-empty cells
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &CellContent)> + '_ {
        self.cells.iter().map(|(addr, content)| (*addr, content))
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet holds no content
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
