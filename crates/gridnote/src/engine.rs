//! The recalculation engine
//!
//! Ties the cell store, the formula index, and the dependency graph
//! together: each edit updates the authoritative text, rebuilds the edited
//! cell's dependency edges, evaluates its display value, and walks the
//! graph to refresh every transitively dependent formula cell.
//!
//! Each edit runs as one explicit recalculation pass. The pass context
//! (visited set plus the update list handed back to the caller) replaces
//! the ambient "currently updating" flag a UI would otherwise need:
//! programmatic refreshes accumulate into the pass and never re-enter
//! [`SheetEngine::on_cell_edited`], so a pass cannot trigger itself.

use ahash::{AHashMap, AHashSet};
use gridnote_core::{CellAddress, CellContent, Sheet, SheetSnapshot};
use gridnote_formula::{extract_references, DependencyGraph, Evaluator};
use log::{debug, warn};

/// Horizontal alignment hint for a displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Textual values (including the error marker)
    Left,
    /// Numeric values
    Right,
}

impl Alignment {
    /// Derive the hint by attempting a numeric parse of the final string
    pub fn for_display(text: &str) -> Self {
        if text.trim().parse::<f64>().is_ok() {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}

/// A refreshed cell display handed back to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    /// The cell whose displayed text changed
    pub address: CellAddress,
    /// The new display string
    pub text: String,
    /// How the UI should align it
    pub alignment: Alignment,
}

impl DisplayUpdate {
    fn new(address: CellAddress, text: String) -> Self {
        let alignment = Alignment::for_display(&text);
        Self {
            address,
            text,
            alignment,
        }
    }
}

/// Context for one recalculation pass
///
/// `visited` bounds the traversal (each cell refreshes at most once per
/// pass, so even a cyclic graph terminates); `updates` collects the
/// refreshed displays in traversal order, edited cell first.
#[derive(Debug, Default)]
struct RecalcPass {
    visited: AHashSet<CellAddress>,
    updates: Vec<DisplayUpdate>,
}

/// The spreadsheet engine behind one open note
///
/// Owns the live [`Sheet`] plus the formula index and dependency graph
/// derived from it. Single-threaded by design: the hosting application
/// drives it from UI edit events one at a time.
#[derive(Debug, Default)]
pub struct SheetEngine {
    sheet: Sheet,
    /// Formula cells: address → expression text (without the leading `=`)
    formulas: AHashMap<CellAddress, String>,
    graph: DependencyGraph,
    dirty: bool,
}

impl SheetEngine {
    /// Create an engine with an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one user-visible text change
    ///
    /// Stores the new text, rebuilds the cell's dependency edges, and
    /// returns the display updates for the edited cell and every
    /// transitively refreshed dependent. A non-empty edit marks the
    /// document dirty.
    pub fn on_cell_edited(&mut self, address: CellAddress, raw_text: &str) -> Vec<DisplayUpdate> {
        self.apply_edit(address, raw_text);
        if !raw_text.is_empty() {
            self.dirty = true;
        }

        let mut pass = RecalcPass::default();
        pass.visited.insert(address);

        let evaluator = Evaluator::new(&self.sheet);
        pass.updates.push(DisplayUpdate::new(
            address,
            evaluator.evaluate(raw_text, address).into_display(),
        ));

        self.propagate(address, &mut pass);
        debug!(
            "edit of {} refreshed {} cell(s)",
            address,
            pass.updates.len()
        );
        pass.updates
    }

    /// Store raw text and rebuild the cell's index and graph entries
    fn apply_edit(&mut self, address: CellAddress, raw_text: &str) {
        self.sheet.set(address, raw_text);

        let content = CellContent::from_raw(raw_text);
        match content.expression() {
            Some(expr) => {
                self.formulas.insert(address, expr.to_string());
                let references = extract_references(expr);
                self.graph.set_dependencies(address, &references);
            }
            None => {
                self.formulas.remove(&address);
                self.graph.clear_dependencies(address);
            }
        }
    }

    /// Refresh every formula cell transitively dependent on `changed`
    fn propagate(&self, changed: CellAddress, pass: &mut RecalcPass) {
        let dependents: Vec<CellAddress> = self.graph.dependents_of(changed).collect();

        for dependent in dependents {
            if !pass.visited.insert(dependent) {
                continue;
            }
            // The edge may outlive the formula that created it
            let Some(expr) = self.formulas.get(&dependent) else {
                continue;
            };

            let result = Evaluator::new(&self.sheet).evaluate_formula(expr, dependent);
            pass.updates
                .push(DisplayUpdate::new(dependent, result.into_display()));
            self.propagate(dependent, pass);
        }
    }

    /// Recompute one cell's display string on demand
    pub fn display_text(&self, address: CellAddress) -> String {
        let raw_text = self.sheet.raw_text(address);
        Evaluator::new(&self.sheet)
            .evaluate(&raw_text, address)
            .into_display()
    }

    /// A cell's raw text as the user typed it (shown while editing)
    pub fn raw_text(&self, address: CellAddress) -> String {
        self.sheet.raw_text(address)
    }

    /// The live sheet (read-only)
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Whether the note has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the unsaved-changes flag after a successful save
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Derive the persisted snapshot from the live sheet
    pub fn snapshot(&self) -> SheetSnapshot {
        let mut snapshot = SheetSnapshot::new();

        for (address, content) in self.sheet.iter() {
            if !content.is_formula() {
                snapshot.cells.insert(address.key(), content.raw_text());
            }
        }
        for (address, expr) in &self.formulas {
            snapshot
                .formulas
                .insert(address.key(), format!("={}", expr));
        }

        snapshot
    }

    /// Replace the live sheet with a persisted snapshot
    ///
    /// Literal cells are set first, then all formula cells, then each
    /// formula is evaluated for display, so a formula referencing another
    /// formula sees it regardless of key order. Not treated as user edits:
    /// the dirty flag is untouched. Malformed or out-of-bounds keys are
    /// skipped with a warning; a damaged entry never aborts the rest of
    /// the load.
    pub fn load_snapshot(&mut self, snapshot: &SheetSnapshot) -> Vec<DisplayUpdate> {
        self.sheet.clear();
        self.formulas.clear();
        self.graph.clear();

        let mut updates = Vec::new();

        for (key, text) in &snapshot.cells {
            match CellAddress::parse_key(key) {
                Ok(address) => {
                    self.sheet.set(address, text);
                    updates.push(DisplayUpdate::new(address, text.clone()));
                }
                Err(err) => warn!("skipping snapshot cell '{}': {}", key, err),
            }
        }

        let mut formula_cells = Vec::new();
        for (key, raw_text) in &snapshot.formulas {
            match CellAddress::parse_key(key) {
                Ok(address) => {
                    self.apply_edit(address, raw_text);
                    formula_cells.push(address);
                }
                Err(err) => warn!("skipping snapshot formula '{}': {}", key, err),
            }
        }

        let evaluator = Evaluator::new(&self.sheet);
        for address in formula_cells {
            let text = evaluator
                .evaluate(&self.sheet.raw_text(address), address)
                .into_display();
            updates.push(DisplayUpdate::new(address, text));
        }

        debug!("loaded snapshot with {} cell(s)", updates.len());
        updates
    }
}
