//! Dependency tracking between cells
//!
//! Records, for every referenced cell, the set of cells whose formulas read
//! it, so a change can be propagated to exactly the cells it affects.

use ahash::{AHashMap, AHashSet};
use gridnote_core::CellAddress;

/// Reverse-edge dependency graph between cells
///
/// The authoritative direction is referenced cell → dependents. The forward
/// map (dependent → precedents) is kept alongside so that replacing a
/// cell's formula can remove every stale edge exactly, without scanning the
/// whole graph. The two maps are updated together and stay mutually
/// consistent.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Cell → cells whose formulas reference it (dependents)
    dependents: AHashMap<CellAddress, AHashSet<CellAddress>>,
    /// Cell → cells its formula references (precedents)
    precedents: AHashMap<CellAddress, AHashSet<CellAddress>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all edges held by `dependent` with edges to `references`
    ///
    /// The previous formula's edges are fully removed first, never diffed,
    /// so no stale edge survives a formula change. Duplicate references
    /// collapse into the edge sets.
    pub fn set_dependencies(&mut self, dependent: CellAddress, references: &[CellAddress]) {
        self.clear_dependencies(dependent);

        for &reference in references {
            self.dependents
                .entry(reference)
                .or_default()
                .insert(dependent);
            self.precedents
                .entry(dependent)
                .or_default()
                .insert(reference);
        }
    }

    /// Remove `dependent` from every dependent-set currently holding it
    ///
    /// Called when a cell's formula is replaced or overwritten with a
    /// literal. Edges pointing *at* `dependent` (other cells referencing
    /// it) are left alone.
    pub fn clear_dependencies(&mut self, dependent: CellAddress) {
        if let Some(references) = self.precedents.remove(&dependent) {
            for reference in references {
                if let Some(deps) = self.dependents.get_mut(&reference) {
                    deps.remove(&dependent);
                }
            }
        }
    }

    /// Cells whose formulas reference `cell`
    pub fn dependents_of(&self, cell: CellAddress) -> impl Iterator<Item = CellAddress> + '_ {
        self.dependents
            .get(&cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Cells that `cell`'s formula references
    pub fn precedents_of(&self, cell: CellAddress) -> impl Iterator<Item = CellAddress> + '_ {
        self.precedents
            .get(&cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Whether following dependent edges from `cell` leads back to `cell`
    pub fn has_cycle(&self, cell: CellAddress) -> bool {
        let mut visited = AHashSet::new();
        let mut in_stack = AHashSet::new();
        self.detect_cycle(cell, &mut visited, &mut in_stack)
    }

    fn detect_cycle(
        &self,
        cell: CellAddress,
        visited: &mut AHashSet<CellAddress>,
        in_stack: &mut AHashSet<CellAddress>,
    ) -> bool {
        if in_stack.contains(&cell) {
            return true;
        }
        if visited.contains(&cell) {
            return false;
        }

        visited.insert(cell);
        in_stack.insert(cell);

        if let Some(dependents) = self.dependents.get(&cell) {
            for &dependent in dependents {
                if self.detect_cycle(dependent, visited, in_stack) {
                    return true;
                }
            }
        }

        in_stack.remove(&cell);
        false
    }

    /// Clear the entire graph
    pub fn clear(&mut self) {
        self.dependents.clear();
        self.precedents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_set_dependencies() {
        let mut graph = DependencyGraph::new();

        // C1 = A1 + B1
        graph.set_dependencies(addr("C1"), &[addr("A1"), addr("B1")]);

        assert!(graph.dependents_of(addr("A1")).any(|c| c == addr("C1")));
        assert!(graph.dependents_of(addr("B1")).any(|c| c == addr("C1")));
        assert_eq!(graph.precedents_of(addr("C1")).count(), 2);
    }

    #[test]
    fn test_replacing_formula_removes_stale_edges() {
        let mut graph = DependencyGraph::new();

        graph.set_dependencies(addr("C1"), &[addr("A1")]);
        graph.set_dependencies(addr("C1"), &[addr("B1")]);

        // The old A1 → C1 edge must not survive
        assert_eq!(graph.dependents_of(addr("A1")).count(), 0);
        assert!(graph.dependents_of(addr("B1")).any(|c| c == addr("C1")));
    }

    #[test]
    fn test_clear_dependencies_keeps_incoming_edges() {
        let mut graph = DependencyGraph::new();

        // B1 reads A1; C1 reads B1
        graph.set_dependencies(addr("B1"), &[addr("A1")]);
        graph.set_dependencies(addr("C1"), &[addr("B1")]);

        // B1's formula goes away; C1 still references B1
        graph.clear_dependencies(addr("B1"));

        assert_eq!(graph.dependents_of(addr("A1")).count(), 0);
        assert!(graph.dependents_of(addr("B1")).any(|c| c == addr("C1")));
    }

    #[test]
    fn test_duplicate_references_collapse() {
        let mut graph = DependencyGraph::new();

        // B1 = A1 + A1
        graph.set_dependencies(addr("B1"), &[addr("A1"), addr("A1")]);
        assert_eq!(graph.dependents_of(addr("A1")).count(), 1);
    }

    #[test]
    fn test_cycle_detection() {
        let mut graph = DependencyGraph::new();

        // A1 → B1 → C1 → A1 (following dependent edges)
        graph.set_dependencies(addr("B1"), &[addr("A1")]);
        graph.set_dependencies(addr("C1"), &[addr("B1")]);
        graph.set_dependencies(addr("A1"), &[addr("C1")]);

        assert!(graph.has_cycle(addr("A1")));
        assert!(graph.has_cycle(addr("B1")));
        assert!(graph.has_cycle(addr("C1")));

        // Breaking the loop clears the cycle
        graph.clear_dependencies(addr("A1"));
        assert!(!graph.has_cycle(addr("A1")));
    }

    #[test]
    fn test_acyclic_chain() {
        let mut graph = DependencyGraph::new();

        graph.set_dependencies(addr("B1"), &[addr("A1")]);
        graph.set_dependencies(addr("C1"), &[addr("B1")]);

        assert!(!graph.has_cycle(addr("A1")));
        assert!(!graph.has_cycle(addr("C1")));
    }
}
