//! # gridnote
//!
//! The spreadsheet engine behind gridnote's grid mode.
//!
//! A gridnote note can flip into a small 50×20 spreadsheet. This crate is
//! the computational core of that mode: it owns the authoritative raw text
//! per cell, classifies formulas, tracks which cells reference which, and
//! keeps every dependent's displayed value consistent as cells change. The
//! surrounding application (windows, dialogs, encrypted save files) talks
//! to it only through raw cell text in, display strings out, and the
//! save/restore snapshot.
//!
//! ## Example
//!
//! ```rust
//! use gridnote::prelude::*;
//!
//! let mut engine = SheetEngine::new();
//! let a1 = CellAddress::parse("A1").unwrap();
//! let a2 = CellAddress::parse("A2").unwrap();
//!
//! engine.on_cell_edited(a1, "5");
//! let updates = engine.on_cell_edited(a2, "=A1+1");
//! assert_eq!(updates[0].text, "6");
//!
//! // Editing A1 refreshes its dependents
//! let updates = engine.on_cell_edited(a1, "10");
//! assert_eq!(updates[1].text, "11");
//! ```

pub mod engine;
pub mod prelude;

// Re-export engine types
pub use engine::{Alignment, DisplayUpdate, SheetEngine};

// Re-export core types
pub use gridnote_core::{
    CellAddress, CellContent, Error, Result, Sheet, SheetSnapshot, MAX_COLS, MAX_ROWS,
};

// Re-export formula types
pub use gridnote_formula::{
    extract_references, DependencyGraph, EvaluationResult, Evaluator, FormulaError, FormulaResult,
    ERROR_MARKER,
};
