//! # gridnote-core
//!
//! Core data structures for gridnote's spreadsheet mode.
//!
//! This crate provides the fundamental types used throughout gridnote:
//! - [`CellAddress`] - A cell's location on the fixed 50×20 grid (e.g., "A1")
//! - [`CellContent`] - The raw text held by a cell (literal or formula)
//! - [`Sheet`] - The sparse cell store backing one open note
//! - [`SheetSnapshot`] - The persisted cell/formula snapshot exchanged with
//!   the host application's save/load layer
//!
//! ## Example
//!
//! ```rust
//! use gridnote_core::{CellAddress, Sheet};
//!
//! let mut sheet = Sheet::new();
//! let a1 = CellAddress::parse("A1").unwrap();
//! sheet.set(a1, "5");
//!
//! let b2 = CellAddress::new(1, 1);
//! sheet.set(b2, "=A1*2");
//! assert!(sheet.get_content(b2).is_formula());
//! ```

pub mod cell;
pub mod error;
pub mod sheet;
pub mod snapshot;

// Re-exports for convenience
pub use cell::{CellAddress, CellContent};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use snapshot::SheetSnapshot;

/// Number of rows in the grid
pub const MAX_ROWS: u32 = 50;

/// Number of columns in the grid (A–T)
pub const MAX_COLS: u16 = 20;
