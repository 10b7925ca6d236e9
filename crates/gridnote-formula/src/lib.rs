//! # gridnote-formula
//!
//! Formula evaluation and dependency tracking for gridnote.
//!
//! This crate provides:
//! - Reference extraction (formula text → cell addresses)
//! - Arithmetic expression parsing and evaluation
//! - Recursive cell evaluation against a [`Sheet`](gridnote_core::Sheet),
//!   with cycle detection
//! - The reverse-edge dependency graph used for recalculation
//!
//! ## Example
//!
//! ```rust
//! use gridnote_core::{CellAddress, Sheet};
//! use gridnote_formula::Evaluator;
//!
//! let mut sheet = Sheet::new();
//! sheet.set(CellAddress::new(0, 0), "5");
//!
//! let evaluator = Evaluator::new(&sheet);
//! let result = evaluator.evaluate("=A1*2", CellAddress::new(1, 0));
//! assert_eq!(result.display(), "10");
//! ```

pub mod ast;
pub mod dependency;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod references;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use dependency::DependencyGraph;
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{EvaluationResult, Evaluator, ERROR_MARKER};
pub use parser::parse_expression;
pub use references::extract_references;
