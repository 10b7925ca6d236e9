//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
///
/// All of these are recovered locally: at the display boundary every
/// variant collapses to the in-band error marker, and no failure aborts
/// recalculation of sibling cells.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Expression parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Expression evaluation error
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Circular reference
    #[error("Circular reference detected")]
    CircularReference,
}
