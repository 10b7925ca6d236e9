//! Prelude module - common imports for gridnote users
//!
//! ```rust
//! use gridnote::prelude::*;
//! ```

pub use crate::{
    // Engine types
    Alignment,
    CellAddress,
    // Cell types
    CellContent,
    DisplayUpdate,
    // Error types
    Error,
    EvaluationResult,
    FormulaError,
    Result,
    Sheet,
    SheetEngine,
    // Persistence types
    SheetSnapshot,
    ERROR_MARKER,
    MAX_COLS,
    // Constants
    MAX_ROWS,
};
