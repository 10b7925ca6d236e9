//! Cell content type

/// The raw text a user entered into a cell
///
/// A leading `=` classifies the text as a formula; anything else is an
/// opaque literal displayed as-is. The `Formula` variant stores the
/// expression without the `=` so evaluators work on the expression text
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Opaque text, numeric or not; displayed as-is
    Literal(String),
    /// An arithmetic expression over literals and cell references,
    /// stored without the leading `=`
    Formula(String),
}

impl CellContent {
    /// Classify raw user text: a leading `=` makes it a formula
    pub fn from_raw(raw: &str) -> Self {
        match raw.strip_prefix('=') {
            Some(expr) => CellContent::Formula(expr.to_string()),
            None => CellContent::Literal(raw.to_string()),
        }
    }

    /// Reconstitute the raw text as the user typed it
    pub fn raw_text(&self) -> String {
        match self {
            CellContent::Literal(text) => text.clone(),
            CellContent::Formula(expr) => format!("={}", expr),
        }
    }

    /// Check if this content is a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellContent::Formula(_))
    }

    /// Check if this content is the empty literal
    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Literal(text) if text.is_empty())
    }

    /// The expression text, if this content is a formula
    pub fn expression(&self) -> Option<&str> {
        match self {
            CellContent::Formula(expr) => Some(expr),
            CellContent::Literal(_) => None,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        CellContent::Literal(String::new())
    }
}
