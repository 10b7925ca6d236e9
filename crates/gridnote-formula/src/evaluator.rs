//! Recursive cell evaluation
//!
//! Resolves the references in a formula against the cell store,
//! substitutes each one's computed value into the expression text, and
//! evaluates the result as arithmetic. Referenced formulas are evaluated
//! recursively; the evaluation path is threaded through the recursion so
//! any cycle, direct or indirect, fails with
//! [`FormulaError::CircularReference`] instead of recursing forever.

use ahash::AHashSet;
use gridnote_core::{CellAddress, CellContent, Sheet};

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::parser::parse_expression;
use crate::references::reference_pattern;

/// In-band marker displayed in place of a value when evaluation fails
pub const ERROR_MARKER: &str = "#ERROR!";

/// Outcome of evaluating a cell's raw text
///
/// Transient: recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    /// A successfully computed (or literal) display string
    Value(String),
    /// Evaluation failed; the cell displays the error marker
    Error,
}

impl EvaluationResult {
    /// The string to display in the cell
    pub fn display(&self) -> &str {
        match self {
            EvaluationResult::Value(text) => text,
            EvaluationResult::Error => ERROR_MARKER,
        }
    }

    /// Consume the result, yielding the display string
    pub fn into_display(self) -> String {
        match self {
            EvaluationResult::Value(text) => text,
            EvaluationResult::Error => ERROR_MARKER.to_string(),
        }
    }

    /// Check if evaluation failed
    pub fn is_error(&self) -> bool {
        matches!(self, EvaluationResult::Error)
    }
}

/// Evaluates cell text against a sheet
pub struct Evaluator<'a> {
    sheet: &'a Sheet,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator reading from the given sheet
    pub fn new(sheet: &'a Sheet) -> Self {
        Self { sheet }
    }

    /// Evaluate a cell's raw text
    ///
    /// Text without a leading `=` is returned unchanged as a literal.
    /// `origin` is the address of the cell holding the text; a reference
    /// chain that leads back to it (or to any cell along the chain) is a
    /// circular reference and yields [`EvaluationResult::Error`].
    pub fn evaluate(&self, raw_text: &str, origin: CellAddress) -> EvaluationResult {
        match CellContent::from_raw(raw_text) {
            CellContent::Formula(expr) => self.evaluate_formula(&expr, origin),
            CellContent::Literal(text) => EvaluationResult::Value(text),
        }
    }

    /// Evaluate formula expression text (without the leading `=`)
    pub fn evaluate_formula(&self, expr: &str, origin: CellAddress) -> EvaluationResult {
        let mut path = AHashSet::new();
        path.insert(origin);

        match self.evaluate_expression(expr, &mut path) {
            Ok(value) => EvaluationResult::Value(format_number(value)),
            Err(_) => EvaluationResult::Error,
        }
    }

    fn evaluate_expression(
        &self,
        expr: &str,
        path: &mut AHashSet<CellAddress>,
    ) -> FormulaResult<f64> {
        let substituted = self.substitute_references(expr, path)?;
        let ast = parse_expression(&substituted)?;
        evaluate_ast(&ast)
    }

    /// Replace every in-bounds reference token with its computed value
    ///
    /// Out-of-range tokens pass through untouched; they are not
    /// dependencies, and the arithmetic parser rejects whatever is left of
    /// them. Referenced literals substitute their raw text, referenced
    /// formulas their recursively computed value, unset cells the empty
    /// string.
    fn substitute_references(
        &self,
        expr: &str,
        path: &mut AHashSet<CellAddress>,
    ) -> FormulaResult<String> {
        let mut out = String::with_capacity(expr.len());
        let mut last = 0;

        for token in reference_pattern().find_iter(expr) {
            out.push_str(&expr[last..token.start()]);
            last = token.end();

            let address = match CellAddress::parse(token.as_str()) {
                Ok(address) => address,
                Err(_) => {
                    out.push_str(token.as_str());
                    continue;
                }
            };

            if path.contains(&address) {
                return Err(FormulaError::CircularReference);
            }

            match self.sheet.get_content(address) {
                CellContent::Formula(nested) => {
                    path.insert(address);
                    let value = self.evaluate_expression(&nested, path)?;
                    path.remove(&address);
                    out.push_str(&format_number(value));
                }
                CellContent::Literal(text) => out.push_str(&text),
            }
        }

        out.push_str(&expr[last..]);
        Ok(out)
    }
}

/// Fold an arithmetic AST down to a value
fn evaluate_ast(expr: &Expr) -> FormulaResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::UnaryOp { op, operand } => {
            let value = evaluate_ast(operand)?;
            Ok(match op {
                UnaryOperator::Plus => value,
                UnaryOperator::Negate => -value,
            })
        }
        Expr::BinaryOp { op, left, right } => {
            let lhs = evaluate_ast(left)?;
            let rhs = evaluate_ast(right)?;
            match op {
                BinaryOperator::Add => Ok(lhs + rhs),
                BinaryOperator::Subtract => Ok(lhs - rhs),
                BinaryOperator::Multiply => Ok(lhs * rhs),
                BinaryOperator::Divide => {
                    if rhs == 0.0 {
                        Err(FormulaError::DivisionByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                }
            }
        }
    }
}

/// Canonical display form of a computed value
///
/// Integral values render without a decimal point ("5", not "5.0").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
