//! Cell address type

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address on the fixed 50×20 grid (e.g., "A1")
///
/// Addresses combine a column letter (A–T) with a 1-based row number
/// (1–50). Internally both coordinates are 0-based. [`CellAddress::new`]
/// does not bounds-check; every parsing path does, so only in-grid
/// addresses ever come out of user or snapshot text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., T=19)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address from 0-based coordinates
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell reference in A1-style notation
    ///
    /// # Examples
    /// ```
    /// use gridnote_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("t50").unwrap();
    /// assert_eq!(addr.row, 49);
    /// assert_eq!(addr.col, 19);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        let letter = chars
            .next()
            .ok_or_else(|| Error::InvalidReference("empty reference".into()))?;
        if !letter.is_ascii_alphabetic() {
            return Err(Error::InvalidReference(format!(
                "no column letter in '{}'",
                s
            )));
        }

        let col = (letter.to_ascii_uppercase() as u32 - 'A' as u32) as u16;
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        let row_str = chars.as_str();
        if row_str.is_empty() {
            return Err(Error::InvalidReference(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidReference(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(format!("invalid row number in '{}'", s)))?;

        // Displayed rows are 1-based, we use 0-based internally
        if row == 0 {
            return Err(Error::InvalidReference(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Convert a column index to its letter (0 = A, 19 = T)
    pub fn column_letter(col: u16) -> char {
        (b'A' + col as u8) as char
    }

    /// Format as an A1-style reference string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_letter(self.col), self.row + 1)
    }

    /// Serialize to the persistence key format: `"<row>,<col>"`, 0-based
    pub fn key(&self) -> String {
        format!("{},{}", self.row, self.col)
    }

    /// Parse a persistence key (`"<row>,<col>"`, 0-based) back to an address
    pub fn parse_key(s: &str) -> Result<Self> {
        let (row_str, col_str) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidKey(s.into()))?;

        let row: u32 = row_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidKey(s.into()))?;
        let col: u16 = col_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidKey(s.into()))?;

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Ok(Self { row, col })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
