//! A1-style cell addressing.
//!
//! Rows and columns are 1-indexed, the way spreadsheet users write them.
//! A range may leave its end row open (`A2:C`), which reads through the
//! last populated row of the sheet.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("invalid column in '{0}'")]
    InvalidColumn(String),

    #[error("invalid row in '{0}'")]
    InvalidRow(String),

    #[error("range '{0}' ends before it starts")]
    Inverted(String),
}

/// A single cell, e.g. `B7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub column: u32,
    pub row: u32,
}

impl CellRef {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column offset, for indexing into row vectors.
    pub fn column_offset(&self) -> usize {
        (self.column - 1) as usize
    }

    /// Zero-based row offset.
    pub fn row_offset(&self) -> usize {
        (self.row - 1) as usize
    }
}

impl FromStr for CellRef {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, row) = split_address(s)?;
        let row = row.ok_or_else(|| AddressError::InvalidRow(s.to_string()))?;
        Ok(Self { column, row })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.column), self.row)
    }
}

/// A rectangular range, e.g. `A4:G15` or the open-ended `A2:C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellRef,
    pub end_column: u32,
    /// `None` reads through the last populated row.
    pub end_row: Option<u32>,
}

impl CellRange {
    pub fn new(start: CellRef, end_column: u32, end_row: Option<u32>) -> Self {
        Self {
            start,
            end_column,
            end_row,
        }
    }

    /// Range covering a single cell.
    pub fn cell(cell: CellRef) -> Self {
        Self::new(cell, cell.column, Some(cell.row))
    }

    pub fn width(&self) -> usize {
        (self.end_column - self.start.column + 1) as usize
    }
}

impl FromStr for CellRange {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((first, last)) = s.split_once(':') else {
            return Ok(Self::cell(s.parse()?));
        };

        let start: CellRef = first.parse()?;
        let (end_column, end_row) = split_address(last)?;

        if end_column < start.column || end_row.is_some_and(|r| r < start.row) {
            return Err(AddressError::Inverted(s.to_string()));
        }

        Ok(Self::new(start, end_column, end_row))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, column_letters(self.end_column))?;
        if let Some(row) = self.end_row {
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Convert a 1-based column index to letters (1 → A, 27 → AA).
pub fn column_letters(mut column: u32) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(b'A' + rem as u8);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Split `AB12` into (28, Some(12)); `AB` yields (28, None).
fn split_address(s: &str) -> Result<(u32, Option<u32>), AddressError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AddressError::Empty);
    }

    let split = s
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(s.len());
    let (letters, digits) = s.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AddressError::InvalidColumn(s.to_string()));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        let value = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        column = column
            .checked_mul(26)
            .and_then(|v| v.checked_add(value))
            .ok_or_else(|| AddressError::InvalidColumn(s.to_string()))?;
    }

    if digits.is_empty() {
        return Ok((column, None));
    }

    let row: u32 = digits
        .parse()
        .map_err(|_| AddressError::InvalidRow(s.to_string()))?;
    if row == 0 {
        return Err(AddressError::InvalidRow(s.to_string()));
    }

    Ok((column, Some(row)))
}
