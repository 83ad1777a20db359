//! The table access port.
//!
//! League logic talks to the store only through [`Workbook`]. A workbook is
//! a set of named worksheets addressed with A1 ranges; it knows nothing
//! about championships or rosters.

use crate::sheet::address::{CellRange, CellRef};
use crate::sheet::error::SheetResult;

/// Synchronous access to a workbook of named worksheets.
///
/// Every method is a single store round trip. Nothing here groups calls
/// into a transaction: a caller that issues several writes can be
/// interrupted between any two of them.
pub trait Workbook {
    /// Human-readable title of the workbook.
    fn title(&self) -> String;

    /// Names of all worksheets.
    fn sheet_names(&self) -> SheetResult<Vec<String>>;

    /// Create a worksheet pre-filled with `rows` (usually header rows).
    fn add_sheet(&self, sheet: &str, rows: &[Vec<String>]) -> SheetResult<()>;

    /// Read the cells inside `range`. Trailing empty cells and trailing
    /// empty rows are omitted.
    fn read_range(&self, sheet: &str, range: &CellRange) -> SheetResult<Vec<Vec<String>>>;

    /// Overwrite one cell.
    fn write_cell(&self, sheet: &str, cell: CellRef, value: &str) -> SheetResult<()>;

    /// Write a row after the last populated row.
    fn append_row(&self, sheet: &str, values: &[String]) -> SheetResult<()>;

    /// Delete a row by 1-based position, shifting later rows up.
    fn delete_row(&self, sheet: &str, row: u32) -> SheetResult<()>;
}

impl<T: Workbook + ?Sized> Workbook for std::sync::Arc<T> {
    fn title(&self) -> String {
        (**self).title()
    }

    fn sheet_names(&self) -> SheetResult<Vec<String>> {
        (**self).sheet_names()
    }

    fn add_sheet(&self, sheet: &str, rows: &[Vec<String>]) -> SheetResult<()> {
        (**self).add_sheet(sheet, rows)
    }

    fn read_range(&self, sheet: &str, range: &CellRange) -> SheetResult<Vec<Vec<String>>> {
        (**self).read_range(sheet, range)
    }

    fn write_cell(&self, sheet: &str, cell: CellRef, value: &str) -> SheetResult<()> {
        (**self).write_cell(sheet, cell, value)
    }

    fn append_row(&self, sheet: &str, values: &[String]) -> SheetResult<()> {
        (**self).append_row(sheet, values)
    }

    fn delete_row(&self, sheet: &str, row: u32) -> SheetResult<()> {
        (**self).delete_row(sheet, row)
    }
}
