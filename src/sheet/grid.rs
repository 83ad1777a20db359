//! The cell grid behind a worksheet.
//!
//! Both workbook implementations keep a sheet as a dense grid of strings.
//! The grid is kept compact: no trailing empty cells in a row and no
//! trailing empty rows, so the serialized form is stable.

use serde::{Deserialize, Serialize};

use crate::sheet::address::{CellRange, CellRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut grid = Self { rows };
        grid.compact();
        grid
    }

    /// All rows, compacted.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows up to and including the last populated one.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read the cells inside `range`.
    ///
    /// Rows are clipped to the range's columns, trailing empty cells are
    /// dropped, and trailing empty rows are dropped. Empty rows in the middle
    /// of the range come back as empty vectors so positions stay aligned.
    pub fn read(&self, range: &CellRange) -> Vec<Vec<String>> {
        let first = range.start.row_offset();
        let last = match range.end_row {
            Some(end) => (end as usize).min(self.rows.len()),
            None => self.rows.len(),
        };
        if first >= last {
            return Vec::new();
        }

        let col_start = range.start.column_offset();
        let col_end = range.end_column as usize;

        let mut out: Vec<Vec<String>> = self.rows[first..last]
            .iter()
            .map(|row| {
                let mut cells: Vec<String> = row
                    .iter()
                    .skip(col_start)
                    .take(col_end.saturating_sub(col_start))
                    .cloned()
                    .collect();
                trim_row(&mut cells);
                cells
            })
            .collect();

        while out.last().is_some_and(|r| r.is_empty()) {
            out.pop();
        }
        out
    }

    /// Overwrite a single cell, growing the grid as needed.
    pub fn set(&mut self, cell: CellRef, value: impl Into<String>) {
        let r = cell.row_offset();
        let c = cell.column_offset();
        if self.rows.len() <= r {
            self.rows.resize_with(r + 1, Vec::new);
        }
        let row = &mut self.rows[r];
        if row.len() <= c {
            row.resize(c + 1, String::new());
        }
        row[c] = value.into();
        self.compact();
    }

    /// Write `values` into the row after the last populated one.
    ///
    /// Returns the 1-based row number that was written.
    pub fn append(&mut self, values: &[String]) -> u32 {
        self.rows.push(values.to_vec());
        self.compact();
        // an all-empty append leaves nothing behind; report where it would land
        (self.rows.len().max(1)) as u32
    }

    /// Remove a row, shifting later rows up. Returns false when `row` is
    /// past the populated area.
    pub fn delete(&mut self, row: u32) -> bool {
        if row == 0 || row as usize > self.rows.len() {
            return false;
        }
        self.rows.remove(row as usize - 1);
        self.compact();
        true
    }

    fn compact(&mut self) {
        for row in &mut self.rows {
            trim_row(row);
        }
        while self.rows.last().is_some_and(|r| r.is_empty()) {
            self.rows.pop();
        }
    }
}

fn trim_row(row: &mut Vec<String>) {
    while row.last().is_some_and(|c| c.is_empty()) {
        row.pop();
    }
}
