//! In-memory workbook, used by tests and for dry runs.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::sheet::address::{CellRange, CellRef};
use crate::sheet::error::{SheetError, SheetResult};
use crate::sheet::grid::Grid;
use crate::sheet::port::Workbook;
use crate::sheet::types::SheetName;

/// A workbook held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    title: String,
    sheets: RwLock<BTreeMap<SheetName, Grid>>,
}

impl MemoryWorkbook {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sheets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Builder-style helper for fixtures.
    pub fn with_sheet(self, sheet: &str, rows: Vec<Vec<String>>) -> SheetResult<Self> {
        self.add_sheet(sheet, &rows)?;
        Ok(self)
    }

    /// Full contents of a sheet, or `None` if it does not exist.
    pub fn rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        let name = SheetName::new(sheet).ok()?;
        self.sheets.read().get(&name).map(|g| g.rows().to_vec())
    }

    fn with_grid<T>(&self, sheet: &str, f: impl FnOnce(&Grid) -> T) -> SheetResult<T> {
        let name = SheetName::new(sheet)?;
        let sheets = self.sheets.read();
        let grid = sheets
            .get(&name)
            .ok_or_else(|| SheetError::SheetNotFound(sheet.to_string()))?;
        Ok(f(grid))
    }

    fn with_grid_mut<T>(&self, sheet: &str, f: impl FnOnce(&mut Grid) -> T) -> SheetResult<T> {
        let name = SheetName::new(sheet)?;
        let mut sheets = self.sheets.write();
        let grid = sheets
            .get_mut(&name)
            .ok_or_else(|| SheetError::SheetNotFound(sheet.to_string()))?;
        Ok(f(grid))
    }
}

impl Workbook for MemoryWorkbook {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn sheet_names(&self) -> SheetResult<Vec<String>> {
        Ok(self
            .sheets
            .read()
            .keys()
            .map(|name| name.to_string())
            .collect())
    }

    fn add_sheet(&self, sheet: &str, rows: &[Vec<String>]) -> SheetResult<()> {
        let name = SheetName::new(sheet)?;
        let mut sheets = self.sheets.write();
        if sheets.contains_key(&name) {
            return Err(SheetError::SheetAlreadyExists(sheet.to_string()));
        }
        sheets.insert(name, Grid::from_rows(rows.to_vec()));
        Ok(())
    }

    fn read_range(&self, sheet: &str, range: &CellRange) -> SheetResult<Vec<Vec<String>>> {
        self.with_grid(sheet, |grid| grid.read(range))
    }

    fn write_cell(&self, sheet: &str, cell: CellRef, value: &str) -> SheetResult<()> {
        self.with_grid_mut(sheet, |grid| grid.set(cell, value))
    }

    fn append_row(&self, sheet: &str, values: &[String]) -> SheetResult<()> {
        self.with_grid_mut(sheet, |grid| {
            grid.append(values);
        })
    }

    fn delete_row(&self, sheet: &str, row: u32) -> SheetResult<()> {
        let deleted = self.with_grid_mut(sheet, |grid| grid.delete(row))?;
        if !deleted {
            return Err(SheetError::RowOutOfRange {
                sheet: sheet.to_string(),
                row,
            });
        }
        Ok(())
    }
}
