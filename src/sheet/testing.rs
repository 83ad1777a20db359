//! Test helpers: fixtures and a workbook that fails on demand.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::sheet::address::{CellRange, CellRef};
use crate::sheet::error::{SheetError, SheetResult};
use crate::sheet::memory::MemoryWorkbook;
use crate::sheet::port::Workbook;

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Port calls that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Read,
    WriteCell,
    AppendRow,
    DeleteRow,
}

/// Wraps a [`MemoryWorkbook`] and fails the n-th call of chosen operations.
///
/// A failed call does not touch the inner workbook, so tests can inspect
/// exactly what a multi-step operation left behind.
pub struct FaultyWorkbook {
    inner: MemoryWorkbook,
    failures: HashMap<Op, usize>,
    calls: Mutex<HashMap<Op, usize>>,
}

impl FaultyWorkbook {
    pub fn new(inner: MemoryWorkbook) -> Self {
        Self {
            inner,
            failures: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Fail the `nth` (1-based) call of `op`.
    pub fn fail_on(mut self, op: Op, nth: usize) -> Self {
        self.failures.insert(op, nth);
        self
    }

    pub fn inner(&self) -> &MemoryWorkbook {
        &self.inner
    }

    fn check(&self, op: Op) -> SheetResult<()> {
        let mut calls = self.calls.lock();
        let count = calls.entry(op).or_insert(0);
        *count += 1;
        if self.failures.get(&op) == Some(count) {
            return Err(SheetError::Unavailable(format!("injected {:?} failure", op)));
        }
        Ok(())
    }
}

impl Workbook for FaultyWorkbook {
    fn title(&self) -> String {
        self.inner.title()
    }

    fn sheet_names(&self) -> SheetResult<Vec<String>> {
        self.check(Op::Read)?;
        self.inner.sheet_names()
    }

    fn add_sheet(&self, sheet: &str, rows: &[Vec<String>]) -> SheetResult<()> {
        self.inner.add_sheet(sheet, rows)
    }

    fn read_range(&self, sheet: &str, range: &CellRange) -> SheetResult<Vec<Vec<String>>> {
        self.check(Op::Read)?;
        self.inner.read_range(sheet, range)
    }

    fn write_cell(&self, sheet: &str, cell: CellRef, value: &str) -> SheetResult<()> {
        self.check(Op::WriteCell)?;
        self.inner.write_cell(sheet, cell, value)
    }

    fn append_row(&self, sheet: &str, values: &[String]) -> SheetResult<()> {
        self.check(Op::AppendRow)?;
        self.inner.append_row(sheet, values)
    }

    fn delete_row(&self, sheet: &str, row: u32) -> SheetResult<()> {
        self.check(Op::DeleteRow)?;
        self.inner.delete_row(sheet, row)
    }
}
