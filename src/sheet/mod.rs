//! Table access layer.
//!
//! Everything above this module sees the store as a spreadsheet: named
//! worksheets of string cells, addressed with 1-indexed A1 ranges.
//!
//! ```text
//!            league operations
//!                   │
//!                   ▼
//!            ┌─────────────┐
//!            │  Workbook   │  read_range / write_cell / append_row / delete_row
//!            └─────────────┘
//!              │         │
//!              ▼         ▼
//!   MemoryWorkbook    GitWorkbook (storage)
//! ```

mod address;
mod error;
mod grid;
mod memory;
mod port;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use address::{column_letters, AddressError, CellRange, CellRef};
pub use error::{SheetError, SheetResult};
pub use grid::Grid;
pub use memory::MemoryWorkbook;
pub use port::Workbook;
pub use types::{InvalidNameError, SheetName};
