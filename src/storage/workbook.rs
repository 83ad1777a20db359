//! The git-backed implementation of the table access port.

use std::path::Path;

use crate::sheet::{CellRange, CellRef, Grid, SheetError, SheetName, SheetResult, Workbook};
use crate::storage::commit::{CommitInfo, CommitMessage};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::repository::GitRepository;

/// A workbook whose sheets live on the `main` branch of a git repository.
///
/// Each port call reads the current tip, and each write publishes exactly
/// one commit. Nothing is cached between calls.
#[derive(Clone)]
pub struct GitWorkbook {
    repo: GitRepository,
}

impl GitWorkbook {
    pub fn new(repo: GitRepository) -> Self {
        Self { repo }
    }

    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(GitRepository::open(path)?))
    }

    pub fn open_or_init(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(GitRepository::open_or_init(path)?))
    }

    pub fn repository(&self) -> &GitRepository {
        &self.repo
    }

    /// Most recent commits on `main`, newest first.
    pub fn recent_changes(&self, limit: usize) -> StorageResult<Vec<CommitInfo>> {
        let head = self.repo.head()?;
        self.repo.history(head, Some(limit))
    }

    /// Apply `mutate` to the sheet at the tip of `main` and publish it.
    ///
    /// A write that loses the race for `main` fails; it is never re-run.
    fn update<T>(
        &self,
        name: &SheetName,
        mutate: impl FnOnce(&mut Grid) -> StorageResult<(T, String)>,
    ) -> SheetResult<T> {
        let head = self.repo.head()?;
        let (_, value) = self
            .repo
            .update_sheet(name, head, mutate)
            .map_err(|e| not_found_as_sheet(e, name.as_str()))?;
        Ok(value)
    }
}

fn not_found_as_sheet(error: StorageError, sheet: &str) -> SheetError {
    match error {
        StorageError::SheetNotFound(_) => SheetError::SheetNotFound(sheet.to_string()),
        StorageError::RowOutOfRange { row, .. } => SheetError::RowOutOfRange {
            sheet: sheet.to_string(),
            row,
        },
        other => SheetError::Storage(other),
    }
}

impl Workbook for GitWorkbook {
    fn title(&self) -> String {
        self.repo
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.repo.path().display().to_string())
    }

    fn sheet_names(&self) -> SheetResult<Vec<String>> {
        let head = self.repo.head()?;
        Ok(self
            .repo
            .list_sheets(head)?
            .into_iter()
            .map(SheetName::into_string)
            .collect())
    }

    fn add_sheet(&self, sheet: &str, rows: &[Vec<String>]) -> SheetResult<()> {
        let name = SheetName::new(sheet)?;
        let head = self.repo.head()?;
        self.repo
            .create_sheet(
                &name,
                Grid::from_rows(rows.to_vec()),
                head,
                &CommitMessage::add_sheet(sheet),
            )
            .map_err(|e| match e {
                StorageError::SheetAlreadyExists(_) => {
                    SheetError::SheetAlreadyExists(sheet.to_string())
                }
                other => SheetError::Storage(other),
            })?;
        Ok(())
    }

    fn read_range(&self, sheet: &str, range: &CellRange) -> SheetResult<Vec<Vec<String>>> {
        let name = SheetName::new(sheet)?;
        let head = self.repo.head()?;
        let stored = self
            .repo
            .read_sheet(&name, head)?
            .ok_or_else(|| SheetError::SheetNotFound(sheet.to_string()))?;
        Ok(stored.grid.read(range))
    }

    fn write_cell(&self, sheet: &str, cell: CellRef, value: &str) -> SheetResult<()> {
        self.update(&SheetName::new(sheet)?, |grid| {
            grid.set(cell, value);
            Ok(((), CommitMessage::write_cell(sheet, &cell.to_string(), value)))
        })
    }

    fn append_row(&self, sheet: &str, values: &[String]) -> SheetResult<()> {
        self.update(&SheetName::new(sheet)?, |grid| {
            let row = grid.append(values);
            Ok(((), CommitMessage::append_row(sheet, row)))
        })
    }

    fn delete_row(&self, sheet: &str, row: u32) -> SheetResult<()> {
        let name = SheetName::new(sheet)?;
        self.update(&name, |grid| {
            if !grid.delete(row) {
                return Err(StorageError::RowOutOfRange {
                    sheet: name.clone(),
                    row,
                });
            }
            Ok(((), CommitMessage::delete_row(sheet, row)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn setup() -> (TempDir, GitWorkbook) {
        let dir = TempDir::new().unwrap();
        let book = GitWorkbook::open_or_init(dir.path()).unwrap();
        (dir, book)
    }

    #[test]
    fn test_cell_operations_commit() {
        let (_dir, book) = setup();
        book.add_sheet("Austin Roster", &[row(&["Name", "Show", "Gender"])])
            .unwrap();
        book.append_row("Austin Roster", &row(&["GUNTHER", "RAW", "M"]))
            .unwrap();
        book.write_cell("Austin Roster", "B2".parse().unwrap(), "SMACKDOWN")
            .unwrap();

        let range: CellRange = "A2:C".parse().unwrap();
        assert_eq!(
            book.read_range("Austin Roster", &range).unwrap(),
            vec![row(&["GUNTHER", "SMACKDOWN", "M"])]
        );

        book.delete_row("Austin Roster", 2).unwrap();
        assert!(book.read_range("Austin Roster", &range).unwrap().is_empty());

        assert!(matches!(
            book.delete_row("Austin Roster", 2),
            Err(SheetError::RowOutOfRange { row: 2, .. })
        ));

        // init + add + append + write + delete; the failed delete commits nothing
        let log = book.recent_changes(10).unwrap();
        assert_eq!(log.len(), 5);
        assert_eq!(log[0].summary(), "[DELETE] Austin Roster!2");
    }

    #[test]
    fn test_missing_sheet_maps_to_sheet_error() {
        let (_dir, book) = setup();
        let range: CellRange = "A1:B".parse().unwrap();
        assert!(matches!(
            book.read_range("Nowhere", &range),
            Err(SheetError::SheetNotFound(_))
        ));
        assert!(matches!(
            book.append_row("Nowhere", &row(&["x"])),
            Err(SheetError::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_sheet_names_and_duplicates() {
        let (dir, book) = setup();
        book.add_sheet("Championship Tracker", &[]).unwrap();
        assert!(matches!(
            book.add_sheet("Championship Tracker", &[]),
            Err(SheetError::SheetAlreadyExists(_))
        ));
        assert_eq!(book.sheet_names().unwrap(), vec!["Championship Tracker".to_string()]);

        let reopened = GitWorkbook::open(dir.path()).unwrap();
        assert_eq!(reopened.sheet_names().unwrap().len(), 1);
    }

    #[test]
    fn test_lost_race_fails_without_retry() {
        let (dir, book) = setup();
        book.add_sheet("NXT Free Agents", &[row(&["Name", "Gender"])]).unwrap();
        let rival = GitWorkbook::open(dir.path()).unwrap();
        let name = SheetName::new("NXT Free Agents").unwrap();

        let result = book.update(&name, |grid| {
            rival.append_row("NXT Free Agents", &row(&["GIULIA", "F"])).unwrap();
            let appended = grid.append(&row(&["OBA FEMI", "M"]));
            Ok(((), CommitMessage::append_row("NXT Free Agents", appended)))
        });

        assert!(matches!(
            result,
            Err(SheetError::Storage(StorageError::ConcurrentModification { .. }))
        ));
        let range: CellRange = "A2:B".parse().unwrap();
        assert_eq!(
            book.read_range("NXT Free Agents", &range).unwrap(),
            vec![row(&["GIULIA", "F"])]
        );
    }
}
