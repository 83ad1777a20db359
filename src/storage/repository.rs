//!   Core Git repository wrapper.
//!
//!  This is the central component of the storage layer. It wraps
//!  `git2::Repository` behind a lock and offers whole-sheet reads and
//!  whole-sheet commits; the cell-level view lives in `workbook`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use git2::Repository;
use parking_lot::Mutex;

use crate::sheet::{Grid, SheetName};
use crate::storage::blob::{self, SheetBlob};
use crate::storage::commit::{self, CommitBuilder, CommitInfo};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::refs::RefManager;
use crate::storage::tree::TreeMutator;
use crate::storage::types::{BranchName, CommitId, GitSignature};

/// The main Git repository wrapper.
///
/// Clone this to share it - it uses Arc internally.
#[derive(Clone)]
pub struct GitRepository {
    inner: Arc<GitRepositoryInner>,
}

struct GitRepositoryInner {
    repo: Mutex<Repository>,
    path: PathBuf,
    signature: GitSignature,
}

impl GitRepository {
    /// Open an existing repository.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .map_err(|_| StorageError::NotInitialized(path.to_path_buf()))?;

        Ok(Self::wrap(repo, path))
    }

    /// Initialize a new repository with an empty root commit on `main`.
    pub fn init(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let repo = Repository::init(path)?;
        let storage = Self::wrap(repo, path);

        storage.with_repo(|repo| {
            let commit_id = commit::create_initial_commit(repo, &storage.inner.signature)?;
            RefManager::init_main_branch(repo, commit_id)?;
            Ok(())
        })?;

        tracing::debug!(path = %path.display(), "initialized league store");
        Ok(storage)
    }

    /// Open or initialize a repository.
    pub fn open_or_init(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if path.join(".git").exists() {
            Self::open(path)
        } else {
            Self::init(path)
        }
    }

    fn wrap(repo: Repository, path: &Path) -> Self {
        Self {
            inner: Arc::new(GitRepositoryInner {
                repo: Mutex::new(repo),
                path: path.to_path_buf(),
                signature: GitSignature::beltkeeper(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Execute a function with exclusive access to the repository.
    pub fn with_repo<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Repository) -> StorageResult<T>,
    {
        let repo = self.inner.repo.lock();
        f(&repo)
    }

    // ==================== High-level Operations ====================

    /// Get the current HEAD commit (tip of main branch).
    pub fn head(&self) -> StorageResult<CommitId> {
        self.with_repo(RefManager::head_commit)
    }

    pub fn get_commit(&self, id: CommitId) -> StorageResult<CommitInfo> {
        self.with_repo(|repo| commit::get_commit(repo, id))
    }

    // ==================== Sheet Operations ====================

    /// List all worksheets at a commit.
    pub fn list_sheets(&self, at: CommitId) -> StorageResult<Vec<SheetName>> {
        self.with_repo(|repo| {
            let tree = commit::get_tree_at_commit(repo, at)?;
            Ok(tree.list_sheets())
        })
    }

    /// Read a worksheet at a commit.
    pub fn read_sheet(&self, sheet: &SheetName, at: CommitId) -> StorageResult<Option<SheetBlob>> {
        self.with_repo(|repo| {
            let tree = commit::get_tree_at_commit(repo, at)?;

            let blob_id = match tree.get_sheet_blob_id(sheet)? {
                Some(id) => id,
                None => return Ok(None),
            };

            let bytes = blob::read_blob(repo, blob_id)?;
            Ok(Some(blob::deserialize_sheet(&bytes, sheet)?))
        })
    }

    /// Create a worksheet on top of `at` and publish it to `main`.
    ///
    /// Fails if the sheet already exists or `main` moved past `at`.
    pub fn create_sheet(
        &self,
        sheet: &SheetName,
        grid: Grid,
        at: CommitId,
        message: &str,
    ) -> StorageResult<CommitId> {
        self.with_repo(|repo| {
            let tree = commit::get_tree_at_commit(repo, at)?;
            if tree.sheet_exists(sheet)? {
                return Err(StorageError::SheetAlreadyExists(sheet.clone()));
            }

            let blob_id = blob::write_blob(repo, &SheetBlob::new(sheet.clone(), grid))?;
            let mut mutator = TreeMutator::from_tree(repo, &tree)?;
            mutator.upsert_sheet(sheet, blob_id)?;
            let new_tree_id = mutator.write()?;

            self.publish(repo, new_tree_id, at, message)
        })
    }

    /// Replace the content of an existing worksheet and publish to `main`.
    ///
    /// `mutate` runs against the sheet as of `at`; the commit is only
    /// published if `main` still points at `at`.
    pub fn update_sheet<F, T>(
        &self,
        sheet: &SheetName,
        at: CommitId,
        mutate: F,
    ) -> StorageResult<(CommitId, T)>
    where
        F: FnOnce(&mut Grid) -> StorageResult<(T, String)>,
    {
        self.with_repo(|repo| {
            let tree = commit::get_tree_at_commit(repo, at)?;
            let blob_id = tree
                .get_sheet_blob_id(sheet)?
                .ok_or_else(|| StorageError::SheetNotFound(sheet.clone()))?;

            let current = blob::deserialize_sheet(&blob::read_blob(repo, blob_id)?, sheet)?;
            let mut grid = current.grid.clone();
            let (value, message) = mutate(&mut grid)?;

            let blob_id = blob::write_blob(repo, &current.with_update(grid))?;
            let mut mutator = TreeMutator::from_tree(repo, &tree)?;
            mutator.upsert_sheet(sheet, blob_id)?;
            let new_tree_id = mutator.write()?;

            let commit_id = self.publish(repo, new_tree_id, at, &message)?;
            Ok((commit_id, value))
        })
    }

    fn publish(
        &self,
        repo: &Repository,
        tree_id: crate::storage::types::TreeId,
        parent: CommitId,
        message: &str,
    ) -> StorageResult<CommitId> {
        let commit_id = CommitBuilder::new(repo)
            .tree(tree_id)
            .parent(parent)
            .message(message)
            .signature(self.inner.signature.clone())
            .commit()?;

        RefManager::update_branch_if_unchanged(repo, &BranchName::main(), parent, commit_id)?;
        tracing::debug!(commit = %commit_id.short(), message, "published store commit");
        Ok(commit_id)
    }

    /// Get commit history, newest first.
    pub fn history(&self, from: CommitId, limit: Option<usize>) -> StorageResult<Vec<CommitInfo>> {
        self.with_repo(|repo| {
            let iter = commit::history(repo, from)?;
            match limit {
                Some(n) => iter.take(n).collect(),
                None => iter.collect(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, GitRepository) {
        let dir = TempDir::new().unwrap();
        let repo = GitRepository::init(dir.path()).unwrap();
        (dir, repo)
    }

    fn header() -> Grid {
        Grid::from_rows(vec![vec!["Name".to_string(), "Show".to_string()]])
    }

    #[test]
    fn test_init_and_open() {
        let dir = TempDir::new().unwrap();

        let repo = GitRepository::init(dir.path()).unwrap();
        let head1 = repo.head().unwrap();

        drop(repo);
        let repo = GitRepository::open(dir.path()).unwrap();
        assert_eq!(head1, repo.head().unwrap());
    }

    #[test]
    fn test_open_or_init() {
        let dir = TempDir::new().unwrap();

        let repo1 = GitRepository::open_or_init(dir.path()).unwrap();
        let head1 = repo1.head().unwrap();

        drop(repo1);
        let repo2 = GitRepository::open_or_init(dir.path()).unwrap();
        assert_eq!(head1, repo2.head().unwrap());
    }

    #[test]
    fn test_open_missing() {
        let dir = TempDir::new().unwrap();
        let result = GitRepository::open(dir.path().join("nope"));
        assert!(matches!(result, Err(StorageError::NotInitialized(_))));
    }

    #[test]
    fn test_create_and_read_sheet() {
        let (_dir, repo) = setup();
        let head = repo.head().unwrap();
        let sheet = SheetName::new("Austin Roster").unwrap();

        let head = repo.create_sheet(&sheet, header(), head, "create").unwrap();
        assert_eq!(repo.list_sheets(head).unwrap(), vec![sheet.clone()]);

        let stored = repo.read_sheet(&sheet, head).unwrap().unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.grid, header());

        let again = repo.create_sheet(&sheet, header(), head, "create");
        assert!(matches!(again, Err(StorageError::SheetAlreadyExists(_))));
    }

    #[test]
    fn test_update_sheet_bumps_version() {
        let (_dir, repo) = setup();
        let head = repo.head().unwrap();
        let sheet = SheetName::new("NXT Free Agents").unwrap();
        let head = repo.create_sheet(&sheet, header(), head, "create").unwrap();

        let (head, written) = repo
            .update_sheet(&sheet, head, |grid| {
                let row = grid.append(&["SOLO SIKOA".to_string(), "NXT".to_string()]);
                Ok((row, "append".to_string()))
            })
            .unwrap();
        assert_eq!(written, 2);

        let stored = repo.read_sheet(&sheet, head).unwrap().unwrap();
        assert_eq!(stored.version, 2);
        assert_eq!(stored.grid.len(), 2);
        assert_eq!(repo.get_commit(head).unwrap().summary(), "append");
    }

    #[test]
    fn test_stale_update_is_rejected() {
        let (_dir, repo) = setup();
        let root = repo.head().unwrap();
        let sheet = SheetName::new("A").unwrap();
        repo.create_sheet(&sheet, header(), root, "create").unwrap();

        // writer still holding the root commit
        let result = repo.create_sheet(&SheetName::new("B").unwrap(), header(), root, "create");
        assert!(matches!(result, Err(StorageError::ConcurrentModification { .. })));
    }

    #[test]
    fn test_update_missing_sheet() {
        let (_dir, repo) = setup();
        let head = repo.head().unwrap();
        let result = repo.update_sheet(&SheetName::new("Nope").unwrap(), head, |_| {
            Ok(((), String::new()))
        });
        assert!(matches!(result, Err(StorageError::SheetNotFound(_))));
    }

    #[test]
    fn test_history() {
        let (_dir, repo) = setup();
        let head = repo.head().unwrap();
        let head = repo
            .create_sheet(&SheetName::new("A").unwrap(), header(), head, "[ADD SHEET] A")
            .unwrap();

        let history = repo.history(head, Some(10)).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, head);
        assert_eq!(history[0].summary(), "[ADD SHEET] A");
    }
}
