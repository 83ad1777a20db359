//! tree operations for worksheet management.
//!
//! The root tree of every commit holds one blob per worksheet, named
//! `{sheet}.json`. Entries starting with `_` or `.` are store metadata and
//! never surface as sheets.

use git2::{FileMode, ObjectType, Repository, Tree, TreeBuilder as Git2TreeBuilder};

use crate::sheet::SheetName;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::{sheet_file_name, BlobId, TreeId};

/// A read only handle to a git tree at a specific commit
///
/// think of it as a snapshot - it won't change even if new commits are made.
pub struct TreeHandle<'repo> {
    tree: Tree<'repo>,
}

impl<'repo> TreeHandle<'repo> {
    pub(crate) fn new(tree: Tree<'repo>) -> Self {
        Self { tree }
    }

    pub fn id(&self) -> TreeId {
        TreeId::new(self.tree.id())
    }

    pub(crate) fn inner(&self) -> &Tree<'repo> {
        &self.tree
    }

    /// list all worksheets stored in this tree
    pub fn list_sheets(&self) -> Vec<SheetName> {
        self.tree
            .iter()
            .filter_map(|entry| {
                if entry.kind() != Some(ObjectType::Blob) {
                    return None;
                }
                let stem = entry.name()?.strip_suffix(".json")?;
                SheetName::new(stem).ok()
            })
            .collect()
    }

    /// get the blob ID for a worksheet, if present
    pub fn get_sheet_blob_id(&self, sheet: &SheetName) -> StorageResult<Option<BlobId>> {
        let filename = sheet_file_name(sheet);
        match self.tree.get_name(&filename) {
            Some(entry) => {
                if entry.kind() != Some(ObjectType::Blob) {
                    return Err(StorageError::UnexpectedEntryType {
                        path: filename.into(),
                        expected: "blob (file)".to_string(),
                        found: format!("{:?}", entry.kind()),
                    });
                }
                Ok(Some(BlobId::new(entry.id())))
            }
            None => Ok(None),
        }
    }

    pub fn sheet_exists(&self, sheet: &SheetName) -> StorageResult<bool> {
        Ok(self.get_sheet_blob_id(sheet)?.is_some())
    }
}

/// a mutable tree builder for making changes
///
/// this accumulates changes and produces a new tree when written;
/// the original tree is not modified
pub struct TreeMutator<'repo> {
    root_builder: Git2TreeBuilder<'repo>,
}

impl<'repo> TreeMutator<'repo> {
    pub fn from_tree(repo: &'repo Repository, tree: &TreeHandle<'_>) -> StorageResult<Self> {
        let root_builder = repo.treebuilder(Some(tree.inner()))?;
        Ok(Self { root_builder })
    }

    pub fn empty(repo: &'repo Repository) -> StorageResult<Self> {
        let root_builder = repo.treebuilder(None)?;
        Ok(Self { root_builder })
    }

    /// insert or replace a worksheet blob
    pub fn upsert_sheet(&mut self, sheet: &SheetName, blob_id: BlobId) -> StorageResult<()> {
        self.root_builder
            .insert(sheet_file_name(sheet), blob_id.raw(), FileMode::Blob.into())?;
        Ok(())
    }

    /// write all changes and return the new root tree ID
    pub fn write(self) -> StorageResult<TreeId> {
        let root_id = self.root_builder.write()?;
        Ok(TreeId::new(root_id))
    }
}

/// create the (empty) root tree of a new league repository
pub fn create_initial_tree(repo: &Repository) -> StorageResult<TreeId> {
    TreeMutator::empty(repo)?.write()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_list_sheets_empty() {
        let (_dir, repo) = setup_repo();
        let tree_id = create_initial_tree(&repo).unwrap();
        let tree = repo.find_tree(tree_id.raw()).unwrap();
        assert!(TreeHandle::new(tree).list_sheets().is_empty());
    }

    #[test]
    fn test_upsert_and_list_sheets() {
        let (_dir, repo) = setup_repo();
        let tree_id = create_initial_tree(&repo).unwrap();
        let tree = repo.find_tree(tree_id.raw()).unwrap();
        let handle = TreeHandle::new(tree);

        let blob_id = BlobId::new(repo.blob(b"{}").unwrap());
        let tracker = SheetName::new("Championship Tracker").unwrap();
        let roster = SheetName::new("Austin Roster").unwrap();

        let mut mutator = TreeMutator::from_tree(&repo, &handle).unwrap();
        mutator.upsert_sheet(&tracker, blob_id).unwrap();
        mutator.upsert_sheet(&roster, blob_id).unwrap();
        let tree_id = mutator.write().unwrap();

        let handle = TreeHandle::new(repo.find_tree(tree_id.raw()).unwrap());
        let sheets = handle.list_sheets();
        assert_eq!(sheets.len(), 2);
        assert!(handle.sheet_exists(&tracker).unwrap());
        assert_eq!(handle.get_sheet_blob_id(&roster).unwrap(), Some(blob_id));
    }
}
