//!  Branch and reference management.
//!
//!  All league writes land on `main`. Moving `main` is a compare-and-swap so
//!  a writer holding a stale tip fails loudly instead of dropping another
//!  writer's commit.

use git2::Repository;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::{BranchName, CommitId};

/// Manages Git references (branches).
pub struct RefManager;

impl RefManager {
    /// Resolve a branch name to its current commit ID.
    pub fn resolve_branch(repo: &Repository, branch: &BranchName) -> StorageResult<CommitId> {
        let reference = repo
            .find_reference(&branch.as_ref_path())
            .map_err(|_| StorageError::RefNotFound(branch.to_string()))?;

        let commit = reference
            .peel_to_commit()
            .map_err(|_| StorageError::RefNotFound(branch.to_string()))?;

        Ok(CommitId::new(commit.id()))
    }

    /// Get the current HEAD commit.
    pub fn head_commit(repo: &Repository) -> StorageResult<CommitId> {
        let head = repo.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                StorageError::EmptyRepository
            } else {
                StorageError::Git(e)
            }
        })?;

        let commit = head.peel_to_commit()?;
        Ok(CommitId::new(commit.id()))
    }

    pub fn branch_exists(repo: &Repository, branch: &BranchName) -> bool {
        repo.find_reference(&branch.as_ref_path()).is_ok()
    }

    /// Create a new branch pointing to the given commit.
    pub fn create_branch(repo: &Repository, branch: &BranchName, target: CommitId) -> StorageResult<()> {
        if Self::branch_exists(repo, branch) {
            return Err(StorageError::BranchAlreadyExists(branch.to_string()));
        }

        let commit = repo.find_commit(target.raw())?;
        repo.branch(branch.as_str(), &commit, false)?;

        Ok(())
    }

    /// Update a branch only if it still points to the expected commit.
    ///
    /// The check and the update are one locked ref transaction in libgit2,
    /// so writers in other processes are covered too.
    pub fn update_branch_if_unchanged(
        repo: &Repository,
        branch: &BranchName,
        expected: CommitId,
        new_target: CommitId,
    ) -> StorageResult<()> {
        repo.reference_matching(
            &branch.as_ref_path(),
            new_target.raw(),
            true,
            expected.raw(),
            &format!("update branch to {}", new_target.short()),
        )
        .map_err(|e| match e.code() {
            git2::ErrorCode::Modified => StorageError::ConcurrentModification {
                branch: branch.to_string(),
            },
            git2::ErrorCode::NotFound => StorageError::RefNotFound(branch.to_string()),
            _ => StorageError::Git(e),
        })?;

        Ok(())
    }

    /// Create `main` at the initial commit and point HEAD at it.
    pub fn init_main_branch(repo: &Repository, initial_commit: CommitId) -> StorageResult<()> {
        let main = BranchName::main();

        if !Self::branch_exists(repo, &main) {
            Self::create_branch(repo, &main, initial_commit)?;
        }

        repo.set_head(&main.as_ref_path())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::commit::{create_initial_commit, get_tree_at_commit, CommitBuilder};
    use crate::storage::types::GitSignature;
    use tempfile::TempDir;

    fn setup_repo_with_commit() -> (TempDir, Repository, CommitId) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let commit_id = create_initial_commit(&repo, &GitSignature::beltkeeper()).unwrap();
        RefManager::init_main_branch(&repo, commit_id).unwrap();
        (dir, repo, commit_id)
    }

    fn child_of(repo: &Repository, parent: CommitId) -> CommitId {
        let tree = get_tree_at_commit(repo, parent).unwrap();
        CommitBuilder::new(repo)
            .tree(tree.id())
            .parent(parent)
            .message("child")
            .commit()
            .unwrap()
    }

    #[test]
    fn test_head_commit() {
        let (_dir, repo, expected) = setup_repo_with_commit();
        assert_eq!(RefManager::head_commit(&repo).unwrap(), expected);
        assert_eq!(
            RefManager::resolve_branch(&repo, &BranchName::main()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_empty_repository() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        assert!(matches!(
            RefManager::head_commit(&repo),
            Err(StorageError::EmptyRepository)
        ));
    }

    #[test]
    fn test_update_if_unchanged() {
        let (_dir, repo, root) = setup_repo_with_commit();
        let main = BranchName::main();

        let first = child_of(&repo, root);
        RefManager::update_branch_if_unchanged(&repo, &main, root, first).unwrap();
        assert_eq!(RefManager::head_commit(&repo).unwrap(), first);

        // stale expectation
        let second = child_of(&repo, root);
        let result = RefManager::update_branch_if_unchanged(&repo, &main, root, second);
        assert!(matches!(result, Err(StorageError::ConcurrentModification { .. })));
        assert_eq!(RefManager::head_commit(&repo).unwrap(), first);
    }

    #[test]
    fn test_update_if_unchanged_across_handles() {
        let (dir, repo, root) = setup_repo_with_commit();
        let other = Repository::open(dir.path()).unwrap();
        let main = BranchName::main();

        let ours = child_of(&repo, root);
        let theirs = child_of(&other, root);
        RefManager::update_branch_if_unchanged(&other, &main, root, theirs).unwrap();

        let result = RefManager::update_branch_if_unchanged(&repo, &main, root, ours);
        assert!(matches!(result, Err(StorageError::ConcurrentModification { .. })));
        assert_eq!(RefManager::resolve_branch(&repo, &main).unwrap(), theirs);
    }

    #[test]
    fn test_create_existing_branch_fails() {
        let (_dir, repo, root) = setup_repo_with_commit();
        let result = RefManager::create_branch(&repo, &BranchName::main(), root);
        assert!(matches!(result, Err(StorageError::BranchAlreadyExists(_))));
    }
}
