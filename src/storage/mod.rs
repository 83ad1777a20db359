//! storage layer for beltkeeper
//!
//! this module keeps the league workbook in a git repository. Each worksheet
//! is a JSON blob at the root of the tree, and each write to a worksheet is
//! one commit on `main`. The league layer only sees the `Workbook` port that
//! `GitWorkbook` implements and never touches git2 directly.
//!
//!  # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      GitWorkbook                            │
//! │        (Workbook port: ranges, cells, rows, sheets)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     GitRepository                           │
//! │    (whole-sheet reads, compare-and-swap sheet commits)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │    tree     │       │    blob     │       │    refs     │
//!  │  (sheets)   │       │   (grids)   │       │   (main)    │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//!         └─────────────────────┼─────────────────────┘
//!                               ▼
//!                        ┌─────────────┐
//!                        │   commit    │
//!                        │ (audit log) │
//!                        └─────────────┘
//!  ```
//!
//! # Usage
//!
//! ```ignore
//! use beltkeeper::sheet::Workbook;
//! use beltkeeper::storage::GitWorkbook;
//!
//! let book = GitWorkbook::open_or_init("./league")?;
//! book.add_sheet("NXT Free Agents", &[vec!["Name".into(), "Show".into(), "Gender".into()]])?;
//! book.append_row("NXT Free Agents", &["TRICK WILLIAMS".into(), "NXT".into(), "M".into()])?;
//!
//! for change in book.recent_changes(5)? {
//!     println!("{} {}", change.id.short(), change.summary());
//! }
//! ```

mod blob;
mod commit;
mod error;
mod refs;
mod repository;
mod tree;
mod types;
mod workbook;

// Re-export public API
pub use blob::SheetBlob;
pub use commit::{CommitInfo, CommitMessage};
pub use error::{StorageError, StorageResult};
pub use repository::GitRepository;
pub use types::{BlobId, BranchName, CommitId, GitSignature, TreeId};
pub use workbook::GitWorkbook;
