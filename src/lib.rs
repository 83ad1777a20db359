//! Beltkeeper - championship and roster bookkeeping for a fantasy
//! wrestling league.
//!
//! League state lives in a workbook of worksheets: a championship tracker,
//! an append-only history ledger, one roster per team and a free-agent
//! pool. The workbook is stored in a git repository, so every change a
//! moderator makes is a commit and the whole league history stays in
//! `.git/`.
//!
//! # Example
//!
//! ```no_run
//! use beltkeeper::league::{initialize, League, SeedTitle};
//! use beltkeeper::storage::GitWorkbook;
//!
//! let book = GitWorkbook::open_or_init("./league").unwrap();
//! initialize(&book, &SeedTitle::defaults()).unwrap();
//!
//! let league = League::new(&book);
//! league.crown("WWE Championship", "Cody Rhodes", "austin").unwrap();
//! league.add_days(7).unwrap();
//! ```

pub mod bot;
pub mod config;
pub mod league;
pub mod sheet;
pub mod storage;
