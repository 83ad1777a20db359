//! League bookkeeping on top of the table access port.
//!
//! Three kinds of worksheet are kept consistent here:
//!
//! - the championship tracker (current holders, one row per title)
//! - the championship history ledger (finished reigns, append-only)
//! - team rosters and the free-agent pool (wrestler membership)
//!
//! [`League`] bundles the consistency operations (`crown`, `add_days`,
//! `assign`, `release`, free-agent maintenance) and the read-side queries.
//! It borrows a [`Workbook`](crate::sheet::Workbook) and holds no state of
//! its own, so it is cheap to build per command.
//!
//! ```ignore
//! use beltkeeper::league::League;
//! use beltkeeper::storage::GitWorkbook;
//!
//! let book = GitWorkbook::open("./league")?;
//! let league = League::new(&book);
//! let change = league.crown("WWE Championship", "Roman Reigns", "pacelli")?;
//! ```

mod error;
mod layout;
mod ledger;
mod names;
mod ops;
mod queries;
mod seed;
mod types;

pub use error::{LeagueError, LeagueResult};
pub use layout::{FREE_AGENT_SHEET, HISTORY_SHEET, MAX_TITLES, TRACKER_SHEET};
pub use ops::League;
pub use queries::{ChampionGroup, FreeAgentListing, ListedWrestler};
pub use seed::{initialize, InitReport, SeedTitle};
pub use types::{
    Championship, Gender, Member, PreviousReign, Reign, ReignStatus, Release, Show, Signing,
    Team, TitleChange,
};
