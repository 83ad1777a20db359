//! Consistency operations.
//!
//! Each operation reads what it needs, validates, then issues its writes
//! one by one through the port. There is no transaction around the
//! writes: if the store fails part way, the earlier writes stay.

use crate::league::error::{LeagueError, LeagueResult};
use crate::league::ledger::{History, MemberSheet, Tracker};
use crate::league::names;
use crate::league::types::{
    Gender, PreviousReign, Release, ReignStatus, Show, Signing, Team, TitleChange,
};
use crate::sheet::Workbook;

/// League state as seen through one workbook handle.
pub struct League<'a> {
    book: &'a dyn Workbook,
}

impl<'a> League<'a> {
    pub fn new(book: &'a dyn Workbook) -> Self {
        Self { book }
    }

    pub fn workbook(&self) -> &'a dyn Workbook {
        self.book
    }

    pub(crate) fn tracker(&self) -> Tracker<'a> {
        Tracker::new(self.book)
    }

    pub(crate) fn history(&self) -> History<'a> {
        History::new(self.book)
    }

    pub(crate) fn roster(&self, team: Team) -> MemberSheet<'a> {
        MemberSheet::new(self.book, team.roster_sheet())
    }

    pub(crate) fn pool(&self) -> MemberSheet<'a> {
        MemberSheet::free_agents(self.book)
    }

    /// Hand a title to a new champion.
    ///
    /// The outgoing champion (if any) is written to the history ledger as a
    /// lost reign before the tracker row is overwritten. A failure after the
    /// history append leaves that record in place; retrying the command
    /// appends it again.
    pub fn crown(&self, title: &str, champion: &str, team: &str) -> LeagueResult<TitleChange> {
        let team: Team = team.parse()?;

        let tracker = self.tracker();
        let current = tracker.locate(title)?.ok_or_else(|| {
            LeagueError::not_found(format!("Championship '{}' not found in tracker", title))
        })?;

        let previous = if current.is_vacant() {
            None
        } else {
            let history = self.history();
            let reign_number = history.next_reign_number(&current.title, &current.champion)?;
            history.append(
                &current.title,
                &current.champion,
                &current.team,
                reign_number,
                ReignStatus::Lost,
                current.days_held,
            )?;
            Some(PreviousReign {
                champion: current.champion.clone(),
                days_held: current.days_held,
                reign_number,
            })
        };

        let new_champion = names::canonical(champion);
        tracker.set_champion(current.row, &new_champion)?;
        tracker.set_team(current.row, team.name())?;
        tracker.set_days(current.row, 0)?;

        tracing::info!(
            title = %current.title,
            champion = %new_champion,
            team = %team,
            previous = previous.as_ref().map(|p| p.champion.as_str()).unwrap_or(""),
            "title changed hands"
        );

        Ok(TitleChange {
            title: current.title,
            new_champion,
            team,
            previous,
        })
    }

    /// Add `delta` days to every held title. Returns how many were updated.
    ///
    /// Each title is a separate write; a failure stops the loop and leaves
    /// the titles already updated as they are.
    pub fn add_days(&self, delta: u64) -> LeagueResult<usize> {
        let tracker = self.tracker();
        let mut updated = 0;

        for title in tracker.championships()? {
            if title.is_vacant() {
                continue;
            }
            tracker.set_days(title.row, title.days_held.saturating_add(delta))?;
            updated += 1;
        }

        tracing::info!(delta, updated, "advanced reign days");
        Ok(updated)
    }

    /// Sign a wrestler to a team roster.
    ///
    /// A matching free agent is removed from the pool afterwards on a
    /// best-effort basis; a failure there is logged and does not undo the
    /// signing.
    pub fn assign(&self, name: &str, team: &str, show: &str, gender: &str) -> LeagueResult<Signing> {
        let team: Team = team.parse()?;
        let show = Show::parse_roster(show)?;
        let gender: Gender = gender.parse()?;

        let roster = self.roster(team);
        if roster.locate(name)?.is_some() {
            return Err(LeagueError::already_exists(format!(
                "{} is already on {}'s roster",
                name, team
            )));
        }

        let canonical = names::canonical(name);
        roster.append(&canonical, show.as_str(), gender.as_str())?;

        let released_from_pool = match self.take_from_pool(name) {
            Ok(taken) => taken.is_some(),
            Err(e) => {
                tracing::warn!(wrestler = %canonical, error = %e, "could not clear free-agent entry");
                false
            }
        };

        tracing::info!(wrestler = %canonical, team = %team, show = %show, released_from_pool, "wrestler signed");

        Ok(Signing {
            name: canonical,
            team,
            show,
            released_from_pool,
        })
    }

    /// Move a wrestler off a team roster and back into the free-agent pool.
    ///
    /// The roster row is deleted before the pool row is appended; if the
    /// append fails the wrestler is on neither list.
    pub fn release(&self, name: &str, team: &str) -> LeagueResult<Release> {
        let team: Team = team.parse()?;

        let roster = self.roster(team);
        let member = roster.locate(name)?.ok_or_else(|| {
            LeagueError::not_found(format!("{} not found on {}'s roster", name, team))
        })?;

        let gender = member
            .gender
            .clone()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| Gender::M.to_string());

        roster.remove(&member)?;
        self.pool().append(&member.name, Show::Nxt.as_str(), &gender)?;

        tracing::info!(wrestler = %member.name, team = %team, "wrestler released to free agency");

        Ok(Release {
            name: member.name,
            team,
            gender,
        })
    }

    /// Add a new wrestler to the free-agent pool. Returns the stored name.
    pub fn add_free_agent(&self, name: &str, gender: &str) -> LeagueResult<String> {
        let gender: Gender = gender.parse()?;

        let pool = self.pool();
        if pool.find_overlap(name)?.is_some() {
            return Err(LeagueError::already_exists(format!(
                "{} is already in free agents",
                name
            )));
        }

        let canonical = names::canonical(name);
        pool.append(&canonical, Show::Nxt.as_str(), gender.as_str())?;

        tracing::info!(wrestler = %canonical, gender = %gender, "free agent added");
        Ok(canonical)
    }

    /// Remove the first matching free agent. Returns the stored name.
    pub fn remove_free_agent(&self, name: &str) -> LeagueResult<String> {
        let removed = self
            .take_from_pool(name)?
            .ok_or_else(|| LeagueError::not_found(format!("{} not found in free agents", name)))?;

        tracing::info!(wrestler = %removed, "free agent removed");
        Ok(removed)
    }

    fn take_from_pool(&self, name: &str) -> LeagueResult<Option<String>> {
        let pool = self.pool();
        match pool.locate(name)? {
            Some(member) => {
                pool.remove(&member)?;
                Ok(Some(member.name))
            }
            None => Ok(None),
        }
    }
}
