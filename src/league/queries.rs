//! Read-only views of league state.

use crate::league::error::LeagueResult;
use crate::league::ops::League;
use crate::league::types::{Championship, Gender, Reign, Show, Team};

/// Held titles that share a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionGroup {
    pub show: Show,
    pub titles: Vec<Championship>,
}

/// One line of a roster or free-agent listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedWrestler {
    pub name: String,
    pub show: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeAgentListing {
    pub male: Vec<ListedWrestler>,
    pub female: Vec<ListedWrestler>,
}

impl FreeAgentListing {
    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }
}

impl<'a> League<'a> {
    /// Held titles grouped by show, in RAW, SMACKDOWN, NXT order.
    ///
    /// Vacant titles and titles whose show label names no show are left
    /// out; empty groups are dropped.
    pub fn champion_board(&self) -> LeagueResult<Vec<ChampionGroup>> {
        let held: Vec<Championship> = self
            .tracker()
            .championships()?
            .into_iter()
            .filter(|c| !c.is_vacant())
            .collect();

        let groups = Show::ALL
            .into_iter()
            .map(|show| ChampionGroup {
                show,
                titles: held.iter().filter(|c| c.show() == Some(show)).cloned().collect(),
            })
            .filter(|group| !group.titles.is_empty())
            .collect();

        tracing::debug!(held = held.len(), "read champion board");
        Ok(groups)
    }

    /// Everyone on a team roster, in sheet order.
    pub fn roster_listing(&self, team: &str) -> LeagueResult<(Team, Vec<ListedWrestler>)> {
        let team: Team = team.parse()?;
        let listed = self
            .roster(team)
            .members()?
            .into_iter()
            .map(|m| ListedWrestler {
                name: m.name,
                show: non_blank(m.show).unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect();
        Ok((team, listed))
    }

    /// The free-agent pool split by gender.
    pub fn free_agent_listing(&self) -> LeagueResult<FreeAgentListing> {
        let mut listing = FreeAgentListing {
            male: Vec::new(),
            female: Vec::new(),
        };

        for member in self.pool().members()? {
            let gender = Gender::from_cell(member.gender.as_deref().unwrap_or(""));
            let entry = ListedWrestler {
                name: member.name,
                show: non_blank(member.show).unwrap_or_else(|| Show::Nxt.to_string()),
            };
            match gender {
                Gender::F => listing.female.push(entry),
                Gender::M => listing.male.push(entry),
            }
        }

        Ok(listing)
    }

    /// Every history record whose champion contains `query`.
    ///
    /// Distinct wrestlers whose names share the query are all returned.
    pub fn wrestler_history(&self, query: &str) -> LeagueResult<Vec<Reign>> {
        self.history().for_wrestler(query)
    }

    /// Worksheet names, for connection checks.
    pub fn sheet_names(&self) -> LeagueResult<Vec<String>> {
        Ok(self.workbook().sheet_names()?)
    }
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.filter(|c| !c.trim().is_empty())
}
