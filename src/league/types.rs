//! League data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::league::error::LeagueError;

/// The fixed set of teams in the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Austin,
    Devin,
    Pacelli,
}

impl Team {
    pub const ALL: [Team; 3] = [Team::Austin, Team::Devin, Team::Pacelli];

    pub fn name(&self) -> &'static str {
        match self {
            Team::Austin => "Austin",
            Team::Devin => "Devin",
            Team::Pacelli => "Pacelli",
        }
    }

    /// Worksheet holding this team's roster.
    pub fn roster_sheet(&self) -> String {
        format!("{} Roster", self.name())
    }
}

impl FromStr for Team {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Team::ALL
            .into_iter()
            .find(|team| team.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LeagueError::invalid("Invalid team! Use: austin, devin, or pacelli"))
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Brand a wrestler or title belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Show {
    Raw,
    Smackdown,
    Nxt,
}

impl Show {
    /// Keyword priority when classifying a free-form show label.
    pub const ALL: [Show; 3] = [Show::Raw, Show::Smackdown, Show::Nxt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Show::Raw => "RAW",
            Show::Smackdown => "SMACKDOWN",
            Show::Nxt => "NXT",
        }
    }

    /// Parse a show a team roster may hold (RAW or SMACKDOWN).
    pub fn parse_roster(s: &str) -> Result<Self, LeagueError> {
        match s.parse::<Show>() {
            Ok(show @ (Show::Raw | Show::Smackdown)) => Ok(show),
            _ => Err(LeagueError::invalid("Invalid show! Use: raw or smackdown")),
        }
    }

    /// Classify a tracker show label by the show names it contains as
    /// whole words.
    ///
    /// `"Monday Night RAW"` is RAW; `"Brawl"` and a label naming no show are
    /// `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let words: Vec<&str> = label
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        Show::ALL
            .into_iter()
            .find(|show| words.iter().any(|w| w.eq_ignore_ascii_case(show.as_str())))
    }
}

impl FromStr for Show {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Show::ALL
            .into_iter()
            .find(|show| show.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LeagueError::invalid("Invalid show! Use: raw, smackdown, or nxt"))
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }

    /// Loose reading of a stored gender cell: anything mentioning F is
    /// female, everything else (including blank) is male.
    pub fn from_cell(cell: &str) -> Self {
        if cell.to_uppercase().contains('F') {
            Gender::F
        } else {
            Gender::M
        }
    }
}

impl FromStr for Gender {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            _ => Err(LeagueError::invalid("Invalid gender! Use: M or F")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a history record describes a finished reign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReignStatus {
    Lost,
    Current,
}

impl ReignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReignStatus::Lost => "Lost",
            ReignStatus::Current => "Current",
        }
    }

    /// Blank or `Current` reads as current; any other text as lost.
    pub fn from_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() || cell.eq_ignore_ascii_case("current") {
            ReignStatus::Current
        } else {
            ReignStatus::Lost
        }
    }
}

impl fmt::Display for ReignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wrestler row on a team roster or in the free-agent pool.
///
/// Fields are kept as stored so that moving a wrestler between sheets
/// carries the record over unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// 1-based worksheet row.
    pub row: u32,
    pub name: String,
    pub show: Option<String>,
    pub gender: Option<String>,
}

/// One row of the championship tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Championship {
    pub row: u32,
    pub title: String,
    pub champion: String,
    pub team: String,
    pub days_held: u64,
    /// Free-form label naming the show the title is defended on.
    pub show_label: String,
}

impl Championship {
    pub fn is_vacant(&self) -> bool {
        self.champion.trim().is_empty()
    }

    /// Show the title is grouped under in listings.
    pub fn show(&self) -> Option<Show> {
        Show::from_label(&self.show_label)
    }
}

/// One row of the championship history ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reign {
    pub row: u32,
    pub title: String,
    pub champion: String,
    pub team: String,
    pub reign_number: u32,
    pub status: ReignStatus,
    pub days_held: u64,
}

/// Result of closing one reign and opening the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleChange {
    /// Title as stored in the tracker.
    pub title: String,
    pub new_champion: String,
    pub team: Team,
    /// `None` when the title was vacant.
    pub previous: Option<PreviousReign>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousReign {
    pub champion: String,
    pub days_held: u64,
    pub reign_number: u32,
}

/// Result of assigning a wrestler to a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signing {
    pub name: String,
    pub team: Team,
    pub show: Show,
    /// Whether a matching free agent was removed from the pool.
    pub released_from_pool: bool,
}

/// Result of releasing a wrestler into the free-agent pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub team: Team,
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_parse() {
        assert_eq!("austin".parse::<Team>().unwrap(), Team::Austin);
        assert_eq!(" PACELLI ".parse::<Team>().unwrap(), Team::Pacelli);
        assert!(matches!("cena".parse::<Team>(), Err(LeagueError::InvalidArgument(_))));
        assert_eq!(Team::Devin.roster_sheet(), "Devin Roster");
    }

    #[test]
    fn test_show_parse() {
        assert_eq!(Show::parse_roster("raw").unwrap(), Show::Raw);
        assert_eq!(Show::parse_roster("SmackDown").unwrap(), Show::Smackdown);
        assert!(Show::parse_roster("nxt").is_err());
        assert_eq!("nxt".parse::<Show>().unwrap(), Show::Nxt);
    }

    #[test]
    fn test_show_from_label() {
        assert_eq!(Show::from_label("Monday Night RAW"), Some(Show::Raw));
        assert_eq!(Show::from_label("Smackdown"), Some(Show::Smackdown));
        assert_eq!(Show::from_label("nxt"), Some(Show::Nxt));
        assert_eq!(Show::from_label("RAW / SMACKDOWN"), Some(Show::Raw));
        assert_eq!(Show::from_label("Saturday Night's Main Event"), None);
        assert_eq!(Show::from_label("Saturday Night Brawl"), None);
        assert_eq!(Show::from_label("NXT/Raw"), Some(Show::Raw));
        assert_eq!(Show::from_label(""), None);
    }

    #[test]
    fn test_gender() {
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::F);
        assert!("x".parse::<Gender>().is_err());
        assert_eq!(Gender::from_cell("female"), Gender::F);
        assert_eq!(Gender::from_cell(""), Gender::M);
    }

    #[test]
    fn test_reign_status() {
        assert_eq!(ReignStatus::from_cell(""), ReignStatus::Current);
        assert_eq!(ReignStatus::from_cell("current"), ReignStatus::Current);
        assert_eq!(ReignStatus::from_cell("Lost"), ReignStatus::Lost);
        assert_eq!(ReignStatus::from_cell("Lost at WrestleMania"), ReignStatus::Lost);
    }

    #[test]
    fn test_vacant_championship() {
        let mut title = Championship {
            row: 4,
            title: "Intercontinental Championship".into(),
            champion: "  ".into(),
            team: String::new(),
            days_held: 0,
            show_label: "RAW".into(),
        };
        assert!(title.is_vacant());
        title.champion = "BRON BREAKKER".into();
        assert!(!title.is_vacant());
        assert_eq!(title.show(), Some(Show::Raw));
    }
}
