//! Creating the league worksheets.

use serde::{Deserialize, Serialize};

use crate::league::error::{LeagueError, LeagueResult};
use crate::league::layout;
use crate::league::types::Team;
use crate::sheet::Workbook;

/// A title to pre-seed into the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTitle {
    pub title: String,
    /// Show label written to the tracker's show column.
    pub show: String,
}

impl SeedTitle {
    pub fn new(title: impl Into<String>, show: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show: show.into(),
        }
    }

    /// Parse a JSON list of `{"title": ..., "show": ...}` objects.
    pub fn from_json(json: &str) -> serde_json::Result<Vec<SeedTitle>> {
        serde_json::from_str(json)
    }

    /// The standard title list. No name is contained in another, so each
    /// full name, "Tag Team Championship" and "Women's Championship" all
    /// pick out a single title.
    pub fn defaults() -> Vec<SeedTitle> {
        vec![
            SeedTitle::new("World Heavyweight Championship", "RAW"),
            SeedTitle::new("Women's World Championship", "RAW"),
            SeedTitle::new("Intercontinental Championship", "RAW"),
            SeedTitle::new("World Tag Team Titles", "RAW"),
            SeedTitle::new("Undisputed WWE Championship", "Smackdown"),
            SeedTitle::new("WWE Women's Championship", "Smackdown"),
            SeedTitle::new("United States Championship", "Smackdown"),
            SeedTitle::new("WWE Tag Team Championship", "Smackdown"),
            SeedTitle::new("NXT Championship", "NXT"),
            SeedTitle::new("NXT Women's Title", "NXT"),
        ]
    }
}

/// Which worksheets `initialize` created and which it found in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

/// Create any missing league worksheet.
///
/// Existing worksheets are left untouched, including an existing tracker:
/// `titles` is only written into a tracker created by this call.
pub fn initialize(book: &dyn Workbook, titles: &[SeedTitle]) -> LeagueResult<InitReport> {
    if titles.len() > layout::MAX_TITLES {
        return Err(LeagueError::invalid(format!(
            "the tracker holds at most {} titles, got {}",
            layout::MAX_TITLES,
            titles.len()
        )));
    }
    if let Some(blank) = titles.iter().position(|t| t.title.trim().is_empty()) {
        return Err(LeagueError::invalid(format!("seed title #{} has no name", blank + 1)));
    }

    let present = book.sheet_names()?;
    let mut report = InitReport::default();

    let mut tracker = layout::tracker_header();
    tracker.extend(titles.iter().map(|t| {
        vec![
            t.title.clone(),
            String::new(),
            String::new(),
            String::new(),
            "0".to_string(),
            String::new(),
            t.show.clone(),
        ]
    }));

    let mut wanted = vec![
        (layout::TRACKER_SHEET.to_string(), tracker),
        (layout::HISTORY_SHEET.to_string(), layout::history_header()),
        (layout::FREE_AGENT_SHEET.to_string(), layout::member_header()),
    ];
    wanted.extend(
        Team::ALL
            .iter()
            .map(|team| (team.roster_sheet(), layout::member_header())),
    );

    for (sheet, rows) in wanted {
        if present.contains(&sheet) {
            report.existing.push(sheet);
            continue;
        }
        book.add_sheet(&sheet, &rows)?;
        tracing::info!(sheet = %sheet, rows = rows.len(), "created worksheet");
        report.created.push(sheet);
    }

    Ok(report)
}
