//! Where league data lives inside the workbook.

use crate::sheet::{CellRange, CellRef};

pub const TRACKER_SHEET: &str = "Championship Tracker";
pub const HISTORY_SHEET: &str = "Championship History";
pub const FREE_AGENT_SHEET: &str = "NXT Free Agents";

/// The tracker holds one title per row in rows 4 through 15.
pub const TRACKER_FIRST_ROW: u32 = 4;
pub const TRACKER_LAST_ROW: u32 = 15;
pub const MAX_TITLES: usize = (TRACKER_LAST_ROW - TRACKER_FIRST_ROW + 1) as usize;

pub const HISTORY_FIRST_ROW: u32 = 4;
pub const MEMBER_FIRST_ROW: u32 = 2;

/// Tracker columns (1-based).
pub mod tracker {
    pub const TITLE: u32 = 1;
    pub const CHAMPION: u32 = 2;
    pub const TEAM: u32 = 3;
    pub const DAYS: u32 = 5;
    pub const SHOW: u32 = 7;
}

/// History columns (1-based).
pub mod history {
    pub const TITLE: u32 = 1;
    pub const CHAMPION: u32 = 2;
    pub const TEAM: u32 = 3;
    pub const REIGN: u32 = 4;
    pub const STATUS: u32 = 5;
    pub const DAYS: u32 = 6;
}

/// Roster and free-agent columns (1-based).
pub mod member {
    pub const NAME: u32 = 1;
    pub const SHOW: u32 = 2;
    pub const GENDER: u32 = 3;
}

/// `A4:G15`
pub fn tracker_range() -> CellRange {
    CellRange::new(
        CellRef::new(tracker::TITLE, TRACKER_FIRST_ROW),
        tracker::SHOW,
        Some(TRACKER_LAST_ROW),
    )
}

/// `A4:F`
pub fn history_range() -> CellRange {
    CellRange::new(CellRef::new(history::TITLE, HISTORY_FIRST_ROW), history::DAYS, None)
}

/// `A2:C`
pub fn member_range() -> CellRange {
    CellRange::new(CellRef::new(member::NAME, MEMBER_FIRST_ROW), member::GENDER, None)
}

/// Value of a 1-based column in a row read from the store; missing cells
/// read as empty.
pub fn cell(row: &[String], column: u32) -> &str {
    row.get((column - 1) as usize).map(String::as_str).unwrap_or("")
}

/// A cell that is not all digits counts as zero days.
pub fn parse_days(cell: &str) -> u64 {
    let cell = cell.trim();
    if cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    cell.parse().unwrap_or(0)
}

/// Header rows written when a worksheet is created.
pub fn tracker_header() -> Vec<Vec<String>> {
    banner_header(
        TRACKER_SHEET,
        &["Title", "Champion", "Team", "", "Days", "", "Show"],
    )
}

pub fn history_header() -> Vec<Vec<String>> {
    banner_header(
        HISTORY_SHEET,
        &["Title", "Champion", "Team", "Reign", "Status", "Days"],
    )
}

pub fn member_header() -> Vec<Vec<String>> {
    vec![strings(&["Name", "Show", "Gender"])]
}

// Title, spacer, column names: data starts on row 4.
fn banner_header(title: &str, columns: &[&str]) -> Vec<Vec<String>> {
    vec![vec![title.to_string()], Vec::new(), strings(columns)]
}

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_render_as_a1() {
        assert_eq!(tracker_range().to_string(), "A4:G15");
        assert_eq!(history_range().to_string(), "A4:F");
        assert_eq!(member_range().to_string(), "A2:C");
        assert_eq!(MAX_TITLES, 12);
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("42"), 42);
        assert_eq!(parse_days(""), 0);
        assert_eq!(parse_days("forty"), 0);
        assert_eq!(parse_days("-3"), 0);
        assert_eq!(parse_days("+3"), 0);
    }

    #[test]
    fn test_cell_defaults_to_empty() {
        let row = vec!["WWE Championship".to_string()];
        assert_eq!(cell(&row, tracker::TITLE), "WWE Championship");
        assert_eq!(cell(&row, tracker::SHOW), "");
    }

    #[test]
    fn test_headers_leave_data_rows_free() {
        assert_eq!(tracker_header().len() as u32, TRACKER_FIRST_ROW - 1);
        assert_eq!(history_header().len() as u32, HISTORY_FIRST_ROW - 1);
        assert_eq!(member_header().len() as u32, MEMBER_FIRST_ROW - 1);
    }
}
