//! Typed views over the league worksheets.
//!
//! Each ledger reads its worksheet fresh on every call and writes through
//! the port one cell or row at a time. Nothing is cached.

use crate::league::error::LeagueResult;
use crate::league::layout::{self, cell, history, member, parse_days, tracker};
use crate::league::names;
use crate::league::types::{Championship, Member, Reign, ReignStatus};
use crate::sheet::{CellRef, Workbook};

/// The championship tracker: one row per title.
pub struct Tracker<'a> {
    book: &'a dyn Workbook,
}

impl<'a> Tracker<'a> {
    pub fn new(book: &'a dyn Workbook) -> Self {
        Self { book }
    }

    /// All populated tracker rows, in sheet order.
    pub fn championships(&self) -> LeagueResult<Vec<Championship>> {
        let rows = self
            .book
            .read_range(layout::TRACKER_SHEET, &layout::tracker_range())?;

        Ok(rows
            .iter()
            .zip(layout::TRACKER_FIRST_ROW..)
            .filter(|(row, _)| !row.is_empty())
            .map(|(row, number)| Championship {
                row: number,
                title: cell(row, tracker::TITLE).to_string(),
                champion: cell(row, tracker::CHAMPION).to_string(),
                team: cell(row, tracker::TEAM).to_string(),
                days_held: parse_days(cell(row, tracker::DAYS)),
                show_label: cell(row, tracker::SHOW).to_string(),
            })
            .collect())
    }

    /// First title whose stored name contains `query`.
    pub fn locate(&self, query: &str) -> LeagueResult<Option<Championship>> {
        Ok(self
            .championships()?
            .into_iter()
            .find(|c| !c.title.trim().is_empty() && names::locates(&c.title, query)))
    }

    pub fn set_champion(&self, row: u32, champion: &str) -> LeagueResult<()> {
        self.write(row, tracker::CHAMPION, champion)
    }

    pub fn set_team(&self, row: u32, team: &str) -> LeagueResult<()> {
        self.write(row, tracker::TEAM, team)
    }

    pub fn set_days(&self, row: u32, days: u64) -> LeagueResult<()> {
        self.write(row, tracker::DAYS, &days.to_string())
    }

    fn write(&self, row: u32, column: u32, value: &str) -> LeagueResult<()> {
        self.book
            .write_cell(layout::TRACKER_SHEET, CellRef::new(column, row), value)?;
        Ok(())
    }
}

/// The append-only championship history ledger.
pub struct History<'a> {
    book: &'a dyn Workbook,
}

impl<'a> History<'a> {
    pub fn new(book: &'a dyn Workbook) -> Self {
        Self { book }
    }

    pub fn reigns(&self) -> LeagueResult<Vec<Reign>> {
        let rows = self
            .book
            .read_range(layout::HISTORY_SHEET, &layout::history_range())?;

        Ok(rows
            .iter()
            .zip(layout::HISTORY_FIRST_ROW..)
            .filter(|(row, _)| !row.is_empty())
            .map(|(row, number)| Reign {
                row: number,
                title: cell(row, history::TITLE).to_string(),
                champion: cell(row, history::CHAMPION).to_string(),
                team: cell(row, history::TEAM).to_string(),
                reign_number: cell(row, history::REIGN).trim().parse().unwrap_or(1),
                status: ReignStatus::from_cell(cell(row, history::STATUS)),
                days_held: parse_days(cell(row, history::DAYS)),
            })
            .collect())
    }

    /// Number the next reign for a (title, champion) pair: one more than
    /// the records already held for exactly that pair.
    pub fn next_reign_number(&self, title: &str, champion: &str) -> LeagueResult<u32> {
        let prior = self
            .reigns()?
            .iter()
            .filter(|r| names::same_name(&r.title, title) && names::same_name(&r.champion, champion))
            .count();
        Ok(prior as u32 + 1)
    }

    /// Every record whose champion contains `query`.
    pub fn for_wrestler(&self, query: &str) -> LeagueResult<Vec<Reign>> {
        Ok(self
            .reigns()?
            .into_iter()
            .filter(|r| !r.champion.trim().is_empty() && names::locates(&r.champion, query))
            .collect())
    }

    pub fn append(
        &self,
        title: &str,
        champion: &str,
        team: &str,
        reign_number: u32,
        status: ReignStatus,
        days_held: u64,
    ) -> LeagueResult<()> {
        let row = vec![
            title.to_string(),
            champion.to_string(),
            team.to_string(),
            reign_number.to_string(),
            status.as_str().to_string(),
            days_held.to_string(),
        ];
        self.book.append_row(layout::HISTORY_SHEET, &row)?;
        Ok(())
    }
}

/// A membership list: a team roster or the free-agent pool.
pub struct MemberSheet<'a> {
    book: &'a dyn Workbook,
    sheet: String,
}

impl<'a> MemberSheet<'a> {
    pub fn new(book: &'a dyn Workbook, sheet: impl Into<String>) -> Self {
        Self {
            book,
            sheet: sheet.into(),
        }
    }

    pub fn free_agents(book: &'a dyn Workbook) -> Self {
        Self::new(book, layout::FREE_AGENT_SHEET)
    }

    /// Rows with a name, in sheet order.
    pub fn members(&self) -> LeagueResult<Vec<Member>> {
        let rows = self.book.read_range(&self.sheet, &layout::member_range())?;

        Ok(rows
            .iter()
            .zip(layout::MEMBER_FIRST_ROW..)
            .filter(|(row, _)| !cell(row, member::NAME).trim().is_empty())
            .map(|(row, number)| Member {
                row: number,
                name: cell(row, member::NAME).to_string(),
                show: row.get((member::SHOW - 1) as usize).cloned(),
                gender: row.get((member::GENDER - 1) as usize).cloned(),
            })
            .collect())
    }

    /// First member whose stored name contains `query`.
    pub fn locate(&self, query: &str) -> LeagueResult<Option<Member>> {
        Ok(self
            .members()?
            .into_iter()
            .find(|m| names::locates(&m.name, query)))
    }

    /// First member whose name overlaps `name` in either direction.
    pub fn find_overlap(&self, name: &str) -> LeagueResult<Option<Member>> {
        Ok(self
            .members()?
            .into_iter()
            .find(|m| names::overlaps(&m.name, name)))
    }

    pub fn append(&self, name: &str, show: &str, gender: &str) -> LeagueResult<()> {
        let row = vec![name.to_string(), show.to_string(), gender.to_string()];
        self.book.append_row(&self.sheet, &row)?;
        Ok(())
    }

    pub fn remove(&self, member: &Member) -> LeagueResult<()> {
        self.book.delete_row(&self.sheet, member.row)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::MemoryWorkbook;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn book() -> MemoryWorkbook {
        let mut tracker = layout::tracker_header();
        tracker.push(row(&["WWE Championship", "CODY RHODES", "Austin", "", "12", "", "Smackdown"]));
        tracker.push(Vec::new());
        tracker.push(row(&["Intercontinental Championship", "", "", "", "", "", "RAW"]));

        let mut history = layout::history_header();
        history.push(row(&["WWE Championship", "Cody Rhodes", "Austin", "1", "Lost", "30"]));
        history.push(row(&["WWE Championship Belt", "CODY RHODES", "Austin", "1", "Lost", "9"]));
        history.push(row(&["WWE Championship", "CODY", "Devin", "x", "", "y"]));

        let mut roster = layout::member_header();
        roster.push(row(&["RHEA RIPLEY", "RAW", "F"]));
        roster.push(Vec::new());
        roster.push(row(&["GUNTHER"]));

        MemoryWorkbook::new("league")
            .with_sheet(layout::TRACKER_SHEET, tracker)
            .unwrap()
            .with_sheet(layout::HISTORY_SHEET, history)
            .unwrap()
            .with_sheet("Austin Roster", roster)
            .unwrap()
    }

    #[test]
    fn test_tracker_rows_keep_positions() {
        let book = book();
        let titles = Tracker::new(&book).championships().unwrap();
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].row, 4);
        assert_eq!(titles[0].days_held, 12);
        assert_eq!(titles[1].row, 6);
        assert!(titles[1].is_vacant());
        assert_eq!(titles[1].days_held, 0);
    }

    #[test]
    fn test_tracker_locate_by_substring() {
        let book = book();
        let tracker = Tracker::new(&book);
        assert_eq!(tracker.locate("intercontinental").unwrap().unwrap().row, 6);
        assert!(tracker.locate("Tag Team").unwrap().is_none());
    }

    #[test]
    fn test_reign_number_counts_exact_pairs_only() {
        let book = book();
        let history = History::new(&book);
        assert_eq!(history.next_reign_number("wwe championship", "cody rhodes").unwrap(), 2);
        assert_eq!(history.next_reign_number("WWE Championship", "ROMAN REIGNS").unwrap(), 1);
    }

    #[test]
    fn test_history_defaults() {
        let book = book();
        let reigns = History::new(&book).reigns().unwrap();
        let odd = &reigns[2];
        assert_eq!(odd.reign_number, 1);
        assert_eq!(odd.status, ReignStatus::Current);
        assert_eq!(odd.days_held, 0);
        assert_eq!(History::new(&book).for_wrestler("cody").unwrap().len(), 3);
    }

    #[test]
    fn test_members_skip_blank_rows() {
        let book = book();
        let roster = MemberSheet::new(&book, "Austin Roster");
        let members = roster.members().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].row, 4);
        assert_eq!(members[1].show, None);

        assert_eq!(roster.locate("rhea").unwrap().unwrap().row, 2);
        assert!(roster.locate("Rhea Ripley Jr").unwrap().is_none());
        assert_eq!(roster.find_overlap("Gunther Stark").unwrap().unwrap().name, "GUNTHER");
    }
}
