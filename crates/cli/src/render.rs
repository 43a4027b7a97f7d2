//! Plain-text rendering of rosters and reports

use boardcount_core::{CommandReport, Report, RowPair};
use boardcount_domain::{ReportMetadata, Slot, StatusCounts};
use chrono::{Local, NaiveDate};

/// Width of one printed cell
const CELL_WIDTH: usize = 24;

/// Date as printed on the report, e.g. `9 July 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub fn today() -> String {
    format_date(Local::now().date_naive())
}

pub fn slot_line(slot: &Slot) -> String {
    format!(
        "{:>4}  {:<width$}  {}",
        slot.number,
        slot.name.as_deref().unwrap_or("-"),
        slot.status,
        width = CELL_WIDTH
    )
}

pub fn roster(slots: &[&Slot], counts: StatusCounts) -> String {
    let lines: String = slots.iter().map(|slot| slot_line(slot) + "\n").collect();
    format!(
        "{lines}{} shown | {} active | {} inactive | {} total\n",
        slots.len(),
        counts.active,
        counts.inactive,
        counts.total()
    )
}

pub fn metadata(metadata: &ReportMetadata) -> String {
    [
        ("Date", &metadata.date),
        ("Manager", &metadata.manager_name),
        ("Net meal count", &metadata.net_meal_count),
        ("Market", &metadata.market_budget),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<15} {value}\n"))
    .collect()
}

pub fn report(report: &Report<'_>) -> String {
    let header = &report.header;
    let pages: String = report
        .pages
        .iter()
        .map(|page| {
            let rows: String = page.rows.iter().map(|row| row_line(row) + "\n").collect();
            format!("\n--- Page {} ---\n{rows}", page.number)
        })
        .collect();
    format!(
        "Date: {}\n{}Active: {}   Net meal: {}\n{pages}",
        header.date,
        metadata(&header.metadata),
        header.active,
        header.net_meal
    )
}

/// One printed row; the separator only appears when the right cell is filled
fn row_line(row: &RowPair<'_>) -> String {
    let left = row.left.map(Slot::label).unwrap_or_default();
    match row.right {
        Some(right) => format!("{left:<width$}| {}", right.label(), width = CELL_WIDTH),
        None => left,
    }
}

pub fn command_report(report: &CommandReport) -> String {
    if report.skipped.is_empty() {
        format!("{} change(s) applied", report.applied)
    } else {
        format!("{} change(s) applied; skipped: {}", report.applied, report.skipped.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use boardcount_core::{CommandInterpreter, PageCapacity, Report, ReportLayout};
    use boardcount_domain::{Roster, SlotStatus};

    use super::*;

    #[test]
    fn formats_dates_without_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        assert_eq!(format_date(date), "9 July 2025");
    }

    #[test]
    fn report_prints_pages_with_blank_right_cells() {
        let mut roster = Roster::with_base_capacity(6);
        for number in [1, 2, 5] {
            roster.toggle(number);
        }
        roster.set_name(2, "Mim");
        let metadata = ReportMetadata { manager_name: "Sajid".into(), ..Default::default() };

        let built = Report::build(&roster, &metadata, "9 July 2025", ReportLayout::default());
        let text = report(&built);

        assert!(text.contains("Date: 9 July 2025"));
        assert!(text.contains("Sajid"));
        assert!(text.contains("Active: 3   Net meal: 8"));
        assert!(text.contains("--- Page 1 ---"));
        let rows: Vec<&str> = text.lines().skip_while(|l| !l.starts_with("---")).skip(1).collect();
        assert_eq!(rows.len(), 26);
        assert_eq!(rows[0], "1");
        assert_eq!(rows[1], "Mim");
        assert_eq!(rows[2], "5");
        assert_eq!(rows[3], "");
    }

    #[test]
    fn full_rows_are_split_by_a_separator() {
        let mut roster = Roster::with_base_capacity(4);
        for number in 1..=4 {
            roster.toggle(number);
        }
        roster.set_name(3, "Mim");
        let layout =
            ReportLayout { page_capacity: PageCapacity::new(4).unwrap(), ..ReportLayout::default() };

        let built = Report::build(&roster, &ReportMetadata::default(), "x", layout);
        let rows: Vec<String> = built.pages[0].rows.iter().map(row_line).collect();
        assert_eq!(rows, vec![format!("{:<24}| Mim", "1"), format!("{:<24}| 4", "2")]);
    }

    #[test]
    fn empty_roster_report_has_no_pages() {
        let roster = Roster::with_base_capacity(3);
        let built =
            Report::build(&roster, &ReportMetadata::default(), "x", ReportLayout::default());
        assert!(!report(&built).contains("Page"));
    }

    #[test]
    fn roster_lines_show_name_and_status() {
        let mut roster = Roster::with_base_capacity(2);
        roster.set_name(1, "Rafi");
        roster.set_status(2, SlotStatus::Active);
        let slots: Vec<&Slot> = roster.iter().collect();

        let text = super::roster(&slots, roster.counts());
        assert!(text.lines().next().unwrap().contains("Rafi"));
        assert!(text.contains("inactive"));
        assert!(text.ends_with("2 shown | 1 active | 1 inactive | 2 total\n"));
    }

    #[test]
    fn command_report_lists_skipped_tokens() {
        let mut roster_store = {
            use std::sync::Arc;

            use boardcount_core::{RosterSettings, RosterStore};
            use boardcount_infra::MemoryStore;
            RosterStore::load(Arc::new(MemoryStore::new()), RosterSettings::default())
        };
        let report =
            CommandInterpreter::default().execute(&mut roster_store, "active 1 two 3").unwrap();
        assert_eq!(command_report(&report), "2 change(s) applied; skipped: two");
    }
}
