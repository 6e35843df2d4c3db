use std::fmt;

use crate::{CalendarDate, DAYS_PER_WEEK, Region};

/// Width of a rendered week: seven three-character cells
const ROW_WIDTH: usize = 21;

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa ";

/// A month laid out in six Sunday-first weeks, the most any month can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: CalendarDate,
    cells: [[Option<u8>; 7]; 6],
}

impl MonthGrid {
    pub fn new(year: i64, month: i64, region: Region) -> Self {
        let first = region.date_from_ymd(year, month, 1);
        let offset = usize::from(first.dow());
        let week_len = usize::from(DAYS_PER_WEEK);
        let mut cells = [[None; 7]; 6];
        for day in 1..=first.month_length() {
            let pos = offset + usize::from(day) - 1;
            cells[pos / week_len][pos % week_len] = Some(day);
        }
        Self { first, cells }
    }

    /// The first day of the month
    pub const fn first(&self) -> CalendarDate {
        self.first
    }

    pub const fn cells(&self) -> &[[Option<u8>; 7]; 6] {
        &self.cells
    }

    /// Header, weekday row, then one 21-column row per week that has any day in it.
    pub fn lines(&self) -> Vec<String> {
        let title = format!("{} {}", self.first.month_name(), self.first.year());
        let mut lines = vec![center(&title, ROW_WIDTH), WEEKDAY_HEADER.to_owned()];
        lines.extend(
            self.cells
                .iter()
                .filter(|week| week.iter().any(Option::is_some))
                .map(|week| week.iter().map(|cell| render_cell(*cell)).collect()),
        );
        lines
    }
}

fn render_cell(cell: Option<u8>) -> String {
    cell.map_or_else(|| "   ".to_owned(), |day| format!("{day:2} "))
}

/// Centers `text` in `width` columns. An odd margin puts the spare column on
/// the left when `width` is odd.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(margin - left))
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
