//! Lossless conversion between Julian Day Numbers and calendar dates across
//! the Julian-to-Gregorian reform.
//!
//! ```
//! use julian_day::{CalendarDate, Region, Ymd};
//!
//! let date = CalendarDate::from_jdn(2_361_222);
//! assert_eq!(date.ymd(), Ymd::new(1752, 9, 14));
//! assert_eq!(date.to_string(), "Thursday, 14 September 1752");
//!
//! let papal = Region::Catholic.date_from_ymd(1582, 10, 15);
//! assert_eq!(papal.jdn(), 2_299_161);
//! ```

mod consts;
mod convert;
mod grid;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use grid::MonthGrid;
pub use range::{ExportedTable, Histogram, JdnRange, Mismatch, RangeError, YmdTable};
pub use types::{Region, Weekday, Ymd, days_in_month, is_leap_year};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single day, held as its Julian Day Number together with the reform
/// region used to read it as a calendar date.
///
/// Year, month, day, weekday and leap status are derived from the JDN on
/// every access, so a value can never hold a stale calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    jdn:    i64,
    #[serde(default)]
    region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A date is built from one value (a JDN) or three (year, month, day).
    #[error("Invalid argument count: expected 1 (JDN) or 3 (year, month, day), got {0}")]
    InvalidArgument(usize),
    #[error("Unknown calendar region: {0} (expected british or catholic)")]
    UnknownRegion(String),
}

impl CalendarDate {
    /// Creates a date from a JDN using the British switchover
    pub const fn from_jdn(jdn: i64) -> Self {
        Region::British.date_from_jdn(jdn)
    }

    /// Creates a date from year, month and day using the British switchover.
    ///
    /// Months outside `1..=12` are folded into the year and days past the end
    /// of the month carry into the following months.
    pub fn from_ymd(year: i64, month: i64, day: i64) -> Self {
        Region::British.date_from_ymd(year, month, day)
    }

    /// Creates a date from either a lone JDN or a full year/month/day triple.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` when only one of `month` and
    /// `day` is given.
    pub fn from_parts(first: i64, month: Option<i64>, day: Option<i64>) -> Result<Self, CalendarError> {
        Region::British.date_from_parts(first, month, day)
    }

    /// The reform region this date is read in
    pub const fn region(&self) -> Region {
        self.region
    }

    pub const fn jdn(&self) -> i64 {
        self.jdn
    }

    /// Returns the date as (year, month, day)
    pub fn ymd(&self) -> Ymd {
        convert::to_ymd(self.jdn, self.region).0
    }

    pub fn year(&self) -> i64 {
        self.ymd().year
    }

    pub fn month(&self) -> u8 {
        self.ymd().month
    }

    pub fn day(&self) -> u8 {
        self.ymd().day
    }

    /// Whether the date's year is a leap year in its region
    pub fn is_leap(&self) -> bool {
        convert::to_ymd(self.jdn, self.region).1
    }

    /// Day of week where 0 is Sunday and 6 is Saturday. JDN 0 is a Monday.
    pub const fn dow(&self) -> u8 {
        self.weekday().index()
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_index(self.jdn + 1)
    }

    pub const fn dow_name(&self) -> &'static str {
        self.weekday().name()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month() - 1)]
    }

    /// Number of days in the date's month
    pub fn month_length(&self) -> u8 {
        let (ymd, leap) = convert::to_ymd(self.jdn, self.region);
        days_in_month(leap, ymd.month)
    }

    pub const fn set_jdn(&mut self, jdn: i64) {
        self.jdn = jdn;
    }

    pub fn set_ymd(&mut self, year: i64, month: i64, day: i64) {
        self.jdn = convert::to_jdn(year, month, day, self.region);
    }

    /// Replaces the year, keeping the current month and day
    pub fn set_year(&mut self, year: i64) {
        let Ymd { month, day, .. } = self.ymd();
        self.set_ymd(year, i64::from(month), i64::from(day));
    }

    /// Replaces the month, keeping the current year and day
    pub fn set_month(&mut self, month: i64) {
        let Ymd { year, day, .. } = self.ymd();
        self.set_ymd(year, month, i64::from(day));
    }

    /// Replaces the day, keeping the current year and month
    pub fn set_day(&mut self, day: i64) {
        let Ymd { year, month, .. } = self.ymd();
        self.set_ymd(year, i64::from(month), day);
    }
}

impl Region {
    pub const fn date_from_jdn(self, jdn: i64) -> CalendarDate {
        CalendarDate { jdn, region: self }
    }

    pub fn date_from_ymd(self, year: i64, month: i64, day: i64) -> CalendarDate {
        CalendarDate {
            jdn:    convert::to_jdn(year, month, day, self),
            region: self,
        }
    }

    /// Region-aware counterpart of [`CalendarDate::from_parts`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` when only one of `month` and
    /// `day` is given.
    pub fn date_from_parts(
        self,
        first: i64,
        month: Option<i64>,
        day: Option<i64>,
    ) -> Result<CalendarDate, CalendarError> {
        match (month, day) {
            (None, None) => Ok(self.date_from_jdn(first)),
            (Some(m), Some(d)) => Ok(self.date_from_ymd(first, m, d)),
            (Some(_), None) | (None, Some(_)) => Err(CalendarError::InvalidArgument(2)),
        }
    }

    /// Builds a date from a list of values: one is a JDN, three are a
    /// year, month and day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` for any other count.
    pub fn date_from_args(self, args: &[i64]) -> Result<CalendarDate, CalendarError> {
        match *args {
            [jdn] => Ok(self.date_from_jdn(jdn)),
            [year, month, day] => Ok(self.date_from_ymd(year, month, day)),
            _ => Err(CalendarError::InvalidArgument(args.len())),
        }
    }
}

impl TryFrom<&[i64]> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        Region::British.date_from_args(value)
    }
}

impl From<Ymd> for CalendarDate {
    fn from(ymd: Ymd) -> Self {
        Self::from_ymd(ymd.year, i64::from(ymd.month), i64::from(ymd.day))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ymd { year, day, .. } = self.ymd();
        write!(f, "{}, {day} {} {year}", self.dow_name(), self.month_name())
    }
}
