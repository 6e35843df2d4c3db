use crate::CalendarError;
use crate::consts::{
    BRITISH_SWITCHOVER_JDN, BRITISH_SWITCHOVER_YEAR, CATHOLIC_SWITCHOVER_JDN,
    CATHOLIC_SWITCHOVER_YEAR, CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTH_LENGTH,
    WEEKDAY_NAMES,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which historical Julian-to-Gregorian switchover the arithmetic follows.
///
/// The region decides both the last Julian-calendar day (after which the
/// Gregorian correction applies) and the year from which century years lose
/// their leap day.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// British Empire: 1752-09-02 was followed by 1752-09-14
    #[default]
    #[display(fmt = "british")]
    British,
    /// Papal bull of 1582: 1582-10-04 was followed by 1582-10-15
    #[display(fmt = "catholic")]
    Catholic,
}

impl Region {
    /// JDN of the last day reckoned in the Julian calendar
    #[inline]
    pub const fn switchover_jdn(self) -> i64 {
        match self {
            Self::British => BRITISH_SWITCHOVER_JDN,
            Self::Catholic => CATHOLIC_SWITCHOVER_JDN,
        }
    }

    /// Year in which the reform took effect
    #[inline]
    pub const fn switchover_year(self) -> i64 {
        match self {
            Self::British => BRITISH_SWITCHOVER_YEAR,
            Self::Catholic => CATHOLIC_SWITCHOVER_YEAR,
        }
    }

    /// The `(month, first, last)` span of calendar days dropped by the reform.
    const fn skipped_days(self) -> (u8, u8, u8) {
        match self {
            Self::British => (9, 3, 13),
            Self::Catholic => (10, 5, 14),
        }
    }

    /// Returns true if the date was never observed in this region because the
    /// reform skipped over it. Such dates still convert but do not round-trip.
    pub const fn is_skipped(self, year: i64, month: i64, day: i64) -> bool {
        let (skip_month, first, last) = self.skipped_days();
        year == self.switchover_year()
            && month == skip_month as i64
            && day >= first as i64
            && day <= last as i64
    }
}

impl FromStr for Region {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "british" => Ok(Self::British),
            "catholic" => Ok(Self::Catholic),
            _ => Err(CalendarError::UnknownRegion(s.to_owned())),
        }
    }
}

/// A resolved calendar date. Always normalized: month in `1..=12`, day within
/// the month. Serializes as the JSON array `[year, month, day]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
#[serde(from = "(i64, u8, u8)", into = "(i64, u8, u8)")]
pub struct Ymd {
    /// Astronomical year (0 = 1 BCE)
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl Ymd {
    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for an index where 0 is Sunday. Wraps modulo 7.
    pub const fn from_index(index: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = index.rem_euclid(7) as usize;
        Self::ALL[i]
    }

    /// Index where 0 is Sunday and 6 is Saturday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

/// Hybrid leap-year rule: every fourth year, except that after the region's
/// switchover year a century year must also be divisible by 400.
pub const fn is_leap_year(year: i64, region: Region) -> bool {
    let julian = year.rem_euclid(LEAP_YEAR_CYCLE) == 0;
    if year > region.switchover_year()
        && year.rem_euclid(CENTURY_CYCLE) == 0
        && year.rem_euclid(GREGORIAN_CYCLE) != 0
    {
        return false;
    }
    julian
}

/// Table lookup; `month` must be in `1..=12`.
pub const fn days_in_month(leap: bool, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);
    MONTH_LENGTH[leap as usize][(month - 1) as usize]
}
