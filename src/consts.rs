/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in each month, indexed `[leap as usize][month - 1]`
pub const MONTH_LENGTH: [[u8; 12]; 2] = [
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Days elapsed before the first of each month, indexed `[leap as usize][month - 1]`.
/// The thirteenth entry is the length of the year.
pub const CUMULATIVE_DAYS: [[u16; 13]; 2] = [
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365],
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366],
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// JDN of 1752-09-02, the last Julian-calendar day in the British Empire
pub const BRITISH_SWITCHOVER_JDN: i64 = 2_361_221;
/// Year of the British calendar reform
pub const BRITISH_SWITCHOVER_YEAR: i64 = 1752;

/// JDN of 1582-10-04, the last Julian-calendar day under the papal reform
pub const CATHOLIC_SWITCHOVER_JDN: i64 = 2_299_160;
/// Year of the papal Gregorian reform
pub const CATHOLIC_SWITCHOVER_YEAR: i64 = 1582;

/// JDN 0 is 1 January of astronomical year -4712
pub(crate) const EPOCH_YEAR_OFFSET: i64 = 4712;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

pub(crate) const DAYS_PER_COMMON_YEAR: i64 = 365;
/// Days in one four-year Julian cycle
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = 1461;
/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// JDN of 3 March -100, origin of the century count when undoing the Gregorian correction
pub(crate) const GREGORIAN_CENTURY_EPOCH: i64 = 1_684_595;

/// Range separator for `start..end` JDN ranges
pub const RANGE_SEPARATOR: &str = "..";
