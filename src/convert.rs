//! Integer-only conversion between Julian Day Numbers and calendar dates.
//!
//! Both directions first work in the proleptic Julian calendar, where every
//! fourth year is a leap year and a four-year cycle is exactly 1461 days.
//! Past the region's switchover the Gregorian correction (three dropped leap
//! days every 400 years, plus the days skipped by the reform) is applied on
//! the way in and undone on the way out.

use crate::consts::{
    CENTURY_CYCLE, CUMULATIVE_DAYS, DAYS_PER_COMMON_YEAR, DAYS_PER_GREGORIAN_CYCLE,
    DAYS_PER_JULIAN_CYCLE, DECEMBER, EPOCH_YEAR_OFFSET, FEBRUARY, GREGORIAN_CENTURY_EPOCH,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
};
use crate::types::{Region, Ymd, is_leap_year};

/// Folds a month outside `1..=12` into the year so table lookups stay in range.
fn normalize_month(year: i64, month: i64) -> (i64, u8) {
    let months = i64::from(MONTHS_PER_YEAR);
    let zero_based = month - 1;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = (zero_based.rem_euclid(months) + 1) as u8;
    (year + zero_based.div_euclid(months), month)
}

const fn is_dropped_century(year: i64) -> bool {
    year.rem_euclid(CENTURY_CYCLE) == 0 && year.rem_euclid(GREGORIAN_CYCLE) != 0
}

/// Converts a calendar date to its JDN.
pub(crate) fn to_jdn(year: i64, month: i64, day: i64, region: Region) -> i64 {
    let (year, month) = normalize_month(year, month);
    let leap = is_leap_year(year, region);

    // Julian reckoning: 365.25 days per year since the epoch
    let elapsed_years = year + EPOCH_YEAR_OFFSET;
    let mut year_days =
        DAYS_PER_COMMON_YEAR * elapsed_years + elapsed_years.div_euclid(LEAP_YEAR_CYCLE);
    if leap {
        // the quotient above already credited this year's leap day
        year_days -= 1;
    }
    let month_days = i64::from(CUMULATIVE_DAYS[usize::from(leap)][usize::from(month - 1)]);
    let mut jdn = year_days + month_days + day;

    if jdn > region.switchover_jdn() {
        let before_march = month <= FEBRUARY;
        if is_dropped_century(year) && before_march {
            jdn -= 1;
        }
        jdn -= 1;
        let shifted = year - 300 - i64::from(before_march);
        jdn -= (shifted.div_euclid(CENTURY_CYCLE) * 3).div_euclid(4);
    }
    jdn
}

/// Converts a JDN to its calendar date and the leap status of that year.
pub(crate) fn to_ymd(jdn: i64, region: Region) -> (Ymd, bool) {
    let julian_jdn = if jdn > region.switchover_jdn() {
        let centuries = ((jdn - GREGORIAN_CENTURY_EPOCH) * 4).div_euclid(DAYS_PER_GREGORIAN_CYCLE);
        jdn + (centuries * 3).div_euclid(4) - 2
    } else {
        jdn
    };

    let cycle_start = julian_jdn.div_euclid(DAYS_PER_JULIAN_CYCLE) * LEAP_YEAR_CYCLE;
    let in_cycle = julian_jdn.rem_euclid(DAYS_PER_JULIAN_CYCLE);

    // The first year of each Julian cycle is the 366-day one.
    let (year_in_cycle, mut day_of_year) = match in_cycle {
        0..=365 => (0, in_cycle),
        366..=730 => (1, in_cycle - 366),
        731..=1095 => (2, in_cycle - 731),
        _ => (3, in_cycle - 1096),
    };
    let year = cycle_start + year_in_cycle - EPOCH_YEAR_OFFSET;

    let mut leap = false;
    if year_in_cycle == 0 {
        if year < region.switchover_year() || !is_dropped_century(year) {
            leap = true;
        } else if day_of_year > i64::from(CUMULATIVE_DAYS[0][usize::from(FEBRUARY)]) {
            // Julian reckoning counted a Feb 29 this century year never had.
            day_of_year -= 1;
        }
    }

    let offsets = &CUMULATIVE_DAYS[usize::from(leap)];
    let month_index = offsets[1..]
        .iter()
        .position(|&end| day_of_year < i64::from(end))
        .unwrap_or(usize::from(DECEMBER - 1));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ymd = Ymd {
        year,
        month: month_index as u8 + 1,
        day: (day_of_year - i64::from(offsets[month_index]) + 1) as u8,
    };
    (ymd, leap)
}
