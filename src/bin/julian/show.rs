//! Date printers: `ymd`, `jdn` and `show`.

use std::io::Write;

use anyhow::Result;
use chrono::Datelike;
use tracing::{debug, warn};

use julian_day::{CalendarDate, Region};

use crate::cli::{JdnArgs, ShowArgs, YmdArgs};
use crate::config::JulianConfig;

/// Today's local date.
pub fn today(region: Region) -> CalendarDate {
    let now = chrono::Local::now().date_naive();
    region.date_from_ymd(
        i64::from(now.year()),
        i64::from(now.month()),
        i64::from(now.day()),
    )
}

/// Warns when a date falls in the days the reform skipped.
pub fn warn_if_skipped(region: Region, year: i64, month: i64, day: i64) {
    if region.is_skipped(year, month, day) {
        warn!(
            year,
            month,
            day,
            %region,
            "date was skipped by the calendar reform and does not round-trip"
        );
    }
}

pub fn run_ymd(args: &YmdArgs, config: &JulianConfig, out: &mut impl Write) -> Result<()> {
    let region = config.region;
    let today = today(region).ymd();
    let year = args.year.unwrap_or(today.year);
    let month = args.month.unwrap_or_else(|| i64::from(today.month));
    let day = args.day.unwrap_or_else(|| i64::from(today.day));
    debug!(year, month, day, %region, "resolving date");

    warn_if_skipped(region, year, month, day);
    let date = region.date_from_ymd(year, month, day);
    writeln!(out, "Date is: {date}")?;
    writeln!(out, "JDN is: {}", date.jdn())?;
    Ok(())
}

pub fn run_jdn(args: &JdnArgs, config: &JulianConfig, out: &mut impl Write) -> Result<()> {
    let region = config.region;
    let date = args
        .jdn
        .map_or_else(|| today(region), |jdn| region.date_from_jdn(jdn));
    debug!(jdn = date.jdn(), %region, "resolving JDN");

    writeln!(out, "JDN is: {}", date.jdn())?;
    writeln!(out, "Date is: {date}")?;
    Ok(())
}

pub fn run_show(args: &ShowArgs, config: &JulianConfig, out: &mut impl Write) -> Result<()> {
    let region = config.region;
    if let [year, month, day] = args.values[..] {
        warn_if_skipped(region, year, month, day);
    }
    let date = region.date_from_args(&args.values)?;

    writeln!(out, "Date is: {date}")?;
    writeln!(out, "JDN is: {}", date.jdn())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use julian_day::CalendarError;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn ymd_prints_date_and_jdn() {
        let args = YmdArgs {
            year:  Some(1752),
            month: Some(9),
            day:   Some(14),
        };
        let text = output(|out| run_ymd(&args, &JulianConfig::default(), out));
        assert_eq!(text, "Date is: Thursday, 14 September 1752\nJDN is: 2361222\n");
    }

    #[test]
    fn ymd_follows_region() {
        let args = YmdArgs {
            year:  Some(1582),
            month: Some(10),
            day:   Some(15),
        };
        let config = JulianConfig::default().with_region(Some(Region::Catholic));
        let text = output(|out| run_ymd(&args, &config, out));
        assert_eq!(text, "Date is: Friday, 15 October 1582\nJDN is: 2299161\n");
    }

    #[test]
    fn ymd_missing_fields_default_to_today() {
        let args = YmdArgs {
            year:  None,
            month: None,
            day:   None,
        };
        let expected = today(Region::British);
        let text = output(|out| run_ymd(&args, &JulianConfig::default(), out));
        assert!(text.contains(&format!("JDN is: {}", expected.jdn())));
    }

    #[test]
    fn jdn_prints_jdn_then_date() {
        let args = JdnArgs { jdn: Some(0) };
        let text = output(|out| run_jdn(&args, &JulianConfig::default(), out));
        assert_eq!(text, "JDN is: 0\nDate is: Monday, 1 January -4712\n");
    }

    #[test]
    fn show_accepts_one_or_three_values() {
        let config = JulianConfig::default();
        let args = ShowArgs {
            values: vec![2_361_221],
        };
        let text = output(|out| run_show(&args, &config, out));
        assert_eq!(text, "Date is: Wednesday, 2 September 1752\nJDN is: 2361221\n");

        let args = ShowArgs {
            values: vec![2000, 1, 1],
        };
        let text = output(|out| run_show(&args, &config, out));
        assert_eq!(text, "Date is: Saturday, 1 January 2000\nJDN is: 2451545\n");
    }

    #[test]
    fn show_rejects_two_values() {
        let args = ShowArgs {
            values: vec![2000, 1],
        };
        let mut buf = Vec::new();
        let err = run_show(&args, &JulianConfig::default(), &mut buf).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalendarError>(),
            Some(&CalendarError::InvalidArgument(2))
        );
        assert!(buf.is_empty());
    }
}
