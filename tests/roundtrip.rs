use julian_day::{CalendarDate, Region, Ymd, days_in_month, is_leap_year};

/// Upper bound (inclusive) of the JDN regression sweep.
const SWEEP_END: i64 = 9_999_647;

fn sweep_jdn_ymd_jdn(region: Region) {
    let mut mismatches = Vec::new();
    for jdn in 0..=SWEEP_END {
        let ymd = region.date_from_jdn(jdn).ymd();
        let back = region
            .date_from_ymd(ymd.year, i64::from(ymd.month), i64::from(ymd.day))
            .jdn();
        if back != jdn {
            mismatches.push((jdn, ymd, back));
            if mismatches.len() >= 10 {
                break;
            }
        }
    }
    assert!(mismatches.is_empty(), "{region}: first mismatches {mismatches:?}");
}

#[test]
fn jdn_ymd_jdn_sweep_british() {
    sweep_jdn_ymd_jdn(Region::British);
}

#[test]
fn jdn_ymd_jdn_sweep_catholic() {
    sweep_jdn_ymd_jdn(Region::Catholic);
}

fn sweep_ymd_jdn_ymd(region: Region, years: std::ops::RangeInclusive<i64>) {
    let mut previous: Option<i64> = None;
    for year in years {
        let leap = is_leap_year(year, region);
        for month in 1..=12_u8 {
            for day in 1..=days_in_month(leap, month) {
                if region.is_skipped(year, i64::from(month), i64::from(day)) {
                    continue;
                }
                let date = region.date_from_ymd(year, i64::from(month), i64::from(day));
                assert_eq!(
                    date.ymd(),
                    Ymd::new(year, month, day),
                    "{region}: JDN {} does not read back",
                    date.jdn()
                );
                assert_eq!(date.month_length(), days_in_month(leap, month));
                assert_eq!(date.is_leap(), leap, "{region}: leap flag for {year}");
                if let Some(prev) = previous {
                    assert_eq!(date.jdn(), prev + 1, "{region}: gap before {year}-{month}-{day}");
                }
                previous = Some(date.jdn());
            }
        }
    }
}

#[test]
fn ymd_jdn_ymd_sweep_british() {
    sweep_ymd_jdn_ymd(Region::British, -4712..=22_000);
}

#[test]
fn ymd_jdn_ymd_sweep_catholic() {
    sweep_ymd_jdn_ymd(Region::Catholic, -4712..=22_000);
}

#[test]
fn last_sweep_day() {
    let date = CalendarDate::from_jdn(SWEEP_END);
    assert_eq!(CalendarDate::from(date.ymd()).jdn(), SWEEP_END);
}
