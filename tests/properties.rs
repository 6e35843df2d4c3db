use julian_day::{
    CUMULATIVE_DAYS, CalendarDate, JdnRange, MONTH_LENGTH, Region, WEEKDAY_NAMES, Weekday, Ymd,
    is_leap_year,
};

#[test]
fn epoch_is_jdn_zero() {
    let date = CalendarDate::from_jdn(0);
    assert_eq!(date.ymd(), Ymd::new(-4712, 1, 1));
    assert!(date.is_leap());
    assert_eq!(CalendarDate::from_ymd(-4712, 1, 1).jdn(), 0);
}

#[test]
fn british_switchover_gap() {
    let last_julian = CalendarDate::from_jdn(2_361_221);
    let first_gregorian = CalendarDate::from_jdn(2_361_222);
    assert_eq!(last_julian.ymd(), Ymd::new(1752, 9, 2));
    assert_eq!(first_gregorian.ymd(), Ymd::new(1752, 9, 14));
    assert_eq!(last_julian.weekday(), Weekday::Wednesday);
    assert_eq!(first_gregorian.weekday(), Weekday::Thursday);
    assert_eq!(first_gregorian.to_string(), "Thursday, 14 September 1752");
}

#[test]
fn catholic_switchover_gap() {
    let region = Region::Catholic;
    assert_eq!(region.date_from_jdn(2_299_160).ymd(), Ymd::new(1582, 10, 4));
    let first = region.date_from_jdn(2_299_161);
    assert_eq!(first.ymd(), Ymd::new(1582, 10, 15));
    assert_eq!(first.dow_name(), "Friday");
}

#[test]
fn leap_years_around_both_reforms() {
    let cases: [(i64, bool, bool); 7] = [
        // (year, british, catholic)
        (1500, true, true),
        (1600, true, true),
        (1700, true, false),
        (1752, true, true),
        (1800, false, false),
        (1900, false, false),
        (2000, true, true),
    ];
    for (year, british, catholic) in cases {
        assert_eq!(is_leap_year(year, Region::British), british, "British {year}");
        assert_eq!(is_leap_year(year, Region::Catholic), catholic, "Catholic {year}");
    }
}

#[test]
fn weekday_repeats_every_seven_days() {
    for jdn in (-3_000..3_000).chain(2_361_200..2_361_260) {
        let date = CalendarDate::from_jdn(jdn);
        let week_later = CalendarDate::from_jdn(jdn + 7);
        assert_eq!(date.dow(), week_later.dow(), "JDN {jdn}");
        assert!(date.dow() < 7);
    }
}

#[test]
fn consecutive_days_cover_each_weekday_once() {
    // 2 January 2000 is a Sunday
    let sunday = CalendarDate::from_ymd(2000, 1, 2).jdn();
    let names: Vec<&str> = (sunday..sunday + 7)
        .map(|jdn| CalendarDate::from_jdn(jdn).dow_name())
        .collect();
    assert_eq!(names, WEEKDAY_NAMES);
}

#[test]
fn month_tables_are_consistent() {
    for leap in [false, true] {
        let row = usize::from(leap);
        let total: u16 = MONTH_LENGTH[row].iter().map(|&len| u16::from(len)).sum();
        assert_eq!(total, CUMULATIVE_DAYS[row][12]);
        assert_eq!(total, if leap { 366 } else { 365 });
        for month in 0..12 {
            assert_eq!(
                CUMULATIVE_DAYS[row][month + 1] - CUMULATIVE_DAYS[row][month],
                u16::from(MONTH_LENGTH[row][month])
            );
        }
    }
}

#[test]
fn first_jdns_export_as_json() {
    let range = JdnRange::new(0, 3).expect("failed to construct range");
    let json = serde_json::to_string(&range.ymd_table(Region::British)).expect("failed to serialize table");
    assert_eq!(json, r#"{"0":[-4712,1,1],"1":[-4712,1,2],"2":[-4712,1,3]}"#);
}

#[test]
fn partial_setters_recompute_the_jdn() {
    let mut date = CalendarDate::from_ymd(2024, 1, 31);
    date.set_month(2);
    // 31 February carries into March in a leap year
    assert_eq!(date.ymd(), Ymd::new(2024, 3, 2));

    date.set_year(2023);
    assert_eq!(date.ymd(), Ymd::new(2023, 3, 2));

    date.set_day(1);
    assert_eq!(date.jdn(), CalendarDate::from_ymd(2023, 3, 1).jdn());
}

#[test]
fn region_changes_the_reading_of_a_jdn() {
    let jdn = 2_299_161;
    assert_eq!(Region::British.date_from_jdn(jdn).ymd(), Ymd::new(1582, 10, 5));
    assert_eq!(Region::Catholic.date_from_jdn(jdn).ymd(), Ymd::new(1582, 10, 15));
    // both regions agree again once each has switched over
    assert_eq!(
        Region::British.date_from_jdn(2_451_545).ymd(),
        Region::Catholic.date_from_jdn(2_451_545).ymd()
    );
}
