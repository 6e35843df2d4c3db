use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize, de::Error as _, ser::SerializeMap};
use tracing::debug;

use crate::{CalendarDate, RANGE_SEPARATOR, Region, Ymd, prelude::*};

/// A half-open range of Julian Day Numbers, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}..{end}")]
pub struct JdnRange {
    start: i64,
    end:   i64,
}

/// Error type for JDN range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start is after end.
    #[error("Invalid JDN range: start ({start}) is after end ({end})")]
    InvalidRange { start: i64, end: i64 },

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),

    /// A bound is not an integer.
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),
}

impl JdnRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub const fn new(start: i64, end: i64) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First JDN in the range
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// First JDN past the range
    pub const fn end(&self) -> i64 {
        self.end
    }

    pub const fn len(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, jdn: i64) -> bool {
        self.start <= jdn && jdn < self.end
    }

    /// A fresh date for every JDN in the range, in ascending order
    pub fn dates(&self, region: Region) -> impl Iterator<Item = CalendarDate> + use<> {
        (self.start..self.end).map(move |jdn| region.date_from_jdn(jdn))
    }

    /// The JDN-to-date table for this range, serializable as a JSON object
    pub fn ymd_table(&self, region: Region) -> YmdTable {
        debug!(range = %self, %region, "building YMD table");
        YmdTable {
            range: *self,
            region,
        }
    }

    /// Day-of-month and month counts over the range
    pub fn histogram(&self, region: Region) -> Histogram {
        let histogram: Histogram = self.dates(region).map(|date| date.ymd()).collect();
        debug!(range = %self, total = histogram.total(), "accumulated histogram");
        histogram
    }
}

impl FromStr for JdnRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
            RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))
        })?;
        Self::new(start.trim().parse()?, end.trim().parse()?)
    }
}

impl Serialize for JdnRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JdnRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Every date in a [`JdnRange`], serialized as `{"<jdn>": [year, month, day], ...}`
/// in ascending JDN order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YmdTable {
    range:  JdnRange,
    region: Region,
}

impl YmdTable {
    pub const fn range(&self) -> JdnRange {
        self.range
    }

    pub fn entries(&self) -> impl Iterator<Item = (i64, Ymd)> + use<> {
        self.range
            .dates(self.region)
            .map(|date| (date.jdn(), date.ymd()))
    }
}

impl Serialize for YmdTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(usize::try_from(self.range.len()).ok())?;
        for (jdn, ymd) in self.entries() {
            map.serialize_entry(&jdn.to_string(), &ymd)?;
        }
        map.end()
    }
}

/// Counts of day-of-month and month values. Index 0 of each table is unused.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Histogram {
    days:    [u64; 32],
    months:  [u64; 13],
    skipped: u64,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one date. Dates whose month or day fall outside the tables are
    /// tallied as skipped instead.
    pub fn record(&mut self, ymd: Ymd) {
        let day = usize::from(ymd.day);
        let month = usize::from(ymd.month);
        if day == 0 || day >= self.days.len() || month == 0 || month >= self.months.len() {
            self.skipped += 1;
            return;
        }
        self.days[day] += 1;
        self.months[month] += 1;
    }

    /// Counts indexed by day of month
    pub const fn days(&self) -> &[u64; 32] {
        &self.days
    }

    /// Counts indexed by month
    pub const fn months(&self) -> &[u64; 13] {
        &self.months
    }

    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Number of dates counted
    pub fn total(&self) -> u64 {
        self.months.iter().sum()
    }
}

impl Extend<Ymd> for Histogram {
    fn extend<I: IntoIterator<Item = Ymd>>(&mut self, iter: I) {
        for ymd in iter {
            self.record(ymd);
        }
    }
}

impl FromIterator<Ymd> for Histogram {
    fn from_iter<I: IntoIterator<Item = Ymd>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day:")?;
        for (i, count) in self.days.iter().enumerate() {
            writeln!(f, "{i}: {count}")?;
        }
        writeln!(f, "\n")?;
        write!(f, "Month:")?;
        for (i, count) in self.months.iter().enumerate() {
            write!(f, "\n{i}: {count}")?;
        }
        if self.skipped > 0 {
            write!(f, "\n\nSkipped: {}", self.skipped)?;
        }
        Ok(())
    }
}

/// An entry of an exported table whose date does not convert back to its JDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "Mismatch: jdn: {jdn} ymd: {ymd} ==> check_jdn: {computed}")]
pub struct Mismatch {
    pub jdn:      i64,
    pub ymd:      Ymd,
    pub computed: i64,
}

/// A JDN-to-date table read back from its JSON form, sorted by JDN.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportedTable {
    entries: Vec<(i64, Ymd)>,
}

impl ExportedTable {
    pub fn entries(&self) -> &[(i64, Ymd)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn histogram(&self) -> Histogram {
        self.entries.iter().map(|&(_, ymd)| ymd).collect()
    }

    /// Converts each date back to a JDN and reports those that disagree
    pub fn mismatches(&self, region: Region) -> Vec<Mismatch> {
        let mismatches: Vec<Mismatch> = self
            .entries
            .iter()
            .filter_map(|&(jdn, ymd)| {
                let computed = region
                    .date_from_ymd(ymd.year, i64::from(ymd.month), i64::from(ymd.day))
                    .jdn();
                (computed != jdn).then_some(Mismatch { jdn, ymd, computed })
            })
            .collect();
        debug!(
            entries = self.entries.len(),
            mismatches = mismatches.len(),
            "verified exported table"
        );
        mismatches
    }
}

impl FromIterator<(i64, Ymd)> for ExportedTable {
    fn from_iter<I: IntoIterator<Item = (i64, Ymd)>>(iter: I) -> Self {
        let mut entries: Vec<(i64, Ymd)> = iter.into_iter().collect();
        entries.sort_unstable_by_key(|&(jdn, _)| jdn);
        Self { entries }
    }
}

impl From<YmdTable> for ExportedTable {
    fn from(table: YmdTable) -> Self {
        table.entries().collect()
    }
}

impl Serialize for ExportedTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (jdn, ymd) in &self.entries {
            map.serialize_entry(&jdn.to_string(), ymd)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExportedTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Ymd>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, ymd)| {
                key.trim()
                    .parse::<i64>()
                    .map(|jdn| (jdn, ymd))
                    .map_err(|_| D::Error::custom(format!("invalid JDN key: {key}")))
            })
            .collect()
    }
}
