//! Range command: export the dates of a JDN range as JSON.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use julian_day::{JdnRange, YmdTable};

use crate::cli::RangeArgs;
use crate::config::JulianConfig;

/// Bounds from the command line, falling back to the `[range]` config section.
pub fn resolve_range(start: Option<i64>, end: Option<i64>, config: &JulianConfig) -> Result<JdnRange> {
    let start = start.unwrap_or(config.range.start);
    let end = end.unwrap_or(config.range.end);
    JdnRange::new(start, end).context("invalid JDN bounds")
}

pub fn run(args: &RangeArgs, config: &JulianConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let range = resolve_range(args.start, args.end, config)?;
    info!(%range, region = %config.region, entries = range.len(), "exporting dates");

    let table = range.ymd_table(config.region);
    if args.rows {
        write_rows(&table, out)?;
    } else {
        if args.pretty {
            serde_json::to_writer_pretty(&mut *out, &table)?;
        } else {
            serde_json::to_writer(&mut *out, &table)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One `{"<jdn>":[y,m,d]},` line per date between lines holding `{` and `}`.
fn write_rows(table: &YmdTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{{")?;
    for (jdn, ymd) in table.entries() {
        let row = BTreeMap::from([(jdn.to_string(), ymd)]);
        writeln!(out, "{},", serde_json::to_string(&row)?)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}
