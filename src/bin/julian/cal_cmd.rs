//! Cal command: print a month grid.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use julian_day::MonthGrid;

use crate::cli::CalArgs;
use crate::config::JulianConfig;
use crate::show::today;

pub fn run(args: &CalArgs, config: &JulianConfig, out: &mut impl Write) -> Result<()> {
    let today = today(config.region).ymd();
    let year = args.year.unwrap_or(today.year);
    let month = args.month.unwrap_or_else(|| i64::from(today.month));
    debug!(year, month, region = %config.region, "rendering month grid");

    let grid = MonthGrid::new(year, month, config.region);
    writeln!(out, "{grid}")?;
    Ok(())
}
