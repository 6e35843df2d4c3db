//! Hist command: day-of-month and month distribution over a range, or over
//! a table previously written by `julian range`.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use julian_day::ExportedTable;

use crate::cli::HistArgs;
use crate::config::JulianConfig;
use crate::range_cmd::resolve_range;

pub fn run(args: &HistArgs, config: &JulianConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("hist").entered();
    let region = config.region;

    let histogram = if let Some(path) = &args.input {
        info!(path = %path.display(), "reading exported table");
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read table: {}", path.display()))?;
        let table: ExportedTable = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse table: {}", path.display()))?;

        let mismatches = table.mismatches(region);
        if !mismatches.is_empty() {
            warn!(count = mismatches.len(), entries = table.len(), "table entries do not round-trip");
        }
        for mismatch in &mismatches {
            writeln!(out, "{mismatch}")?;
        }
        table.histogram()
    } else {
        let range = resolve_range(args.start, args.end, config)?;
        info!(%range, %region, "accumulating histogram");
        range.histogram(region)
    };

    writeln!(out, "{histogram}")?;
    Ok(())
}
