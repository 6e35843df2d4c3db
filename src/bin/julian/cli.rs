use std::path::PathBuf;

use clap::{Parser, Subcommand};
use julian_day::Region;

/// Convert between Julian Day Numbers and Julian/Gregorian calendar dates.
#[derive(Parser)]
#[command(
    name = "julian",
    version,
    about = "Convert between Julian Day Numbers and calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./julian.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Calendar reform to follow: british (1752) or catholic (1582).
    #[arg(short, long, global = true)]
    pub region: Option<Region>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the weekday and JDN of a calendar date.
    Ymd(YmdArgs),
    /// Show the calendar date of a Julian Day Number.
    Jdn(JdnArgs),
    /// Resolve one value as a JDN, or three values as year, month and day.
    Show(ShowArgs),
    /// Export the dates of a JDN range as a JSON object.
    Range(RangeArgs),
    /// Count day-of-month and month values over a range or an exported table.
    Hist(HistArgs),
    /// Print a month calendar.
    Cal(CalArgs),
}

/// Arguments for the `ymd` subcommand. Missing fields default to today.
#[derive(clap::Args)]
pub struct YmdArgs {
    /// Astronomical year (0 is 1 BCE).
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Month number.
    pub month: Option<i64>,

    /// Day of month.
    pub day: Option<i64>,
}

/// Arguments for the `jdn` subcommand.
#[derive(clap::Args)]
pub struct JdnArgs {
    /// Julian Day Number (defaults to today).
    #[arg(allow_negative_numbers = true)]
    pub jdn: Option<i64>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// A JDN, or year month day.
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First JDN (inclusive). Overrides [range].start from config.
    #[arg(allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last JDN (exclusive). Overrides [range].end from config.
    #[arg(allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Emit one single-entry object per line instead of one object.
    #[arg(short = 'R', long, conflicts_with = "pretty")]
    pub rows: bool,

    /// Pretty-print the JSON object.
    #[arg(short, long)]
    pub pretty: bool,
}

/// Arguments for the `hist` subcommand.
#[derive(clap::Args)]
pub struct HistArgs {
    /// First JDN (inclusive). Overrides [range].start from config.
    #[arg(allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last JDN (exclusive). Overrides [range].end from config.
    #[arg(allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Read a table written by `julian range` and verify every entry.
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub input: Option<PathBuf>,
}

/// Arguments for the `cal` subcommand. Missing fields default to today.
#[derive(clap::Args)]
pub struct CalArgs {
    /// Astronomical year.
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Month number.
    pub month: Option<i64>,
}
