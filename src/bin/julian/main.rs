mod cal_cmd;
mod cli;
mod config;
mod hist_cmd;
mod logging;
mod range_cmd;
mod show;

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::JulianConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = JulianConfig::load(cli.config.as_deref())?.with_region(cli.region);
    debug!(region = %config.region, range = ?config.range, "configuration loaded");

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Ymd(args) => show::run_ymd(&args, &config, &mut out),
        Command::Jdn(args) => show::run_jdn(&args, &config, &mut out),
        Command::Show(args) => show::run_show(&args, &config, &mut out),
        Command::Range(args) => range_cmd::run(&args, &config, &mut out),
        Command::Hist(args) => hist_cmd::run(&args, &config, &mut out),
        Command::Cal(args) => cal_cmd::run(&args, &config, &mut out),
    }?;
    out.flush()?;
    Ok(())
}
