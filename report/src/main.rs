// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use discotheque::Year;

mod input;
mod report;
use self::report::Report;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Print a report about the albums and songs of a music catalog.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// RON file with the albums and songs of the catalog.
    #[arg(long, env = "DISCOTHEQUE_CATALOG")]
    catalog: PathBuf,

    /// List the albums released in this year.
    #[arg(long, allow_negative_numbers = true)]
    year: Option<Year>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let Args {
        catalog,
        year,
        format,
    } = args;
    let catalog = input::load_catalog(catalog)?;
    let report = Report::new(&catalog, *year);
    let mut stdout = io::stdout().lock();
    match format {
        Format::Text => report.write_text(&mut stdout)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("{args:?}");

    if let Err(err) = run(&args) {
        log::error!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
