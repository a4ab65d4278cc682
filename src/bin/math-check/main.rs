// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `math-check` runs the arithmetic regression suite and exits with `0` when
//! every case passes and `1` otherwise.

mod args;
mod output;
mod session;

use std::process::ExitCode;

use anyhow::Result;
use args::{Format, validate_args};
use clap::Parser;
use math_utils::config::load_cases;
use math_utils::regression::{self, RunOptions};
use tracing::info;

fn main() -> Result<ExitCode> {
    let args = args::Args::parse();

    validate_args(&args)?;
    session::init_logger(&args)?;

    let mut cases = if args.no_builtin { Vec::new() } else { regression::builtin_suite() };
    for path in &args.case_files {
        cases.extend(load_cases(path)?);
    }
    info!(cases = cases.len(), "running regression suite");

    let options = RunOptions { filter: args.only, fail_fast: args.fail_fast };
    let report = regression::run(&cases, &options);

    match args.format {
        Format::Pretty => output::print_pretty(&report, args.quiet),
        Format::Json => output::print_json(&report)?,
    }

    Ok(ExitCode::from(report.exit_code()))
}
