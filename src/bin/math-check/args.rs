// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Command line arguments for `math-check`.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ValueEnum;
use math_utils::regression::Operation;

#[derive(Debug, clap::Parser)]
#[command(
    version,
    name = "math-check",
    about = "Run the arithmetic regression suite",
    args_override_self = true
)]
pub struct Args {
    /// Additional TOML case file to run. May be given more than once.
    #[arg(long = "cases", value_name = "FILE")]
    pub case_files: Vec<PathBuf>,

    /// Skip the built-in cases and only run the given case files
    #[arg(long)]
    pub no_builtin: bool,

    /// Only run cases for this operation, e.g. `factorial`
    #[arg(long, value_name = "OPERATION")]
    pub only: Option<Operation>,

    /// Stop at the first failing case
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(long, default_value = "pretty")]
    pub format: Format,

    /// Extra tracing directive, e.g. `debug` or `math_utils=trace`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Only print the summary, not every case
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable list of cases followed by a summary.
    Pretty,
    /// The full report as JSON.
    Json,
}

pub fn validate_args(args: &Args) -> Result<()> {
    if args.no_builtin && args.case_files.is_empty() {
        bail!("`--no-builtin` requires at least one `--cases` file")
    }
    Ok(())
}
