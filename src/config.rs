// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading extra regression cases from TOML.
//!
//! ```toml
//! [[case]]
//! operation = "factorial"
//! args = [6]
//! expected = 720
//!
//! [[case]]
//! name = "negative fibonacci is rejected"
//! operation = "fibonacci"
//! args = [-7]
//! expected = -1
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use crate::regression::{Case, Operation};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default)]
    pub case: Vec<CaseSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    pub name: Option<String>,
    pub operation: Operation,
    pub args: Vec<i32>,
    pub expected: i32,
}

impl CaseSpec {
    fn into_case(self) -> Case {
        match self.name {
            Some(name) => Case::named(name, self.operation, self.args, self.expected),
            None => Case::new(self.operation, self.args, self.expected),
        }
    }
}

/// Parse a case file's contents, rejecting entries with the wrong number of
/// arguments.
pub fn parse_cases(contents: &str) -> Result<Vec<Case>> {
    let file: CaseFile = toml::from_str(contents).context("invalid case file")?;
    let mut cases = Vec::with_capacity(file.case.len());
    for (idx, spec) in file.case.into_iter().enumerate() {
        if spec.args.len() != spec.operation.arity() {
            bail!(
                "case #{idx} (`{}`): expected {} argument(s), found {}",
                spec.operation,
                spec.operation.arity(),
                spec.args.len()
            );
        }
        cases.push(spec.into_case());
    }
    Ok(cases)
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let cases =
        parse_cases(&contents).with_context(|| format!("failed to load `{}`", path.display()))?;
    debug!(path = %path.display(), count = cases.len(), "loaded case file");
    Ok(cases)
}
