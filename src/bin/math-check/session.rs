// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logger setup for `math-check`.

use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Registry, filter::Directive, layer::SubscriberExt};

use crate::args::{Args, Format};

/// Environment variable used to control log tracing.
const LOG_ENV_VAR: &str = "MATH_UTILS_LOG";

/// Initialize the logger using `MATH_UTILS_LOG` and the `--log-level` argument.
/// Logs always go to stderr so they never mix with the report on stdout.
pub fn init_logger(args: &Args) -> Result<()> {
    let filter = EnvFilter::from_env(LOG_ENV_VAR);
    let filter = if let Some(log_level) = &args.log_level {
        let directive = Directive::from_str(log_level)
            .with_context(|| format!("invalid log level `{log_level}`"))?;
        filter.add_directive(directive)
    } else {
        filter
    };

    use tracing_subscriber::fmt::layer;
    let subscriber = Registry::default().with(filter);
    if args.format == Format::Json {
        let subscriber = subscriber.with(layer().json().with_writer(std::io::stderr));
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = subscriber.with(layer().with_writer(std::io::stderr));
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}
