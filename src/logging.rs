//! Logger setup.
//!
//! Interactive sessions own the terminal, so they only log when a file is
//! configured. Headless commands log to stderr.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target, WriteStyle};

use crate::config::AppConfig;

/// Install the global logger. Returns `false` when logging stays disabled.
pub fn init(config: &AppConfig, interactive: bool) -> Result<bool> {
    let mut builder = Builder::new();
    builder.parse_filters(&config.log_filter);

    match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never);
        }
        None if interactive => return Ok(false),
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder.try_init().context("install logger")?;
    Ok(true)
}
