//! Start-up configuration: environment variables and command-line arguments.
//!
//! Environment:
//! - `SCRABBLE_FRAME_MS`: repaint frame interval in milliseconds (default 16)
//! - `SCRABBLE_LOG`: log filter, `env_logger` syntax (default `info`)
//! - `SCRABBLE_LOG_PATH`: log file; interactive sessions only log when this is set

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::PointerPosition;

/// Default frame interval (~60 FPS).
pub const DEFAULT_FRAME_MS: u64 = 16;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frame_interval_ms: u64,
    pub log_filter: String,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let frame_interval_ms = lookup("SCRABBLE_FRAME_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);
        let log_filter = lookup("SCRABBLE_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_path = lookup("SCRABBLE_LOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            frame_interval_ms,
            log_filter,
            log_path,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw the board in the terminal and follow the mouse.
    Interactive,
    /// Paint once into a pixel canvas and write it as PPM.
    Snapshot {
        path: PathBuf,
        pointer: Option<PointerPosition>,
    },
}

pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Interactive);
    };
    if first != "snapshot" {
        return Err(anyhow!("unknown command: {}", first));
    }

    let mut path: Option<PathBuf> = None;
    let mut pointer = None;
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--pointer" => {
                let x = parse_coord(args.get(i + 1), "x")?;
                let y = parse_coord(args.get(i + 2), "y")?;
                pointer = Some(PointerPosition::new(x, y));
                i += 2;
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("snapshot: unknown argument: {}", other));
            }
            other => {
                if path.is_some() {
                    return Err(anyhow!("snapshot: unexpected argument: {}", other));
                }
                path = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let path = path.ok_or_else(|| anyhow!("snapshot: missing output path"))?;
    Ok(Command::Snapshot { path, pointer })
}

fn parse_coord(value: Option<&String>, axis: &str) -> Result<i32> {
    let v = value.ok_or_else(|| anyhow!("snapshot: missing {} value for --pointer", axis))?;
    v.parse::<i32>()
        .map_err(|_| anyhow!("snapshot: invalid --pointer {} value: {}", axis, v))
}
