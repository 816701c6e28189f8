//! Command-line parsing for the two binaries.

use std::path::PathBuf;

use crate::motion::{MotionMode, ParseModeError};

pub const COIN_MOTION_USAGE: &str = "\
usage: coin-motion <sliding|bouncing|line_dancing|circling> [--config <file.toml>]

Collect the moving coins with the mouse.

options:
  -c, --config <file>  read settings from a TOML file
  -h, --help           print this help

keys: Escape quits, R restarts";

pub const RAZORS_AND_RUBIES_USAGE: &str = "\
usage: razors-and-rubies [--config <file.toml>]

Collect every ruby with the mouse and dodge the razors.

options:
  -c, --config <file>  read settings from a TOML file
  -h, --help           print this help

keys: Escape quits, R restarts";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("help requested")]
    Help,
    #[error("missing motion mode")]
    MissingMode,
    #[error(transparent)]
    BadMode(#[from] ParseModeError),
    #[error("`{0}` expects a value")]
    MissingValue(String),
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Help => 0,
            _ => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinMotionArgs {
    pub mode: MotionMode,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RazorsArgs {
    pub config: Option<PathBuf>,
}

/// Splits flags from positionals. `args` excludes the program name.
fn scan<I>(args: I) -> Result<(Option<PathBuf>, Vec<String>), CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut positionals = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let flag = arg.clone();
        match flag.as_str() {
            "-h" | "--help" => return Err(CliError::Help),
            "-c" | "--config" => {
                let value = args.next().ok_or(CliError::MissingValue(arg))?;
                config = Some(PathBuf::from(value));
            }
            s if s.starts_with("--config=") => {
                config = Some(PathBuf::from(&s["--config=".len()..]));
            }
            s if s.starts_with('-') && s.len() > 1 => return Err(CliError::Unexpected(arg)),
            _ => positionals.push(arg),
        }
    }
    Ok((config, positionals))
}

pub fn parse_coin_motion<I>(args: I) -> Result<CoinMotionArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let (config, positionals) = scan(args)?;
    let mut positionals = positionals.into_iter();
    let mode = positionals.next().ok_or(CliError::MissingMode)?.parse()?;
    if let Some(extra) = positionals.next() {
        return Err(CliError::Unexpected(extra));
    }
    Ok(CoinMotionArgs { mode, config })
}

pub fn parse_razors_and_rubies<I>(args: I) -> Result<RazorsArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let (config, positionals) = scan(args)?;
    if let Some(extra) = positionals.into_iter().next() {
        return Err(CliError::Unexpected(extra));
    }
    Ok(RazorsArgs { config })
}
