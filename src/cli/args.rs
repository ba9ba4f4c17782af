//! Command-line argument parsing.
//!
//! Flags take their value either as the next argument (`--min -10`) or
//! inline (`--min=-10`).

use std::path::PathBuf;

use thiserror::Error;

use crate::config::AppConfig;
use crate::error::ArgumentError;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: ruler [OPTIONS]

Pick a value on a scrollable ruler.

Options:
  --config <PATH>     Config file (default: <config dir>/ruler/config.json)
  --min <VALUE>       Smallest value on the ruler
  --max <VALUE>       Largest value on the ruler
  --interval <VALUE>  Step between adjacent ticks
  --decimals <N>      Decimal places shown in labels (0-3)
  --value <VALUE>     Initially selected value
  --write-config      Write the resulting config file and exit
  -h, --help          Print this help
  -V, --version       Print the version

Keys: Up/Down step, PgUp/PgDn jump 10, Home/End, q or Esc to quit.
Mouse: drag or fling the ruler, click a tick, scroll the wheel.";

/// Errors in the command line itself.
#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid value for {flag}: {value:?}")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub interval: Option<f64>,
    pub decimals: Option<u32>,
    pub value: Option<f64>,
}

impl RunOptions {
    /// Apply the overrides through the ruler's own setters. On error the
    /// config is left as it was.
    pub fn apply(&self, config: &mut AppConfig) -> Result<(), ArgumentError> {
        let mut ruler = config.ruler.clone();
        match (self.min, self.max) {
            (Some(min), Some(max)) => ruler.set_range(min, max)?,
            (Some(min), None) => ruler.set_min_value(min)?,
            (None, Some(max)) => ruler.set_max_value(max)?,
            (None, None) => {}
        }
        if let Some(interval) = self.interval {
            ruler.set_interval_value(interval)?;
        }
        if let Some(places) = self.decimals {
            ruler.set_decimal_places(places)?;
        }

        config.ruler = ruler;
        if self.value.is_some() {
            config.initial_value = self.value;
        }
        Ok(())
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Write the config file with the overrides applied
    WriteConfig(RunOptions),
    /// Run the TUI (default)
    Run(RunOptions),
}

/// Parse command-line arguments, program name first.
///
/// # Examples
///
/// ```
/// use ruler::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ruler".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut write_config = false;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--write-config" => write_config = true,
            "--config" => {
                let value = take_value(&flag, inline, &mut args)?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--min" => options.min = Some(parse_number(&flag, inline, &mut args)?),
            "--max" => options.max = Some(parse_number(&flag, inline, &mut args)?),
            "--interval" => options.interval = Some(parse_number(&flag, inline, &mut args)?),
            "--value" => options.value = Some(parse_number(&flag, inline, &mut args)?),
            "--decimals" => {
                let value = take_value(&flag, inline, &mut args)?;
                let places = value.parse::<u32>().map_err(|_| ArgsError::InvalidValue {
                    flag: flag.clone(),
                    value,
                })?;
                options.decimals = Some(places);
            }
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    if write_config {
        Ok(CliCommand::WriteConfig(options))
    } else {
        Ok(CliCommand::Run(options))
    }
}

fn take_value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    inline.or_else(|| args.next()).ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_number<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<f64, ArgsError>
where
    I: Iterator<Item = String>,
{
    let value = take_value(flag, inline, args)?;
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(ArgsError::InvalidValue {
            flag: flag.to_string(),
            value,
        }),
    }
}
