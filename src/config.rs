//! Command-line configuration.
//!
//! Flags follow the classic short-option form (`-t -r 20 -c 30 -s 42`).
//! Numeric arguments must be plain base-10 digits; anything else is a fatal
//! configuration error reported together with [`USAGE`]. A stray `-g` and
//! positional arguments are tolerated and collected in [`Config::ignored`].

use std::ffi::OsString;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use crate::types::{Theme, DEFAULT_COLS, DEFAULT_ROWS};

pub const USAGE: &str = "\
Usage: tui-life [OPTIONS]
   -t     generate terrain
   -r N   set number of rows to N.
   -c N   set number of columns to N.
   -s N   set the random seed to N.
   -v     increase log verbosity (repeatable).
e.g., tui-life -t -r 20 -c 30
";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Option -{flag} requires a numeric argument (got `{value}`)")]
    NotNumeric { flag: char, value: String },

    #[error("Option -{flag} is out of range (got `{value}`)")]
    OutOfRange { flag: char, value: String },

    #[error("Option -{flag} must be greater than zero")]
    NotPositive { flag: char },

    #[error("{0}")]
    Usage(String),

    #[error("help requested")]
    HelpRequested,
}

#[derive(Debug, Parser)]
#[command(
    name = "tui-life",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct CliArgs {
    #[arg(short = 't')]
    terrain: bool,

    #[arg(short = 'r', value_name = "N", allow_hyphen_values = true)]
    rows: Option<String>,

    #[arg(short = 'c', value_name = "N", allow_hyphen_values = true)]
    cols: Option<String>,

    #[arg(short = 's', value_name = "N", allow_hyphen_values = true)]
    seed: Option<String>,

    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    #[arg(short = 'h', action = ArgAction::SetTrue)]
    help: bool,

    /// Older front ends pass `-g`; it is accepted and does nothing.
    #[arg(short = 'g', action = ArgAction::Count, hide = true)]
    legacy_g: u8,

    #[arg(value_name = "ARG", hide = true)]
    operands: Vec<String>,
}

/// Run configuration, fixed once parsing succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub rows: usize,
    pub cols: usize,
    pub terrain: bool,
    pub verbosity: u8,
    /// Arguments that were accepted but have no effect.
    pub ignored: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: seed_from_clock(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            terrain: false,
            verbosity: 0,
            ignored: Vec::new(),
        }
    }
}

impl Config {
    /// Parse the full argument list (program name first).
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(args).map_err(|err| {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            ConfigError::Usage(first.trim_start_matches("error: ").to_string())
        })?;

        if cli.help {
            return Err(ConfigError::HelpRequested);
        }

        let mut config = Config {
            terrain: cli.terrain,
            verbosity: cli.verbose,
            ..Config::default()
        };
        config
            .ignored
            .extend((0..cli.legacy_g).map(|_| "-g".to_string()));
        config.ignored.extend(cli.operands);
        if let Some(value) = cli.rows {
            config.rows = parse_positive('r', &value)?;
        }
        if let Some(value) = cli.cols {
            config.cols = parse_positive('c', &value)?;
        }
        if let Some(value) = cli.seed {
            config.seed = parse_number('s', &value)?;
        }

        Ok(config)
    }

    pub fn theme(&self) -> Theme {
        Theme::for_terrain(self.terrain)
    }

    /// Log level for stderr: warnings by default, one step per `-v`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Current Unix time in seconds, truncated to 32 bits.
pub fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as u32)
        .unwrap_or_default()
}

fn parse_number<N: std::str::FromStr>(flag: char, value: &str) -> Result<N, ConfigError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::NotNumeric {
            flag,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| ConfigError::OutOfRange {
        flag,
        value: value.to_string(),
    })
}

fn parse_positive(flag: char, value: &str) -> Result<usize, ConfigError> {
    match parse_number(flag, value)? {
        0 => Err(ConfigError::NotPositive { flag }),
        n => Ok(n),
    }
}
