//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap::command;
use clap::value_parser;
use thiserror::Error;

use crate::random::DEFAULT_DENSITY;
use crate::random::RandomOptions;
use crate::rule_set::B3S23;
use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;
use crate::source::GridSource;

pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLUMNS: usize = 200;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(16);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid duration \"{got}\", expected a number followed by 'us', 'ms' or 's'")]
    InvalidDelay { got: String },

    #[error("Invalid density \"{got}\", expected a number between 0 and 1")]
    InvalidDensity { got: String },
}

/// Everything the simulation needs to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` when neither an input file nor random input was requested
    pub source: Option<GridSource>,
    pub delay: Duration,
    pub rule: RuleSet,
    /// Stop after this many generations. `None` runs until the user quits.
    pub generations: Option<u64>,
    pub strict: bool,
}

impl Config {
    /// Parses the command-line arguments of the current process.
    pub fn from_env() -> Result<Self, clap::Error> {
        Ok(Self::from_matches(&command().try_get_matches()?))
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::from_matches(&command().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let source = if matches.get_flag("random") {
            Some(GridSource::Random(RandomOptions {
                rows: matches.get_one::<usize>("rows").copied().unwrap_or(DEFAULT_ROWS),
                columns: matches.get_one::<usize>("columns").copied().unwrap_or(DEFAULT_COLUMNS),
                density: matches.get_one::<f64>("density").copied().unwrap_or(DEFAULT_DENSITY),
                seed: matches.get_one::<u64>("seed").copied(),
            }))
        } else {
            // `-i ""` is treated as no input at all
            matches
                .get_one::<OsString>("input")
                .filter(|path| !path.is_empty())
                .map(|path| match path.to_str() {
                    Some("-") => GridSource::Stdin,
                    _ => GridSource::File(PathBuf::from(path)),
                })
        };

        Self {
            source,
            delay: matches.get_one::<Duration>("delay").copied().unwrap_or(DEFAULT_DELAY),
            rule: matches.get_one::<RuleSet>("rule").copied().unwrap_or(B3S23),
            generations: matches.get_one::<u64>("generations").copied(),
            strict: matches.get_flag("strict"),
        }
    }
}

pub fn command() -> Command {
    command!()
        .about("Conway's Game of Life in the terminal")
        .long_about(
            "Conway's Game of Life in the terminal\n\
             \n\
             The starting grid is read as plain text, one row per line:\n\
             * Live cells are represented by `*`;\n\
             * Dead cells are represented by `.`.\n\
             \n\
             While running, press `q` to quit, space to pause and `n` to step while paused.",
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("File to read start grid from, or - for standard input")
                .value_parser(value_parser!(OsString)),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .help("Use random input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rows")
                .short('y')
                .long("rows")
                .help("Number of rows for random input")
                .default_value("50")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("columns")
                .short('x')
                .long("columns")
                .help("Number of columns for random input")
                .default_value("200")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("density")
                .long("density")
                .help("Probability of a cell starting alive in random input")
                .default_value("0.7")
                .value_parser(parse_density),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for random input")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .value_name("DURATION")
                .help("Delay between frames, e.g. 16ms or 1s")
                .default_value("16ms")
                .value_parser(parse_delay),
        )
        .arg(
            Arg::new("rule")
                .long("rule")
                .help("Birth/survival rule")
                .default_value("B3/S23")
                .value_parser(parse_rule),
        )
        .arg(
            Arg::new("generations")
                .short('g')
                .long("generations")
                .help("Stop after this many generations")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject input grids whose rows differ in length")
                .action(ArgAction::SetTrue),
        )
}

/// Parses `16ms`, `1s` or `500us`. A bare number is in milliseconds.
pub fn parse_delay(s: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDelay { got: s.to_string() };

    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (n, unit) = s.split_at(split);

    let n: u64 = n.parse().map_err(|_| invalid())?;

    match unit {
        "" | "ms" => Ok(Duration::from_millis(n)),
        "s" => Ok(Duration::from_secs(n)),
        "us" | "µs" => Ok(Duration::from_micros(n)),
        _ => Err(invalid()),
    }
}

fn parse_density(s: &str) -> Result<f64, ConfigError> {
    match s.parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(ConfigError::InvalidDensity { got: s.to_string() }),
    }
}

fn parse_rule(s: &str) -> Result<RuleSet, RuleError> {
    s.parse()
}
