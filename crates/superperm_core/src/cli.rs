//! Hand-rolled argument parsing shared by the command-line tools.
//!
//! Each tool takes positional arguments plus the logging flags below;
//! anything unexpected fails with the tool's usage text attached.

use std::env;

use log::LevelFilter;

use crate::{Error, Result};

/// Logging flags shared by every tool.
#[derive(Clone, Copy, Debug)]
pub struct LogOptions {
    pub level: LevelFilter,
    pub format: LogFormat,
    pub timestamp: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            format: LogFormat::Compact,
            timestamp: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

/// Parsed command line: positionals in order, plus logging flags.
#[derive(Clone, Debug)]
pub struct CliArgs {
    pub positionals: Vec<String>,
    pub log: LogOptions,
}

impl CliArgs {
    pub fn from_env(usage: &str) -> Result<Self> {
        Self::parse(env::args().skip(1), usage)
    }

    fn parse<I, S>(args: I, usage: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positionals = Vec::new();
        let mut log = LogOptions::default();
        let mut args = args.into_iter().map(|arg| arg.as_ref().to_owned());

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(usage.to_owned()));
            }

            let Some(name) = arg.strip_prefix("--") else {
                positionals.push(arg);
                continue;
            };

            match name {
                "log-level" => {
                    let value = expect_value(name, &mut args, usage)?;
                    log.level = parse_level(&value)?;
                }
                "log-format" => {
                    let value = expect_value(name, &mut args, usage)?;
                    log.format = parse_format(&value)?;
                }
                "log-timestamp" => log.timestamp = true,
                "no-log-timestamp" => log.timestamp = false,
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{usage}"
                    )));
                }
            }
        }

        Ok(Self { positionals, log })
    }

    /// Fails with the usage text unless exactly `expected` positionals were
    /// given.
    pub fn expect_positionals(&self, expected: usize, usage: &str) -> Result<&[String]> {
        if self.positionals.len() != expected {
            return Err(Error::invalid_input(format!(
                "Invalid number of arguments.\n\n{usage}"
            )));
        }
        Ok(&self.positionals)
    }
}

/// Parses the symbol-count positional.
pub fn parse_symbol_count(value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .map_err(|e| Error::invalid_input(format!("Bad value for n '{value}': {e}")))
}

fn expect_value(name: &str, args: &mut impl Iterator<Item = String>, usage: &str) -> Result<String> {
    args.next().ok_or_else(|| {
        Error::invalid_input(format!("Option --{name} requires a value\n\n{usage}"))
    })
}

fn parse_level(value: &str) -> Result<LevelFilter> {
    let level = match value.to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => {
            return Err(Error::invalid_input(format!(
                "Unknown log level '{value}'"
            )));
        }
    };
    Ok(level)
}

fn parse_format(value: &str) -> Result<LogFormat> {
    let format = match value.to_ascii_lowercase().as_str() {
        "compact" => LogFormat::Compact,
        "pretty" => LogFormat::Pretty,
        _ => {
            return Err(Error::invalid_input(format!(
                "Unknown log format '{value}'"
            )));
        }
    };
    Ok(format)
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{CliArgs, LogFormat};
    use crate::Error;

    const USAGE: &str = "Usage: test <n>";

    fn parse(args: &[&str]) -> crate::Result<CliArgs> {
        CliArgs::parse(args.iter().copied(), USAGE)
    }

    #[test]
    fn positionals_keep_their_order() {
        let args = parse(&["4", "run.sol"]).expect("parse");
        assert_eq!(args.positionals, vec!["4", "run.sol"]);
        assert_eq!(args.log.level, LevelFilter::Warn);
    }

    #[test]
    fn logging_flags_are_recognized() {
        let args = parse(&[
            "--log-level",
            "debug",
            "--log-format",
            "pretty",
            "--no-log-timestamp",
            "3",
        ])
        .expect("parse");
        assert_eq!(args.log.level, LevelFilter::Debug);
        assert_eq!(args.log.format, LogFormat::Pretty);
        assert!(!args.log.timestamp);
        assert_eq!(args.positionals, vec!["3"]);
    }

    #[test]
    fn unknown_option_carries_the_usage_text() {
        let err = parse(&["--frobnicate"]).expect_err("unknown option");
        let Error::InvalidInput(message) = err else {
            panic!("expected InvalidInput, got {err:?}");
        };
        assert!(message.contains("--frobnicate"));
        assert!(message.contains(USAGE));
    }

    #[test]
    fn wrong_positional_count_is_a_usage_error() {
        let args = parse(&["4", "extra"]).expect("parse");
        let err = args.expect_positionals(1, USAGE).expect_err("too many");
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
