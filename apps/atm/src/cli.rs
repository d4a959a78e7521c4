//! Command line parsing for the `atm` binary.
//!
//! ## Usage
//! ```bash
//! # Interactive withdrawal against the configured machine
//! atm
//!
//! # One-shot allocation, prints the plan as JSON
//! atm --amount 5400
//!
//! # Nearest satisfiable amounts around a request
//! atm --bounds 5050
//!
//! # Show what the machine holds
//! atm --inventory --config ./atm.toml
//! ```

use std::path::PathBuf;

use cashpoint_core::validation::parse_amount;
use cashpoint_core::Money;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: atm [OPTIONS]

Options:
  -a, --amount <N>        Dispense N minor units without prompting
  -b, --bounds <N>        Print the nearest satisfiable amounts around N
  -i, --inventory         Print the loaded inventory and exit
  -c, --config <PATH>     Read the machine config from PATH
  -m, --max-attempts <N>  Give up after N amount entries (interactive mode)
  -h, --help              Print this help";

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Dispense(Money),
    Bounds(Money),
    ShowInventory,
    Help,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub config_path: Option<PathBuf>,
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Invalid value for {flag}: '{value}'")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    Unknown(String),
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs {
        mode: Mode::Interactive,
        config_path: None,
        max_attempts: None,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--amount" | "-a" => {
                let value = next_value(&mut args, &arg)?;
                parsed.mode = Mode::Dispense(amount_value(&arg, &value)?);
            }
            "--bounds" | "-b" => {
                let value = next_value(&mut args, &arg)?;
                parsed.mode = Mode::Bounds(amount_value(&arg, &value)?);
            }
            "--inventory" | "-i" => parsed.mode = Mode::ShowInventory,
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(next_value(&mut args, &arg)?));
            }
            "--max-attempts" | "-m" => {
                let value = next_value(&mut args, &arg)?;
                let attempts = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ArgsError::InvalidValue {
                        flag: arg.clone(),
                        value: value.clone(),
                    })?;
                parsed.max_attempts = Some(attempts);
            }
            "--help" | "-h" => parsed.mode = Mode::Help,
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(parsed)
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn amount_value(flag: &str, value: &str) -> Result<Money, ArgsError> {
    parse_amount(value).map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_default_is_interactive() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.mode, Mode::Interactive);
        assert_eq!(args.config_path, None);
        assert_eq!(args.max_attempts, None);
    }

    #[test]
    fn test_modes() {
        assert_eq!(
            parse(&["--amount", "5400"]).unwrap().mode,
            Mode::Dispense(Money::from_minor(5400))
        );
        assert_eq!(
            parse(&["-b", "5050"]).unwrap().mode,
            Mode::Bounds(Money::from_minor(5050))
        );
        assert_eq!(parse(&["-i"]).unwrap().mode, Mode::ShowInventory);
        assert_eq!(parse(&["--help"]).unwrap().mode, Mode::Help);
    }

    #[test]
    fn test_options() {
        let args = parse(&["-c", "atm.toml", "--max-attempts", "3", "-a", "100"]).unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("atm.toml")));
        assert_eq!(args.max_attempts, Some(3));
        assert_eq!(args.mode, Mode::Dispense(Money::from_minor(100)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&["--amount"]),
            Err(ArgsError::MissingValue("--amount".to_string()))
        );
        assert_eq!(
            parse(&["--amount", "12.5"]),
            Err(ArgsError::InvalidValue {
                flag: "--amount".to_string(),
                value: "12.5".to_string(),
            })
        );
        assert!(matches!(
            parse(&["-m", "0"]),
            Err(ArgsError::InvalidValue { .. })
        ));
        assert_eq!(
            parse(&["--verbose"]),
            Err(ArgsError::Unknown("--verbose".to_string()))
        );
    }
}
