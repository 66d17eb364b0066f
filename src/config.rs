//! Command-line configuration of the `primes` binary.

use std::num::IntErrorKind;

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};

/// Bound used by `list` when none is given.
pub const DEFAULT_LIMIT: i64 = 50;

#[derive(Parser, Debug)]
#[command(name = "primes")]
#[command(about = "Test integers for primality and list primes up to a bound")]
#[command(version)]
pub struct Config {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Log what is being computed to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Config {
    /// The selected subcommand. Running without one lists the primes up to `DEFAULT_LIMIT`.
    pub fn mode(&self) -> Mode {
        self.mode.clone().unwrap_or(Mode::List { limit: DEFAULT_LIMIT })
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print every prime up to and including LIMIT, one per line
    List {
        /// Inclusive upper bound
        #[arg(
            env = "PRIMES_LIMIT",
            default_value_t = DEFAULT_LIMIT,
            value_parser = parse_integer,
            allow_negative_numbers = true
        )]
        limit: i64,
    },

    /// Tell whether NUMBER is prime
    Check {
        /// Candidate to test
        #[arg(value_parser = parse_integer, allow_negative_numbers = true)]
        number: i64,
    },
}

/// Parse a decimal integer given on the command line. Surrounding whitespace is ignored. Fractions, values that do
/// not fit into an `i64` and everything else that is not an integer are rejected with distinct errors.
pub fn parse_integer(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(Error::OutOfRange {
                input: input.to_owned(),
            }),
            _ => match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() && value.fract() != 0.0 => Err(Error::Fractional {
                    input: input.to_owned(),
                }),
                _ => Err(Error::NonNumeric {
                    input: input.to_owned(),
                }),
            },
        },
    }
}
