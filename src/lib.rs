//! Front end of the `primes` binary: parses the command line, runs trial division from `primality_maths` and prints
//! the results.

use std::io::{self, Write};

use primality_maths::prime_range::PrimesUpTo;
use primality_maths::prime_test::{PrimeTest, TrialDivision};
use tracing::debug;

pub mod config;
pub mod error;
pub mod report;

pub use crate::config::{Config, Mode};
pub use crate::error::{Error, Result};

/// Execute the mode selected in `config`, writing all results to `out`. A reader closing the output early (e.g.
/// `primes list | head`) ends the run successfully.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    match execute(config, out) {
        Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed by reader");
            Ok(())
        }
        result => result,
    }
}

fn execute<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    match config.mode() {
        Mode::List { limit } => {
            debug!(limit, "listing primes");
            let count = report::write_primes(out, PrimesUpTo::<TrialDivision, i64>::new(limit))?;
            debug!(count, "listed primes");
        }
        Mode::Check { number } => {
            debug!(number, "checking number");
            report::write_verdict(out, number, TrialDivision::is_prime(&number))?;
        }
    }
    out.flush()?;
    Ok(())
}
