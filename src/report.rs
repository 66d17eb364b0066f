use std::io::Write;

use tracing::trace;

use crate::error::Result;

/// Write each prime on its own line and return how many were written.
pub fn write_primes<W, I>(out: &mut W, primes: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = i64>,
{
    let mut count = 0;
    for prime in primes {
        trace!(prime, "found prime");
        writeln!(out, "{}", prime)?;
        count += 1;
    }
    Ok(count)
}

pub fn write_verdict<W: Write>(out: &mut W, number: i64, prime: bool) -> Result<()> {
    if prime {
        writeln!(out, "{} is prime", number)?;
    } else {
        writeln!(out, "{} is not prime", number)?;
    }
    Ok(())
}
