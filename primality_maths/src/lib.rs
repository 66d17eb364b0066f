//! A crate containing traits and algorithms for testing integers for primality and enumerating primes. All
//! algorithms are generic over the integer traits of `num`, so they work on machine integers and big integers alike.

pub mod prime_range;

use crate::prime_range::primes_up_to as collect_primes;
use crate::prime_test::{PrimeTest, TrialDivision};

/// Test whether `n` is prime using trial division up to its square root. Every number below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    TrialDivision::is_prime(&n)
}

/// All primes in `[2, limit]` in ascending order. Empty if `limit` is below 2.
pub fn primes_up_to(limit: i64) -> Vec<i64> {
    collect_primes::<TrialDivision, _>(&limit)
}
