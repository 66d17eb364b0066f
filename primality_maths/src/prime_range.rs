//! Enumeration of all primes up to an inclusive bound, driven by any `PrimeTest`.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use num::{CheckedAdd, Integer};

use crate::prime_test::PrimeTest;

/// Iterator over the primes in `[2, limit]` in ascending order. Every candidate is checked with the test `T`. The
/// iterator is empty if `limit` is below 2.
pub struct PrimesUpTo<T, P> {
    next_candidate: Option<P>,
    limit: P,
    marker: PhantomData<T>,
}

impl<T, P> PrimesUpTo<T, P>
where
    T: PrimeTest<P>,
    P: Integer + CheckedAdd + Clone,
{
    pub fn new(limit: P) -> Self {
        PrimesUpTo {
            next_candidate: Some(P::one() + P::one()),
            limit,
            marker: PhantomData,
        }
    }
}

impl<T, P> Iterator for PrimesUpTo<T, P>
where
    T: PrimeTest<P>,
    P: Integer + CheckedAdd + Clone,
{
    type Item = P;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = self.next_candidate.take() {
            if candidate > self.limit {
                return None;
            }

            // a bound at the maximum of its type has no successor, so iteration ends after it
            self.next_candidate = candidate.checked_add(&P::one());
            if T::is_prime(&candidate) {
                return Some(candidate);
            }
        }

        None
    }
}

impl<T, P> FusedIterator for PrimesUpTo<T, P>
where
    T: PrimeTest<P>,
    P: Integer + CheckedAdd + Clone,
{
}

/// Collect all primes in `[2, limit]` in ascending order, using the prime test `T`.
/// # Examples
/// ```
/// use primality_maths::prime_range::primes_up_to;
/// use primality_maths::prime_test::TrialDivision;
///
/// assert_eq!(vec![2, 3, 5, 7], primes_up_to::<TrialDivision, _>(&10));
/// ```
pub fn primes_up_to<T, P>(limit: &P) -> Vec<P>
where
    T: PrimeTest<P>,
    P: Integer + CheckedAdd + Clone,
{
    PrimesUpTo::<T, P>::new(limit.clone()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::prime_test::{NaiveTrialDivision, TrialDivision};

    use super::*;

    #[test]
    fn test_empty_below_two() {
        for limit in &[i64::MIN, -7, 0, 1] {
            assert_eq!(Vec::<i64>::new(), primes_up_to::<TrialDivision, _>(limit));
        }
    }

    #[test]
    fn test_small_bounds() {
        assert_eq!(vec![2], primes_up_to::<TrialDivision, _>(&2i64));
        assert_eq!(vec![2, 3, 5, 7], primes_up_to::<TrialDivision, _>(&10i64));
        assert_eq!(vec![2, 3, 5, 7, 11], primes_up_to::<TrialDivision, _>(&11i64));
    }

    #[test]
    fn test_primes_up_to_fifty() {
        let primes = primes_up_to::<TrialDivision, _>(&50i64);
        assert_eq!(15, primes.len());
        assert_eq!(Some(&47), primes.last());
        assert_eq!(primes, primes_up_to::<NaiveTrialDivision, _>(&50i64));
    }

    #[test]
    fn test_ascending_and_all_prime() {
        let primes = primes_up_to::<TrialDivision, _>(&5000u32);
        assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(primes.iter().all(|p| TrialDivision::is_prime(p)));
        assert_eq!(669, primes.len());
    }

    /// Enumerating up to the largest value of a type must terminate instead of overflowing the candidate.
    #[test]
    fn test_bound_at_type_maximum() {
        let primes = primes_up_to::<TrialDivision, _>(&u8::MAX);
        assert_eq!(54, primes.len());
        assert_eq!(Some(&251), primes.last());

        let primes = primes_up_to::<TrialDivision, _>(&i8::MAX);
        assert_eq!(Some(&127), primes.last());
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = PrimesUpTo::<TrialDivision, u8>::new(3);
        assert_eq!(Some(2), iter.next());
        assert_eq!(Some(3), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }
}
