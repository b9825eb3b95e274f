//! Prime number generators used across primegen.
//!
//! Every generator takes a signed `limit` and returns the primes `p <= limit`
//! in ascending order. Limits below 2 yield no primes.

mod algorithm;
mod atkin;
mod cross_check;
mod eratosthenes;
mod error;
mod mersenne;
mod trial_division;

pub use algorithm::{generate, Algorithm};
pub use atkin::sieve_of_atkin;
pub use cross_check::{cross_check, Mismatch};
pub use eratosthenes::sieve_of_eratosthenes;
pub use error::Error;
pub use mersenne::{is_power_of_two, mersenne_primes};
pub use trial_division::trial_division;

/// The largest accepted limit. Keeps all intermediate products within `u64`.
pub const MAX_LIMIT: i64 = u32::MAX as i64;

/// Checks that `limit` lies in `0..=MAX_LIMIT`.
pub(crate) fn checked_limit(limit: i64) -> Result<u32, Error> {
    if limit < 0 {
        return Err(Error::NegativeLimit(limit));
    }
    u32::try_from(limit).map_err(|_| Error::LimitTooLarge {
        limit,
        max: MAX_LIMIT,
    })
}

/// Length of a marking array indexed `0..=limit`.
pub(crate) fn sieve_len(limit: u32) -> Result<usize, Error> {
    usize::try_from(limit)
        .ok()
        .and_then(|limit| limit.checked_add(1))
        .ok_or(Error::LimitTooLarge {
            limit: i64::from(limit),
            max: MAX_LIMIT,
        })
}

/// Largest `r` with `r * r <= n`.
pub(crate) fn floor_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    // The float estimate can be off by one for large inputs.
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// Smallest `r` with `r * r >= n`.
pub(crate) fn ceil_sqrt(n: u64) -> u64 {
    let root = floor_sqrt(n);
    if root * root == n {
        root
    } else {
        root + 1
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn limit_bounds() {
        assert_eq!(checked_limit(0), Ok(0));
        assert_eq!(checked_limit(20), Ok(20));
        assert_eq!(checked_limit(MAX_LIMIT), Ok(u32::MAX));
        assert_eq!(checked_limit(-1), Err(Error::NegativeLimit(-1)));
        assert_eq!(
            checked_limit(MAX_LIMIT + 1),
            Err(Error::LimitTooLarge {
                limit: MAX_LIMIT + 1,
                max: MAX_LIMIT
            })
        );
    }

    #[test]
    fn marking_array_length() {
        assert_eq!(sieve_len(0), Ok(1));
        assert_eq!(sieve_len(20), Ok(21));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(sieve_len(u32::MAX), Ok(1 << 32));
        #[cfg(not(target_pointer_width = "64"))]
        assert_eq!(
            sieve_len(u32::MAX),
            Err(Error::LimitTooLarge {
                limit: MAX_LIMIT,
                max: MAX_LIMIT
            })
        );
    }

    #[test]
    fn square_roots() {
        assert_eq!(floor_sqrt(0), 0);
        assert_eq!(floor_sqrt(1), 1);
        assert_eq!(floor_sqrt(20), 4);
        assert_eq!(floor_sqrt(25), 5);
        assert_eq!(floor_sqrt(u32::MAX as u64), 65535);
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(20), 5);
        assert_eq!(ceil_sqrt(25), 5);
        assert_eq!(ceil_sqrt(26), 6);
        assert_eq!(ceil_sqrt(u32::MAX as u64), 65536);
    }
}
