use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, trace};

use crate::{ceil_sqrt, checked_limit, sieve_len, Error};

/// Returns all primes less than or equal to `limit` using a variant of the
/// Sieve of Atkin.
///
/// Candidates are marked from the three quadratic forms modulo 12:
///
/// * `4x² + y²` with remainder 1 or 5,
/// * `3x² + y²` with remainder 7,
/// * `3x² − y²` (for `x > y`) with remainder 11.
///
/// Unlike the textbook sieve, a candidate is marked as soon as it has one
/// representation instead of having its flag toggled per representation.
/// The spurious composites this admits all have a factor of at least 5 no
/// larger than their square root, so they are removed by crossing out the
/// multiples of every surviving candidate up to `⌈√limit⌉`.
pub fn sieve_of_atkin(limit: i64) -> Result<Vec<u32>, Error> {
    let limit = checked_limit(limit)?;
    if limit < 2 {
        return Ok(vec![]);
    }

    let mut is_prime = bitvec![0; sieve_len(limit)?];
    let limit = u64::from(limit);
    is_prime.set(2, true);
    if limit >= 3 {
        is_prime.set(3, true);
    }

    let root = ceil_sqrt(limit);
    trace!("marking quadratic form candidates for x, y in 1..={root}");
    for x in 1..=root {
        for y in 1..=root {
            let (xx, yy) = (x * x, y * y);

            let n = 4 * xx + yy;
            if n <= limit && matches!(n % 12, 1 | 5) {
                is_prime.set(n as usize, true);
            }

            let n = 3 * xx + yy;
            if n <= limit && n % 12 == 7 {
                is_prime.set(n as usize, true);
            }

            if x > y {
                let n = 3 * xx - yy;
                if n <= limit && n % 12 == 11 {
                    is_prime.set(n as usize, true);
                }
            }
        }
    }

    trace!("crossing out multiples of candidates in 5..={root}");
    for i in 5..=root {
        if is_prime[i as usize] {
            for multiple in (i * i..=limit).step_by(i as usize) {
                is_prime.set(multiple as usize, false);
            }
        }
    }

    let primes = is_prime.iter_ones().map(|p| p as u32).collect_vec();
    debug!("sieve of Atkin found {} primes up to {limit}", primes.len());
    Ok(primes)
}
