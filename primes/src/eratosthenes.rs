use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, trace};

use crate::{checked_limit, floor_sqrt, sieve_len, Error};

/// Returns all primes less than or equal to `limit` using the Sieve of
/// Eratosthenes.
pub fn sieve_of_eratosthenes(limit: i64) -> Result<Vec<u32>, Error> {
    let limit = checked_limit(limit)?;
    if limit < 2 {
        return Ok(vec![]);
    }

    let mut is_prime = bitvec![1; sieve_len(limit)?];
    let limit = limit as usize;
    is_prime.set(0, false);
    is_prime.set(1, false);

    let root = floor_sqrt(limit as u64) as usize;
    trace!("crossing out multiples of candidates up to {root}");
    for i in 2..=root {
        if is_prime[i] {
            for multiple in (i * i..=limit).step_by(i) {
                is_prime.set(multiple, false);
            }
        }
    }

    let primes = is_prime.iter_ones().map(|p| p as u32).collect_vec();
    debug!(
        "sieve of Eratosthenes found {} primes up to {limit}",
        primes.len()
    );
    Ok(primes)
}
