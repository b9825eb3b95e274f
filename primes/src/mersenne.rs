use log::{debug, trace};

use crate::{trial_division, Error};

/// Returns the primes less than or equal to `limit` of the form 2^n - 1.
pub fn mersenne_primes(limit: i64) -> Result<Vec<u32>, Error> {
    let mut mersenne = vec![];
    // Skip 2, the only even prime.
    for prime in trial_division(limit)?.into_iter().skip(1) {
        let successor = i64::from(prime) + 1;
        if is_power_of_two(successor)? {
            trace!("{prime} = 2^{} - 1", successor.trailing_zeros());
            mersenne.push(prime);
        }
    }
    debug!("found {} Mersenne primes up to {limit}", mersenne.len());
    Ok(mersenne)
}

/// Returns true if `m` is a power of two, halving it until an odd value
/// is reached. Fails for zero and negative inputs.
pub fn is_power_of_two(m: i64) -> Result<bool, Error> {
    if m <= 0 {
        return Err(Error::NotPositive(m));
    }
    let mut m = m;
    while m != 1 {
        if m % 2 != 0 {
            return Ok(false);
        }
        m /= 2;
    }
    Ok(true)
}
