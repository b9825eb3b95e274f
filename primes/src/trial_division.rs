use log::debug;

use crate::{checked_limit, Error};

/// Returns all primes less than or equal to `limit`, testing every odd
/// candidate against the odd divisors up to its square root.
pub fn trial_division(limit: i64) -> Result<Vec<u32>, Error> {
    let limit = checked_limit(limit)?;
    if limit < 2 {
        return Ok(vec![]);
    }

    let mut primes = vec![2];
    if limit >= 3 {
        primes.push(3);
    }
    primes.extend(
        (5..=limit)
            .step_by(2)
            .filter(|&candidate| has_no_odd_divisor(candidate)),
    );

    debug!("trial division found {} primes up to {limit}", primes.len());
    Ok(primes)
}

fn has_no_odd_divisor(candidate: u32) -> bool {
    let candidate = u64::from(candidate);
    (3..)
        .step_by(2)
        .take_while(|divisor| divisor * divisor <= candidate)
        .all(|divisor| candidate % divisor != 0)
}
