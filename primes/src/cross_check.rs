use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use log::{debug, warn};

use crate::{generate, Algorithm, Error};

/// The difference between the output of an algorithm and the sieve of
/// Eratosthenes for the same limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub algorithm: Algorithm,
    /// Primes the algorithm did not report.
    pub missing: Vec<u32>,
    /// Values the algorithm reported that are not prime.
    pub unexpected: Vec<u32>,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} disagrees with eratosthenes: missing [{}], unexpected [{}]",
            self.algorithm,
            self.missing.iter().join(", "),
            self.unexpected.iter().join(", ")
        )
    }
}

/// Runs every algorithm that produces all primes up to `limit` and compares
/// its output against the sieve of Eratosthenes.
///
/// Returns one entry per disagreeing algorithm, so an empty vector means all
/// algorithms agree.
pub fn cross_check(limit: i64) -> Result<Vec<Mismatch>, Error> {
    let reference: BTreeSet<u32> = generate(Algorithm::Eratosthenes, limit)?
        .into_iter()
        .collect();

    let mut mismatches = vec![];
    for algorithm in Algorithm::ALL
        .into_iter()
        .filter(|a| a.is_complete() && *a != Algorithm::Eratosthenes)
    {
        let primes = generate(algorithm, limit)?;
        match mismatch(algorithm, &reference, primes) {
            Some(found) => {
                warn!("{found} (limit {limit})");
                mismatches.push(found);
            }
            None => debug!("{algorithm} agrees with eratosthenes up to {limit}"),
        }
    }
    Ok(mismatches)
}

/// Compares `primes` against `reference`, returning None if they contain the
/// same values.
fn mismatch(
    algorithm: Algorithm,
    reference: &BTreeSet<u32>,
    primes: Vec<u32>,
) -> Option<Mismatch> {
    let primes: BTreeSet<u32> = primes.into_iter().collect();
    let missing = reference.difference(&primes).copied().collect_vec();
    let unexpected = primes.difference(reference).copied().collect_vec();
    if missing.is_empty() && unexpected.is_empty() {
        None
    } else {
        Some(Mismatch {
            algorithm,
            missing,
            unexpected,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn algorithms_agree() {
        for limit in [0, 1, 2, 3, 4, 5, 20, 100, 1000] {
            assert_eq!(cross_check(limit).unwrap(), vec![], "limit {limit}");
        }
    }

    #[test]
    fn reports_missing_and_unexpected_values() {
        let reference = BTreeSet::from([2, 3, 5, 7, 11]);
        let found = mismatch(Algorithm::Atkin, &reference, vec![2, 3, 5, 9, 11]);
        assert_eq!(
            found,
            Some(Mismatch {
                algorithm: Algorithm::Atkin,
                missing: vec![7],
                unexpected: vec![9],
            })
        );
        assert_eq!(
            found.unwrap().to_string(),
            "atkin disagrees with eratosthenes: missing [7], unexpected [9]"
        );
    }

    #[test]
    fn only_missing_values() {
        let reference = BTreeSet::from([2, 3, 5, 7]);
        let found = mismatch(Algorithm::TrialDivision, &reference, vec![2, 3]).unwrap();
        assert_eq!(found.missing, vec![5, 7]);
        assert_eq!(found.unexpected, vec![]);
    }

    #[test]
    fn equal_lists_do_not_mismatch() {
        let reference = BTreeSet::from([2, 3, 5, 7]);
        assert_eq!(mismatch(Algorithm::Atkin, &reference, vec![2, 3, 5, 7]), None);
        assert_eq!(mismatch(Algorithm::Atkin, &BTreeSet::new(), vec![]), None);
    }

    #[test]
    fn invalid_limit() {
        assert_eq!(cross_check(-10), Err(Error::NegativeLimit(-10)));
    }
}
