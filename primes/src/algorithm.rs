use strum::{Display, EnumString, EnumVariantNames};

use crate::{mersenne_primes, sieve_of_atkin, sieve_of_eratosthenes, trial_division, Error};

/// The available prime generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumVariantNames, Display)]
pub enum Algorithm {
    #[strum(serialize = "trial-division")]
    TrialDivision,
    #[strum(serialize = "eratosthenes")]
    Eratosthenes,
    #[strum(serialize = "atkin")]
    Atkin,
    #[strum(serialize = "mersenne")]
    Mersenne,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::TrialDivision,
        Algorithm::Eratosthenes,
        Algorithm::Atkin,
        Algorithm::Mersenne,
    ];

    /// Whether the algorithm returns every prime up to the limit, as opposed
    /// to a subset of them.
    pub fn is_complete(&self) -> bool {
        !matches!(self, Algorithm::Mersenne)
    }
}

/// Runs `algorithm` up to `limit`.
pub fn generate(algorithm: Algorithm, limit: i64) -> Result<Vec<u32>, Error> {
    match algorithm {
        Algorithm::TrialDivision => trial_division(limit),
        Algorithm::Eratosthenes => sieve_of_eratosthenes(limit),
        Algorithm::Atkin => sieve_of_atkin(limit),
        Algorithm::Mersenne => mersenne_primes(limit),
    }
}
