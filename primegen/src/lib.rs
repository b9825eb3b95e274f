pub use primegen_primes as primes;

pub use primegen_primes::{Algorithm, Error, Mismatch, MAX_LIMIT};

use std::time::{Duration, Instant};

/// Stateless entry point bundling the prime generators.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimeGenerator;

/// The result of running a single algorithm.
#[derive(Clone, Debug)]
pub struct Run {
    pub algorithm: Algorithm,
    pub limit: i64,
    pub primes: Vec<u32>,
    pub elapsed: Duration,
}

impl PrimeGenerator {
    pub fn new() -> Self {
        PrimeGenerator
    }

    pub fn trial_division(&self, limit: i64) -> Result<Vec<u32>, Error> {
        primes::trial_division(limit)
    }

    pub fn sieve_of_eratosthenes(&self, limit: i64) -> Result<Vec<u32>, Error> {
        primes::sieve_of_eratosthenes(limit)
    }

    pub fn sieve_of_atkin(&self, limit: i64) -> Result<Vec<u32>, Error> {
        primes::sieve_of_atkin(limit)
    }

    pub fn mersenne_primes(&self, limit: i64) -> Result<Vec<u32>, Error> {
        primes::mersenne_primes(limit)
    }

    pub fn generate(&self, algorithm: Algorithm, limit: i64) -> Result<Vec<u32>, Error> {
        primes::generate(algorithm, limit)
    }

    /// Runs `algorithm` and records how long it took.
    pub fn run(&self, algorithm: Algorithm, limit: i64) -> Result<Run, Error> {
        let start = Instant::now();
        let primes = self.generate(algorithm, limit)?;
        let elapsed = start.elapsed();
        log::debug!(
            "{algorithm} up to {limit}: {} primes in {elapsed:.2?}",
            primes.len()
        );
        Ok(Run {
            algorithm,
            limit,
            primes,
            elapsed,
        })
    }

    /// Runs every algorithm up to `limit`, in the order of [`Algorithm::ALL`].
    pub fn run_all(&self, limit: i64) -> Result<Vec<Run>, Error> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| self.run(algorithm, limit))
            .collect()
    }

    pub fn cross_check(&self, limit: i64) -> Result<Vec<Mismatch>, Error> {
        primes::cross_check(limit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn generator_methods() {
        let generator = PrimeGenerator::new();
        let expected = vec![2, 3, 5, 7, 11, 13, 17, 19];
        assert_eq!(generator.trial_division(20).unwrap(), expected);
        assert_eq!(generator.sieve_of_eratosthenes(20).unwrap(), expected);
        assert_eq!(generator.sieve_of_atkin(20).unwrap(), expected);
        assert_eq!(generator.mersenne_primes(10).unwrap(), vec![3, 7]);
        assert_eq!(generator.cross_check(20).unwrap(), vec![]);
    }

    #[test]
    fn run_all_in_order() {
        let runs = PrimeGenerator::new().run_all(100).unwrap();
        assert_eq!(
            runs.iter().map(|run| run.algorithm).collect::<Vec<_>>(),
            Algorithm::ALL
        );
        assert!(runs.iter().all(|run| run.limit == 100));
        assert_eq!(runs[0].primes, runs[1].primes);
        assert_eq!(runs[1].primes, runs[2].primes);
        assert_eq!(runs[3].primes, vec![3, 7, 31]);
    }

    #[test]
    fn run_reports_errors() {
        assert_eq!(
            PrimeGenerator::new()
                .run(Algorithm::Atkin, -2)
                .unwrap_err(),
            Error::NegativeLimit(-2)
        );
    }
}
