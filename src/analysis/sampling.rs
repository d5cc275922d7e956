//! Random draws from the distributions and empirical relative frequencies
//!
//! An [`EmpiricalMass`] is itself a [`ProbabilityMass`], so a simulated histogram can be
//! rendered with the same renderer as the exact one and compared by eye.

use crate::io::configuration::{DEFAULT_SEED, DEFAULT_TRIALS};
use crate::io::error::{Result, invalid_parameter};
use crate::math::distributions::{Binomial, Geometric, ProbabilityMass};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;

/// Distributions that can produce random outcomes
pub trait Sample {
    /// Draw one outcome, or `None` if the distribution can never produce one
    fn sample<R: Rng>(&self, rng: &mut R) -> Option<i64>;
}

impl Sample for Binomial {
    fn sample<R: Rng>(&self, rng: &mut R) -> Option<i64> {
        let successes = (0..self.n())
            .filter(|_| rng.random::<f64>() < self.p())
            .count();
        i64::try_from(successes).ok()
    }
}

impl Sample for Geometric {
    /// Inverse transform: `ceil(ln U / ln(1 - p))` for `U` uniform on `(0, 1]`
    ///
    /// `p = 0` never succeeds and yields `None`. Draws beyond `i64::MAX` saturate.
    fn sample<R: Rng>(&self, rng: &mut R) -> Option<i64> {
        let p = self.p();
        if p <= 0.0 {
            return None;
        }
        if p >= 1.0 {
            return Some(1);
        }

        let uniform = 1.0 - rng.random::<f64>();
        // ln_1p keeps ln(1 - p) nonzero when 1 - p rounds to 1
        let trial = (uniform.ln() / (-p).ln_1p()).ceil();
        Some((trial as i64).max(1))
    }
}

/// Relative frequencies of outcomes observed in a batch of draws
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalMass {
    counts: BTreeMap<i64, usize>,
    trials: usize,
}

impl EmpiricalMass {
    /// Tally a sequence of observed outcomes
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `outcomes` is empty
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = i64>) -> Result<Self> {
        let mut counts = BTreeMap::new();
        let mut trials = 0;
        for outcome in outcomes {
            *counts.entry(outcome).or_insert(0) += 1;
            trials += 1;
        }

        if trials == 0 {
            return Err(invalid_parameter(
                "outcomes",
                &trials,
                &"at least one observation is required",
            ));
        }
        Ok(Self { counts, trials })
    }

    /// Total number of observations
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// How many times `k` was observed
    pub fn count(&self, k: i64) -> usize {
        self.counts.get(&k).copied().unwrap_or(0)
    }

    /// Mean of the observed outcomes
    pub fn mean(&self) -> f64 {
        let total: f64 = self
            .counts
            .iter()
            .map(|(&k, &count)| k as f64 * count as f64)
            .sum();
        total / self.trials as f64
    }
}

impl ProbabilityMass for EmpiricalMass {
    fn probability(&self, k: i64) -> f64 {
        self.count(k) as f64 / self.trials as f64
    }
}

/// Draw `trials` outcomes from `distribution` with a seeded generator and tally them
///
/// Draws for which the distribution produces no outcome are skipped.
///
/// # Errors
///
/// Returns an invalid parameter error if `trials` is 0 or no draw produced an outcome
pub fn empirical_mass<D: Sample>(
    distribution: &D,
    trials: usize,
    seed: u64,
) -> Result<EmpiricalMass> {
    if trials == 0 {
        return Err(invalid_parameter(
            "trials",
            &trials,
            &"at least one draw is required",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let outcomes: Vec<i64> = (0..trials)
        .filter_map(|_| distribution.sample(&mut rng))
        .collect();
    log::debug!(
        "drew {} of {trials} requested samples with seed {seed}",
        outcomes.len()
    );

    EmpiricalMass::from_outcomes(outcomes)
}

/// [`empirical_mass`] with the default trial count and seed
///
/// # Errors
///
/// Returns an invalid parameter error if no draw produced an outcome
pub fn simulate<D: Sample>(distribution: &D) -> Result<EmpiricalMass> {
    empirical_mass(distribution, DEFAULT_TRIALS, DEFAULT_SEED)
}
