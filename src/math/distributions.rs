//! Discrete probability distributions bound to fixed parameters
//!
//! Each distribution is an immutable value that captures its parameters at construction and
//! evaluates the probability mass for an outcome `k`. Outcomes outside the distribution's
//! support have probability 0 rather than being an error, which lets the histogram renderer
//! sample any integer range without knowing which distribution it is drawing.

use crate::io::error::{Result, invalid_parameter};
use crate::math::combinatorics::{binomial_coefficient, ln_binomial_coefficient};
use std::fmt;

/// A probability mass function over integer outcomes
///
/// Implemented by the distributions in this module and by every `Fn(i64) -> f64`,
/// so ad hoc closures can be rendered the same way as a bound distribution.
pub trait ProbabilityMass {
    /// Probability of outcome `k`
    fn probability(&self, k: i64) -> f64;
}

impl<F> ProbabilityMass for F
where
    F: Fn(i64) -> f64,
{
    fn probability(&self, k: i64) -> f64 {
        self(k)
    }
}

/// Number of successes in `n` independent trials with success probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Bind a binomial distribution to `n` trials with success probability `p`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `p` is NaN or outside `[0, 1]`
    pub fn new(n: u64, p: f64) -> Result<Self> {
        validate_probability(p)?;
        log::trace!("bound binomial distribution n={n} p={p}");
        Ok(Self { n, p })
    }

    /// Number of trials
    pub const fn n(&self) -> u64 {
        self.n
    }

    /// Success probability of a single trial
    pub const fn p(&self) -> f64 {
        self.p
    }

    /// Probability of exactly `k` successes
    ///
    /// `C(n, k) p^k (1 - p)^(n - k)` for `0 <= k <= n`, and 0 everywhere else.
    pub fn evaluate(&self, k: i64) -> f64 {
        let Ok(k) = u64::try_from(k) else {
            return 0.0;
        };
        if k > self.n {
            return 0.0;
        }

        let q = 1.0 - self.p;
        let failures = self.n - k;
        let coefficient = binomial_coefficient(self.n, k);
        let weight = power(self.p, k) * power(q, failures);
        if coefficient.is_finite() && weight >= f64::MIN_POSITIVE {
            return coefficient * weight;
        }

        // Large n: the factors overflow or underflow even though their product does not
        let ln_q = (-self.p).ln_1p();
        (ln_binomial_coefficient(self.n, k) + k as f64 * self.p.ln() + failures as f64 * ln_q)
            .exp()
    }

    /// Expected number of successes, `n p`
    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    /// Variance of the success count, `n p (1 - p)`
    pub fn variance(&self) -> f64 {
        self.mean() * (1.0 - self.p)
    }
}

impl ProbabilityMass for Binomial {
    fn probability(&self, k: i64) -> f64 {
        self.evaluate(k)
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binomial(n={}, p={})", self.n, self.p)
    }
}

/// Index of the first success in a sequence of trials with success probability `p`
///
/// Outcomes are 1-based: `k = 1` means the very first trial succeeded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Bind a geometric distribution to success probability `p`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `p` is NaN or outside `[0, 1]`
    pub fn new(p: f64) -> Result<Self> {
        validate_probability(p)?;
        log::trace!("bound geometric distribution p={p}");
        Ok(Self { p })
    }

    /// Success probability of a single trial
    pub const fn p(&self) -> f64 {
        self.p
    }

    /// Probability that the first success happens on trial `k`
    ///
    /// `(1 - p)^(k - 1) p` for `k >= 1`, and 0 for `k <= 0`.
    pub fn evaluate(&self, k: i64) -> f64 {
        if k <= 0 {
            return 0.0;
        }

        let failures = k.unsigned_abs() - 1;
        power(1.0 - self.p, failures) * self.p
    }

    /// Expected trial of the first success, `1 / p`
    ///
    /// Infinite when `p` is 0.
    pub fn mean(&self) -> f64 {
        self.p.recip()
    }

    /// Variance of the first success index, `(1 - p) / p^2`
    pub fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl ProbabilityMass for Geometric {
    fn probability(&self, k: i64) -> f64 {
        self.evaluate(k)
    }
}

impl fmt::Display for Geometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geometric(p={})", self.p)
    }
}

/// Create a binomial evaluator for `n` trials with success probability `p`
///
/// # Errors
///
/// Returns an invalid parameter error if `p` is NaN or outside `[0, 1]`
pub fn binomial(n: u64, p: f64) -> Result<Binomial> {
    Binomial::new(n, p)
}

/// Create a geometric evaluator with success probability `p`
///
/// # Errors
///
/// Returns an invalid parameter error if `p` is NaN or outside `[0, 1]`
pub fn geometric(p: f64) -> Result<Geometric> {
    Geometric::new(p)
}

fn validate_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(invalid_parameter("p", &p, &"must lie in [0, 1]"))
    }
}

// powi takes an i32 exponent; larger exponents fall back to powf
fn power(base: f64, exponent: u64) -> f64 {
    i32::try_from(exponent).map_or_else(|_| base.powf(exponent as f64), |e| base.powi(e))
}
