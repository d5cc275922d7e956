//! Discrete probability and combinatorics primitives with a text histogram renderer
//!
//! Counting functions give exact permutation, combination and variation counts. Binomial and
//! geometric distributions are bound to their parameters once and then evaluated per outcome,
//! and any such evaluator can be drawn as an ASCII histogram over a bounded integer range.

#![forbid(unsafe_code)]

/// Sampling and empirical frequencies
pub mod analysis;
/// Histogram rendering, configuration defaults and error handling
pub mod io;
/// Combinatorics and probability distributions
pub mod math;

pub use io::error::{ProbabilityError, Result};
pub use io::histogram::{Histogram, HistogramOptions, render};
pub use math::distributions::{Binomial, Geometric, ProbabilityMass, binomial, geometric};
