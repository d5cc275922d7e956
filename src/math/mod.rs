//! Counting and probability mass functions

/// Exact permutation, combination and variation counts
pub mod combinatorics;
/// Binomial and geometric distributions bound to fixed parameters
pub mod distributions;
