//! Rendering and sampling defaults

// Histogram layout
/// Number of evenly spaced thresholds below the maximum row
pub const DEFAULT_HEIGHT: usize = 20;
/// Character drawn where a sample reaches the row threshold
pub const DEFAULT_FILL_CHAR: char = '│';
/// Character drawn where a sample falls below the row threshold
pub const BLANK_CHAR: char = ' ';
/// Multiplier applied to a threshold before it is printed as a percentage
pub const LABEL_SCALE: f64 = 100.0;

// Sampling
/// Fixed seed for reproducible empirical distributions
pub const DEFAULT_SEED: u64 = 42;
/// Default number of draws for an empirical distribution
pub const DEFAULT_TRIALS: usize = 10_000;
