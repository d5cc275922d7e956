//! Simulation helpers built on top of the distributions

/// Random sampling and empirical relative frequencies
pub mod sampling;
