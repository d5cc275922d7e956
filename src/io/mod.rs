//! Output, configuration and error handling

/// Rendering and sampling defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Text histogram rendering
pub mod histogram;
