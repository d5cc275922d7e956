//! Error types and context management for probability and rendering operations

use std::fmt;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum ProbabilityError {
    /// Argument validation failed
    ///
    /// Raised for out-of-range distribution parameters (`p` outside `[0, 1]`),
    /// selection sizes larger than the pool (`k > n`), and unusable renderer options
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an unrepresentable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Writing rendered output failed
    Output {
        /// Description of the write that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ProbabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for ProbabilityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, ProbabilityError>;

/// Enriches error messages with the operation that was running
pub trait WithContext<T> {
    /// Attach the name of the failing operation
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<ProbabilityError>,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Parameter errors already name their parameter
            match &mut error {
                ProbabilityError::Computation { operation: op, .. }
                | ProbabilityError::Output { operation: op, .. } => *op = operation,
                ProbabilityError::InvalidParameter { .. } => {}
            }
            error
        })
    }
}

impl From<std::io::Error> for ProbabilityError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ProbabilityError {
    ProbabilityError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ProbabilityError {
    ProbabilityError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
