//! Tests for error formatting and context propagation

#[cfg(test)]
mod tests {
    use probkit::io::error::{
        ProbabilityError, WithContext, computation_error, invalid_parameter,
    };
    use std::error::Error;

    // Tests parameter errors name the parameter, value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("p", &1.5, &"must lie in [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'p' = '1.5': must lie in [0, 1]"
        );
        assert!(err.source().is_none());
    }

    // Tests computation errors name the failing operation
    // Verified by swapping operation and reason
    #[test]
    fn test_computation_error_display() {
        let err = computation_error("permutations", &"35! overflows u128");
        assert_eq!(
            err.to_string(),
            "Computation error in permutations: 35! overflows u128"
        );
    }

    // Tests I/O failures convert to output errors with a source
    // Verified by dropping the source from the error chain
    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ProbabilityError::from(io);
        assert!(matches!(
            err,
            ProbabilityError::Output {
                operation: "unknown",
                ..
            }
        ));
        assert!(err.source().is_some());
    }

    // Tests operation context replaces the placeholder operation
    // Verified by ignoring the supplied operation
    #[test]
    fn test_with_operation_sets_context() {
        let result: std::io::Result<()> =
            Err(std::io::Error::other("disk full"));
        let err = result.with_operation("write histogram row").unwrap_err();
        assert!(err.to_string().starts_with("Output error during write histogram row"));

        let result: Result<(), ProbabilityError> = Err(computation_error("unknown", &"overflow"));
        let err = result.with_operation("combinations").unwrap_err();
        assert!(matches!(
            err,
            ProbabilityError::Computation {
                operation: "combinations",
                ..
            }
        ));
    }

    // Tests parameter errors keep their own parameter name under context
    // Verified by overwriting the parameter with the operation
    #[test]
    fn test_with_operation_keeps_parameter_errors() {
        let result: Result<(), ProbabilityError> =
            Err(invalid_parameter("height", &0, &"histogram needs at least one step"));
        let err = result.with_operation("render").unwrap_err();
        assert!(matches!(
            err,
            ProbabilityError::InvalidParameter {
                parameter: "height",
                ..
            }
        ));
    }
}
