//! Tests for error formatting and sources

#[cfg(test)]
mod tests {
    use lifegrid::SimulationError;
    use lifegrid::io::error::{invalid_type, out_of_range, type_conversion};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests messages name the offending value and where it was found
    // Verified by omitting the position from domain errors
    #[test]
    fn test_display_messages() {
        let domain = SimulationError::Domain {
            value: 3,
            position: (1, 2),
        };
        assert_eq!(domain.to_string(), "Grid must be binary: found 3 at (1, 2)");

        let shape = SimulationError::Shape {
            shape: vec![2, 2, 2],
        };
        assert!(shape.to_string().contains("[2, 2, 2]"));

        let rule = SimulationError::RuleSyntax {
            rule: "B3S23".to_string(),
        };
        assert!(rule.to_string().contains("'B3S23'"));

        let preset = SimulationError::UnknownPreset {
            name: "hello".to_string(),
            available: vec!["block".to_string(), "randomize".to_string()],
        };
        assert_eq!(
            preset.to_string(),
            "Unknown start choice 'hello': expected one of block, randomize"
        );

        let seed = SimulationError::Seed {
            value: "-1".to_string(),
        };
        assert!(seed.to_string().contains("'none'"));
    }

    // Tests the parameter helpers fill every field
    // Verified by storing the reason in the value field
    #[test]
    fn test_helpers() {
        match out_of_range("steps", &"-1", &"cannot be negative") {
            SimulationError::OutOfRange {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "steps");
                assert_eq!(value, "-1");
                assert_eq!(reason, "cannot be negative");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let error = invalid_type("update_rate", &"half", "a number");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'update_rate' = 'half': must be a number"
        );

        assert!(matches!(
            type_conversion(&"row 2 has 3 columns"),
            SimulationError::TypeConversion { reason } if reason == "row 2 has 3 columns"
        ));
    }

    // Tests wrapped I/O errors are exposed as the source
    // Verified by returning None from source for every variant
    #[test]
    fn test_sources() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let wrapped = SimulationError::from(io_error);

        assert!(wrapped.source().is_some());
        match &wrapped {
            SimulationError::FileSystem { path, operation, .. } => {
                assert_eq!(path, &PathBuf::from("<terminal>"));
                assert_eq!(*operation, "write");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let configuration = SimulationError::Configuration {
            reason: "missing random source".to_string(),
        };
        assert!(configuration.source().is_none());
    }
}
