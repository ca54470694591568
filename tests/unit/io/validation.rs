//! Tests for startup validation of user parameters

#[cfg(test)]
mod tests {
    use lifegrid::SimulationError;
    use lifegrid::io::validation::{
        Diagnostic, RawInputs, SeedChoice, parse_seconds_per_step, parse_seed, parse_steps,
        parse_update_rate, validate_inputs,
    };
    use lifegrid::presets::library::default_registry;
    use lifegrid::presets::random::RandomGridSpec;
    use lifegrid::presets::registry::{PresetRegistry, StartChoice};
    use rand::{RngCore, SeedableRng};
    use std::time::Duration;

    fn registry() -> PresetRegistry {
        default_registry(RandomGridSpec::default())
    }

    fn defaults() -> RawInputs {
        RawInputs {
            steps: "30".to_string(),
            rule_string: "S23B3".to_string(),
            start_choice: "random_choice".to_string(),
            update_rate: "1.0".to_string(),
            seed: "none".to_string(),
            seconds_per_step: "0.3".to_string(),
        }
    }

    // Tests the default parameters validate cleanly
    // Verified by rejecting the default seed text
    #[test]
    fn test_defaults_are_valid() {
        let validated = validate_inputs(&defaults(), &registry()).unwrap();

        assert!(validated.is_clean());
        let config = validated.value;
        assert_eq!(config.steps, 30);
        assert_eq!(config.rule.to_string(), "S23B3");
        assert_eq!(config.start, StartChoice::RandomChoice);
        assert!((config.update_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.seed, SeedChoice::Entropy);
        assert_eq!(config.frame_delay, Duration::from_millis(300));
    }

    // Tests step counts: integers from zero up pass, everything else fails
    // Verified by accepting negative counts
    #[test]
    fn test_steps() {
        for (raw, expected) in [("0", 0), ("1", 1), ("30", 30), ("1000", 1000)] {
            assert_eq!(parse_steps(raw).unwrap(), expected);
        }

        assert!(matches!(
            parse_steps("-1"),
            Err(SimulationError::OutOfRange {
                parameter: "steps",
                ..
            })
        ));
        for raw in ["99999999999999999999", "-99999999999999999999"] {
            assert!(
                matches!(
                    parse_steps(raw),
                    Err(SimulationError::OutOfRange {
                        parameter: "steps",
                        ..
                    })
                ),
                "'{raw}' should be out of range"
            );
        }
        for raw in ["1.5", "ten", "", "1e3"] {
            assert!(
                matches!(
                    parse_steps(raw),
                    Err(SimulationError::InvalidType {
                        parameter: "steps",
                        ..
                    })
                ),
                "'{raw}' should be rejected"
            );
        }
    }

    // Tests update rates are accepted on the closed unit interval only
    // Verified by making the upper bound exclusive
    #[test]
    fn test_update_rate() {
        for raw in ["0", "0.0", "0.5", "1", "1.0"] {
            assert!(parse_update_rate(raw).is_ok(), "'{raw}' should be accepted");
        }

        for raw in ["-0.1", "1.01", "2", "NaN", "inf"] {
            assert!(
                matches!(
                    parse_update_rate(raw),
                    Err(SimulationError::OutOfRange { .. })
                ),
                "'{raw}' should be out of range"
            );
        }
        assert!(matches!(
            parse_update_rate("half"),
            Err(SimulationError::InvalidType { .. })
        ));
    }

    // Tests seeds: none in any case, or a non-negative integer
    // Verified by parsing seeds as signed integers
    #[test]
    fn test_seed() {
        assert_eq!(parse_seed("none").unwrap(), SeedChoice::Entropy);
        assert_eq!(parse_seed("None").unwrap(), SeedChoice::Entropy);
        assert_eq!(parse_seed("").unwrap(), SeedChoice::Entropy);
        assert_eq!(parse_seed("0").unwrap(), SeedChoice::Fixed(0));
        assert_eq!(parse_seed("42").unwrap(), SeedChoice::Fixed(42));

        for raw in ["-1", "1.5", "abc", "12a"] {
            assert!(
                matches!(parse_seed(raw), Err(SimulationError::Seed { .. })),
                "'{raw}' should be rejected"
            );
        }
    }

    // Tests fixed seeds give reproducible random sources
    // Verified by ignoring the fixed seed value
    #[test]
    fn test_seed_into_rng() {
        let mut first = SeedChoice::Fixed(3).into_rng();
        let mut second = SeedChoice::Fixed(3).into_rng();
        assert_eq!(first.next_u64(), second.next_u64());

        let mut expected = rand::rngs::StdRng::seed_from_u64(3);
        assert_eq!(
            SeedChoice::Fixed(3).into_rng().next_u64(),
            expected.next_u64()
        );

        assert_eq!(SeedChoice::Entropy.to_string(), "none");
        assert_eq!(SeedChoice::Fixed(9).to_string(), "9");
    }

    // Tests the frame delay bound is exclusive at 0.01 seconds
    // Verified by comparing with greater-or-equal
    #[test]
    fn test_seconds_per_step() {
        assert_eq!(
            parse_seconds_per_step("0.5").unwrap(),
            Duration::from_millis(500)
        );
        assert!(parse_seconds_per_step("0.011").is_ok());
        assert!(parse_seconds_per_step("2").is_ok());

        for raw in ["0.01", "0.005", "0", "-1", "NaN", "inf"] {
            assert!(
                matches!(
                    parse_seconds_per_step(raw),
                    Err(SimulationError::OutOfRange { .. })
                ),
                "'{raw}' should be out of range"
            );
        }
        assert!(matches!(
            parse_seconds_per_step("fast"),
            Err(SimulationError::InvalidType { .. })
        ));
    }

    // Tests invalid rule strings and start choices fail validation
    // Verified by skipping the rule check
    #[test]
    fn test_rule_and_start_choice() {
        for rule in ["B3S23", "S23B3x", "23/3", "S2,3B3", "s23b3", ""] {
            let inputs = RawInputs {
                rule_string: rule.to_string(),
                ..defaults()
            };
            assert!(
                matches!(
                    validate_inputs(&inputs, &registry()),
                    Err(SimulationError::RuleSyntax { .. })
                ),
                "'{rule}' should be rejected"
            );
        }

        let inputs = RawInputs {
            start_choice: "hello".to_string(),
            ..defaults()
        };
        assert!(matches!(
            validate_inputs(&inputs, &registry()),
            Err(SimulationError::UnknownPreset { .. })
        ));

        let inputs = RawInputs {
            start_choice: "glider".to_string(),
            ..defaults()
        };
        assert_eq!(
            validate_inputs(&inputs, &registry()).unwrap().value.start,
            StartChoice::Named("glider".to_string())
        );
    }

    // Tests unreachable neighbor counts warn rather than fail
    // Verified by treating the warning as a hard error
    #[test]
    fn test_impossible_count_warning() {
        let inputs = RawInputs {
            rule_string: "S9B9".to_string(),
            ..defaults()
        };

        let validated = validate_inputs(&inputs, &registry()).unwrap();

        assert!(!validated.is_clean());
        assert_eq!(
            validated.warnings,
            vec![Diagnostic::ImpossibleNeighborCount {
                rule: "S9B9".to_string(),
                counts: vec![9],
            }]
        );
        assert!(validated.warnings[0].to_string().contains("more than 8"));
    }

    // Tests the first violation in check order is the one reported
    // Verified by validating seconds_per_step before steps
    #[test]
    fn test_first_violation_wins() {
        let all_bad = RawInputs {
            steps: "-1".to_string(),
            rule_string: "nope".to_string(),
            start_choice: "nope".to_string(),
            update_rate: "5".to_string(),
            seed: "nope".to_string(),
            seconds_per_step: "0".to_string(),
        };
        assert!(matches!(
            validate_inputs(&all_bad, &registry()),
            Err(SimulationError::OutOfRange {
                parameter: "steps",
                ..
            })
        ));

        let bad_tail = RawInputs {
            update_rate: "5".to_string(),
            seed: "nope".to_string(),
            ..defaults()
        };
        assert!(matches!(
            validate_inputs(&bad_tail, &registry()),
            Err(SimulationError::OutOfRange {
                parameter: "update_rate",
                ..
            })
        ));

        let bad_seed = RawInputs {
            seed: "nope".to_string(),
            seconds_per_step: "0".to_string(),
            ..defaults()
        };
        assert!(matches!(
            validate_inputs(&bad_seed, &registry()),
            Err(SimulationError::Seed { .. })
        ));
    }
}
