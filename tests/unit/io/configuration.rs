//! Tests for simulation defaults and limits

#[cfg(test)]
mod tests {
    use lifegrid::io::configuration::{
        DEFAULT_ALIVE_PROBABILITY, DEFAULT_ALIVE_SYMBOL, DEFAULT_DEAD_SYMBOL,
        DEFAULT_RANDOM_HEIGHT, DEFAULT_RANDOM_WIDTH, DEFAULT_RULE_STRING,
        DEFAULT_SECONDS_PER_STEP, DEFAULT_SEED, DEFAULT_SEPARATOR, DEFAULT_START_CHOICE,
        DEFAULT_STEPS, DEFAULT_UPDATE_RATE, MAX_NEIGHBORS, MIN_SECONDS_PER_STEP, NO_SEED,
        RANDOM_CHOICE, RANDOMIZE, SYNCHRONOUS_TOLERANCE,
    };
    use lifegrid::io::render::SymbolSet;
    use lifegrid::io::validation::{RawInputs, validate_inputs};
    use lifegrid::presets::library::default_registry;
    use lifegrid::presets::random::RandomGridSpec;

    // Tests the command-line defaults pass validation without warnings
    // Verified by setting the default frame delay to the lower bound
    #[test]
    fn test_defaults_validate() {
        let inputs = RawInputs {
            steps: DEFAULT_STEPS.to_string(),
            rule_string: DEFAULT_RULE_STRING.to_string(),
            start_choice: DEFAULT_START_CHOICE.to_string(),
            update_rate: DEFAULT_UPDATE_RATE.to_string(),
            seed: DEFAULT_SEED.to_string(),
            seconds_per_step: DEFAULT_SECONDS_PER_STEP.to_string(),
        };
        let registry = default_registry(RandomGridSpec::default());

        assert!(validate_inputs(&inputs, &registry).unwrap().is_clean());
    }

    // Tests the random grid and glyph defaults are themselves valid
    // Verified by setting the default alive probability to 1
    #[test]
    fn test_auxiliary_defaults_valid() {
        let spec = RandomGridSpec::default();
        assert_eq!(spec.width, DEFAULT_RANDOM_WIDTH);
        assert_eq!(spec.height, DEFAULT_RANDOM_HEIGHT);
        assert!((spec.alive_probability - DEFAULT_ALIVE_PROBABILITY).abs() < f64::EPSILON);
        assert!(spec.validate().is_ok());

        assert!(SymbolSet::new(DEFAULT_ALIVE_SYMBOL, DEFAULT_DEAD_SYMBOL, DEFAULT_SEPARATOR).is_ok());
    }

    // Tests reserved names and limits hold their documented values
    // Verified by renaming the random choice synonym
    #[test]
    fn test_reserved_values() {
        assert_eq!(RANDOM_CHOICE, "random_choice");
        assert_eq!(RANDOMIZE, "randomize");
        assert_eq!(NO_SEED, DEFAULT_SEED);
        assert_eq!(MAX_NEIGHBORS, 8);
        assert!((MIN_SECONDS_PER_STEP - 0.01).abs() < f64::EPSILON);
        assert!(SYNCHRONOUS_TOLERANCE > 0.0 && SYNCHRONOUS_TOLERANCE < 1e-6);
    }
}
