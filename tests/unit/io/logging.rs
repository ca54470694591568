//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use lifegrid::io::logging::{DEFAULT_FILTER, init};

    // Tests only the first initialization installs a subscriber
    // Verified by replacing try_init with a fresh subscriber per call
    #[test]
    fn test_init_once() {
        // Another test in this binary may already have installed one
        let _ = init();

        assert!(!init());
        tracing::info!("logging initialized");
    }

    // Tests the fallback filter keeps routine output quiet
    // Verified by defaulting to the info level
    #[test]
    fn test_default_filter() {
        assert_eq!(DEFAULT_FILTER, "warn");
    }
}
