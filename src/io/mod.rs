//! Input/output: command line, validation, rendering and error handling

/// Command-line parsing and the simulation run loop
pub mod cli;
/// Defaults and fixed limits
pub mod configuration;
/// Live and plain terminal output
pub mod display;
/// Error types shared across the crate
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Animated GIF export
pub mod recording;
/// Text rendering of grids
pub mod render;
/// Startup validation of user parameters
pub mod validation;
