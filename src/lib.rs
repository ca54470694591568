//! Terminal cellular automaton simulator on a toroidal grid
//!
//! A binary grid evolves under an outer-totalistic survival/birth rule, with
//! optional asynchronous updates in which each cell commits its new value
//! only with a given probability. Every user parameter is validated once,
//! up front, before any generation is computed.

#![forbid(unsafe_code)]

/// Transition engine, rules and neighbor counting
pub mod automaton;
/// Command line, validation, rendering and error handling
pub mod io;
/// Named and generated starting states
pub mod presets;
/// Binary grid type and normalization
pub mod spatial;

pub use io::error::{Result, SimulationError};
