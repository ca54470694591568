//! Cellular automaton core
//!
//! Rule parsing, toroidal neighbor counting and the transition engine that
//! combines them.

/// Transition engine owning the grid state
pub mod engine;
/// Toroidal Moore-neighborhood counting
pub mod neighbors;
/// Survival/birth rule parsing and evaluation
pub mod rule;

pub use engine::CellularAutomaton;
pub use rule::Rule;
