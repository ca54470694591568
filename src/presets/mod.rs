//! Named and generated starting states

/// Built-in pattern library
pub mod library;
/// Random grid generation
pub mod random;
/// Explicit name → factory registry
pub mod registry;

pub use registry::{PresetRegistry, StartChoice};
