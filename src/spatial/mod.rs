//! Spatial data structures
//!
//! This module contains the binary grid type and the normalization entry
//! points every starting state passes through.

/// Grid type and normalization
pub mod grid;

pub use grid::Grid;
