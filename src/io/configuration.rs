//! Simulation constants and runtime configuration defaults

// Default values for command-line parameters
/// Number of generations computed after the starting state
pub const DEFAULT_STEPS: &str = "30";
/// Conway's Game of Life
pub const DEFAULT_RULE_STRING: &str = "S23B3";
/// Pick one of the registered presets at random
pub const DEFAULT_START_CHOICE: &str = "random_choice";
/// Fully synchronous updates
pub const DEFAULT_UPDATE_RATE: &str = "1.0";
/// Nondeterministic seeding
pub const DEFAULT_SEED: &str = "none";
/// Pause between rendered generations
pub const DEFAULT_SECONDS_PER_STEP: &str = "0.3";

// Frame pacing below this is indistinguishable from a busy loop on most terminals
/// Exclusive lower bound for `seconds_per_step`
pub const MIN_SECONDS_PER_STEP: f64 = 0.01;

/// Largest neighbor count possible in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

// Reserved start choices that bypass the named preset lookup
/// Choose a registered preset uniformly at random
pub const RANDOM_CHOICE: &str = "random_choice";
/// Generate a fresh random grid
pub const RANDOMIZE: &str = "randomize";
/// Seed value meaning "seed from the operating system"
pub const NO_SEED: &str = "none";

// Random grid generation
/// Default width of a randomized starting grid
pub const DEFAULT_RANDOM_WIDTH: usize = 10;
/// Default height of a randomized starting grid
pub const DEFAULT_RANDOM_HEIGHT: usize = 10;
/// Default probability that a randomized cell starts alive
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;
/// Largest number of cells a randomized starting grid may have
pub const MAX_RANDOM_GRID_CELLS: usize = 1 << 24;

// Rendering
/// Glyph for a live cell
pub const DEFAULT_ALIVE_SYMBOL: &str = "X";
/// Glyph for a dead cell
pub const DEFAULT_DEAD_SYMBOL: &str = "_";
/// Glyph placed between cells
pub const DEFAULT_SEPARATOR: &str = "|";

// Output settings
/// Pixels per cell side in recorded GIFs
pub const GIF_CELL_SCALE: u32 = 8;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Upper bound on frames reserved ahead of recording
pub const MAX_PREALLOCATED_FRAMES: usize = 1024;

// Guards against rounding such as 0.1 * 10 landing just below 1.0
/// Distance from 1.0 within which updates are treated as fully synchronous
pub const SYNCHRONOUS_TOLERANCE: f64 = 1e-9;
