//! One-shot validation of every user-supplied simulation parameter
//!
//! Parameters arrive as raw text, exactly as typed on the command line, and
//! leave as a typed [`SimulationConfig`]. Checks run in a fixed order and the
//! first violation is returned, so the same inputs always produce the same
//! error. Suspicious but harmless inputs produce a [`Diagnostic`] instead of
//! an error.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::time::Duration;

use crate::automaton::rule::Rule;
use crate::io::configuration::{MAX_NEIGHBORS, MIN_SECONDS_PER_STEP, NO_SEED};
use crate::io::error::{Result, SimulationError, invalid_type, out_of_range};
use crate::presets::registry::{PresetRegistry, StartChoice};

/// Unvalidated parameters as supplied by the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawInputs {
    /// Number of generations to compute
    pub steps: String,
    /// Rule in `S<digits>B<digits>` notation
    pub rule_string: String,
    /// Preset name or reserved synonym
    pub start_choice: String,
    /// Probability that a cell commits its update each step
    pub update_rate: String,
    /// Unsigned integer seed, or `none`
    pub seed: String,
    /// Pause between rendered generations
    pub seconds_per_step: String,
}

/// How the random source should be seeded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    /// Seed from the operating system; runs are not reproducible
    Entropy,
    /// Fixed seed; runs are reproducible
    Fixed(u64),
}

impl SeedChoice {
    /// Construct the random source this choice describes
    pub fn into_rng(self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_os_rng(),
            Self::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

impl fmt::Display for SeedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => write!(f, "{NO_SEED}"),
            Self::Fixed(seed) => write!(f, "{seed}"),
        }
    }
}

/// Fully typed simulation parameters
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of generations to compute after the starting state
    pub steps: usize,
    /// Transition rule
    pub rule: Rule,
    /// Starting-state selection
    pub start: StartChoice,
    /// Probability in [0, 1] that a cell commits its update each step
    pub update_rate: f64,
    /// Random source seeding
    pub seed: SeedChoice,
    /// Pause between rendered generations
    pub frame_delay: Duration,
}

/// Non-fatal finding about otherwise valid input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Rule names a neighbor count that a Moore neighborhood cannot reach
    ImpossibleNeighborCount {
        /// The rule as supplied
        rule: String,
        /// Counts above the neighborhood size
        counts: Vec<u8>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImpossibleNeighborCount { rule, counts } => {
                write!(
                    f,
                    "rule '{rule}' includes {counts:?} but there cannot be more than {MAX_NEIGHBORS} active neighbors"
                )
            }
        }
    }
}

/// Validated value paired with any non-fatal diagnostics
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<T> {
    /// The validated value
    pub value: T,
    /// Warnings that did not block validation
    pub warnings: Vec<Diagnostic>,
}

impl<T> Validated<T> {
    /// Test whether validation produced no warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check every parameter and convert to typed configuration
///
/// # Errors
///
/// Returns the first violation found, checking in this order:
/// - `steps` is not an integer, or is negative
/// - `rule_string` does not fully match `S<digits>B<digits>`
/// - `start_choice` is not a registered preset, `random_choice` or `randomize`
/// - `update_rate` is not a number, or lies outside [0, 1]
/// - `seed` is neither a non-negative integer nor `none`
/// - `seconds_per_step` is not a number, or is not greater than 0.01
pub fn validate_inputs(
    inputs: &RawInputs,
    registry: &PresetRegistry,
) -> Result<Validated<SimulationConfig>> {
    let mut warnings = Vec::new();

    let steps = parse_steps(&inputs.steps)?;

    let rule: Rule = inputs.rule_string.parse()?;
    let impossible = rule.impossible_counts();
    if !impossible.is_empty() {
        warnings.push(Diagnostic::ImpossibleNeighborCount {
            rule: inputs.rule_string.clone(),
            counts: impossible,
        });
    }

    let start = registry.resolve(&inputs.start_choice)?;
    let update_rate = parse_update_rate(&inputs.update_rate)?;
    let seed = parse_seed(&inputs.seed)?;
    let frame_delay = parse_seconds_per_step(&inputs.seconds_per_step)?;

    Ok(Validated {
        value: SimulationConfig {
            steps,
            rule,
            start,
            update_rate,
            seed,
            frame_delay,
        },
        warnings,
    })
}

/// Parse a non-negative generation count
///
/// # Errors
///
/// Returns an error if the text is not an integer, is negative, or does
/// not fit in `usize`
pub fn parse_steps(raw: &str) -> Result<usize> {
    let steps: i128 = raw
        .trim()
        .parse()
        .map_err(|_parse_error| invalid_type("steps", &raw, "an integer"))?;

    if steps < 0 {
        return Err(out_of_range(
            "steps",
            &raw,
            &"cannot have negative steps of the simulation",
        ));
    }

    usize::try_from(steps).map_err(|_conversion_error| {
        out_of_range("steps", &raw, &format!("must be at most {}", usize::MAX))
    })
}

/// Parse a probability in the closed interval [0, 1]
///
/// # Errors
///
/// Returns an error if the text is not a number or lies outside [0, 1]
pub fn parse_update_rate(raw: &str) -> Result<f64> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_parse_error| invalid_type("update_rate", &raw, "a number"))?;

    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(out_of_range(
            "update_rate",
            &raw,
            &"must be between 0 and 1",
        ))
    }
}

/// Parse a seed: `none` (any case) or empty means operating-system entropy
///
/// # Errors
///
/// Returns an error for floats, negative numbers and any other text
pub fn parse_seed(raw: &str) -> Result<SeedChoice> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_SEED) {
        return Ok(SeedChoice::Entropy);
    }

    trimmed
        .parse::<u64>()
        .map(SeedChoice::Fixed)
        .map_err(|_parse_error| SimulationError::Seed {
            value: raw.to_string(),
        })
}

/// Parse the frame delay; the 0.01 second lower bound is excluded
///
/// # Errors
///
/// Returns an error if the text is not a finite number or is at most 0.01
pub fn parse_seconds_per_step(raw: &str) -> Result<Duration> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_parse_error| invalid_type("seconds_per_step", &raw, "a number"))?;

    let too_small = || {
        out_of_range(
            "seconds_per_step",
            &raw,
            &format!("must be a finite number greater than {MIN_SECONDS_PER_STEP}"),
        )
    };

    if seconds.is_nan() || seconds <= MIN_SECONDS_PER_STEP {
        return Err(too_small());
    }

    Duration::try_from_secs_f64(seconds).map_err(|_conversion_error| too_small())
}
