//! Name → factory registry for starting states
//!
//! The registry is built explicitly and handed to whoever needs it; nothing
//! here is global. Every factory receives the caller's random source so that
//! a seeded run reproduces its starting grid exactly.

use rand::{Rng, RngCore};
use std::collections::BTreeMap;
use std::fmt;

use crate::io::configuration::{RANDOM_CHOICE, RANDOMIZE};
use crate::io::error::{Result, SimulationError};
use crate::presets::random::RandomGridSpec;
use crate::spatial::Grid;
use crate::spatial::grid::parse_grid;

/// Produces a starting grid, optionally consuming randomness
pub type PresetFactory = Box<dyn Fn(&mut dyn RngCore) -> Result<Grid>>;

/// Resolved starting-state selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartChoice {
    /// A registered preset, by name
    Named(String),
    /// A registered preset picked uniformly at random
    RandomChoice,
    /// A freshly generated random grid
    Randomize,
}

impl fmt::Display for StartChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::RandomChoice => write!(f, "{RANDOM_CHOICE}"),
            Self::Randomize => write!(f, "{RANDOMIZE}"),
        }
    }
}

/// Ordered collection of named starting-state factories
pub struct PresetRegistry {
    factories: BTreeMap<String, PresetFactory>,
    random_spec: RandomGridSpec,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetRegistry {
    /// Create an empty registry with the default random grid settings
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
            random_spec: RandomGridSpec::default(),
        }
    }

    /// Replace the settings used for [`StartChoice::Randomize`]
    #[must_use]
    pub fn with_random_spec(mut self, random_spec: RandomGridSpec) -> Self {
        self.random_spec = random_spec;
        self
    }

    /// Settings used for [`StartChoice::Randomize`]
    pub const fn random_spec(&self) -> &RandomGridSpec {
        &self.random_spec
    }

    /// Register a factory under `name`, replacing any previous entry
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&mut dyn RngCore) -> Result<Grid> + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Register a fixed pattern written as rows of `0`/`1` characters
    pub fn register_pattern(&mut self, name: &str, pattern: &'static str) {
        self.register(name, move |_rng| parse_grid(pattern));
    }

    /// Registered preset names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Every name accepted as a start choice, reserved synonyms included
    pub fn valid_choices(&self) -> Vec<String> {
        self.names()
            .map(str::to_string)
            .chain([RANDOMIZE.to_string(), RANDOM_CHOICE.to_string()])
            .collect()
    }

    /// Test whether `name` is a registered preset
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered presets
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Test if no presets are registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Resolve a start-choice name without building anything
    ///
    /// Matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is neither registered nor reserved
    pub fn resolve(&self, name: &str) -> Result<StartChoice> {
        match name {
            RANDOM_CHOICE => Ok(StartChoice::RandomChoice),
            RANDOMIZE => Ok(StartChoice::Randomize),
            _ if self.contains(name) => Ok(StartChoice::Named(name.to_string())),
            _ => Err(self.unknown(name)),
        }
    }

    /// Build the starting grid for a name
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown or its factory fails
    pub fn get_start(&self, name: &str, rng: &mut dyn RngCore) -> Result<Grid> {
        let choice = self.resolve(name)?;
        self.start(&choice, rng)
    }

    /// Build the starting grid for an already resolved choice
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A named preset is not registered
    /// - A random choice is requested from an empty registry
    /// - The selected factory fails
    pub fn start(&self, choice: &StartChoice, rng: &mut dyn RngCore) -> Result<Grid> {
        match choice {
            StartChoice::Named(name) => self.build(name, rng),
            StartChoice::RandomChoice => {
                if self.is_empty() {
                    return Err(SimulationError::Configuration {
                        reason: "no presets are registered to choose from".to_string(),
                    });
                }
                let index = rng.random_range(0..self.len());
                let name = self
                    .names()
                    .nth(index)
                    .map(str::to_string)
                    .ok_or_else(|| self.unknown(RANDOM_CHOICE))?;
                self.build(&name, rng)
            }
            StartChoice::Randomize => self.random_spec.generate(rng),
        }
    }

    fn build(&self, name: &str, rng: &mut dyn RngCore) -> Result<Grid> {
        let factory = self.factories.get(name).ok_or_else(|| self.unknown(name))?;
        factory(rng)
    }

    fn unknown(&self, name: &str) -> SimulationError {
        SimulationError::UnknownPreset {
            name: name.to_string(),
            available: self.valid_choices(),
        }
    }
}
