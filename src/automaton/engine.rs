//! Transition engine: owns the grid and advances it one generation at a time
//!
//! Each step counts toroidal neighbors, applies the survival/birth rule to
//! every cell against the state at the start of the step, and then either
//! commits the whole tentative grid (synchronous mode) or commits each cell
//! independently with probability `update_rate` (asynchronous mode).

use ndarray::{Array2, ArrayBase, Data, Dimension, Zip};
use num_traits::ToPrimitive;
use rand::{Rng, RngCore};
use std::fmt;
use tracing::{debug, trace};

use crate::automaton::neighbors::count_neighbors;
use crate::automaton::rule::Rule;
use crate::io::configuration::SYNCHRONOUS_TOLERANCE;
use crate::io::error::{Result, SimulationError, out_of_range};
use crate::spatial::Grid;
use crate::spatial::grid::{normalize, population};

/// Cellular automaton with a fixed-size toroidal grid
///
/// The random source is borrowed from the caller for the lifetime of the
/// automaton and is only consulted when `update_rate` is below 1.
pub struct CellularAutomaton<'r> {
    grid: Grid,
    rule: Rule,
    update_rate: f64,
    rng: Option<&'r mut dyn RngCore>,
    generation: usize,
}

impl<'r> CellularAutomaton<'r> {
    /// Create a fully synchronous automaton from an arbitrary numeric array
    ///
    /// The grid is normalized here once; `step` never re-validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid fails normalization
    pub fn new<S, D, T>(grid: &ArrayBase<S, D>, rule: Rule) -> Result<Self>
    where
        S: Data<Elem = T>,
        D: Dimension,
        T: ToPrimitive,
    {
        Ok(Self {
            grid: normalize(grid)?,
            rule,
            update_rate: 1.0,
            rng: None,
            generation: 0,
        })
    }

    /// Configure asynchronous updates
    ///
    /// `rng` may be `None` only when `update_rate` is 1; otherwise the first
    /// call to `step` fails.
    ///
    /// # Errors
    ///
    /// Returns an error if `update_rate` is not within [0, 1]
    pub fn with_update_rate(
        mut self,
        update_rate: f64,
        rng: Option<&'r mut dyn RngCore>,
    ) -> Result<Self> {
        self.set_update_rate(update_rate)?;
        self.rng = rng;
        Ok(self)
    }

    /// Change the update rate between steps
    ///
    /// # Errors
    ///
    /// Returns an error if `update_rate` is not within [0, 1]
    pub fn set_update_rate(&mut self, update_rate: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&update_rate) {
            return Err(out_of_range(
                "update_rate",
                &update_rate,
                &"must be between 0 and 1",
            ));
        }
        self.update_rate = update_rate;
        Ok(())
    }

    /// Current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Transition rule in effect
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Probability that a cell commits its computed value each step
    pub const fn update_rate(&self) -> f64 {
        self.update_rate
    }

    /// Number of completed steps
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Number of live cells in the current grid
    pub fn population(&self) -> usize {
        population(&self.grid)
    }

    /// Whether the update rate is close enough to 1 to skip the random mask
    pub fn is_synchronous(&self) -> bool {
        (self.update_rate - 1.0).abs() <= SYNCHRONOUS_TOLERANCE
    }

    /// Live Moore-neighbor count of every cell, wrapping on both axes
    pub fn count_neighbors(&self) -> Array2<u8> {
        count_neighbors(&self.grid)
    }

    /// Advance the automaton by one generation
    ///
    /// In asynchronous mode one uniform value in [0, 1) is drawn per cell in
    /// row-major order; a cell takes its new value when the draw is at most
    /// `update_rate` and keeps its previous value otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if asynchronous updates are configured without a
    /// random source. The grid is left untouched in that case.
    pub fn step(&mut self) -> Result<()> {
        if !self.is_synchronous() && self.rng.is_none() {
            return Err(SimulationError::Configuration {
                reason: format!(
                    "update rate {} requires a random source",
                    self.update_rate
                ),
            });
        }

        let counts = self.count_neighbors();
        let rule = &self.rule;
        let mut next = Zip::from(&self.grid)
            .and(&counts)
            .map_collect(|&cell, &count| u8::from(rule.next_state(cell == 1, count)));

        if let (false, Some(rng)) = (self.is_synchronous(), self.rng.as_deref_mut()) {
            debug!(
                generation = self.generation,
                update_rate = self.update_rate,
                "applying asynchronous update mask"
            );

            let mut committed = 0usize;
            for (next_cell, &previous) in next.iter_mut().zip(self.grid.iter()) {
                let draw: f64 = rng.random();
                if draw <= self.update_rate {
                    committed += 1;
                } else {
                    *next_cell = previous;
                }
            }

            trace!(committed, total = next.len(), "asynchronous cells committed");
        }

        self.grid = next;
        self.generation += 1;
        Ok(())
    }

    /// Advance the automaton by `steps` generations
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Self::step`]
    pub fn run(&mut self, steps: usize) -> Result<()> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }
}

impl fmt::Debug for CellularAutomaton<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellularAutomaton")
            .field("dimensions", &self.grid.dim())
            .field("rule", &self.rule.to_string())
            .field("update_rate", &self.update_rate)
            .field("has_rng", &self.rng.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}
