//! Procedurally generated random starting grids

use rand::{Rng, RngCore};

use crate::io::configuration::{
    DEFAULT_ALIVE_PROBABILITY, DEFAULT_RANDOM_HEIGHT, DEFAULT_RANDOM_WIDTH,
    MAX_RANDOM_GRID_CELLS,
};
use crate::io::error::{Result, out_of_range};
use crate::spatial::Grid;

/// Size and density of a randomly generated grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomGridSpec {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Probability that each cell starts alive, strictly between 0 and 1
    pub alive_probability: f64,
}

impl Default for RandomGridSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_RANDOM_WIDTH,
            height: DEFAULT_RANDOM_HEIGHT,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
        }
    }
}

impl RandomGridSpec {
    /// Check dimensions and density
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - The grid would have more than [`MAX_RANDOM_GRID_CELLS`] cells
    /// - The probability is not strictly between 0 and 1
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(out_of_range("width", &self.width, &"must be at least 1"));
        }
        if self.height == 0 {
            return Err(out_of_range("height", &self.height, &"must be at least 1"));
        }
        if self
            .width
            .checked_mul(self.height)
            .is_none_or(|cells| cells > MAX_RANDOM_GRID_CELLS)
        {
            return Err(out_of_range(
                "width",
                &format!("{}x{}", self.width, self.height),
                &format!("grid may have at most {MAX_RANDOM_GRID_CELLS} cells"),
            ));
        }
        if !(self.alive_probability > 0.0 && self.alive_probability < 1.0) {
            return Err(out_of_range(
                "alive_probability",
                &self.alive_probability,
                &"must be strictly between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Generate a grid where each cell is independently alive
    ///
    /// One uniform value is drawn per cell in row-major order; the cell is
    /// alive when the draw falls below `alive_probability`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail [`Self::validate`]
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Grid> {
        self.validate()?;

        let alive_probability = self.alive_probability;
        Ok(Grid::from_shape_simple_fn((self.height, self.width), || {
            u8::from(rng.random::<f64>() < alive_probability)
        }))
    }
}
