//! Text rendering of grid states

use crate::io::configuration::{DEFAULT_ALIVE_SYMBOL, DEFAULT_DEAD_SYMBOL, DEFAULT_SEPARATOR};
use crate::io::error::{Result, SimulationError};
use crate::spatial::Grid;

/// Glyphs used to draw a grid
///
/// Live and dead glyphs must be non-empty, distinct and of equal width so
/// that every rendered row lines up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSet {
    alive: String,
    dead: String,
    separator: String,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            alive: DEFAULT_ALIVE_SYMBOL.to_string(),
            dead: DEFAULT_DEAD_SYMBOL.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SymbolSet {
    /// Create a validated symbol set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either cell glyph is empty
    /// - The live and dead glyphs are identical
    /// - The live and dead glyphs differ in width
    pub fn new(alive: &str, dead: &str, separator: &str) -> Result<Self> {
        let invalid = |reason: &str| SimulationError::InvalidSymbols {
            reason: reason.to_string(),
        };

        if alive.is_empty() || dead.is_empty() {
            return Err(invalid("cell glyphs must not be empty"));
        }
        if alive == dead {
            return Err(invalid("live and dead glyphs must differ"));
        }
        if alive.chars().count() != dead.chars().count() {
            return Err(invalid("live and dead glyphs must have equal width"));
        }

        Ok(Self {
            alive: alive.to_string(),
            dead: dead.to_string(),
            separator: separator.to_string(),
        })
    }

    /// Glyph for a live cell
    pub fn alive(&self) -> &str {
        &self.alive
    }

    /// Glyph for a dead cell
    pub fn dead(&self) -> &str {
        &self.dead
    }

    /// Glyph placed between cells and at row edges
    pub fn separator(&self) -> &str {
        &self.separator
    }

    const fn glyph(&self, cell: u8) -> &String {
        if cell == 1 { &self.alive } else { &self.dead }
    }

    fn line_length(&self, cols: usize) -> usize {
        let glyph = self.alive.chars().count();
        let separator = self.separator.chars().count();
        cols * (glyph + separator) + separator
    }
}

/// Render a grid as a roof line followed by one line per row
///
/// ```text
///  _ _ _ _
/// |X|_|X|
/// |_|X|_|
/// ```
pub fn render_grid(grid: &Grid, symbols: &SymbolSet) -> String {
    let (_, cols) = grid.dim();
    let mut output = " _".repeat(symbols.line_length(cols) / 2);

    for row in grid.rows() {
        output.push('\n');
        output.push_str(symbols.separator());
        for &cell in row {
            output.push_str(symbols.glyph(cell));
            output.push_str(symbols.separator());
        }
    }

    output
}
