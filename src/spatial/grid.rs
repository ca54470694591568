//! Binary grid normalization
//!
//! Every grid that reaches the transition engine passes through one of the
//! entry points here exactly once. They coerce arbitrary numeric input into a
//! canonical `Array2<u8>` whose cells are all 0 or 1.

use ndarray::{Array2, ArrayBase, Data, Dimension, Ix2};
use num_traits::ToPrimitive;

use crate::io::error::{Result, SimulationError, type_conversion};

/// Canonical automaton state: 0 = dead, 1 = alive
pub type Grid = Array2<u8>;

/// Validate and coerce an n-dimensional array into a binary grid
///
/// Elements are converted to integers first, then the rank is checked, then
/// every value must be 0 or 1. The input is never modified.
///
/// # Errors
///
/// Returns an error if:
/// - An element has no integer representation (NaN, infinite, out of range)
/// - The array does not have exactly two dimensions
/// - Any converted element is neither 0 nor 1
pub fn normalize<S, D, T>(raw: &ArrayBase<S, D>) -> Result<Grid>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: ToPrimitive,
{
    let converted = raw.map(ToPrimitive::to_i64);

    if let Some(flat_index) = converted.iter().position(Option::is_none) {
        return Err(type_conversion(&format!(
            "element {flat_index} has no integer representation"
        )));
    }

    if converted.ndim() != 2 {
        return Err(SimulationError::Shape {
            shape: converted.shape().to_vec(),
        });
    }

    let converted = converted
        .into_dimensionality::<Ix2>()
        .map_err(|error| type_conversion(&error))?;

    let mut grid = Grid::zeros(converted.dim());
    for ((row, col), value) in converted.indexed_iter() {
        let value = value.unwrap_or_default();
        let cell = match value {
            0 => 0,
            1 => 1,
            _ => {
                return Err(SimulationError::Domain {
                    value,
                    position: (row, col),
                });
            }
        };
        if let Some(slot) = grid.get_mut([row, col]) {
            *slot = cell;
        }
    }

    Ok(grid)
}

/// Validate and coerce nested rows into a binary grid
///
/// # Errors
///
/// Returns an error if:
/// - Rows have differing lengths
/// - There are no rows at all (the input has no second axis)
/// - Any element fails the checks performed by [`normalize`]
pub fn normalize_rows<T>(rows: &[Vec<T>]) -> Result<Grid>
where
    T: ToPrimitive + Clone,
{
    let Some(first) = rows.first() else {
        return Err(SimulationError::Shape { shape: vec![0] });
    };

    let cols = first.len();
    if let Some(index) = rows.iter().position(|row| row.len() != cols) {
        return Err(type_conversion(&format!(
            "row {index} has {} elements, expected {cols}",
            rows.get(index).map_or(0, Vec::len)
        )));
    }

    let flat: Vec<T> = rows.iter().flatten().cloned().collect();
    let array =
        Array2::from_shape_vec((rows.len(), cols), flat).map_err(|error| type_conversion(&error))?;

    normalize(&array)
}

/// Parse newline-separated rows of `0`/`1` characters into a binary grid
///
/// Surrounding whitespace and blank lines are ignored.
///
/// # Errors
///
/// Returns an error if a character is not a decimal digit, or if the parsed
/// rows fail [`normalize_rows`].
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut rows = Vec::new();

    for (line_number, line) in text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let row = line
            .chars()
            .map(|c| {
                c.to_digit(10).ok_or_else(|| {
                    type_conversion(&format!("'{c}' in row {line_number} is not a digit"))
                })
            })
            .collect::<Result<Vec<u32>>>()?;
        rows.push(row);
    }

    normalize_rows(&rows)
}

/// Count live cells
pub fn population(grid: &Grid) -> usize {
    grid.iter().filter(|&&cell| cell == 1).count()
}
