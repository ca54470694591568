//! Moore-neighborhood counting on a torus

use ndarray::Array2;

use crate::spatial::Grid;

/// Relative (row, col) offsets of the eight Moore neighbors
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Wrap `index + offset` into `0..len`
///
/// `len` must be non-zero.
const fn wrap(index: usize, offset: isize, len: usize) -> usize {
    (index as isize + offset).rem_euclid(len as isize) as usize
}

/// Count live Moore neighbors of every cell with toroidal wraparound
///
/// Edges connect to the opposite edge on both axes, so corner cells see the
/// three other corners. On grids narrower than three cells along an axis the
/// same cell can be reached through more than one offset and is counted once
/// per offset, matching a wrapped 3x3 convolution.
pub fn count_neighbors(grid: &Grid) -> Array2<u8> {
    let (rows, cols) = grid.dim();
    let mut counts = Array2::zeros((rows, cols));

    if rows == 0 || cols == 0 {
        return counts;
    }

    for ((row, col), count) in counts.indexed_iter_mut() {
        *count = MOORE_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                grid.get([wrap(row, dr, rows), wrap(col, dc, cols)])
                    .copied()
                    .unwrap_or(0)
            })
            .sum();
    }

    counts
}
