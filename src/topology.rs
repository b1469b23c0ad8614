//! Lattice topology: grid coordinates and the fixed spring set of a tarp.

use crate::constraint::{Spring, SpringKind};
use crate::float::Float;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the N×N lattice, 0-based.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl GridIndex {
    pub const fn new(row: usize, col: usize) -> Self {
        GridIndex { row, col }
    }

    /// Row-major offset into a flattened N×N buffer.
    pub const fn flatten(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// Inverse of [`GridIndex::flatten`].
    pub const fn from_flat(flat: usize, n: usize) -> Self {
        GridIndex { row: flat / n, col: flat % n }
    }
}

impl From<(usize, usize)> for GridIndex {
    fn from((row, col): (usize, usize)) -> Self {
        GridIndex { row, col }
    }
}

/// Distance between neighbouring lattice points: `size / (n - 1)`.
pub fn lattice_step<F: Float>(n: usize, size: F) -> F {
    size / F::from_usize(n - 1)
}

/// Number of springs [`build`] emits for an N×N lattice.
pub const fn spring_count(n: usize) -> usize {
    let structural = 2 * n * (n - 1);
    let shear = 2 * (n - 1) * (n - 1);
    structural + shear
}

/// Build the structural and shear springs of an N×N lattice spanning `size`.
///
/// Walks the lattice row-major; every point emits a vertical link if a row
/// below exists, a horizontal link if a column to the right exists, and, when
/// both exist, the two diagonals of the cell whose top-left corner it is.
///
/// # Panics
/// If `n < 2`. Callers validate dimensions in [`TarpConfig::validate`].
///
/// [`TarpConfig::validate`]: crate::config::TarpConfig::validate
pub fn build<F: Float>(n: usize, size: F) -> AllocVec<Spring<F>> {
    assert!(n >= 2, "lattice needs at least 2 points per axis, got {}", n);

    let step = lattice_step(n, size);
    let diag = (step * step + step * step).sqrt();
    let mut springs = AllocVec::with_capacity(spring_count(n));

    for row in 0..n {
        for col in 0..n {
            let here = GridIndex::new(row, col).flatten(n);
            let below = GridIndex::new(row + 1, col).flatten(n);
            let right = GridIndex::new(row, col + 1).flatten(n);

            if row + 1 < n {
                springs.push(Spring::new(here, below, step, SpringKind::Structural));
            }
            if col + 1 < n {
                springs.push(Spring::new(here, right, step, SpringKind::Structural));
            }
            if row + 1 < n && col + 1 < n {
                let below_right = GridIndex::new(row + 1, col + 1).flatten(n);
                springs.push(Spring::new(here, below_right, diag, SpringKind::Shear));
                springs.push(Spring::new(below, right, diag, SpringKind::Shear));
            }
        }
    }

    springs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_round_trips_through_from_flat() {
        let idx = GridIndex::new(3, 5);
        assert_eq!(idx.flatten(7), 26);
        assert_eq!(GridIndex::from_flat(26, 7), idx);
    }

    #[test]
    fn two_by_two_is_one_cell() {
        let springs = build(2, 1.0f32);
        // 4 edges of the cell + 2 diagonals
        assert_eq!(springs.len(), 6);
        assert_eq!(springs.iter().filter(|s| s.kind == SpringKind::Shear).count(), 2);
    }

    #[test]
    fn shear_springs_cross_each_cell() {
        let springs = build(3, 2.0f64);
        let shear: AllocVec<_> = springs.iter().filter(|s| s.kind == SpringKind::Shear).collect();
        assert_eq!(shear.len(), 8);
        // First cell: (0,0)-(1,1) and (1,0)-(0,1)
        assert_eq!((shear[0].a, shear[0].b), (0, 4));
        assert_eq!((shear[1].a, shear[1].b), (3, 1));
    }

    #[test]
    #[should_panic]
    fn degenerate_lattice_is_rejected() {
        let _ = build(1, 1.0f32);
    }
}
