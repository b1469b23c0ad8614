//! Canonical rest shapes a tarp is reset into.

use crate::float::Float;
use crate::topology::{lattice_step, GridIndex};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of the [`Layout::FlatHigh`] sheet.
pub const FLAT_HIGH_ELEVATION: f32 = 3.0;
/// Height of the [`Layout::FlatOnGround`] sheet, just above a zero ground plane.
pub const FLAT_ON_GROUND_ELEVATION: f32 = 0.01;

/// Initial shape selected at construction and restored by `reset()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// Horizontal sheet in the X/Z plane, held high above the ground.
    #[default]
    FlatHigh,
    /// Horizontal sheet lying just above the ground.
    FlatOnGround,
    /// Vertical sheet in the X/Y plane, hung from its two top corners.
    Hanging,
}

impl Layout {
    /// Row-major particle positions for an N×N tarp of the given size,
    /// centred on the origin horizontally.
    pub fn positions<F: Float>(self, n: usize, size: F) -> AllocVec<Vec3<F>> {
        let step = lattice_step(n, size);
        let half = size * F::half();
        let mut points = AllocVec::with_capacity(n * n);

        for row in 0..n {
            for col in 0..n {
                let across = -half + F::from_usize(col) * step;
                let down = F::from_usize(row) * step;
                let p = match self {
                    Layout::FlatHigh => {
                        Vec3::new(across, F::from_f32(FLAT_HIGH_ELEVATION), -half + down)
                    }
                    Layout::FlatOnGround => {
                        Vec3::new(across, F::from_f32(FLAT_ON_GROUND_ELEVATION), -half + down)
                    }
                    Layout::Hanging => Vec3::new(across, half - down, F::zero()),
                };
                points.push(p);
            }
        }

        points
    }

    /// Grid points pinned in place by `reset()` under this layout.
    pub fn initial_pins(self, n: usize) -> AllocVec<GridIndex> {
        match self {
            Layout::FlatHigh | Layout::FlatOnGround => AllocVec::new(),
            Layout::Hanging => alloc::vec![GridIndex::new(0, 0), GridIndex::new(0, n - 1)],
        }
    }
}
