//! Constraints applied by the relaxation passes: spring, drag, pin, ground.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Which lattice relation a spring models.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpringKind {
    /// Axis-adjacent neighbours, rest length = lattice step.
    Structural,
    /// Diagonal neighbours, rest length = step·√2.
    Shear,
}

/// Immutable distance link between two flattened particle indices.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, kind: SpringKind) -> Self {
        Spring { a, b, rest_length, kind }
    }

    /// Current length of the spring.
    pub fn length(&self, positions: &[Vec3<F>]) -> F {
        positions[self.a].distance(positions[self.b])
    }

    /// Move both endpoints half the stretch error towards rest length.
    ///
    /// Pinned endpoints are not moved, so a spring attached to a pin only
    /// closes half its error per pass. Coincident endpoints are skipped.
    pub fn solve(&self, positions: &mut [Vec3<F>], pins: &[Option<Vec3<F>>]) {
        let delta = positions[self.b] - positions[self.a];
        let dist = delta.length();
        if !(dist > F::zero()) {
            return; // degenerate
        }

        let diff = (dist - self.rest_length) / dist;
        let correction = delta.scale(F::half() * diff);

        if pins[self.a].is_none() {
            positions[self.a] = positions[self.a] + correction;
        }
        if pins[self.b].is_none() {
            positions[self.b] = positions[self.b] - correction;
        }
    }
}

/// The single soft drag a driver may hold on one particle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Drag<F: Float> {
    #[default]
    None,
    Active {
        index: usize,
        target: Vec3<F>,
        /// Fraction of the remaining gap closed per relaxation pass, in (0, 1].
        compliance: F,
    },
}

impl<F: Float> Drag<F> {
    /// Unvalidated constructor; the tarp facade checks compliance first.
    pub fn active(index: usize, target: Vec3<F>, compliance: F) -> Self {
        Drag::Active { index, target, compliance }
    }

    /// Index of the dragged particle, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Drag::Active { index, .. } => Some(*index),
            Drag::None => None,
        }
    }

    pub fn solve(&self, positions: &mut [Vec3<F>]) {
        if let Drag::Active { index, target, compliance } = *self {
            let correction = target - positions[index];
            positions[index] = positions[index] + correction.scale(compliance);
        }
    }
}

/// Snap every pinned particle onto its target.
pub fn enforce_pins<F: Float>(positions: &mut [Vec3<F>], pins: &[Option<Vec3<F>>]) {
    for (p, pin) in positions.iter_mut().zip(pins.iter()) {
        if let Some(target) = pin {
            *p = *target;
        }
    }
}

/// Keep every particle at or above the ground plane.
pub fn clamp_to_ground<F: Float>(positions: &mut [Vec3<F>], ground_level: F) {
    for p in positions.iter_mut() {
        p.y = p.y.max(ground_level);
    }
}
