//! Particle buffers, pin table and the active drag of a tarp.

use crate::constraint::Drag;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Everything the integrator and solver mutate.
///
/// Particles are addressed by flattened index. `current` and `previous` are
/// separate buffers of equal length; the pin table has one slot per particle.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState<F: Float> {
    current: AllocVec<Vec3<F>>,
    previous: AllocVec<Vec3<F>>,
    pins: AllocVec<Option<Vec3<F>>>,
    drag: Drag<F>,
}

impl<F: Float> SimulationState<F> {
    /// State at rest at `positions`: zero implicit velocity, nothing pinned.
    pub fn from_positions(positions: AllocVec<Vec3<F>>) -> Self {
        let count = positions.len();
        SimulationState {
            previous: positions.clone(),
            current: positions,
            pins: alloc::vec![None; count],
            drag: Drag::None,
        }
    }

    /// Put every particle at rest at `positions`, clear pins and drag.
    ///
    /// # Panics
    /// If `positions` does not match the particle count.
    pub fn reset_to(&mut self, positions: &[Vec3<F>]) {
        assert_eq!(positions.len(), self.particle_count(), "reset shape mismatch");
        self.current.copy_from_slice(positions);
        self.previous.copy_from_slice(positions);
        self.pins.iter_mut().for_each(|p| *p = None);
        self.drag = Drag::None;
    }

    pub fn particle_count(&self) -> usize { self.current.len() }
    pub fn positions(&self) -> &[Vec3<F>] { &self.current }
    pub fn previous_positions(&self) -> &[Vec3<F>] { &self.previous }
    pub fn position(&self, index: usize) -> Vec3<F> { self.current[index] }

    /// Move a particle without touching its history (imparts velocity).
    pub fn set_position(&mut self, index: usize, pos: Vec3<F>) {
        self.current[index] = pos;
    }

    /// Both buffers mutably, for the integrator.
    pub(crate) fn buffers_mut(&mut self) -> (&mut [Vec3<F>], &mut [Vec3<F>], &[Option<Vec3<F>>]) {
        (&mut self.current[..], &mut self.previous[..], &self.pins[..])
    }

    /// Current positions with the pin table, for the solver.
    pub(crate) fn current_and_pins_mut(&mut self) -> (&mut [Vec3<F>], &[Option<Vec3<F>>]) {
        (&mut self.current[..], &self.pins[..])
    }

    pub fn pin_target(&self, index: usize) -> Option<Vec3<F>> { self.pins[index] }
    pub fn is_pinned(&self, index: usize) -> bool { self.pins[index].is_some() }

    /// Pin `index` at `target`. Returns `false` (and changes nothing) if
    /// the particle is already pinned.
    pub fn pin(&mut self, index: usize, target: Vec3<F>) -> bool {
        let slot = &mut self.pins[index];
        if slot.is_some() {
            return false;
        }
        *slot = Some(target);
        true
    }

    /// Release a pinned particle at rest where it currently sits.
    /// Returns `false` if the particle was not pinned.
    pub fn unpin(&mut self, index: usize) -> bool {
        if self.pins[index].take().is_none() {
            return false;
        }
        self.previous[index] = self.current[index];
        true
    }

    /// Flattened indices of pinned particles, ascending.
    pub fn pinned(&self) -> impl Iterator<Item = (usize, Vec3<F>)> + '_ {
        self.pins.iter().enumerate().filter_map(|(i, p)| p.map(|t| (i, t)))
    }

    pub fn pinned_count(&self) -> usize {
        self.pins.iter().filter(|p| p.is_some()).count()
    }

    pub fn drag(&self) -> Drag<F> { self.drag }

    /// Replaces any active drag.
    pub fn set_drag(&mut self, drag: Drag<F>) {
        self.drag = drag;
    }

    pub fn clear_drag(&mut self) {
        self.drag = Drag::None;
    }
}
