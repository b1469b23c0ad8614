//! The tarp: a square cloth sheet driven one fixed timestep at a time.

use crate::anchor::{self, TieOut, TIE_OUT_COUNT};
use crate::config::{validate_compliance, TarpConfig};
use crate::constraint::{Drag, Spring};
use crate::error::TarpError;
use crate::float::Float;
use crate::integrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::solver;
use crate::state::SimulationState;
use crate::topology::{self, GridIndex};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A square cloth sheet of N×N particles with pins and an optional drag.
///
/// Grid coordinates are `(row, col)`; out-of-range coordinates panic.
///
/// ```
/// use tarp_sim::{Tarp, TarpConfig, TieOut};
///
/// let mut tarp: Tarp<f32> = Tarp::new(TarpConfig::flat_high()).unwrap();
/// tarp.stake(TieOut::TopLeft.grid_index(tarp.points_per_axis()));
/// for _ in 0..60 {
///     tarp.step(1.0 / 60.0);
/// }
/// assert!(tarp.positions().iter().all(|p| p.y >= 0.0));
/// ```
pub struct Tarp<F: Float> {
    config: TarpConfig<F>,
    springs: AllocVec<Spring<F>>,
    rest: AllocVec<Vec3<F>>,
    state: SimulationState<F>,
}

impl<F: Float> Tarp<F> {
    /// Build the lattice and reset into the configured layout.
    pub fn new(config: TarpConfig<F>) -> Result<Self, TarpError> {
        config.validate()?;
        let n = config.points_per_axis;
        let springs = topology::build(n, config.size);
        let rest = config.layout.positions(n, config.size);
        let state = SimulationState::from_positions(rest.clone());

        let mut tarp = Tarp { config, springs, rest, state };
        tarp.reset();
        Ok(tarp)
    }

    /// Return to the layout shape at rest, dropping every pin and the drag,
    /// then apply the layout's own pins.
    pub fn reset(&mut self) {
        self.state.reset_to(&self.rest);
        for index in self.config.layout.initial_pins(self.config.points_per_axis) {
            self.pin_in_place(index);
        }
    }

    /// Integrate one timestep, then relax.
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    pub fn step_observed<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        integrator::integrate(&mut self.state, dt, self.config.gravity);
        observer.on_integrate(self.state.positions());

        let drag = self.state.drag();
        solver::relax(
            &mut self.state,
            &self.springs,
            drag,
            self.config.iterations,
            self.config.ground_level,
            observer,
        );
        observer.on_step_complete();
    }

    fn flat(&self, index: GridIndex) -> usize {
        let n = self.config.points_per_axis;
        assert!(
            index.row < n && index.col < n,
            "grid index ({}, {}) out of bounds for {}x{} tarp",
            index.row, index.col, n, n,
        );
        index.flatten(n)
    }

    /// Pin a particle at `target`. No-op if it is already pinned.
    ///
    /// Targets below the ground are raised onto it so the pin can hold.
    pub fn pin(&mut self, index: GridIndex, target: Vec3<F>) {
        let flat = self.flat(index);
        let target = target.with_y(target.y.max(self.config.ground_level));
        self.state.pin(flat, target);
    }

    /// Release the particle at rest. No-op if it is not pinned.
    pub fn unpin(&mut self, index: GridIndex) {
        let flat = self.flat(index);
        self.state.unpin(flat);
    }

    /// Pin where the particle is now. Ends a drag on the same particle.
    pub fn pin_in_place(&mut self, index: GridIndex) {
        let flat = self.flat(index);
        if self.state.is_pinned(flat) {
            return;
        }
        if self.state.drag().index() == Some(flat) {
            self.state.clear_drag();
        }
        self.pin(index, self.state.position(flat));
    }

    /// Stake a particle to the ground directly below (or above) it.
    pub fn stake(&mut self, index: GridIndex) {
        let height = self.config.ground_level;
        self.pin_at_height(index, height);
    }

    /// Lift a particle onto a pole at the configured pole height.
    pub fn lift(&mut self, index: GridIndex) {
        let height = self.config.pole_height;
        self.pin_at_height(index, height);
    }

    fn pin_at_height(&mut self, index: GridIndex, height: F) {
        let flat = self.flat(index);
        if self.state.is_pinned(flat) {
            return;
        }
        let target = self.state.position(flat).with_y(height);
        self.pin(index, target);
    }

    /// Start pulling a particle towards `target`, replacing any active drag.
    pub fn set_drag(&mut self, index: GridIndex, target: Vec3<F>, compliance: F) -> Result<(), TarpError> {
        validate_compliance(compliance)?;
        let flat = self.flat(index);
        self.state.set_drag(Drag::active(flat, target, compliance));
        Ok(())
    }

    /// Drag with the configured default compliance.
    pub fn drag_to(&mut self, index: GridIndex, target: Vec3<F>) {
        let flat = self.flat(index);
        self.state.set_drag(Drag::active(flat, target, self.config.drag_compliance));
    }

    pub fn clear_drag(&mut self) {
        self.state.clear_drag();
    }

    /// The active drag, with its particle as a grid coordinate.
    pub fn drag(&self) -> Option<(GridIndex, Vec3<F>, F)> {
        match self.state.drag() {
            Drag::Active { index, target, compliance } => {
                Some((GridIndex::from_flat(index, self.config.points_per_axis), target, compliance))
            }
            Drag::None => None,
        }
    }

    /// Row-major particle positions.
    pub fn positions(&self) -> &[Vec3<F>] {
        self.state.positions()
    }

    pub fn position(&self, index: GridIndex) -> Vec3<F> {
        self.state.position(self.flat(index))
    }

    pub fn is_pinned(&self, index: GridIndex) -> bool {
        self.state.is_pinned(self.flat(index))
    }

    /// Pinned coordinates in row-major order.
    pub fn pinned_indices(&self) -> AllocVec<GridIndex> {
        let n = self.config.points_per_axis;
        self.state.pinned().map(|(flat, _)| GridIndex::from_flat(flat, n)).collect()
    }

    /// `(particle position, pin target)` for every pinned particle, row-major.
    pub fn guylines(&self) -> AllocVec<(Vec3<F>, Vec3<F>)> {
        self.state
            .pinned()
            .map(|(flat, target)| (self.state.position(flat), target))
            .collect()
    }

    pub fn tie_out_indices(&self) -> [GridIndex; TIE_OUT_COUNT] {
        anchor::tie_out_indices(self.config.points_per_axis)
    }

    pub fn tie_out(&self, tie_out: TieOut) -> GridIndex {
        tie_out.grid_index(self.config.points_per_axis)
    }

    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn config(&self) -> &TarpConfig<F> { &self.config }
    pub fn points_per_axis(&self) -> usize { self.config.points_per_axis }
    pub fn state(&self) -> &SimulationState<F> { &self.state }
}
