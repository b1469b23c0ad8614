//! Position Verlet time integration.

use crate::float::Float;
use crate::state::SimulationState;
use crate::vec::{Vec, Vec3};

/// Advance every unpinned particle by one timestep.
///
/// Velocity is implicit, `current - previous`, and is not damped. Pinned
/// particles are skipped entirely; the solver snaps them back onto their
/// targets on every pass instead.
pub fn integrate<F: Float>(state: &mut SimulationState<F>, dt: F, gravity: Vec3<F>) {
    let accel = gravity.scale(dt * dt);
    let (current, previous, pins) = state.buffers_mut();

    for ((pos, prev), pin) in current.iter_mut().zip(previous.iter_mut()).zip(pins.iter()) {
        if pin.is_some() {
            continue;
        }
        let velocity = *pos - *prev;
        let new_pos = *pos + velocity + accel;
        *prev = *pos;
        *pos = new_pos;
    }
}
