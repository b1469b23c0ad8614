//! Iterative relaxation of spring, drag, pin and ground constraints.

use crate::constraint::{clamp_to_ground, enforce_pins, Drag, Spring};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::state::SimulationState;

/// Run `iterations` relaxation passes over `state`.
///
/// Each pass applies, in order: every spring, the drag (once), pin
/// reassertion, then the ground clamp. Pins and ground therefore hold
/// exactly when this returns, unless a pin target lies below the ground.
pub fn relax<F: Float, O: StepObserver<F>>(
    state: &mut SimulationState<F>,
    springs: &[Spring<F>],
    drag: Drag<F>,
    iterations: usize,
    ground_level: F,
    observer: &mut O,
) {
    for pass in 0..iterations {
        let (positions, pins) = state.current_and_pins_mut();

        for spring in springs {
            spring.solve(positions, pins);
        }
        drag.solve(positions);
        enforce_pins(positions, pins);
        clamp_to_ground(positions, ground_level);

        observer.on_relaxation_pass(pass, state.positions());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::SpringKind;
    use crate::observer::NoOpStepObserver;
    use crate::vec::Vec3;
    use alloc::vec;
    use alloc::vec::Vec as AllocVec;

    struct PassCounter(AllocVec<usize>);

    impl StepObserver<f32> for PassCounter {
        fn on_relaxation_pass(&mut self, pass: usize, _positions: &[Vec3<f32>]) {
            self.0.push(pass);
        }
    }

    #[test]
    fn observer_sees_every_pass() {
        let mut state = SimulationState::from_positions(vec![Vec3::new(0.0f32, 1.0, 0.0)]);
        let mut counter = PassCounter(AllocVec::new());
        relax(&mut state, &[], Drag::None, 4, 0.0, &mut counter);
        assert_eq!(counter.0, vec![0, 1, 2, 3]);
    }

    #[test]
    fn pin_beats_drag_on_same_particle() {
        let anchor = Vec3::new(0.0f32, 1.0, 0.0);
        let mut state = SimulationState::from_positions(vec![anchor]);
        state.pin(0, anchor);
        let drag = Drag::active(0, Vec3::new(5.0, 5.0, 5.0), 1.0);
        relax(&mut state, &[], drag, 3, 0.0, &mut NoOpStepObserver);
        assert_eq!(state.position(0), anchor);
    }

    #[test]
    fn ground_clamp_applies_after_springs() {
        // Compressed vertical spring would push the lower end below ground.
        let mut state = SimulationState::from_positions(vec![
            Vec3::new(0.0f32, 0.5, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ]);
        state.pin(0, Vec3::new(0.0, 0.5, 0.0));
        let springs = [Spring::new(0, 1, 2.0, SpringKind::Structural)];
        relax(&mut state, &springs, Drag::None, 5, 0.0, &mut NoOpStepObserver);
        assert_eq!(state.position(1).y, 0.0);
        assert_eq!(state.position(0), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn zero_iterations_is_a_noop() {
        let start = vec![Vec3::new(0.0f32, 3.0, 0.0), Vec3::new(3.0, 3.0, 0.0)];
        let mut state = SimulationState::from_positions(start.clone());
        let springs = [Spring::new(0, 1, 1.0, SpringKind::Structural)];
        relax(&mut state, &springs, Drag::None, 0, 0.0, &mut NoOpStepObserver);
        assert_eq!(state.positions(), &start[..]);
    }
}
