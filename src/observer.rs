//! Step observer trait for monitoring tarp simulation progress.

use crate::float::Float;
use crate::vec::Vec3;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// convergence plots, or profiling). Observers see positions read-only.
/// All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after the integrator has moved all unpinned particles.
    fn on_integrate(&mut self, _positions: &[Vec3<F>]) {}

    /// Called after each relaxation pass, with the pass number (0-based).
    fn on_relaxation_pass(&mut self, _pass: usize, _positions: &[Vec3<F>]) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
