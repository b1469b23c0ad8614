//! Configuration for a tarp simulation.

use crate::error::TarpError;
use crate::float::Float;
use crate::layout::Layout;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning fixed at construction and shared by every component of the kernel.
///
/// # Builder Pattern
/// ```
/// use tarp_sim::config::TarpConfig;
/// use tarp_sim::layout::Layout;
/// use tarp_sim::vec::Vec3;
///
/// let config: TarpConfig<f32> = TarpConfig::new()
///     .with_points_per_axis(17)
///     .with_size(3.0)
///     .with_iterations(10)
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0))
///     .with_layout(Layout::FlatOnGround);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TarpConfig<F: Float> {
    /// Lattice points per side (N). Must be at least 2. Default: 17.
    pub points_per_axis: usize,
    /// Side length of the square sheet (S). Must be positive. Default: 3.0.
    pub size: F,
    /// Constant acceleration applied every integration step. Default: (0, -9.8, 0).
    pub gravity: Vec3<F>,
    /// Relaxation passes per step. Must be positive. Default: 5.
    pub iterations: usize,
    /// Height of the ground plane. Default: 0.0.
    pub ground_level: F,
    /// Shape restored by `reset()`. Default: [`Layout::FlatHigh`].
    pub layout: Layout,
    /// Height a lifted tie-out is pinned at. Default: 1.2.
    pub pole_height: F,
    /// Compliance a driver uses for mouse drags. Default: 0.8.
    pub drag_compliance: F,
}

impl<F: Float> TarpConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        TarpConfig {
            points_per_axis: 17,
            size: F::from_f32(3.0),
            gravity: Vec3::new(F::zero(), F::from_f32(-9.8), F::zero()),
            iterations: 5,
            ground_level: F::zero(),
            layout: Layout::FlatHigh,
            pole_height: F::from_f32(1.2),
            drag_compliance: F::from_f32(0.8),
        }
    }

    /// Sheet held flat and high, free to fall onto the ground.
    pub fn flat_high() -> Self {
        Self::new()
    }

    /// Sheet lying on the ground, stiffer solver for staking and dragging.
    pub fn flat_on_ground() -> Self {
        Self::new()
            .with_layout(Layout::FlatOnGround)
            .with_iterations(10)
    }

    /// Sheet hung vertically from its top corners, ground lowered out of the way.
    pub fn hanging() -> Self {
        let config = Self::new().with_layout(Layout::Hanging);
        let ground = -(config.size * F::two());
        config.with_ground_level(ground)
    }

    /// Set the number of particles along each edge.
    pub fn with_points_per_axis(mut self, n: usize) -> Self {
        self.points_per_axis = n;
        self
    }

    /// Set the edge length of the square sheet.
    pub fn with_size(mut self, size: F) -> Self {
        self.size = size;
        self
    }

    /// Set the gravitational acceleration.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the number of relaxation passes per step.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the height of the ground plane.
    pub fn with_ground_level(mut self, ground_level: F) -> Self {
        self.ground_level = ground_level;
        self
    }

    /// Set the shape the sheet resets to.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the height used when lifting a particle onto a pole.
    pub fn with_pole_height(mut self, pole_height: F) -> Self {
        self.pole_height = pole_height;
        self
    }

    /// Set the compliance used by `Tarp::drag_to`.
    pub fn with_drag_compliance(mut self, compliance: F) -> Self {
        self.drag_compliance = compliance;
        self
    }

    /// Reject configurations the kernel cannot simulate.
    pub fn validate(&self) -> Result<(), TarpError> {
        if self.points_per_axis < 2 {
            return Err(TarpError::InvalidGridDimensions { n: self.points_per_axis });
        }
        if !(self.size > F::zero()) || !self.size.is_finite() {
            return Err(TarpError::InvalidSize);
        }
        if self.iterations == 0 {
            return Err(TarpError::InvalidIterations);
        }
        let g = self.gravity;
        if !(self.ground_level.is_finite() && self.pole_height.is_finite())
            || !(g.x.is_finite() && g.y.is_finite() && g.z.is_finite())
        {
            return Err(TarpError::NonFiniteParameter);
        }
        validate_compliance(self.drag_compliance)
    }
}

impl<F: Float> Default for TarpConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compliance is the fraction of the remaining gap closed per pass: (0, 1].
pub(crate) fn validate_compliance<F: Float>(compliance: F) -> Result<(), TarpError> {
    if compliance > F::zero() && compliance <= F::one() {
        Ok(())
    } else {
        Err(TarpError::InvalidCompliance)
    }
}
