//! Error types for tarp construction and driver requests.

use thiserror::Error;

/// Errors reported when a configuration or driver request is rejected.
///
/// The kernel never fails once constructed; everything here is a
/// precondition checked before simulation starts or before a drag is set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TarpError {
    /// The lattice needs at least two points per axis.
    #[error("grid must be at least 2x2 (got {n} points per axis)")]
    InvalidGridDimensions { n: usize },
    /// Physical size must be positive and finite.
    #[error("tarp size must be positive and finite")]
    InvalidSize,
    /// At least one relaxation pass is required.
    #[error("solver iteration count must be positive")]
    InvalidIterations,
    /// Ground level, gravity and pole height must be real numbers.
    #[error("ground level, gravity and pole height must be finite")]
    NonFiniteParameter,
    /// Drag compliance must be in (0, 1].
    #[error("drag compliance must be in (0, 1]")]
    InvalidCompliance,
}
