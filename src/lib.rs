//! Verlet cloth kernel for a square tarp with pins, drags and a ground plane.
//!
//! `tarp_sim` advances an N×N lattice of point masses joined by structural
//! and shear springs. Each step integrates unpinned particles with position
//! Verlet, then runs a fixed number of relaxation passes.
//!
//! # Features
//!
//! - **Lattice topology**: structural + shear springs built once from N and size
//! - **Verlet integration**: implicit velocity, pinned particles skipped
//! - **Relaxation**: springs, one soft drag, hard pins, ground clamp, every pass
//! - **Tie-outs**: the nine named anchor points, plus a selection cursor
//! - **Observable**: Monitor integration and passes via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod error;
pub mod config;
pub mod topology;
pub mod layout;
pub mod anchor;
pub mod constraint;
pub mod state;
pub mod integrator;
pub mod solver;
pub mod observer;
pub mod tarp;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3};
pub use error::TarpError;
pub use config::TarpConfig;
pub use topology::GridIndex;
pub use layout::Layout;
pub use anchor::{tie_out_indices, TieOut, TieOutCursor};
pub use constraint::{Drag, Spring, SpringKind};
pub use state::SimulationState;
pub use observer::{StepObserver, NoOpStepObserver};
pub use tarp::Tarp;
