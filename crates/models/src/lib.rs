//! Double pendulum models for the swing workspace.
//!
//! Two mechanical systems share one pattern: a parameter/state container that
//! owns everything about a run, a derivative evaluator implementing
//! [`swing_core::Model`], and an [`swing_core::OdeProblem`] that lets the
//! forward Euler solver in [`swing_solvers::transient::euler`] step it.
//!
//! - [`pendulum`]: a double pendulum hanging from a fixed pivot
//! - [`cart`]: a double pendulum hanging from a cart on a bounded track,
//!   driven by a per-sample [`ControlForce`]
//!
//! Solved runs can be written as CSV ([`export`]) or turned into
//! [`Playback`] frames for an external renderer.
//!
//! # Example
//!
//! ```
//! use swing_models::pendulum::PendulumSimulation;
//!
//! let mut sim = PendulumSimulation::default();
//! sim.solve()?;
//!
//! let trajectory = sim.trajectory().expect("solved");
//! assert_eq!(trajectory.len(), sim.grid().len());
//! # Ok::<(), swing_models::Error>(())
//! ```

mod conditions;
mod error;
mod grid;
mod trajectory;
mod watch;

pub mod cart;
pub mod config;
pub mod export;
pub mod force;
pub mod pendulum;
pub mod playback;

pub use conditions::{CartInitialConditions, InitialConditions};
pub use error::Error;
pub use force::{ControlForce, ForceError};
pub use grid::{GridError, TimeGrid};
pub use playback::{CartPanel, Frame, Playback, ViewBounds};
pub use trajectory::Trajectory;
