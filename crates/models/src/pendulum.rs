//! Double pendulum on a fixed pivot.
//!
//! [`DoublePendulum`] evaluates the closed-form equations of motion,
//! [`PendulumProblem`] adapts it to the Euler solver, and
//! [`PendulumSimulation`] owns the parameters, initial state, grid and
//! trajectory of one run.

mod model;
mod parameters;
mod problem;
mod simulation;
mod state;

pub use model::DoublePendulum;
pub use parameters::PendulumParameters;
pub use problem::PendulumProblem;
pub use simulation::PendulumSimulation;
pub use state::{PendulumRates, PendulumState};
