//! Double pendulum hanging from a cart on a bounded horizontal track.
//!
//! The cart is driven by a horizontal [`ControlForce`](crate::ControlForce).
//! [`CartPendulum`] evaluates the equations of motion for the force of the
//! current step, [`CartProblem`] looks the force up by step index and keeps
//! the cart on its track, and [`CartSimulation`] owns one run.

mod model;
mod parameters;
mod problem;
mod simulation;
mod state;

pub use model::CartPendulum;
pub use parameters::CartParameters;
pub use problem::CartProblem;
pub use simulation::CartSimulation;
pub use state::{CartInput, CartRates, CartState};
