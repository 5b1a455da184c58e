//! Core traits and types for stepping mechanical models through time.
//!
//! The crates in this workspace build on a small set of abstractions:
//!
//! - [`Model`]: a deterministic callable mapping a typed input (usually a
//!   state) to a typed output (usually its rates of change)
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OdeProblem`]: adapts a model's input and output to a solver-steppable
//!   state and its derivative
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
