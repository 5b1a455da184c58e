//! Numerical solvers for swing models.
//!
//! - [`transient::euler`]: fixed-step explicit (forward) Euler integration of
//!   an [`OdeProblem`](swing_core::OdeProblem)

pub mod transient;
