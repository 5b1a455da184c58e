//! Solvers that march a model forward over a time grid.

pub mod euler;
