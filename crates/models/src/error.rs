use std::io;

use swing_solvers::transient::euler;
use thiserror::Error;

use crate::{ForceError, GridError};

/// Errors returned by the simulation containers and their collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Export or playback was requested before `solve` produced a trajectory.
    #[error("the system must be solved before its trajectory can be used")]
    NotSolved,

    #[error("invalid time grid: {0}")]
    Grid(#[from] GridError),

    #[error("control force: {0}")]
    Force(#[from] ForceError),

    #[error("integration failed: {0}")]
    Solver(#[from] euler::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
