use std::{fs::File, io, io::BufWriter, path::Path, time::Instant};

use swing_solvers::transient::euler;
use tracing::{debug, info};

use crate::{
    Error, InitialConditions, Playback, TimeGrid, Trajectory, config::PendulumConfig, export,
    watch::non_finite_warning,
};

use super::{DoublePendulum, PendulumParameters, PendulumProblem, PendulumRates, PendulumState};

/// Everything about one double pendulum run.
///
/// Setters and [`solve`](Self::solve) take `&mut self`; use one instance per
/// run when simulating in batches.
#[derive(Debug, Clone)]
pub struct PendulumSimulation {
    params: PendulumParameters,
    initial: InitialConditions,
    state: PendulumState,
    grid: TimeGrid,
    trajectory: Option<Trajectory<PendulumState>>,
}

impl Default for PendulumSimulation {
    fn default() -> Self {
        Self::new(
            PendulumParameters::default(),
            InitialConditions::default(),
            TimeGrid::default(),
        )
    }
}

impl PendulumSimulation {
    #[must_use]
    pub fn new(params: PendulumParameters, initial: InitialConditions, grid: TimeGrid) -> Self {
        Self {
            params,
            initial,
            state: initial.to_state(),
            grid,
            trajectory: None,
        }
    }

    /// Builds a simulation from a loaded config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grid`] if the configured time values are invalid.
    pub fn from_config(config: &PendulumConfig) -> Result<Self, Error> {
        Ok(Self::new(
            config.parameters,
            config.initial,
            config.time.grid()?,
        ))
    }

    pub fn set_parameters(&mut self, params: PendulumParameters) {
        self.params = params;
    }

    /// Replaces the time grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grid`] and keeps the current grid if the values are invalid.
    pub fn set_time_parameters(&mut self, t_stop: f64, dt: f64) -> Result<(), Error> {
        self.grid = TimeGrid::new(t_stop, dt)?;
        Ok(())
    }

    /// Replaces the initial conditions, given in degrees and degrees/s.
    pub fn set_initial_conditions(&mut self, initial: InitialConditions) {
        self.initial = initial;
        self.state = initial.to_state();
    }

    #[must_use]
    pub fn parameters(&self) -> &PendulumParameters {
        &self.params
    }

    #[must_use]
    pub fn initial_conditions(&self) -> &InitialConditions {
        &self.initial
    }

    /// Returns the initial state in radians.
    #[must_use]
    pub fn initial_state(&self) -> &PendulumState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.grid.times()
    }

    /// Returns the trajectory of the last successful [`solve`](Self::solve).
    #[must_use]
    pub fn trajectory(&self) -> Option<&Trajectory<PendulumState>> {
        self.trajectory.as_ref()
    }

    /// Integrates the equations of motion over the whole grid.
    ///
    /// Produces one row per sample; row 0 is the initial state. The stored
    /// trajectory is replaced only once the run has finished.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Solver`] if integration fails.
    pub fn solve(&mut self) -> Result<(), Error> {
        let samples = self.grid.len();
        let dt = self.grid.dt();
        debug!(samples, dt, "solving double pendulum");

        let started = Instant::now();
        let model = DoublePendulum::new(self.params);
        let solution = euler::solve(
            &model,
            &PendulumProblem,
            self.state,
            dt,
            samples - 1,
            non_finite_warning::<PendulumState, PendulumRates>(
                "double pendulum",
                PendulumState::is_finite,
            ),
        )?;

        info!(
            steps = solution.steps,
            elapsed_us = started.elapsed().as_micros(),
            "double pendulum solved"
        );
        self.trajectory = Some(Trajectory::new(solution.into_inputs(), dt));
        Ok(())
    }

    /// Writes the trajectory as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before the first solve, or a write error.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let trajectory = self.trajectory.as_ref().ok_or(Error::NotSolved)?;
        export::write_pendulum_csv(writer, trajectory)
    }

    /// Saves the trajectory to a CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before the first solve, or an I/O or CSV error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        if self.trajectory.is_none() {
            return Err(Error::NotSolved);
        }
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }

    /// Prepares playback frames of the trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before the first solve.
    pub fn animate(&self) -> Result<Playback, Error> {
        let trajectory = self.trajectory.as_ref().ok_or(Error::NotSolved)?;
        Ok(Playback::pendulum(trajectory, &self.params))
    }
}
