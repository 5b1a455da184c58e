use std::{fs::File, io, io::BufWriter, path::Path, time::Instant};

use rand::Rng;
use swing_solvers::transient::euler;
use tracing::{debug, info};

use crate::{
    CartInitialConditions, ControlForce, Error, Playback, TimeGrid, Trajectory, config::CartConfig,
    export, watch::non_finite_warning,
};

use super::{CartInput, CartParameters, CartPendulum, CartProblem, CartRates, CartState};

/// A solved cart run: the trajectory, the force applied at each row, and the
/// grid length it covered.
#[derive(Debug, Clone)]
struct Solved {
    trajectory: Trajectory<CartState>,
    forces: Vec<f64>,
    t_stop: f64,
}

/// Everything about one double-pendulum-on-cart run.
///
/// Setters and [`solve`](Self::solve) take `&mut self`; use one instance per
/// run when simulating in batches.
#[derive(Debug, Clone)]
pub struct CartSimulation {
    params: CartParameters,
    initial: CartInitialConditions,
    state: CartState,
    grid: TimeGrid,
    force: ControlForce,
    solved: Option<Solved>,
}

impl Default for CartSimulation {
    fn default() -> Self {
        Self::new(
            CartParameters::default(),
            CartInitialConditions::default(),
            TimeGrid::default(),
        )
    }
}

impl CartSimulation {
    /// Creates a simulation with no control force.
    #[must_use]
    pub fn new(params: CartParameters, initial: CartInitialConditions, grid: TimeGrid) -> Self {
        Self {
            params,
            initial,
            state: initial.to_state(),
            grid,
            force: ControlForce::Zero,
            solved: None,
        }
    }

    /// Builds a simulation from a loaded config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grid`] if the configured time values are invalid.
    pub fn from_config(config: &CartConfig) -> Result<Self, Error> {
        Ok(Self::new(
            config.parameters,
            config.initial,
            config.time.grid()?,
        ))
    }

    pub fn set_parameters(&mut self, params: CartParameters) {
        self.params = params;
    }

    /// Replaces the time grid.
    ///
    /// An explicit force sequence set earlier is kept as is; [`solve`](Self::solve)
    /// rejects it if its length no longer matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grid`] and keeps the current grid if the values are invalid.
    pub fn set_time_parameters(&mut self, t_stop: f64, dt: f64) -> Result<(), Error> {
        self.grid = TimeGrid::new(t_stop, dt)?;
        Ok(())
    }

    /// Replaces the initial conditions; angles in degrees, the cart in m and m/s.
    pub fn set_initial_conditions(&mut self, initial: CartInitialConditions) {
        self.initial = initial;
        self.state = initial.to_state();
    }

    /// Sets an explicit force (N) for each grid sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Force`] if the sequence length differs from the grid.
    pub fn set_control_force(&mut self, samples: Vec<f64>) -> Result<(), Error> {
        let force = ControlForce::Samples(samples);
        force.samples(self.grid.len())?;
        self.force = force;
        Ok(())
    }

    /// Sets a random staircase force drawn from `[f_min, f_max]`.
    ///
    /// The bounds also become the parameter set's force bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Force`] if the bounds are invalid.
    pub fn set_random_control_force<R: Rng>(
        &mut self,
        rng: &mut R,
        f_min: f64,
        f_max: f64,
    ) -> Result<(), Error> {
        self.force = ControlForce::staircase(rng, &self.grid, f_min, f_max)?;
        self.params.f_min = f_min;
        self.params.f_max = f_max;
        Ok(())
    }

    #[must_use]
    pub fn parameters(&self) -> &CartParameters {
        &self.params
    }

    #[must_use]
    pub fn initial_conditions(&self) -> &CartInitialConditions {
        &self.initial
    }

    /// Returns the initial state, angles in radians.
    #[must_use]
    pub fn initial_state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.grid.times()
    }

    #[must_use]
    pub fn control_force(&self) -> &ControlForce {
        &self.force
    }

    /// Returns the trajectory of the last successful [`solve`](Self::solve).
    #[must_use]
    pub fn trajectory(&self) -> Option<&Trajectory<CartState>> {
        self.solved.as_ref().map(|solved| &solved.trajectory)
    }

    /// Returns the force applied at each row of the last successful solve.
    #[must_use]
    pub fn applied_force(&self) -> Option<&[f64]> {
        self.solved.as_ref().map(|solved| solved.forces.as_slice())
    }

    /// Integrates the equations of motion over the whole grid.
    ///
    /// The stored trajectory is replaced only once the run has finished.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Force`] if the control force does not have one value
    /// per grid sample, or [`Error::Solver`] if integration fails.
    pub fn solve(&mut self) -> Result<(), Error> {
        let samples = self.grid.len();
        let dt = self.grid.dt();
        let forces = self.force.samples(samples)?.into_owned();
        debug!(samples, dt, "solving double pendulum on cart");

        let started = Instant::now();
        let model = CartPendulum::new(self.params);
        let problem = CartProblem::new(&forces, self.params.x_min, self.params.x_max);
        let initial = problem.initial_input(self.state)?;

        let solution = euler::solve(
            &model,
            &problem,
            initial,
            dt,
            samples - 1,
            non_finite_warning::<CartInput, CartRates>("double pendulum on cart", |input| {
                input.state.is_finite()
            }),
        )?;

        info!(
            steps = solution.steps,
            clamped_steps = problem.clamped_steps(),
            elapsed_us = started.elapsed().as_micros(),
            "double pendulum on cart solved"
        );

        let rows = solution
            .into_inputs()
            .into_iter()
            .map(|input| input.state)
            .collect();
        self.solved = Some(Solved {
            trajectory: Trajectory::new(rows, dt),
            forces,
            t_stop: self.grid.t_stop(),
        });
        Ok(())
    }

    fn solved(&self) -> Result<&Solved, Error> {
        self.solved.as_ref().ok_or(Error::NotSolved)
    }

    /// Writes the trajectory as CSV with the applied force in the first column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before the first solve, or a write error.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let solved = self.solved()?;
        export::write_cart_csv(writer, &solved.trajectory, &solved.forces)
    }

    /// Saves the trajectory to a CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before the first solve, or an I/O or CSV error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.solved()?;
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }

    /// Prepares playback frames of the trajectory alongside the applied force.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before the first solve.
    pub fn animate(&self) -> Result<Playback, Error> {
        let solved = self.solved()?;
        Ok(Playback::cart(
            &solved.trajectory,
            &self.params,
            &solved.forces,
            solved.t_stop,
        ))
    }
}
