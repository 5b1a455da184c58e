use std::cell::Cell;

use swing_core::{DerivativeOf, OdeProblem};
use tracing::debug;

use crate::force::{ForceError, force_at};

use super::{CartInput, CartRates, CartState};

/// Steps a [`CartPendulum`](super::CartPendulum) along a bounded track.
///
/// The force for each step is looked up by the integer step index, never by
/// time. After every Euler step the cart is held inside `[x_min, x_max]`:
///
/// - past a limit, the position is set to the limit and the velocity to zero
/// - on a limit with velocity pointing off the track, the velocity is set to zero
///
/// The rod angles are never touched, so a cart pinned to a limit keeps its
/// pendulum swinging.
#[derive(Debug)]
pub struct CartProblem<'a> {
    forces: &'a [f64],
    x_min: f64,
    x_max: f64,
    clamped: Cell<usize>,
    first_clamp: Cell<Option<usize>>,
}

impl<'a> CartProblem<'a> {
    /// Creates a problem applying `forces[i]` during step `i`.
    #[must_use]
    pub fn new(forces: &'a [f64], x_min: f64, x_max: f64) -> Self {
        Self {
            forces,
            x_min,
            x_max,
            clamped: Cell::new(0),
            first_clamp: Cell::new(None),
        }
    }

    /// Builds the model input for the first sample.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::OutOfRange`] if there are no forces at all.
    pub fn initial_input(&self, state: CartState) -> Result<CartInput, ForceError> {
        Ok(CartInput {
            step: 0,
            state,
            force: force_at(self.forces, 0)?,
        })
    }

    /// Returns how many steps so far ended with the cart held at a limit.
    #[must_use]
    pub fn clamped_steps(&self) -> usize {
        self.clamped.get()
    }

    /// Returns the step at which the cart first hit a limit, if it has.
    #[must_use]
    pub fn first_clamped_step(&self) -> Option<usize> {
        self.first_clamp.get()
    }

    fn hold_on_track(&self, state: &mut CartState) -> bool {
        let stop = |state: &mut CartState, limit: f64| {
            state.x = limit;
            state.vx = 0.0;
        };

        if state.x > self.x_max || (state.x == self.x_max && state.vx > 0.0) {
            stop(state, self.x_max);
            true
        } else if state.x < self.x_min || (state.x == self.x_min && state.vx < 0.0) {
            stop(state, self.x_min);
            true
        } else {
            false
        }
    }
}

impl OdeProblem for CartProblem<'_> {
    type Input = CartInput;
    type Output = CartRates;
    type Delta = f64;
    type State = CartState;
    type Error = ForceError;

    fn state(&self, input: &CartInput) -> Result<CartState, ForceError> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        _input: &CartInput,
        output: &CartRates,
    ) -> Result<DerivativeOf<CartState, f64>, ForceError> {
        Ok(*output)
    }

    fn build_input(
        &self,
        base: &CartInput,
        state: &CartState,
        _dt: &f64,
    ) -> Result<CartInput, ForceError> {
        let step = base.step + 1;
        Ok(CartInput {
            step,
            state: *state,
            force: force_at(self.forces, step)?,
        })
    }

    fn finalize_step(
        &self,
        mut next: CartInput,
        _prev_input: &CartInput,
        _prev_output: &CartRates,
        _dt: &f64,
    ) -> Result<CartInput, ForceError> {
        if self.hold_on_track(&mut next.state) {
            self.clamped.set(self.clamped.get() + 1);
            if self.first_clamp.get().is_none() {
                self.first_clamp.set(Some(next.step));
                debug!(step = next.step, "cart held at track limit");
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use swing_solvers::transient::euler;

    use crate::cart::{CartParameters, CartPendulum};

    fn input(step: usize, x: f64, vx: f64) -> CartInput {
        CartInput {
            step,
            state: CartState {
                th1: 0.4,
                w1: -0.3,
                x,
                vx,
                ..CartState::default()
            },
            force: 0.0,
        }
    }

    fn finalize(problem: &CartProblem<'_>, next: CartInput) -> CartState {
        let prev = input(0, 0.0, 0.0);
        problem
            .finalize_step(next, &prev, &CartRates::default(), &0.01)
            .unwrap()
            .state
    }

    #[test]
    fn clamps_past_either_limit() {
        let problem = CartProblem::new(&[], -0.5, 0.5);

        let right = finalize(&problem, input(1, 0.7, 2.0));
        let left = finalize(&problem, input(1, -0.6, -1.0));

        assert_eq!((right.x, right.vx), (0.5, 0.0));
        assert_eq!((left.x, left.vx), (-0.5, 0.0));
        assert_eq!((right.th1, right.w1), (0.4, -0.3));
        assert_eq!(problem.clamped_steps(), 2);
    }

    #[test]
    fn stops_outward_motion_on_a_limit() {
        let problem = CartProblem::new(&[], -0.5, 0.5);

        let pressed = finalize(&problem, input(1, 0.5, 0.3));
        let leaving = finalize(&problem, input(1, 0.5, -0.3));

        assert_eq!((pressed.x, pressed.vx), (0.5, 0.0));
        assert_eq!((leaving.x, leaving.vx), (0.5, -0.3));
        assert_eq!(problem.clamped_steps(), 1);
        assert_eq!(problem.first_clamped_step(), Some(1));
    }

    #[test]
    fn remembers_the_first_clamped_step() {
        let problem = CartProblem::new(&[], -0.5, 0.5);

        finalize(&problem, input(4, 0.2, 1.0));
        finalize(&problem, input(5, 0.6, 1.0));
        finalize(&problem, input(6, 0.5, 1.0));
        finalize(&problem, input(7, -0.7, -1.0));

        assert_eq!(problem.first_clamped_step(), Some(5));
        assert_eq!(problem.clamped_steps(), 3);
    }

    #[test]
    fn leaves_interior_states_alone() {
        let problem = CartProblem::new(&[], -0.5, 0.5);

        let state = finalize(&problem, input(1, 0.1, 4.0));

        assert_eq!((state.x, state.vx), (0.1, 4.0));
        assert_eq!(problem.clamped_steps(), 0);
        assert_eq!(problem.first_clamped_step(), None);
    }

    #[test]
    fn force_is_looked_up_by_step() {
        let forces = [0.0, 1.0, 2.0, 3.0];
        let problem = CartProblem::new(&forces, -1.0, 1.0);

        let next = problem
            .build_input(&input(2, 0.0, 0.0), &CartState::default(), &0.01)
            .unwrap();

        assert_eq!(next.step, 3);
        assert_eq!(next.force, 3.0);
    }

    #[test]
    fn short_force_sequence_fails_at_lookup() {
        let forces = [0.0; 3];
        let problem = CartProblem::new(&forces, -1.0, 1.0);
        let model = CartPendulum::new(CartParameters::default());
        let initial = problem.initial_input(CartState::default()).unwrap();

        let err = euler::solve_unobserved(&model, &problem, initial, 0.01, 5).unwrap_err();

        assert_eq!(err.step(), 3);
        assert_eq!(
            err.inner().downcast_ref::<ForceError>(),
            Some(&ForceError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn empty_force_sequence_has_no_initial_input() {
        let problem = CartProblem::new(&[], -1.0, 1.0);

        assert_eq!(
            problem.initial_input(CartState::default()),
            Err(ForceError::OutOfRange { index: 0, len: 0 })
        );
    }
}
