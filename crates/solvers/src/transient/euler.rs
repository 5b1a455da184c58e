//! Forward Euler solver for ODE problems.
//!
//! Steps a model across a fixed time grid with explicit Euler:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! The step size never changes and no stability check is made. Euler is first
//! order and not symplectic, so energy drifts over long runs.
//!
//! # Example
//!
//! ```ignore
//! use swing_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use swing_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each of `steps` steps:
///    - Extract the state and derivative from the current snapshot.
///    - Step the state forward: `state + derivative * dt`.
///    - Build the next input from the stepped state and finalize it
///      (constraints, discrete controls).
///    - Call the model on the finalized input.
///    - Emit an [`Event`] to the observer.
/// 3. Return the solution with the full history (`steps + 1` snapshots).
///
/// The observer may return [`Action::StopEarly`] to end the run with
/// [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step. Nothing of the
/// partial history is returned in that case.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(|e| Error::model(0, e))?;
    let mut current = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(current.clone());

    if stop_requested(&mut observer, 0, &current) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    for step in 1..=steps {
        current = advance(model, problem, &current, &dt, step)?;
        history.push(current.clone());

        if stop_requested(&mut observer, step, &current) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Takes one Euler step from `current` and evaluates the model there.
fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: &P::Delta,
    step: usize,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let state = problem
        .state(&current.input)
        .map_err(|e| Error::problem(step, e))?;
    let derivative = problem
        .derivative(&current.input, &current.output)
        .map_err(|e| Error::problem(step, e))?;

    let next_state = state.step(derivative, dt.clone());

    let next_input = problem
        .build_input(&current.input, &next_state, dt)
        .and_then(|input| problem.finalize_step(input, &current.input, &current.output, dt))
        .map_err(|e| Error::problem(step, e))?;

    let next_output = model.call(&next_input).map_err(|e| Error::model(step, e))?;
    Ok(Snapshot::new(next_input, next_output))
}

fn stop_requested<I, O, Obs>(observer: &mut Obs, step: usize, snapshot: &Snapshot<I, O>) -> bool
where
    I: Clone,
    O: Clone,
    Obs: Observer<Event<I, O>, Action>,
{
    let event = Event {
        step,
        snapshot: snapshot.clone(),
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use swing_core::DerivativeOf;
    use thiserror::Error;

    // --- Test fixtures ---

    /// State of a body sliding on a rail: position and velocity.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Slider {
        position: f64,
        velocity: f64,
    }

    #[derive(Debug, Clone, Copy)]
    struct SliderRates {
        velocity: f64,
        acceleration: f64,
    }

    impl StepIntegrable<f64> for Slider {
        type Derivative = SliderRates;

        fn step(&self, rates: SliderRates, dt: f64) -> Self {
            Slider {
                position: self.position + rates.velocity * dt,
                velocity: self.velocity + rates.acceleration * dt,
            }
        }
    }

    /// Model input: the slider plus the step it belongs to.
    #[derive(Debug, Clone, Copy)]
    struct Input {
        step: usize,
        slider: Slider,
    }

    /// Slider pushed by a constant acceleration.
    struct Pushed {
        acceleration: f64,
    }

    impl Model for Pushed {
        type Input = Input;
        type Output = SliderRates;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<SliderRates, Self::Error> {
            Ok(SliderRates {
                velocity: input.slider.velocity,
                acceleration: self.acceleration,
            })
        }
    }

    #[derive(Debug, Error)]
    #[error("ran past the end of the rail at step {0}")]
    struct PastEnd(usize);

    /// Rail problem with an optional hard stop and an optional step limit.
    struct Rail {
        stop: Option<f64>,
        max_step: Option<usize>,
    }

    impl Rail {
        fn open() -> Self {
            Self {
                stop: None,
                max_step: None,
            }
        }
    }

    impl OdeProblem for Rail {
        type Input = Input;
        type Output = SliderRates;
        type Delta = f64;
        type State = Slider;
        type Error = PastEnd;

        fn state(&self, input: &Input) -> Result<Slider, PastEnd> {
            Ok(input.slider)
        }

        fn derivative(
            &self,
            _input: &Input,
            output: &SliderRates,
        ) -> Result<DerivativeOf<Slider, f64>, PastEnd> {
            Ok(*output)
        }

        fn build_input(&self, base: &Input, state: &Slider, _dt: &f64) -> Result<Input, PastEnd> {
            let step = base.step + 1;
            match self.max_step {
                Some(max) if step > max => Err(PastEnd(step)),
                _ => Ok(Input {
                    step,
                    slider: *state,
                }),
            }
        }

        fn finalize_step(
            &self,
            mut next: Input,
            _prev_input: &Input,
            _prev_output: &SliderRates,
            _dt: &f64,
        ) -> Result<Input, PastEnd> {
            if let Some(stop) = self.stop {
                let slider = next.slider;
                if slider.position > stop || (slider.position == stop && slider.velocity > 0.0) {
                    next.slider.position = stop;
                    next.slider.velocity = 0.0;
                }
            }
            Ok(next)
        }
    }

    fn at_rest() -> Input {
        Input {
            step: 0,
            slider: Slider {
                position: 0.0,
                velocity: 0.0,
            },
        }
    }

    // --- Tests ---

    #[test]
    fn constant_acceleration_matches_euler_sum() {
        let model = Pushed { acceleration: 2.0 };

        let solution =
            solve_unobserved(&model, &Rail::open(), at_rest(), 0.1, 10).expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.history.len(), 11);

        // v_n = a*n*dt, x_n = a*dt^2 * n(n-1)/2
        let last = solution.history.last().unwrap().input;
        assert_eq!(last.step, 10);
        assert_relative_eq!(last.slider.velocity, 2.0, epsilon = 1e-12);
        assert_relative_eq!(last.slider.position, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn finalize_step_constrains_every_step() {
        let model = Pushed { acceleration: 10.0 };
        let rail = Rail {
            stop: Some(0.05),
            max_step: None,
        };

        let inputs = solve_unobserved(&model, &rail, at_rest(), 0.1, 20)
            .expect("should solve")
            .into_inputs();

        assert!(inputs.iter().all(|i| i.slider.position <= 0.05));
        let first_stop = inputs
            .iter()
            .position(|i| i.slider.position == 0.05)
            .expect("stop engages");
        let stopped = &inputs[first_stop..];
        assert!(stopped.iter().all(|i| i.slider.velocity == 0.0));
    }

    #[test]
    fn problem_error_carries_step() {
        let model = Pushed { acceleration: 1.0 };
        let rail = Rail {
            stop: None,
            max_step: Some(3),
        };

        let err = solve_unobserved(&model, &rail, at_rest(), 0.1, 5).unwrap_err();

        assert!(matches!(err, Error::Problem { step: 4, .. }));
        assert_eq!(err.step(), 4);
        assert_eq!(
            err.inner().to_string(),
            "ran past the end of the rail at step 4"
        );
    }

    #[test]
    fn observer_can_stop_early() {
        let model = Pushed { acceleration: 1.0 };

        let observer = |event: &Event<Input, SliderRates>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&model, &Rail::open(), at_rest(), 0.1, 100, observer)
            .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6);
    }

    #[test]
    fn zero_steps_returns_initial() {
        let model = Pushed { acceleration: 1.0 };
        let mut initial = at_rest();
        initial.slider.position = 5.0;

        let solution = solve_unobserved(&model, &Rail::open(), initial, 0.1, 0)
            .expect("should return initial");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_relative_eq!(solution.history[0].input.slider.position, 5.0);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let model = Pushed { acceleration: 1.0 };

        let mut seen = Vec::new();
        solve(
            &model,
            &Rail::open(),
            at_rest(),
            0.25,
            4,
            |event: &Event<Input, SliderRates>| {
                seen.push((event.step, event.snapshot.input.step));
                None
            },
        )
        .expect("should solve");

        assert_eq!(seen, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }
}
