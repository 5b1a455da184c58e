use std::convert::Infallible;

use swing_core::{DerivativeOf, OdeProblem};

use super::{PendulumRates, PendulumState};

/// Steps a [`DoublePendulum`](super::DoublePendulum) directly on its state.
///
/// The model input is the state itself, so there is nothing to carry forward
/// and no constraint to apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendulumProblem;

impl OdeProblem for PendulumProblem {
    type Input = PendulumState;
    type Output = PendulumRates;
    type Delta = f64;
    type State = PendulumState;
    type Error = Infallible;

    fn state(&self, input: &PendulumState) -> Result<PendulumState, Infallible> {
        Ok(*input)
    }

    fn derivative(
        &self,
        _input: &PendulumState,
        output: &PendulumRates,
    ) -> Result<DerivativeOf<PendulumState, f64>, Infallible> {
        Ok(*output)
    }

    fn build_input(
        &self,
        _base: &PendulumState,
        state: &PendulumState,
        _dt: &f64,
    ) -> Result<PendulumState, Infallible> {
        Ok(*state)
    }
}
