use std::convert::Infallible;

use swing_core::Model;

use super::{CartInput, CartParameters, CartRates, CartState};

/// Equations of motion of a double pendulum hanging from a driven cart.
///
/// With `M = m1 + m2 + mc`, `δ = th2 − th1` and `F` the control force:
///
/// ```text
/// den1 = M·l1 − m1·l1·cos²th1 − m2·l1·cos²δ
/// den2 = l2·den1 / l1
/// w1'  = [m1·l1·w1²·sin th1 + m2·l2·w2²·sinδ·cosδ + m2·g·sin th2·cosδ
///         + (F − mc·vx)·cos th1 − M·g·sin th1] / den1
/// w2'  = [−m2·l2·w2²·sinδ·cosδ − M·g·sin th2 + l1·w1'·cosδ] / den2
/// vx'  = [F + m1·l1·(w1'·cos th1 − w1²·sin th1) + m2·l2·(w2'·cosδ − w2²·sinδ)] / M
/// ```
///
/// `w2'` uses `w1'`, and `vx'` uses both.
///
/// The track limits are not part of the model; see
/// [`CartProblem`](super::CartProblem).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartPendulum {
    params: CartParameters,
}

impl CartPendulum {
    #[must_use]
    pub fn new(params: CartParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn parameters(&self) -> &CartParameters {
        &self.params
    }

    /// Evaluates the rates of change at `state` under the horizontal force `force` (N).
    #[must_use]
    pub fn rates(&self, state: &CartState, force: f64) -> CartRates {
        let CartParameters {
            l1,
            l2,
            m1,
            m2,
            mc,
            g,
            ..
        } = self.params;
        let CartState {
            th1,
            w1,
            th2,
            w2,
            vx,
            ..
        } = *state;

        let total = self.params.total_mass();
        let (sin_1, cos_1) = th1.sin_cos();
        let (sin_d, cos_d) = (th2 - th1).sin_cos();
        let m1l1 = m1 * l1;
        let m2l2 = m2 * l2;

        let den1 = total * l1 - m1l1 * cos_1 * cos_1 - m2 * l1 * cos_d * cos_d;
        let den2 = l2 * den1 / l1;

        let dw1 = (m1l1 * w1 * w1 * sin_1
            + m2l2 * w2 * w2 * sin_d * cos_d
            + m2 * g * th2.sin() * cos_d
            + (force - mc * vx) * cos_1
            - total * g * sin_1)
            / den1;

        let dw2 =
            (-m2l2 * w2 * w2 * sin_d * cos_d - total * g * th2.sin() + l1 * dw1 * cos_d) / den2;

        let dvx = (force
            + m1l1 * (dw1 * cos_1 - w1 * w1 * sin_1)
            + m2l2 * (dw2 * cos_d - w2 * w2 * sin_d))
            / total;

        CartRates {
            th1: w1,
            w1: dw1,
            th2: w2,
            w2: dw2,
            x: vx,
            vx: dvx,
        }
    }
}

impl Model for CartPendulum {
    type Input = CartInput;
    type Output = CartRates;
    type Error = Infallible;

    fn call(&self, input: &CartInput) -> Result<CartRates, Infallible> {
        Ok(self.rates(&input.state, input.force))
    }
}
