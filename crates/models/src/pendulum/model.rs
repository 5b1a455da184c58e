use std::convert::Infallible;

use swing_core::Model;

use super::{PendulumParameters, PendulumRates, PendulumState};

/// Equations of motion of a double pendulum with point masses on massless rods.
///
/// The rates follow from the Lagrangian. With `δ = th2 − th1`:
///
/// ```text
/// den1 = (m1 + m2)·l1 − m2·l1·cos²δ
/// w1'  = [m2·l1·w1²·sinδ·cosδ + m2·g·sin th2·cosδ + m2·l2·w2²·sinδ − (m1 + m2)·g·sin th1] / den1
/// den2 = (l2 / l1)·den1
/// w2'  = [−m2·l2·w2²·sinδ·cosδ + (m1 + m2)·g·sin th1·cosδ − (m1 + m2)·l1·w1²·sinδ − (m1 + m2)·g·sin th2] / den2
/// ```
///
/// Nothing guards the denominators: configurations where they vanish give
/// infinite or NaN rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublePendulum {
    params: PendulumParameters,
}

impl DoublePendulum {
    #[must_use]
    pub fn new(params: PendulumParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn parameters(&self) -> &PendulumParameters {
        &self.params
    }

    /// Evaluates the rates of change at `state`.
    #[must_use]
    pub fn rates(&self, state: &PendulumState) -> PendulumRates {
        let PendulumParameters { l1, l2, m1, m2, g } = self.params;
        let PendulumState { th1, w1, th2, w2 } = *state;

        let delta = th2 - th1;
        let (sin_d, cos_d) = delta.sin_cos();
        let total = m1 + m2;

        let den1 = total * l1 - m2 * l1 * cos_d * cos_d;
        let dw1 = (m2 * l1 * w1 * w1 * sin_d * cos_d
            + m2 * g * th2.sin() * cos_d
            + m2 * l2 * w2 * w2 * sin_d
            - total * g * th1.sin())
            / den1;

        let den2 = (l2 / l1) * den1;
        let dw2 = (-m2 * l2 * w2 * w2 * sin_d * cos_d + total * g * th1.sin() * cos_d
            - total * l1 * w1 * w1 * sin_d
            - total * g * th2.sin())
            / den2;

        PendulumRates {
            th1: w1,
            w1: dw1,
            th2: w2,
            w2: dw2,
        }
    }
}

impl Model for DoublePendulum {
    type Input = PendulumState;
    type Output = PendulumRates;
    type Error = Infallible;

    fn call(&self, state: &PendulumState) -> Result<PendulumRates, Infallible> {
        Ok(self.rates(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    fn unit() -> DoublePendulum {
        DoublePendulum::new(PendulumParameters::default())
    }

    #[test]
    fn hanging_at_rest_is_equilibrium() {
        let rates = unit().rates(&PendulumState::default());
        assert_eq!(rates, PendulumRates::default());
    }

    #[test]
    fn angle_rates_pass_through_velocities() {
        let state = PendulumState {
            th1: 0.3,
            w1: 1.5,
            th2: -0.2,
            w2: -0.7,
        };
        let rates = unit().rates(&state);
        assert_eq!(rates.th1, 1.5);
        assert_eq!(rates.th2, -0.7);
    }

    #[test]
    fn horizontal_upper_rod_with_hanging_lower_rod() {
        // th1 = π/2, th2 = 0, at rest: δ = −π/2 so cosδ ≈ 0, sinδ = −1.
        // den1 = 2, w1' = −2g/2 = −g, and w2' ≈ 0.
        let state = PendulumState {
            th1: FRAC_PI_2,
            w1: 0.0,
            th2: 0.0,
            w2: 0.0,
        };
        let rates = unit().rates(&state);
        assert_relative_eq!(rates.w1, -9.8, epsilon = 1e-12);
        assert_relative_eq!(rates.w2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_hand_evaluation() {
        let params = PendulumParameters {
            l1: 1.2,
            l2: 0.8,
            m1: 2.0,
            m2: 0.5,
            g: 9.81,
        };
        let state = PendulumState {
            th1: PI / 3.0,
            w1: 0.4,
            th2: PI / 6.0,
            w2: -1.1,
        };

        let rates = DoublePendulum::new(params).rates(&state);

        let (sin_d, cos_d) = (state.th2 - state.th1).sin_cos();
        let den1 = 2.5 * 1.2 - 0.5 * 1.2 * cos_d * cos_d;
        let spin1 = 0.5 * 1.2 * 0.16 * sin_d * cos_d + 0.5 * 0.8 * 1.21 * sin_d;
        let gravity1 = 0.5 * 9.81 * state.th2.sin() * cos_d - 2.5 * 9.81 * state.th1.sin();
        let dw1 = (spin1 + gravity1) / den1;

        let den2 = (0.8 / 1.2) * den1;
        let spin2 = -0.5 * 0.8 * 1.21 * sin_d * cos_d - 2.5 * 1.2 * 0.16 * sin_d;
        let gravity2 = 2.5 * 9.81 * (state.th1.sin() * cos_d - state.th2.sin());
        let dw2 = (spin2 + gravity2) / den2;

        assert_relative_eq!(rates.w1, dw1, epsilon = 1e-12);
        assert_relative_eq!(rates.w2, dw2, epsilon = 1e-12);
    }

    #[test]
    fn singular_configuration_is_not_an_error() {
        // m1 = 0 makes den1 vanish when the rods are aligned.
        let params = PendulumParameters {
            m1: 0.0,
            ..PendulumParameters::default()
        };
        let state = PendulumState {
            th1: 0.5,
            w1: 1.0,
            th2: 0.5,
            w2: 0.0,
        };

        let rates = DoublePendulum::new(params).call(&state).unwrap();

        assert!(!rates.w1.is_finite());
    }
}
