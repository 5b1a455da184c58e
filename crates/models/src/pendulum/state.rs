use swing_core::StepIntegrable;

/// State of a double pendulum: rod angles (rad) and angular velocities (rad/s).
///
/// Angles are measured from the downward vertical.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendulumState {
    pub th1: f64,
    pub w1: f64,
    pub th2: f64,
    pub w2: f64,
}

/// Time derivative of a [`PendulumState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendulumRates {
    pub th1: f64,
    pub w1: f64,
    pub th2: f64,
    pub w2: f64,
}

impl PendulumState {
    /// Returns the state as `[th1, w1, th2, w2]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.th1, self.w1, self.th2, self.w2]
    }

    /// Builds a state from `[th1, w1, th2, w2]`.
    #[must_use]
    pub fn from_array([th1, w1, th2, w2]: [f64; 4]) -> Self {
        Self { th1, w1, th2, w2 }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl StepIntegrable<f64> for PendulumState {
    type Derivative = PendulumRates;

    fn step(&self, rates: PendulumRates, dt: f64) -> Self {
        Self {
            th1: self.th1 + rates.th1 * dt,
            w1: self.w1 + rates.w1 * dt,
            th2: self.th2 + rates.th2 * dt,
            w2: self.w2 + rates.w2 * dt,
        }
    }
}
