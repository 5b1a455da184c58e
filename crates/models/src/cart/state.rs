use swing_core::StepIntegrable;

/// State of a double pendulum on a cart.
///
/// Angles (rad) are measured from the downward vertical; the cart position
/// (m) and velocity (m/s) are along the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartState {
    pub th1: f64,
    pub w1: f64,
    pub th2: f64,
    pub w2: f64,
    pub x: f64,
    pub vx: f64,
}

/// Time derivative of a [`CartState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartRates {
    pub th1: f64,
    pub w1: f64,
    pub th2: f64,
    pub w2: f64,
    pub x: f64,
    pub vx: f64,
}

/// Model input for one grid sample: the step index, the state and the
/// control force applied during that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartInput {
    pub step: usize,
    pub state: CartState,
    pub force: f64,
}

impl CartState {
    /// Returns the state as `[th1, w1, th2, w2, x, vx]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [self.th1, self.w1, self.th2, self.w2, self.x, self.vx]
    }

    /// Builds a state from `[th1, w1, th2, w2, x, vx]`.
    #[must_use]
    pub fn from_array([th1, w1, th2, w2, x, vx]: [f64; 6]) -> Self {
        Self {
            th1,
            w1,
            th2,
            w2,
            x,
            vx,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl StepIntegrable<f64> for CartState {
    type Derivative = CartRates;

    fn step(&self, rates: CartRates, dt: f64) -> Self {
        Self {
            th1: self.th1 + rates.th1 * dt,
            w1: self.w1 + rates.w1 * dt,
            th2: self.th2 + rates.th2 * dt,
            w2: self.w2 + rates.w2 * dt,
            x: self.x + rates.x * dt,
            vx: self.vx + rates.vx * dt,
        }
    }
}
