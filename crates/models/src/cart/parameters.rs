use serde::{Deserialize, Serialize};

/// Physical constants and limits of a double pendulum on a cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartParameters {
    /// Length of the upper rod (m).
    pub l1: f64,
    /// Length of the lower rod (m).
    pub l2: f64,
    /// Mass at the end of the upper rod (kg).
    pub m1: f64,
    /// Mass at the end of the lower rod (kg).
    pub m2: f64,
    /// Cart mass (kg).
    pub mc: f64,
    /// Gravitational acceleration (m/s²).
    pub g: f64,
    /// Left end of the track (m).
    pub x_min: f64,
    /// Right end of the track (m).
    pub x_max: f64,
    /// Lower bound for random control forces (N).
    pub f_min: f64,
    /// Upper bound for random control forces (N).
    pub f_max: f64,
}

impl Default for CartParameters {
    fn default() -> Self {
        Self {
            l1: 1.0,
            l2: 1.0,
            m1: 1.0,
            m2: 1.0,
            mc: 1.0,
            g: 9.8,
            x_min: -1.0,
            x_max: 1.0,
            f_min: -10.0,
            f_max: 10.0,
        }
    }
}

impl CartParameters {
    /// Total moving mass, `m1 + m2 + mc`.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.m1 + self.m2 + self.mc
    }
}
