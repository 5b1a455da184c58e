use serde::{Deserialize, Serialize};

/// Physical constants of a double pendulum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParameters {
    /// Length of the upper rod (m).
    pub l1: f64,
    /// Length of the lower rod (m).
    pub l2: f64,
    /// Mass at the end of the upper rod (kg).
    pub m1: f64,
    /// Mass at the end of the lower rod (kg).
    pub m2: f64,
    /// Gravitational acceleration (m/s²).
    pub g: f64,
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            l1: 1.0,
            l2: 1.0,
            m1: 1.0,
            m2: 1.0,
            g: 9.8,
        }
    }
}
