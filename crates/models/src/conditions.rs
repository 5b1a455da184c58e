//! Initial conditions as supplied by callers: angles in degrees, angular
//! velocities in degrees per second.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uom::si::{
    angle::{degree, radian},
    angular_velocity::{degree_per_second, radian_per_second},
    f64::{Angle, AngularVelocity},
};

use crate::{cart::CartState, pendulum::PendulumState};

/// Initial conditions of a double pendulum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// Angle of the upper rod from the downward vertical (degrees).
    pub th1: f64,
    /// Angular velocity of the upper rod (degrees/s).
    pub w1: f64,
    /// Angle of the lower rod from the downward vertical (degrees).
    pub th2: f64,
    /// Angular velocity of the lower rod (degrees/s).
    pub w2: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            th1: 120.0,
            w1: 0.0,
            th2: -10.0,
            w2: 0.0,
        }
    }
}

impl InitialConditions {
    /// Hanging straight down, at rest.
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            th1: 0.0,
            w1: 0.0,
            th2: 0.0,
            w2: 0.0,
        }
    }

    /// Draws angles uniformly from `[0, 360)` degrees and angular velocities
    /// from `[-180, 180]` degrees/s.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            th1: rng.gen_range(0.0..360.0),
            w1: rng.gen_range(-180.0..=180.0),
            th2: rng.gen_range(0.0..360.0),
            w2: rng.gen_range(-180.0..=180.0),
        }
    }

    /// Converts to a state vector in radians and radians per second.
    #[must_use]
    pub fn to_state(&self) -> PendulumState {
        PendulumState {
            th1: radians(self.th1),
            w1: radians_per_second(self.w1),
            th2: radians(self.th2),
            w2: radians_per_second(self.w2),
        }
    }
}

/// Initial conditions of a double pendulum on a cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartInitialConditions {
    /// Angle of the upper rod (degrees).
    pub th1: f64,
    /// Angular velocity of the upper rod (degrees/s).
    pub w1: f64,
    /// Angle of the lower rod (degrees).
    pub th2: f64,
    /// Angular velocity of the lower rod (degrees/s).
    pub w2: f64,
    /// Cart position (m).
    pub x: f64,
    /// Cart velocity (m/s).
    pub vx: f64,
}

impl Default for CartInitialConditions {
    fn default() -> Self {
        Self {
            th1: 170.0,
            w1: 0.0,
            th2: 0.0,
            w2: 0.0,
            x: 0.0,
            vx: 0.0,
        }
    }
}

impl CartInitialConditions {
    /// Random rod angles and angular velocities as in
    /// [`InitialConditions::random`], with the cart at rest at `x = 0`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let rods = InitialConditions::random(rng);
        Self {
            th1: rods.th1,
            w1: rods.w1,
            th2: rods.th2,
            w2: rods.w2,
            x: 0.0,
            vx: 0.0,
        }
    }

    /// Converts to a state vector; angles become radians, the cart is unchanged.
    #[must_use]
    pub fn to_state(&self) -> CartState {
        CartState {
            th1: radians(self.th1),
            w1: radians_per_second(self.w1),
            th2: radians(self.th2),
            w2: radians_per_second(self.w2),
            x: self.x,
            vx: self.vx,
        }
    }
}

fn radians(degrees: f64) -> f64 {
    Angle::new::<degree>(degrees).get::<radian>()
}

fn radians_per_second(degrees_per_second: f64) -> f64 {
    AngularVelocity::new::<degree_per_second>(degrees_per_second).get::<radian_per_second>()
}
