/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic ODE solvers to work with the type by
/// stepping it via `derivative * delta`, where the derivative is with respect
/// to `Delta`. For the models in this workspace `Delta` is a time step in
/// seconds given as a plain `f64`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    // Single rotating joint: angle and angular velocity.
    #[derive(Debug, PartialEq)]
    struct Joint {
        angle: f64,
        omega: f64,
    }

    struct JointRates {
        omega: f64,
        alpha: f64,
    }

    impl StepIntegrable<f64> for Joint {
        type Derivative = JointRates;

        fn step(&self, derivative: JointRates, dt: f64) -> Self {
            Joint {
                angle: self.angle + derivative.omega * dt,
                omega: self.omega + derivative.alpha * dt,
            }
        }
    }

    // Fixed-size state vector.
    #[derive(Debug, PartialEq)]
    struct Packed([f64; 4]);

    impl StepIntegrable<f64> for Packed {
        type Derivative = [f64; 4];

        fn step(&self, derivative: [f64; 4], dt: f64) -> Self {
            Packed(std::array::from_fn(|i| self.0[i] + derivative[i] * dt))
        }
    }

    #[test]
    fn step_joint_state() {
        let joint = Joint {
            angle: 0.0,
            omega: 1.0,
        };
        let rates = JointRates {
            omega: 1.0,
            alpha: -2.0,
        };

        let next = joint.step(rates, 0.5);

        assert_eq!(
            next,
            Joint {
                angle: 0.5,
                omega: 0.0
            }
        );
    }

    #[test]
    fn step_packed_state() {
        let state = Packed([1.0, 2.0, 3.0, 4.0]);
        let rates: DerivativeOf<Packed, f64> = [0.5, 0.0, -0.5, 1.0];

        let next = state.step(rates, 2.0);

        assert_eq!(next, Packed([2.0, 2.0, 2.0, 6.0]));
    }
}
