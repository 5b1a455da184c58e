use crate::{DerivativeOf, StepIntegrable};

/// Connects a [`Model`](crate::Model) to a stepping solver.
///
/// The solver only knows how to advance a [`StepIntegrable`] state. This trait
/// tells it where that state lives in the model input, which part of the
/// model output is its derivative, and how to rebuild an input around a
/// stepped state. Values the model needs besides the state, such as a step
/// counter or an applied force, ride along in the input through
/// [`build_input`](Self::build_input).
///
/// # Example
///
/// A cart on a track of length 2 centred on the origin. The derivative is
/// `(vx, ax)` and [`finalize_step`](Self::finalize_step) stops the cart at
/// either end.
///
/// ```
/// use std::convert::Infallible;
///
/// use swing_core::{OdeProblem, StepIntegrable};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Cart {
///     x: f64,
///     vx: f64,
/// }
///
/// impl StepIntegrable<f64> for Cart {
///     type Derivative = (f64, f64);
///
///     fn step(&self, (dx, dvx): (f64, f64), dt: f64) -> Self {
///         Cart {
///             x: self.x + dx * dt,
///             vx: self.vx + dvx * dt,
///         }
///     }
/// }
///
/// struct Track;
///
/// impl OdeProblem for Track {
///     type Input = Cart;
///     type Output = f64;
///     type Delta = f64;
///     type State = Cart;
///     type Error = Infallible;
///
///     fn state(&self, input: &Cart) -> Result<Cart, Infallible> {
///         Ok(*input)
///     }
///
///     fn derivative(&self, input: &Cart, ax: &f64) -> Result<(f64, f64), Infallible> {
///         Ok((input.vx, *ax))
///     }
///
///     fn build_input(&self, _base: &Cart, state: &Cart, _dt: &f64) -> Result<Cart, Infallible> {
///         Ok(*state)
///     }
///
///     fn finalize_step(
///         &self,
///         next: Cart,
///         _prev: &Cart,
///         _ax: &f64,
///         _dt: &f64,
///     ) -> Result<Cart, Infallible> {
///         if next.x.abs() > 1.0 {
///             return Ok(Cart {
///                 x: next.x.signum(),
///                 vx: 0.0,
///             });
///         }
///         Ok(next)
///     }
/// }
///
/// let start = Cart { x: 0.95, vx: 10.0 };
/// let stepped = start.step(Track.derivative(&start, &0.0)?, 0.01);
/// let next = Track.finalize_step(stepped, &start, &0.0, &0.01)?;
///
/// assert_eq!(next, Cart { x: 1.0, vx: 0.0 });
/// # Ok::<(), Infallible>(())
/// ```
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Pulls the steppable state out of a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Reads the state derivative from a model call.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Wraps a stepped state in the input for the next model call.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed, for example
    /// when a per-step lookup falls outside its table.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;

    /// Adjusts a freshly built input before the model sees it.
    ///
    /// The solver calls this once per step, right after
    /// [`build_input`](Self::build_input). Hard constraints such as a track
    /// limit belong here. The previous input and output are passed for
    /// constraints that depend on where the step came from.
    ///
    /// Returns the input unchanged unless overridden.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if finalization fails.
    fn finalize_step(
        &self,
        next_input: Self::Input,
        _prev_input: &Self::Input,
        _prev_output: &Self::Output,
        _step_delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        Ok(next_input)
    }
}
