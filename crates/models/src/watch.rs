use swing_solvers::transient::euler::{Action, Event};
use tracing::warn;

/// Latches on the first input of a run that is not finite.
pub(crate) struct NonFiniteWatch<I> {
    system: &'static str,
    is_finite: fn(&I) -> bool,
    warned: bool,
}

impl<I> NonFiniteWatch<I> {
    pub(crate) fn new(system: &'static str, is_finite: fn(&I) -> bool) -> Self {
        Self {
            system,
            is_finite,
            warned: false,
        }
    }

    /// Checks one input and warns if it is the first non-finite one.
    ///
    /// Returns `true` only for the call that issued the warning.
    pub(crate) fn check(&mut self, step: usize, input: &I) -> bool {
        if self.warned || (self.is_finite)(input) {
            return false;
        }
        self.warned = true;
        warn!(system = self.system, step, "state is no longer finite");
        true
    }
}

/// Builds an Euler observer that warns once when the state stops being finite.
///
/// Near-singular configurations can drive the derivatives to infinity. The
/// run is not interrupted and the values are kept as computed.
pub(crate) fn non_finite_warning<I, O>(
    system: &'static str,
    is_finite: fn(&I) -> bool,
) -> impl FnMut(&Event<I, O>) -> Option<Action> {
    let mut watch = NonFiniteWatch::new(system, is_finite);
    move |event: &Event<I, O>| {
        watch.check(event.step, &event.snapshot.input);
        None
    }
}
