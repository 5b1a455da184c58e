use thiserror::Error;

/// Ratios `t_stop / dt` closer than this to an integer count as that integer.
const RATIO_SNAP: f64 = 1e-9;

/// The sample instants of a run: `0, dt, 2·dt, …` strictly below `t_stop`.
///
/// The number of samples is `floor(t_stop / dt)`, with ratios that land a
/// rounding error short of an integer snapped up, so `t_stop = 0.3` with
/// `dt = 0.1` has three samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t_stop: f64,
    dt: f64,
    len: usize,
}

/// Errors that can occur when building a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("t_stop must be finite and positive, got {0}")]
    StopTime(f64),

    #[error("dt must be finite and positive, got {0}")]
    Step(f64),

    #[error("dt ({dt}) leaves no samples below t_stop ({t_stop})")]
    Empty { t_stop: f64, dt: f64 },
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            t_stop: 5.0,
            dt: 0.01,
            len: 500,
        }
    }
}

impl TimeGrid {
    /// Creates a grid covering `[0, t_stop)` with step `dt`.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-finite or not positive, or if
    /// the grid would hold no samples.
    pub fn new(t_stop: f64, dt: f64) -> Result<Self, GridError> {
        if !t_stop.is_finite() || t_stop <= 0.0 {
            return Err(GridError::StopTime(t_stop));
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(GridError::Step(dt));
        }

        let ratio = t_stop / dt;
        let nearest = ratio.round();
        let count = if (ratio - nearest).abs() <= RATIO_SNAP * nearest.max(1.0) {
            nearest
        } else {
            ratio.floor()
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = count as usize;
        if len == 0 {
            return Err(GridError::Empty { t_stop, dt });
        }

        Ok(Self { t_stop, dt, len })
    }

    /// Returns the total duration in seconds.
    #[must_use]
    pub fn t_stop(&self) -> f64 {
        self.t_stop
    }

    /// Returns the step size in seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a valid grid has at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the instant of sample `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    /// Iterates over all sample instants in order.
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.time(i))
    }

    /// Returns how many samples make up one second, `round(1 / dt)`, at least 1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn samples_per_second(&self) -> usize {
        ((1.0 / self.dt).round() as usize).max(1)
    }
}
