/// The rows produced by one `solve`, one state per grid sample.
///
/// Row `i` belongs to instant `i · dt`; row 0 is the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    rows: Vec<S>,
    dt: f64,
}

impl<S> Trajectory<S> {
    pub(crate) fn new(rows: Vec<S>, dt: f64) -> Self {
        Self { rows, dt }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the step between rows in seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns all rows in time order.
    #[must_use]
    pub fn rows(&self) -> &[S] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&S> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&S> {
        self.rows.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.rows.last()
    }

    /// Iterates over `(time, row)` pairs.
    #[allow(clippy::cast_precision_loss)]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, &S)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i as f64 * self.dt, row))
    }

    /// Consumes the trajectory and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<S> {
        self.rows
    }
}
