//! Horizontal force applied to the cart, one value per grid sample.

use std::{borrow::Cow, iter};

use rand::Rng;
use thiserror::Error;

use crate::TimeGrid;

/// Control force sequence for a cart run.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ControlForce {
    /// No force at any sample.
    #[default]
    Zero,

    /// An explicit force (N) for each sample.
    Samples(Vec<f64>),
}

/// Errors that can occur when building or reading a control force.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ForceError {
    #[error("sequence has {actual} samples but the time grid has {expected}")]
    Length { expected: usize, actual: usize },

    #[error("no force at step {index}, the sequence has {len} samples")]
    OutOfRange { index: usize, len: usize },

    #[error("force bounds [{min}, {max}] must be finite with min <= max")]
    InvalidBounds { min: f64, max: f64 },
}

impl ControlForce {
    /// Builds a random staircase force.
    ///
    /// One value is drawn uniformly from `[f_min, f_max]` for each whole second
    /// of the grid and held for [`TimeGrid::samples_per_second`] samples. The
    /// last block is cut short so the sequence has exactly one value per sample.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::InvalidBounds`] if a bound is not finite or
    /// `f_min > f_max`.
    pub fn staircase<R: Rng>(
        rng: &mut R,
        grid: &TimeGrid,
        f_min: f64,
        f_max: f64,
    ) -> Result<Self, ForceError> {
        if !f_min.is_finite() || !f_max.is_finite() || f_min > f_max {
            return Err(ForceError::InvalidBounds {
                min: f_min,
                max: f_max,
            });
        }

        let block = grid.samples_per_second();
        let len = grid.len();

        let mut samples = Vec::with_capacity(len.next_multiple_of(block));
        for _ in 0..len.div_ceil(block) {
            let level = rng.gen_range(f_min..=f_max);
            samples.extend(iter::repeat_n(level, block));
        }
        samples.truncate(len);

        Ok(Self::Samples(samples))
    }

    /// A constant force at every sample of `grid`.
    #[must_use]
    pub fn constant(value: f64, grid: &TimeGrid) -> Self {
        Self::Samples(vec![value; grid.len()])
    }

    /// Returns one value per sample for a grid of `len` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::Length`] if an explicit sequence has a different
    /// number of samples.
    pub fn samples(&self, len: usize) -> Result<Cow<'_, [f64]>, ForceError> {
        match self {
            Self::Zero => Ok(Cow::Owned(vec![0.0; len])),
            Self::Samples(values) if values.len() == len => Ok(Cow::Borrowed(values)),
            Self::Samples(values) => Err(ForceError::Length {
                expected: len,
                actual: values.len(),
            }),
        }
    }
}

/// Looks up the force at `index`.
///
/// # Errors
///
/// Returns [`ForceError::OutOfRange`] past the end of `samples`.
pub(crate) fn force_at(samples: &[f64], index: usize) -> Result<f64, ForceError> {
    match samples.get(index) {
        Some(&force) => Ok(force),
        None => Err(ForceError::OutOfRange {
            index,
            len: samples.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    fn levels(samples: &[f64], block: usize) -> Vec<f64> {
        samples.chunks(block).map(|chunk| chunk[0]).collect()
    }

    #[test]
    fn staircase_holds_one_value_per_second() {
        let grid = TimeGrid::new(3.0, 0.01).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let force = ControlForce::staircase(&mut rng, &grid, -10.0, 10.0).unwrap();
        let samples = force.samples(grid.len()).unwrap();

        assert_eq!(samples.len(), 300);
        for block in samples.chunks(100) {
            assert_eq!(block.len(), 100);
            assert!(block.iter().all(|&f| f == block[0]));
            assert!((-10.0..=10.0).contains(&block[0]));
        }
    }

    #[test]
    fn staircase_blocks_differ() {
        let grid = TimeGrid::new(3.0, 0.01).unwrap();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let force = ControlForce::staircase(&mut rng, &grid, -10.0, 10.0).unwrap();
            let levels = levels(&force.samples(300).unwrap(), 100);
            assert!(levels.windows(2).any(|w| w[0] != w[1]), "seed {seed}");
        }
    }

    #[test]
    fn staircase_is_reproducible_with_a_seed() {
        let grid = TimeGrid::new(2.0, 0.05).unwrap();

        let a = ControlForce::staircase(&mut StdRng::seed_from_u64(9), &grid, -1.0, 1.0).unwrap();
        let b = ControlForce::staircase(&mut StdRng::seed_from_u64(9), &grid, -1.0, 1.0).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn staircase_truncates_partial_last_second() {
        let grid = TimeGrid::new(2.5, 0.1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let force = ControlForce::staircase(&mut rng, &grid, 0.0, 5.0).unwrap();
        let samples = force.samples(grid.len()).unwrap();

        assert_eq!(samples.len(), 25);
        assert!(samples[20..].iter().all(|&f| f == samples[20]));
    }

    #[test]
    fn staircase_with_equal_bounds_is_constant() {
        let grid = TimeGrid::new(3.0, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let force = ControlForce::staircase(&mut rng, &grid, 4.0, 4.0).unwrap();

        assert_eq!(force, ControlForce::Samples(vec![4.0; 6]));
    }

    #[test]
    fn staircase_rejects_inverted_bounds() {
        let grid = TimeGrid::default();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            ControlForce::staircase(&mut rng, &grid, 1.0, -1.0),
            Err(ForceError::InvalidBounds {
                min: 1.0,
                max: -1.0
            })
        );
    }

    #[test]
    fn zero_force_fits_any_grid() {
        let samples = ControlForce::Zero.samples(4).unwrap();
        assert_eq!(samples.as_ref(), &[0.0; 4]);
    }

    #[test]
    fn explicit_samples_must_match_grid() {
        let force = ControlForce::Samples(vec![1.0; 10]);

        assert!(force.samples(10).is_ok());
        assert_eq!(
            force.samples(12),
            Err(ForceError::Length {
                expected: 12,
                actual: 10
            })
        );
    }

    #[test]
    fn lookup_past_the_end_is_an_error() {
        let samples = [1.0, 2.0, 3.0];

        assert_eq!(force_at(&samples, 2), Ok(3.0));
        assert_eq!(
            force_at(&samples, 3),
            Err(ForceError::OutOfRange { index: 3, len: 3 })
        );
    }
}
