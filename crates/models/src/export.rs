//! CSV export of solved trajectories.
//!
//! The pendulum writes the columns `th1 (rad), w1 (rad/s), th2 (rad), w2 (rad/s)`.
//! The cart prepends the applied force `f (N)` and appends `x (m), vx (m/s)`.
//! Values are written in their shortest round-trip form, so reading a file
//! back recovers the exact `f64` rows.

use std::io;

use serde::{Deserialize, Serialize};

use crate::{Error, ForceError, Trajectory, cart::CartState, pendulum::PendulumState};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PendulumRecord {
    #[serde(rename = "th1 (rad)")]
    th1: f64,
    #[serde(rename = "w1 (rad/s)")]
    w1: f64,
    #[serde(rename = "th2 (rad)")]
    th2: f64,
    #[serde(rename = "w2 (rad/s)")]
    w2: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CartRecord {
    #[serde(rename = "f (N)")]
    force: f64,
    #[serde(rename = "th1 (rad)")]
    th1: f64,
    #[serde(rename = "w1 (rad/s)")]
    w1: f64,
    #[serde(rename = "th2 (rad)")]
    th2: f64,
    #[serde(rename = "w2 (rad/s)")]
    w2: f64,
    #[serde(rename = "x (m)")]
    x: f64,
    #[serde(rename = "vx (m/s)")]
    vx: f64,
}

impl From<&PendulumState> for PendulumRecord {
    fn from(state: &PendulumState) -> Self {
        Self {
            th1: state.th1,
            w1: state.w1,
            th2: state.th2,
            w2: state.w2,
        }
    }
}

impl From<PendulumRecord> for PendulumState {
    fn from(record: PendulumRecord) -> Self {
        Self {
            th1: record.th1,
            w1: record.w1,
            th2: record.th2,
            w2: record.w2,
        }
    }
}

impl CartRecord {
    fn new(force: f64, state: &CartState) -> Self {
        Self {
            force,
            th1: state.th1,
            w1: state.w1,
            th2: state.th2,
            w2: state.w2,
            x: state.x,
            vx: state.vx,
        }
    }

    fn into_parts(self) -> (f64, CartState) {
        let state = CartState {
            th1: self.th1,
            w1: self.w1,
            th2: self.th2,
            w2: self.w2,
            x: self.x,
            vx: self.vx,
        };
        (self.force, state)
    }
}

/// Writes a pendulum trajectory as CSV, header first.
///
/// # Errors
///
/// Returns [`Error::Csv`] or [`Error::Io`] if writing fails.
pub fn write_pendulum_csv<W: io::Write>(
    writer: W,
    trajectory: &Trajectory<PendulumState>,
) -> Result<(), Error> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in trajectory.rows() {
        csv.serialize(PendulumRecord::from(row))?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes a cart trajectory as CSV, with `forces[i]` in the first column of row `i`.
///
/// # Errors
///
/// Returns [`Error::Force`] if `forces` does not have one value per row, or
/// [`Error::Csv`] or [`Error::Io`] if writing fails.
pub fn write_cart_csv<W: io::Write>(
    writer: W,
    trajectory: &Trajectory<CartState>,
    forces: &[f64],
) -> Result<(), Error> {
    if forces.len() != trajectory.len() {
        return Err(ForceError::Length {
            expected: trajectory.len(),
            actual: forces.len(),
        }
        .into());
    }

    let mut csv = csv::Writer::from_writer(writer);
    for (&force, row) in forces.iter().zip(trajectory.rows()) {
        csv.serialize(CartRecord::new(force, row))?;
    }
    csv.flush()?;
    Ok(())
}

/// Reads pendulum rows written by [`write_pendulum_csv`].
///
/// # Errors
///
/// Returns [`Error::Csv`] if the input is not a pendulum CSV.
pub fn read_pendulum_csv<R: io::Read>(reader: R) -> Result<Vec<PendulumState>, Error> {
    csv::Reader::from_reader(reader)
        .deserialize::<PendulumRecord>()
        .map(|record| record.map(PendulumState::from).map_err(Error::from))
        .collect()
}

/// Reads `(force, state)` rows written by [`write_cart_csv`].
///
/// # Errors
///
/// Returns [`Error::Csv`] if the input is not a cart CSV.
pub fn read_cart_csv<R: io::Read>(reader: R) -> Result<Vec<(f64, CartState)>, Error> {
    csv::Reader::from_reader(reader)
        .deserialize::<CartRecord>()
        .map(|record| record.map(CartRecord::into_parts).map_err(Error::from))
        .collect()
}
