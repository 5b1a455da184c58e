//! TOML run configuration.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults of the matching parameter and initial-condition types.
//!
//! ```toml
//! [parameters]
//! m2 = 2.0
//!
//! [initial]
//! th1 = 90.0
//!
//! [time]
//! t_stop = 10.0
//! dt = 0.005
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    CartInitialConditions, Error, GridError, InitialConditions, TimeGrid, cart::CartParameters,
    pendulum::PendulumParameters,
};

/// The `[time]` section: total duration and step, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub t_stop: f64,
    pub dt: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        let grid = TimeGrid::default();
        Self {
            t_stop: grid.t_stop(),
            dt: grid.dt(),
        }
    }
}

impl TimeConfig {
    /// Builds the time grid described by this section.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the values do not describe a valid grid.
    pub fn grid(&self) -> Result<TimeGrid, GridError> {
        TimeGrid::new(self.t_stop, self.dt)
    }
}

/// Configuration of a double pendulum run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumConfig {
    pub parameters: PendulumParameters,
    pub initial: InitialConditions,
    pub time: TimeConfig,
}

/// Configuration of a double pendulum on a cart run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub parameters: CartParameters,
    pub initial: CartInitialConditions,
    pub time: TimeConfig,
}

impl PendulumConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid for this config.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}

impl CartConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid for this config.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
