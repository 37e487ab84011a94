//! Run configuration for a Daisyworld sweep.
//!
//! Every field has a reference default, so a JSON config only needs to
//! name what it changes. [`DaisyworldConfig::validate`] is called before any
//! sweep runs so bad parameters fail up front instead of turning into NaNs.

use crate::constants::{
    DEFAULT_DEATH_RATE, DEFAULT_INITIAL_BLACK_COVER, DEFAULT_INITIAL_WHITE_COVER,
    DEFAULT_LUMINOSITY_START, DEFAULT_LUMINOSITY_STEP, DEFAULT_LUMINOSITY_STOP,
    DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_COVER, DEFAULT_TOLERANCE,
};
use crate::error::ConfigError;
use crate::math_utils::luminosity_range;
use crate::planet::Planet;
use crate::surface::{DaisyType, SurfaceCover, SurfaceProperty};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Limits for the fixed-point iteration at one luminosity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Luminosities to sweep; `stop` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuminosityRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    /// Sweep from the top of the range down
    pub descending: bool,
}

impl LuminosityRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self {
            start,
            stop,
            step,
            descending: false,
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            descending: !self.descending,
            ..*self
        }
    }

    /// Luminosities in sweep order.
    pub fn values(&self) -> Vec<f64> {
        let mut values = luminosity_range(self.start, self.stop, self.step);
        if self.descending {
            values.reverse();
        }
        values
    }
}

impl Default for LuminosityRange {
    fn default() -> Self {
        Self::new(
            DEFAULT_LUMINOSITY_START,
            DEFAULT_LUMINOSITY_STOP,
            DEFAULT_LUMINOSITY_STEP,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaisyworldConfig {
    pub planet: Planet,
    pub white: SurfaceProperty,
    pub black: SurfaceProperty,
    pub death_rate: f64,
    pub initial_white_cover: f64,
    pub initial_black_cover: f64,
    /// Extinction floor re-applied at the start of every luminosity step
    pub min_cover: f64,
    pub solver: SolverParams,
    pub luminosity: LuminosityRange,
}

impl Default for DaisyworldConfig {
    fn default() -> Self {
        Self {
            planet: Planet::default(),
            white: SurfaceProperty::white_default(),
            black: SurfaceProperty::black_default(),
            death_rate: DEFAULT_DEATH_RATE,
            initial_white_cover: DEFAULT_INITIAL_WHITE_COVER,
            initial_black_cover: DEFAULT_INITIAL_BLACK_COVER,
            min_cover: DEFAULT_MIN_COVER,
            solver: SolverParams::default(),
            luminosity: LuminosityRange::default(),
        }
    }
}

impl DaisyworldConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn surface(&self, daisy: DaisyType) -> &SurfaceProperty {
        match daisy {
            DaisyType::White => &self.white,
            DaisyType::Black => &self.black,
        }
    }

    pub fn initial_cover(&self) -> SurfaceCover {
        SurfaceCover::new(
            self.initial_white_cover,
            self.initial_black_cover,
            self.planet.habitable_fraction,
        )
    }

    /// Checks every parameter the model would otherwise accept silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.planet.habitable_fraction;

        finite("planet.solar_constant", self.planet.solar_constant)?;
        positive("planet.solar_constant", self.planet.solar_constant)?;
        finite("planet.habitable_fraction", p)?;
        if p <= 0.0 || p > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "planet.habitable_fraction",
                value: p,
                min: 0.0,
                max: 1.0,
            });
        }

        unit_interval("planet.ground_albedo", self.planet.ground_albedo)?;
        unit_interval("white.albedo", self.white.albedo)?;
        unit_interval("black.albedo", self.black.albedo)?;
        finite("white.optimum_temperature_k", self.white.optimum_temperature_k)?;
        positive("white.optimum_temperature_k", self.white.optimum_temperature_k)?;
        finite("black.optimum_temperature_k", self.black.optimum_temperature_k)?;
        positive("black.optimum_temperature_k", self.black.optimum_temperature_k)?;

        finite("death_rate", self.death_rate)?;
        non_negative("death_rate", self.death_rate)?;

        finite("initial_white_cover", self.initial_white_cover)?;
        non_negative("initial_white_cover", self.initial_white_cover)?;
        finite("initial_black_cover", self.initial_black_cover)?;
        non_negative("initial_black_cover", self.initial_black_cover)?;
        if self.initial_white_cover + self.initial_black_cover > p {
            return Err(ConfigError::CoverOverflow {
                white: self.initial_white_cover,
                black: self.initial_black_cover,
                habitable_fraction: p,
            });
        }

        finite("min_cover", self.min_cover)?;
        if self.min_cover < 0.0 || 2.0 * self.min_cover > p {
            return Err(ConfigError::OutOfRange {
                field: "min_cover",
                value: self.min_cover,
                min: 0.0,
                max: p / 2.0,
            });
        }

        if self.solver.max_iterations == 0 {
            return Err(ConfigError::InvalidSolver(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.solver.tolerance > 0.0) || !self.solver.tolerance.is_finite() {
            return Err(ConfigError::InvalidSolver(format!(
                "tolerance must be a positive number, got {}",
                self.solver.tolerance
            )));
        }

        finite("luminosity.start", self.luminosity.start)?;
        finite("luminosity.stop", self.luminosity.stop)?;
        finite("luminosity.step", self.luminosity.step)?;
        positive("luminosity.step", self.luminosity.step)?;
        non_negative("luminosity.start", self.luminosity.start)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f64::INFINITY,
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
