use crate::constants::{DEFAULT_GROUND_ALBEDO, DEFAULT_HABITABLE_FRACTION, DEFAULT_SOLAR_CONSTANT};
use crate::radiation::{planetary_albedo, planetary_temperature};
use crate::surface::{SurfaceCover, SurfaceProperty};
use crate::temp_utils::kelvin_to_celsius;
use serde::{Deserialize, Serialize};

/// Fixed planetary parameters shared by every luminosity step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// W/m² at luminosity 1.0
    pub solar_constant: f64,
    /// Share of the surface daisies can grow on; covers always sum to this
    pub habitable_fraction: f64,
    pub ground_albedo: f64,
}

impl Planet {
    pub fn new(solar_constant: f64, habitable_fraction: f64, ground_albedo: f64) -> Planet {
        Planet {
            solar_constant,
            habitable_fraction,
            ground_albedo,
        }
    }
}

impl Default for Planet {
    fn default() -> Self {
        Planet::new(
            DEFAULT_SOLAR_CONSTANT,
            DEFAULT_HABITABLE_FRACTION,
            DEFAULT_GROUND_ALBEDO,
        )
    }
}

/// Albedo and temperature of the whole planet for one cover state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetState {
    pub albedo: f64,
    pub temperature_k: f64,
}

impl PlanetState {
    pub fn from_cover(
        planet: &Planet,
        white: &SurfaceProperty,
        black: &SurfaceProperty,
        cover: &SurfaceCover,
        luminosity: f64,
    ) -> PlanetState {
        let albedo = planetary_albedo(
            cover.white,
            cover.black,
            cover.ground,
            white.albedo,
            black.albedo,
            planet.ground_albedo,
        );
        PlanetState {
            albedo,
            temperature_k: planetary_temperature(planet.solar_constant, albedo, luminosity),
        }
    }

    pub fn temperature_c(&self) -> f64 {
        kelvin_to_celsius(self.temperature_k)
    }
}
