//! Planetary albedo and the temperatures it produces.
//!
//! The planet is treated as a single blackbody in radiative equilibrium;
//! each surface type then sits a fixed amount warmer or cooler than the
//! planetary mean depending on how much darker or lighter it is.

use crate::constants::{LOCAL_TEMPERATURE_COEFFICIENT, STEFAN_BOLTZMANN};

/// Planetary albedo as the cover-weighted mean of the three surface albedos.
///
/// Covers are expected to sum to the habitable fraction; nothing is
/// renormalised here.
pub fn planetary_albedo(
    white_cover: f64,
    black_cover: f64,
    ground_cover: f64,
    white_albedo: f64,
    black_albedo: f64,
    ground_albedo: f64,
) -> f64 {
    white_cover * white_albedo + black_cover * black_albedo + ground_cover * ground_albedo
}

/// Equilibrium blackbody temperature (K) for the absorbed stellar flux.
///
/// # Arguments
/// - `solar_constant`: incoming flux at luminosity 1.0, W/m²
/// - `planetary_albedo`: fraction of the flux reflected
/// - `luminosity`: relative stellar output
pub fn planetary_temperature(solar_constant: f64, planetary_albedo: f64, luminosity: f64) -> f64 {
    let absorbed_w_m2 = luminosity * solar_constant * (1.0 - planetary_albedo);
    (absorbed_w_m2 / STEFAN_BOLTZMANN).powf(0.25)
}

/// Local temperature (K) of a surface with `surface_albedo`.
///
/// Surfaces darker than the planet run warmer, lighter ones cooler.
pub fn local_temperature(planetary_albedo: f64, surface_albedo: f64, planetary_temperature: f64) -> f64 {
    LOCAL_TEMPERATURE_COEFFICIENT * (planetary_albedo - surface_albedo) + planetary_temperature
}
