use crate::constants::GROWTH_CURVE_WIDTH;

/// Growth-rate coefficient for a surface at `local_temperature_k`.
///
/// Parabolic response peaked at 1.0 at the optimum, floored at zero away
/// from it, so the result is always in `[0, 1]`.
pub fn growth_rate(local_temperature_k: f64, optimum_temperature_k: f64) -> f64 {
    let offset = optimum_temperature_k - local_temperature_k;
    (1.0 - GROWTH_CURVE_WIDTH * offset * offset).max(0.0)
}
