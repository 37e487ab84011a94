//! Replicator dynamics for a single daisy population.

/// Rate of change of one daisy cover per unit time.
///
/// Daisies only spread onto bare ground, so white and black compete for
/// `available_ground`. Positive when growth beats `death_rate`.
pub fn growth_increment(own_cover: f64, available_ground: f64, growth_rate: f64, death_rate: f64) -> f64 {
    own_cover * (available_ground * growth_rate - death_rate)
}

/// One explicit Euler step with unit time step.
///
/// Large rates can overshoot below zero; the caller clamps.
pub fn integrate_step(current_cover: f64, rate_of_change: f64) -> f64 {
    current_cover + rate_of_change
}
