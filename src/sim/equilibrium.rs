//! Fixed-point solver for the daisy populations at a single luminosity.
//!
//! Each iteration runs the radiation, growth and population models once and
//! takes an explicit Euler step. Iteration stops when both covers move by no
//! more than the tolerance, or when the iteration cap is hit. Hitting the cap
//! is not an error: the best available state comes back with
//! `converged == false`.

use crate::config::{DaisyworldConfig, SolverParams};
use crate::growth::growth_rate;
use crate::planet::{Planet, PlanetState};
use crate::population::{growth_increment, integrate_step};
use crate::radiation::local_temperature;
use crate::surface::{SurfaceCover, SurfaceProperty};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Progress of one solve; discarded once the solve returns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConvergenceState {
    pub iteration_count: usize,
    pub delta_white: f64,
    pub delta_black: f64,
}

impl ConvergenceState {
    pub fn within(&self, tolerance: f64) -> bool {
        self.delta_white <= tolerance && self.delta_black <= tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumResult {
    pub cover: SurfaceCover,
    /// Planet state from the iteration that produced `cover`, i.e. computed
    /// from the covers one step before it.
    pub planet: PlanetState,
    pub convergence: ConvergenceState,
    pub converged: bool,
}

/// One generation of a fixed-luminosity run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub generation: usize,
    pub white_cover: f64,
    pub black_cover: f64,
    pub temperature_k: f64,
}

#[derive(Debug, Clone)]
pub struct EquilibriumSolver {
    planet: Planet,
    white: SurfaceProperty,
    black: SurfaceProperty,
    death_rate: f64,
    params: SolverParams,
}

impl EquilibriumSolver {
    pub fn new(config: &DaisyworldConfig) -> Self {
        Self {
            planet: config.planet,
            white: config.white,
            black: config.black,
            death_rate: config.death_rate,
            params: config.solver,
        }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn habitable_fraction(&self) -> f64 {
        self.planet.habitable_fraction
    }

    /// Runs one iteration of the model.
    ///
    /// Returns the clamped covers after the Euler step together with the
    /// planet state that drove it (computed from the incoming covers).
    pub fn step(&self, cover: &SurfaceCover, luminosity: f64) -> (SurfaceCover, PlanetState) {
        let p = self.planet.habitable_fraction;
        let cover = SurfaceCover::new(cover.white, cover.black, p);
        let state = PlanetState::from_cover(&self.planet, &self.white, &self.black, &cover, luminosity);

        let white_t = local_temperature(state.albedo, self.white.albedo, state.temperature_k);
        let black_t = local_temperature(state.albedo, self.black.albedo, state.temperature_k);

        let white_growth = growth_rate(white_t, self.white.optimum_temperature_k);
        let black_growth = growth_rate(black_t, self.black.optimum_temperature_k);

        let white_rate = growth_increment(cover.white, cover.ground, white_growth, self.death_rate);
        let black_rate = growth_increment(cover.black, cover.ground, black_growth, self.death_rate);

        let next = SurfaceCover {
            white: integrate_step(cover.white, white_rate),
            black: integrate_step(cover.black, black_rate),
            ground: cover.ground,
        }
        .clamped(p);

        (next, state)
    }

    /// Iterates [`step`](Self::step) from `initial` until the covers settle.
    pub fn solve(&self, initial: &SurfaceCover, luminosity: f64) -> EquilibriumResult {
        let mut cover = SurfaceCover::new(initial.white, initial.black, self.planet.habitable_fraction);
        let mut convergence = ConvergenceState::default();
        let mut planet;

        loop {
            let (next, state) = self.step(&cover, luminosity);
            planet = state;

            convergence.iteration_count += 1;
            convergence.delta_white = (next.white - cover.white).abs();
            convergence.delta_black = (next.black - cover.black).abs();
            cover = next;

            if convergence.within(self.params.tolerance)
                || convergence.iteration_count >= self.params.max_iterations
            {
                break;
            }
        }

        let converged = convergence.within(self.params.tolerance);
        if converged {
            debug!(
                luminosity,
                iterations = convergence.iteration_count,
                white = cover.white,
                black = cover.black,
                temperature_k = planet.temperature_k,
                "equilibrium reached"
            );
        } else {
            warn!(
                luminosity,
                iterations = convergence.iteration_count,
                delta_white = convergence.delta_white,
                delta_black = convergence.delta_black,
                "iteration cap reached before covers settled"
            );
        }

        EquilibriumResult {
            cover,
            planet,
            convergence,
            converged,
        }
    }

    /// Runs `generations` iterations at a fixed luminosity and records each one.
    ///
    /// Unlike [`solve`](Self::solve) this never stops early, so the approach
    /// to equilibrium can be inspected generation by generation.
    pub fn trajectory(&self, initial: &SurfaceCover, luminosity: f64, generations: usize) -> Vec<TrajectoryPoint> {
        let mut cover = SurfaceCover::new(initial.white, initial.black, self.planet.habitable_fraction);
        let mut points = Vec::with_capacity(generations);

        for generation in 1..=generations {
            let (next, state) = self.step(&cover, luminosity);
            cover = next;
            points.push(TrajectoryPoint {
                generation,
                white_cover: cover.white,
                black_cover: cover.black,
                temperature_k: state.temperature_k,
            });
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radiation::planetary_temperature;
    use approx::assert_abs_diff_eq;
    use more_asserts::{assert_ge, assert_gt, assert_le, assert_lt};

    fn reference_solver() -> EquilibriumSolver {
        EquilibriumSolver::new(&DaisyworldConfig::default())
    }

    #[test]
    fn test_step_preserves_cover_total() {
        let solver = reference_solver();
        let mut cover = SurfaceCover::new(0.2, 0.5, 1.0);

        for _ in 0..200 {
            let (next, _) = solver.step(&cover, 1.0);
            assert_abs_diff_eq!(next.total(), 1.0, epsilon = 1e-12);
            assert_ge!(next.white, 0.0);
            assert_ge!(next.black, 0.0);
            assert_ge!(next.ground, 0.0);
            cover = next;
        }
    }

    #[test]
    fn test_step_leaves_extinct_planet_unchanged() {
        let solver = reference_solver();
        let cover = SurfaceCover::new(0.0, 0.0, 1.0);
        let (next, state) = solver.step(&cover, 1.0);

        assert_eq!(next, cover);
        assert_abs_diff_eq!(state.albedo, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_step_clamps_overshoot() {
        // death far above growth makes a plain Euler step go negative
        let mut config = DaisyworldConfig::default();
        config.death_rate = 1.5;
        let solver = EquilibriumSolver::new(&config);

        let (next, _) = solver.step(&SurfaceCover::new(0.3, 0.3, 1.0), 1.0);
        assert_eq!(next.white, 0.0);
        assert_eq!(next.black, 0.0);
        assert_eq!(next.ground, 1.0);
    }

    #[test]
    fn test_reference_scenario_converges() {
        let solver = reference_solver();
        let result = solver.solve(&SurfaceCover::new(0.2, 0.5, 1.0), 1.0);

        assert!(result.converged);
        assert_lt!(result.convergence.iteration_count, solver.params().max_iterations);
        assert_le!(result.convergence.delta_white, solver.params().tolerance);
        assert_le!(result.convergence.delta_black, solver.params().tolerance);

        // black daisies win at L = 1 and white ones die back
        assert_abs_diff_eq!(result.cover.black, 0.3645, epsilon = 1e-3);
        assert_lt!(result.cover.white, 1e-4);

        let coldest = planetary_temperature(1000.0, 0.75, 1.0);
        let hottest = planetary_temperature(1000.0, 0.25, 1.0);
        assert_gt!(result.planet.temperature_k, coldest);
        assert_lt!(result.planet.temperature_k, hottest);
        assert_abs_diff_eq!(result.planet.temperature_k, 319.54, epsilon = 0.05);
    }

    #[test]
    fn test_temperature_lags_final_cover_by_one_step() {
        let solver = reference_solver();
        let result = solver.solve(&SurfaceCover::new(0.2, 0.5, 1.0), 1.0);

        let mut cover = SurfaceCover::new(0.2, 0.5, 1.0);
        let mut last_state = None;
        for _ in 0..result.convergence.iteration_count {
            let (next, state) = solver.step(&cover, 1.0);
            cover = next;
            last_state = Some(state);
        }

        assert_eq!(cover, result.cover);
        assert_eq!(last_state, Some(result.planet));
    }

    #[test]
    fn test_iteration_cap_returns_best_state() {
        let mut config = DaisyworldConfig::default();
        config.solver.max_iterations = 3;
        let solver = EquilibriumSolver::new(&config);

        let result = solver.solve(&SurfaceCover::new(0.2, 0.5, 1.0), 1.0);
        assert!(!result.converged);
        assert_eq!(result.convergence.iteration_count, 3);
        assert_abs_diff_eq!(result.cover.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cold_star_kills_both_daisies() {
        let solver = reference_solver();
        let result = solver.solve(&SurfaceCover::new(0.01, 0.01, 1.0), 0.3);

        assert!(result.converged);
        assert_lt!(result.cover.white, 0.01);
        assert_lt!(result.cover.black, 0.01);
        assert_lt!(result.cover.white, 1e-5);
        assert_lt!(result.cover.black, 1e-5);
    }

    #[test]
    fn test_trajectory_matches_solver() {
        let solver = reference_solver();
        let initial = SurfaceCover::new(0.2, 0.5, 1.0);
        let result = solver.solve(&initial, 1.0);
        let points = solver.trajectory(&initial, 1.0, result.convergence.iteration_count);

        assert_eq!(points.len(), result.convergence.iteration_count);
        let last = points.last().unwrap();
        assert_eq!(last.generation, result.convergence.iteration_count);
        assert_eq!(last.white_cover, result.cover.white);
        assert_eq!(last.black_cover, result.cover.black);
        assert_eq!(last.temperature_k, result.planet.temperature_k);
    }
}
