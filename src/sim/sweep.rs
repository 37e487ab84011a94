//! Luminosity sweep: solves the equilibrium at each luminosity in order,
//! seeding every solve with the covers the previous one converged to.
//!
//! Carrying the state forward (instead of resetting per luminosity) is what
//! makes the result path dependent, so the sweep is strictly sequential.

use crate::config::DaisyworldConfig;
use crate::error::ConfigError;
use crate::sim::equilibrium::EquilibriumSolver;
use crate::surface::DaisyType;
use crate::sweep_op::SweepOp;
use crate::temp_utils::kelvin_to_celsius;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Converged result for one luminosity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub luminosity: f64,
    pub white_cover: f64,
    pub black_cover: f64,
    pub temperature_k: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl SweepPoint {
    pub fn cover(&self, daisy: DaisyType) -> f64 {
        match daisy {
            DaisyType::White => self.white_cover,
            DaisyType::Black => self.black_cover,
        }
    }

    pub fn temperature_c(&self) -> f64 {
        kelvin_to_celsius(self.temperature_k)
    }
}

/// Output table of a sweep, one row per luminosity in sweep order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SweepTable {
    points: Vec<SweepPoint>,
}

impl SweepTable {
    pub fn new(points: Vec<SweepPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn luminosities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.luminosity).collect()
    }

    pub fn white_covers(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.white_cover).collect()
    }

    pub fn black_covers(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.black_cover).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature_k).collect()
    }

    pub fn non_converged(&self) -> usize {
        self.points.iter().filter(|p| !p.converged).count()
    }

    /// Lowest and highest luminosity at which `daisy` covers more than `threshold`.
    pub fn daisy_range(&self, daisy: DaisyType, threshold: f64) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.cover(daisy) > threshold)
            .fold(None, |range, p| match range {
                None => Some((p.luminosity, p.luminosity)),
                Some((low, high)) => Some((low.min(p.luminosity), high.max(p.luminosity))),
            })
    }

    /// Rows ordered by increasing luminosity.
    pub fn sorted_by_luminosity(&self) -> SweepTable {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.luminosity.total_cmp(&b.luminosity));
        SweepTable { points }
    }
}

pub struct LuminositySweep {
    config: DaisyworldConfig,
    ops: Vec<Box<dyn SweepOp>>,
}

impl LuminositySweep {
    pub fn new(config: DaisyworldConfig) -> Self {
        Self {
            config,
            ops: Vec::new(),
        }
    }

    pub fn with_op(mut self, op: Box<dyn SweepOp>) -> Self {
        self.ops.push(op);
        self
    }

    pub fn config(&self) -> &DaisyworldConfig {
        &self.config
    }

    /// Validates the config, then sweeps every luminosity in order.
    pub fn run(&mut self) -> Result<SweepTable, ConfigError> {
        self.config.validate()?;

        let luminosities = self.config.luminosity.values();
        let solver = EquilibriumSolver::new(&self.config);
        let p = self.config.planet.habitable_fraction;
        let mut cover = self.config.initial_cover();
        let mut points = Vec::with_capacity(luminosities.len());

        for op in self.ops.iter_mut() {
            op.init_sweep(&self.config, &luminosities);
        }

        for (index, &luminosity) in luminosities.iter().enumerate() {
            let seed = cover.apply_floor(self.config.min_cover, p);
            let result = solver.solve(&seed, luminosity);
            cover = result.cover;

            let point = SweepPoint {
                luminosity,
                white_cover: result.cover.white,
                black_cover: result.cover.black,
                temperature_k: result.planet.temperature_k,
                iterations: result.convergence.iteration_count,
                converged: result.converged,
            };
            for op in self.ops.iter_mut() {
                op.after_point(index, &point);
            }
            points.push(point);
        }

        let table = SweepTable::new(points);
        info!(
            points = table.len(),
            non_converged = table.non_converged(),
            descending = self.config.luminosity.descending,
            "luminosity sweep complete"
        );

        for op in self.ops.iter_mut() {
            op.after_sweep(&table);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LuminosityRange;
    use more_asserts::{assert_gt, assert_lt};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn point(luminosity: f64, white_cover: f64, black_cover: f64) -> SweepPoint {
        SweepPoint {
            luminosity,
            white_cover,
            black_cover,
            temperature_k: 290.0,
            iterations: 10,
            converged: true,
        }
    }

    #[test]
    fn test_table_columns_are_parallel() {
        let table = SweepTable::new(vec![point(0.8, 0.1, 0.4), point(0.9, 0.2, 0.3)]);

        assert_eq!(table.luminosities(), vec![0.8, 0.9]);
        assert_eq!(table.white_covers(), vec![0.1, 0.2]);
        assert_eq!(table.black_covers(), vec![0.4, 0.3]);
        assert_eq!(table.temperatures(), vec![290.0, 290.0]);
        assert_eq!(table.non_converged(), 0);
    }

    #[test]
    fn test_daisy_range() {
        let table = SweepTable::new(vec![
            point(0.6, 0.0, 0.0),
            point(0.7, 0.0, 0.2),
            point(0.8, 0.1, 0.4),
            point(0.9, 0.3, 0.0),
            point(1.0, 0.0, 0.0),
        ]);

        assert_eq!(table.daisy_range(DaisyType::White, 0.01), Some((0.8, 0.9)));
        assert_eq!(table.daisy_range(DaisyType::Black, 0.01), Some((0.7, 0.8)));
        assert_eq!(table.daisy_range(DaisyType::Black, 0.5), None);
    }

    #[test]
    fn test_empty_range_gives_empty_table() {
        let mut config = DaisyworldConfig::default();
        config.luminosity = LuminosityRange::new(1.0, 0.5, 0.1);

        let table = LuminositySweep::new(config).run().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.daisy_range(DaisyType::White, 0.0), None);
    }

    #[test]
    fn test_invalid_config_fails_before_sweep() {
        let mut config = DaisyworldConfig::default();
        config.death_rate = -1.0;

        assert!(LuminositySweep::new(config).run().is_err());
    }

    #[test]
    fn test_floor_reseeds_extinct_daisies() {
        // both populations die out at these luminosities, so every solve
        // after the first must start again from the floor
        let mut config = DaisyworldConfig::default();
        config.luminosity = LuminosityRange::new(0.3, 0.35, 0.01);
        let table = LuminositySweep::new(config.clone()).run().unwrap();

        let solver = EquilibriumSolver::new(&config);
        for p in table.points() {
            assert!(p.converged);
            assert_lt!(p.white_cover, config.min_cover);
            assert_lt!(p.black_cover, config.min_cover);

            let from_floor = solver.solve(&config.initial_cover().apply_floor(0.01, 1.0), p.luminosity);
            assert_eq!(from_floor.cover.white, p.white_cover);
            assert_eq!(from_floor.cover.black, p.black_cover);
        }
    }

    #[test]
    fn test_state_carries_forward() {
        // replaying each solve by hand, seeded with the previous row's covers,
        // reproduces the table exactly
        let mut config = DaisyworldConfig::default();
        config.luminosity = LuminosityRange::new(0.9, 1.0, 0.02);
        let table = LuminositySweep::new(config.clone()).run().unwrap();

        let solver = EquilibriumSolver::new(&config);
        let mut seed = config.initial_cover();
        for p in table.points() {
            let result = solver.solve(&seed.apply_floor(config.min_cover, 1.0), p.luminosity);
            assert_eq!(result.cover.white, p.white_cover);
            assert_eq!(result.cover.black, p.black_cover);
            assert_eq!(result.planet.temperature_k, p.temperature_k);
            seed = result.cover;
        }
    }

    struct CountingOp {
        counts: Rc<RefCell<(usize, usize, usize)>>,
    }

    impl SweepOp for CountingOp {
        fn name(&self) -> &str {
            "Counting"
        }

        fn init_sweep(&mut self, _config: &DaisyworldConfig, luminosities: &[f64]) {
            self.counts.borrow_mut().0 = luminosities.len();
        }

        fn after_point(&mut self, _index: usize, point: &SweepPoint) {
            assert_gt!(point.temperature_k, 0.0);
            self.counts.borrow_mut().1 += 1;
        }

        fn after_sweep(&mut self, table: &SweepTable) {
            self.counts.borrow_mut().2 = table.len();
        }
    }

    #[test]
    fn test_ops_see_every_point() {
        let counts = Rc::new(RefCell::new((0, 0, 0)));
        let mut config = DaisyworldConfig::default();
        config.luminosity = LuminosityRange::new(0.6, 0.7, 0.01);

        let table = LuminositySweep::new(config)
            .with_op(Box::new(CountingOp { counts: counts.clone() }))
            .run()
            .unwrap();

        assert_eq!(*counts.borrow(), (table.len(), table.len(), table.len()));
        assert_eq!(table.len(), 10);
    }
}
