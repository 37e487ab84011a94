//! Ascending vs descending sweeps over the same luminosities.

use crate::config::DaisyworldConfig;
use crate::error::ConfigError;
use crate::sim::sweep::{LuminositySweep, SweepTable};

#[derive(Debug, Clone, PartialEq)]
pub struct HysteresisReport {
    pub ascending: SweepTable,
    /// Descending sweep, re-sorted so rows line up with `ascending`
    pub descending: SweepTable,
}

impl HysteresisReport {
    /// Luminosities where the two sweep directions disagree on either daisy
    /// cover by more than `threshold`.
    pub fn divergent_luminosities(&self, threshold: f64) -> Vec<f64> {
        self.ascending
            .points()
            .iter()
            .zip(self.descending.points())
            .filter(|(up, down)| {
                (up.white_cover - down.white_cover).abs() > threshold
                    || (up.black_cover - down.black_cover).abs() > threshold
            })
            .map(|(up, _)| up.luminosity)
            .collect()
    }
}

/// Sweeps the configured range upwards and then downwards, each from the
/// configured initial covers.
pub fn run_hysteresis(config: &DaisyworldConfig) -> Result<HysteresisReport, ConfigError> {
    let mut up_config = config.clone();
    up_config.luminosity.descending = false;
    let down_config = DaisyworldConfig {
        luminosity: up_config.luminosity.reversed(),
        ..up_config.clone()
    };

    let ascending = LuminositySweep::new(up_config).run()?;
    let descending = LuminositySweep::new(down_config).run()?.sorted_by_luminosity();

    Ok(HysteresisReport {
        ascending,
        descending,
    })
}
