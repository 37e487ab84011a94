/// Progress reporting operation
/// Logs the current equilibrium every N% of the sweep and a survival summary at the end

use crate::config::DaisyworldConfig;
use crate::sim::sweep::{SweepPoint, SweepTable};
use crate::surface::DaisyType;
use crate::sweep_op::SweepOp;
use tracing::info;

// covers at or below this count as extinct in the summary
const PRESENCE_THRESHOLD: f64 = 0.01;

pub struct ProgressReportingOp {
    pub report_frequency_percent: f64,
    total_points: usize,
    last_milestone: Option<i64>,
    reports: usize,
}

impl ProgressReportingOp {
    pub fn new() -> Self {
        Self::with_frequency(10.0)
    }

    pub fn with_frequency(report_frequency_percent: f64) -> Self {
        Self {
            report_frequency_percent,
            total_points: 0,
            last_milestone: None,
            reports: 0,
        }
    }

    /// Number of progress lines logged so far
    pub fn reports(&self) -> usize {
        self.reports
    }

    fn milestone(&self, index: usize) -> i64 {
        let progress_percent = ((index + 1) as f64 / self.total_points as f64) * 100.0;
        (progress_percent / self.report_frequency_percent).floor() as i64
    }
}

impl Default for ProgressReportingOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepOp for ProgressReportingOp {
    fn name(&self) -> &str {
        "ProgressReporting"
    }

    fn init_sweep(&mut self, config: &DaisyworldConfig, luminosities: &[f64]) {
        self.total_points = luminosities.len();
        self.last_milestone = None;
        self.reports = 0;
        info!(
            points = self.total_points,
            descending = config.luminosity.descending,
            every_percent = self.report_frequency_percent,
            "sweep started"
        );
    }

    fn after_point(&mut self, index: usize, point: &SweepPoint) {
        if self.total_points == 0 || !(self.report_frequency_percent > 0.0) {
            return;
        }
        let milestone = self.milestone(index);
        if self.last_milestone.is_some_and(|last| milestone <= last) {
            return;
        }
        self.last_milestone = Some(milestone);
        self.reports += 1;

        info!(
            step = index + 1,
            of = self.total_points,
            luminosity = point.luminosity,
            white = point.white_cover,
            black = point.black_cover,
            temperature_c = point.temperature_c(),
            "sweep progress"
        );
    }

    fn after_sweep(&mut self, table: &SweepTable) {
        for daisy in DaisyType::ALL {
            match table.daisy_range(daisy, PRESENCE_THRESHOLD) {
                Some((low, high)) => info!(daisy = daisy.as_str(), from = low, to = high, "daisies present"),
                None => info!(daisy = daisy.as_str(), "daisies never established"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LuminosityRange;
    use crate::sim::LuminositySweep;

    #[test]
    fn test_reports_once_per_milestone() {
        let mut op = ProgressReportingOp::with_frequency(25.0);
        let luminosities: Vec<f64> = (0..8).map(|i| 0.6 + i as f64 * 0.1).collect();
        op.init_sweep(&DaisyworldConfig::default(), &luminosities);

        let point = SweepPoint {
            luminosity: 1.0,
            white_cover: 0.3,
            black_cover: 0.2,
            temperature_k: 295.0,
            iterations: 40,
            converged: true,
        };
        for index in 0..luminosities.len() {
            op.after_point(index, &point);
        }

        // 12.5%, 25%, 50%, 75%, 100% cross milestones 0..=4
        assert_eq!(op.reports(), 5);
    }

    #[test]
    fn test_runs_inside_sweep() {
        let mut config = DaisyworldConfig::default();
        config.luminosity = LuminosityRange::new(0.7, 0.8, 0.01);

        let table = LuminositySweep::new(config)
            .with_op(Box::new(ProgressReportingOp::new()))
            .run()
            .unwrap();
        assert_eq!(table.len(), 10);
    }
}
