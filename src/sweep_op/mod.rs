// Observers attached to a luminosity sweep
pub mod csv_writer_op;
pub mod progress_reporting_op;

pub use csv_writer_op::CsvWriterOp;
pub use progress_reporting_op::ProgressReportingOp;

use crate::config::DaisyworldConfig;
use crate::sim::sweep::{SweepPoint, SweepTable};

/// Hook into a [`LuminositySweep`](crate::sim::LuminositySweep).
///
/// Ops observe the sweep; they get shared references only and cannot
/// change what the solver carries forward.
pub trait SweepOp {
    /// The name of this operator (for identification and lookup)
    fn name(&self) -> &str;

    /// Called once before the first luminosity is solved
    fn init_sweep(&mut self, _config: &DaisyworldConfig, _luminosities: &[f64]) {
        // Default implementation does nothing
    }

    /// Called after each luminosity's equilibrium is recorded
    fn after_point(&mut self, _index: usize, _point: &SweepPoint) {
        // Default implementation does nothing
    }

    /// Called once with the finished table
    fn after_sweep(&mut self, _table: &SweepTable) {
        // Default implementation does nothing
    }
}
