use crate::config::DaisyworldConfig;
use crate::sim::sweep::{SweepPoint, SweepTable};
use crate::sweep_op::SweepOp;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{info, warn};

/// CSV Writer Operator
///
/// Writes one row per luminosity as the sweep produces it, so a long sweep
/// can be watched or plotted while it runs.
///
/// Columns: `luminosity, white_cover, black_cover, temperature_k,
/// temperature_c, iterations, converged`.
pub struct CsvWriterOp {
    /// Path to the CSV file to write (created/overwritten on init)
    pub file_path: String,

    header_written: bool,
    rows_written: usize,
}

impl CsvWriterOp {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            header_written: false,
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    fn write_header(&mut self) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.file_path)?;

        writeln!(file, "luminosity,white_cover,black_cover,temperature_k,temperature_c,iterations,converged")?;

        self.header_written = true;
        self.rows_written = 0;
        Ok(())
    }

    fn write_point(&mut self, point: &SweepPoint) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new().append(true).open(&self.file_path)?;

        writeln!(
            file,
            "{:.4},{:.6},{:.6},{:.3},{:.3},{},{}",
            point.luminosity,
            point.white_cover,
            point.black_cover,
            point.temperature_k,
            point.temperature_c(),
            point.iterations,
            point.converged
        )?;

        self.rows_written += 1;
        Ok(())
    }
}

impl SweepOp for CsvWriterOp {
    fn name(&self) -> &str {
        "CsvWriter"
    }

    fn init_sweep(&mut self, _config: &DaisyworldConfig, _luminosities: &[f64]) {
        if let Err(e) = self.write_header() {
            warn!(path = %self.file_path, error = %e, "failed to write CSV header");
        }
    }

    fn after_point(&mut self, _index: usize, point: &SweepPoint) {
        if !self.header_written {
            return;
        }
        if let Err(e) = self.write_point(point) {
            warn!(path = %self.file_path, error = %e, "failed to write CSV row");
        }
    }

    fn after_sweep(&mut self, table: &SweepTable) {
        if self.header_written {
            info!(path = %self.file_path, rows = self.rows_written, of = table.len(), "sweep written to CSV");
        }
    }
}
