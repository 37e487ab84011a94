//! Sweeps stellar luminosity and prints the daisy covers and planetary
//! temperature at each step. Writes the full table to `daisy_sweep.csv`.
//!
//! Usage: `cargo run --example daisy_sweep [config.json]`

use colored::Colorize;
use daisyworld::config::DaisyworldConfig;
use daisyworld::sim::LuminositySweep;
use daisyworld::surface::DaisyType;
use daisyworld::sweep_op::{CsvWriterOp, ProgressReportingOp};
use tracing_subscriber::EnvFilter;

const PRINT_EVERY: usize = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DaisyworldConfig::from_json_file(path)?,
        None => DaisyworldConfig::default(),
    };

    let table = LuminositySweep::new(config)
        .with_op(Box::new(ProgressReportingOp::new()))
        .with_op(Box::new(CsvWriterOp::new("daisy_sweep.csv".to_string())))
        .run()?;

    println!();
    println!("{}", "🌼 Daisyworld luminosity sweep".bold());
    println!(
        "   {:>10} {:>10} {:>10} {:>10} {:>6}",
        "Luminosity", "White %", "Black %", "Temp(°C)", "Iters"
    );
    for point in table.points().iter().step_by(PRINT_EVERY) {
        let row = format!(
            "   {:>10.3} {:>10.1} {:>10.1} {:>10.1} {:>6}",
            point.luminosity,
            point.white_cover * 100.0,
            point.black_cover * 100.0,
            point.temperature_c(),
            point.iterations
        );
        if point.converged {
            println!("{}", row);
        } else {
            println!("{}", row.yellow());
        }
    }

    println!();
    for daisy in DaisyType::ALL {
        match table.daisy_range(daisy, 0.01) {
            Some((low, high)) => println!(
                "   {} daisies from L = {:.3} to {:.3}",
                daisy.as_str(),
                low,
                high
            ),
            None => println!("   {} daisies never established", daisy.as_str()),
        }
    }
    if table.non_converged() > 0 {
        println!(
            "{}",
            format!("   ⚠️  {} luminosities hit the iteration cap", table.non_converged()).yellow()
        );
    }

    Ok(())
}
