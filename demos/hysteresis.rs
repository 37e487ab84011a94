//! Runs the sweep up and then down the same luminosity range and shows
//! where the two directions settle on different daisy populations.

use colored::Colorize;
use daisyworld::config::DaisyworldConfig;
use daisyworld::sim::run_hysteresis;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let report = run_hysteresis(&DaisyworldConfig::default())?;
    let divergent = report.divergent_luminosities(0.01);

    println!("{}", "🔁 Hysteresis: ascending vs descending luminosity".bold());
    println!(
        "   {:>10} | {:>8} {:>8} {:>8} | {:>8} {:>8} {:>8}",
        "Luminosity", "White↑", "Black↑", "T↑(°C)", "White↓", "Black↓", "T↓(°C)"
    );

    for (up, down) in report
        .ascending
        .points()
        .iter()
        .zip(report.descending.points())
        .step_by(25)
    {
        let row = format!(
            "   {:>10.3} | {:>8.3} {:>8.3} {:>8.1} | {:>8.3} {:>8.3} {:>8.1}",
            up.luminosity,
            up.white_cover,
            up.black_cover,
            up.temperature_c(),
            down.white_cover,
            down.black_cover,
            down.temperature_c()
        );
        if divergent.contains(&up.luminosity) {
            println!("{}", row.red());
        } else {
            println!("{}", row);
        }
    }

    match (divergent.first(), divergent.last()) {
        (Some(low), Some(high)) => println!(
            "\n   {} luminosities differ between directions, L = {:.3} to {:.3}",
            divergent.len(),
            low,
            high
        ),
        _ => println!("\n   both directions agree everywhere"),
    }

    Ok(())
}
