//! Fixed luminosity of 1.0 starting from 20% white and 50% black cover.
//! Prints the approach to equilibrium generation by generation.

use colored::Colorize;
use daisyworld::config::DaisyworldConfig;
use daisyworld::sim::EquilibriumSolver;
use daisyworld::surface::SurfaceCover;
use daisyworld::temp_utils::kelvin_to_celsius;
use tracing_subscriber::EnvFilter;

const LUMINOSITY: f64 = 1.0;
const GENERATIONS: usize = 40;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = DaisyworldConfig::default();
    let solver = EquilibriumSolver::new(&config);
    let initial = SurfaceCover::new(0.2, 0.5, config.planet.habitable_fraction);

    println!("{}", format!("🌍 Daisyworld at L = {:.1}", LUMINOSITY).bold());
    println!("   {:>4} {:>10} {:>10} {:>10}", "Gen", "White %", "Black %", "Temp(°C)");
    for point in solver.trajectory(&initial, LUMINOSITY, GENERATIONS) {
        println!(
            "   {:>4} {:>10.2} {:>10.2} {:>10.2}",
            point.generation,
            point.white_cover * 100.0,
            point.black_cover * 100.0,
            kelvin_to_celsius(point.temperature_k)
        );
    }

    let result = solver.solve(&initial, LUMINOSITY);
    let summary = format!(
        "   equilibrium after {} iterations: white {:.2}%, black {:.2}%, {:.2}°C",
        result.convergence.iteration_count,
        result.cover.white * 100.0,
        result.cover.black * 100.0,
        result.planet.temperature_c()
    );
    if result.converged {
        println!("\n{}", summary.green());
    } else {
        println!("\n{}", summary.yellow());
    }
}
