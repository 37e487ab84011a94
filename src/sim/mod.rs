pub mod equilibrium;
pub mod hysteresis;
pub mod sweep;

pub use equilibrium::{ConvergenceState, EquilibriumResult, EquilibriumSolver, TrajectoryPoint};
pub use hysteresis::{HysteresisReport, run_hysteresis};
pub use sweep::{LuminositySweep, SweepPoint, SweepTable};
