//! Configuration errors raised before a sweep starts.
//!
//! Non-convergence of the equilibrium solver is not an error: it is
//! reported through the `converged` flag on each result.

/// Errors that can occur while loading or validating a [`DaisyworldConfig`](crate::config::DaisyworldConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A bounded parameter fell outside its allowed interval.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter that must be non-negative (or positive) was not.
    #[error("{field} = {value} must be positive")]
    NotPositive { field: &'static str, value: f64 },

    /// A parameter was NaN or infinite.
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    /// Initial daisy covers leave no room inside the habitable fraction.
    #[error("white cover {white} + black cover {black} exceeds habitable fraction {habitable_fraction}")]
    CoverOverflow {
        white: f64,
        black: f64,
        habitable_fraction: f64,
    },

    /// Solver limits that would stop the solver from ever iterating.
    #[error("invalid solver settings: {0}")]
    InvalidSolver(String),

    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid JSON for a config.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
