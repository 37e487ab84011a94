// Physical constants
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8; // W⋅m⁻²⋅K⁻⁴
pub const TO_KELVIN: f64 = 273.15;

// K of local warming per unit of albedo below the planetary mean
pub const LOCAL_TEMPERATURE_COEFFICIENT: f64 = 20.0;
// growth reaches zero ~17.5 K either side of the optimum
pub const GROWTH_CURVE_WIDTH: f64 = 0.003265;

// default planet settings:
pub const DEFAULT_SOLAR_CONSTANT: f64 = 1000.0; // W/m²
pub const DEFAULT_HABITABLE_FRACTION: f64 = 1.0;
pub const DEFAULT_GROUND_ALBEDO: f64 = 0.5;

// default daisy settings:
pub const DEFAULT_WHITE_ALBEDO: f64 = 0.75;
pub const DEFAULT_BLACK_ALBEDO: f64 = 0.25;
pub const DEFAULT_WHITE_OPTIMUM_K: f64 = 280.0;
pub const DEFAULT_BLACK_OPTIMUM_K: f64 = 310.0;
pub const DEFAULT_DEATH_RATE: f64 = 0.3;
pub const DEFAULT_INITIAL_WHITE_COVER: f64 = 0.01;
pub const DEFAULT_INITIAL_BLACK_COVER: f64 = 0.01;
pub const DEFAULT_MIN_COVER: f64 = 0.01;

// Solver cutoffs
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
pub const DEFAULT_TOLERANCE: f64 = 0.000001;

// Luminosity sweep, stop is exclusive
pub const DEFAULT_LUMINOSITY_START: f64 = 0.5;
pub const DEFAULT_LUMINOSITY_STOP: f64 = 1.6;
pub const DEFAULT_LUMINOSITY_STEP: f64 = 0.002;
