pub mod config;
pub mod constants;
pub mod error;
pub mod growth;
pub mod math_utils;
pub mod planet;
pub mod population;
pub mod radiation;
pub mod sim;
pub mod surface;
pub mod sweep_op;
pub mod temp_utils;
