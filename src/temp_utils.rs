//! Conversions between Kelvin and Celsius for reporting.

use crate::constants::TO_KELVIN;

/// Converts Celsius to Kelvin.
pub fn celsius_to_kelvin(temp_c: f64) -> f64 {
    temp_c + TO_KELVIN
}

/// Converts Kelvin to Celsius.
pub fn kelvin_to_celsius(temp_k: f64) -> f64 {
    temp_k - TO_KELVIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_celsius_kelvin_conversion() {
        let test_cases = vec![
            (0.0, 273.15),     // Freezing point of water
            (6.85, 280.0),     // White daisy optimum
            (36.85, 310.0),    // Black daisy optimum
            (-273.15, 0.0),    // Absolute zero
        ];

        for (celsius, expected_kelvin) in test_cases {
            let kelvin = celsius_to_kelvin(celsius);
            let back_to_celsius = kelvin_to_celsius(kelvin);

            assert_abs_diff_eq!(kelvin, expected_kelvin, epsilon = 0.01);
            assert_abs_diff_eq!(back_to_celsius, celsius, epsilon = 0.01);
        }
    }
}
