/// Numeric helpers shared by the sweep driver and the tests.

/// Assert that the percentage deviation between two values is below a threshold
///
/// Calculates the deviation of `actual` from `expected` with
/// [`deviation`](crate::math_utils::deviation) and panics when it reaches
/// `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Half-open sequence `start, start + step, ...` stopping before `stop`
///
/// Each value is computed from its index rather than by repeated addition,
/// so long sweeps don't accumulate drift. A value within rounding error of
/// `stop` counts as `stop` and is excluded. Returns an empty vector when
/// `step` is not positive or the range is empty.
///
/// # Examples
/// ```
/// use daisyworld::math_utils::luminosity_range;
///
/// assert_eq!(luminosity_range(0.5, 1.0, 0.25), vec![0.5, 0.75]);
/// assert!(luminosity_range(1.0, 0.5, 0.1).is_empty());
/// ```
pub fn luminosity_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(start < stop) {
        return Vec::new();
    }
    let end = stop - step * 1e-9;
    let count = ((stop - start) / step).ceil() as usize;
    (0..count)
        .map(|i| start + i as f64 * step)
        .filter(|&value| value < end)
        .collect()
}

/// Calculate the percentage deviation between two values
///
/// Uses the expected value as the base for the percentage.
///
/// # Examples
/// ```
/// use daisyworld::math_utils::deviation;
///
/// // 105 is 5% higher than 100
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}
