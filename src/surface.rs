// src/surface.rs - Daisy types, their static properties and the cover fractions they occupy

use crate::constants::{
    DEFAULT_BLACK_ALBEDO, DEFAULT_BLACK_OPTIMUM_K, DEFAULT_WHITE_ALBEDO, DEFAULT_WHITE_OPTIMUM_K,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaisyType {
    White,
    Black,
}

impl DaisyType {
    pub const ALL: [DaisyType; 2] = [DaisyType::White, DaisyType::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            DaisyType::White => "white",
            DaisyType::Black => "black",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "white" => Some(DaisyType::White),
            "black" => Some(DaisyType::Black),
            _ => None,
        }
    }
}

/// Static parameters of one daisy type, constant for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceProperty {
    pub albedo: f64,
    pub optimum_temperature_k: f64,
}

impl SurfaceProperty {
    pub fn new(albedo: f64, optimum_temperature_k: f64) -> Self {
        Self {
            albedo,
            optimum_temperature_k,
        }
    }

    pub fn white_default() -> Self {
        Self::new(DEFAULT_WHITE_ALBEDO, DEFAULT_WHITE_OPTIMUM_K)
    }

    pub fn black_default() -> Self {
        Self::new(DEFAULT_BLACK_ALBEDO, DEFAULT_BLACK_OPTIMUM_K)
    }
}

/// Fractions of the habitable surface held by each daisy type and by bare ground.
///
/// `white + black + ground` always equals the habitable fraction the cover
/// was built with; `ground` is never stored independently of the daisies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceCover {
    pub white: f64,
    pub black: f64,
    pub ground: f64,
}

impl SurfaceCover {
    pub fn new(white: f64, black: f64, habitable_fraction: f64) -> Self {
        Self {
            white,
            black,
            ground: habitable_fraction - white - black,
        }
    }

    pub fn get(&self, daisy: DaisyType) -> f64 {
        match daisy {
            DaisyType::White => self.white,
            DaisyType::Black => self.black,
        }
    }

    pub fn total(&self) -> f64 {
        self.white + self.black + self.ground
    }

    /// Restores the cover invariants after an Euler step.
    ///
    /// Negative covers go to zero. If the daisies together overshoot the
    /// habitable fraction both are scaled down in proportion, then ground
    /// is recomputed from what is left.
    pub fn clamped(&self, habitable_fraction: f64) -> Self {
        let mut white = self.white.max(0.0);
        let mut black = self.black.max(0.0);
        let occupied = white + black;
        if occupied > habitable_fraction {
            let scale = habitable_fraction / occupied;
            white *= scale;
            black *= scale;
        }
        Self {
            white,
            black,
            ground: (habitable_fraction - white - black).max(0.0),
        }
    }

    /// Extinction floor applied at the start of every luminosity step.
    ///
    /// A daisy cover below `min_cover` is raised to exactly `min_cover` so
    /// the population can recolonise; covers at or above the floor are left
    /// alone. If raising one cover would overfill the habitable fraction the
    /// other, untouched cover gives up the difference.
    pub fn apply_floor(&self, min_cover: f64, habitable_fraction: f64) -> Self {
        let white_floored = self.white < min_cover;
        let black_floored = self.black < min_cover;
        let mut white = self.white.max(min_cover);
        let mut black = self.black.max(min_cover);

        let overflow = white + black - habitable_fraction;
        if overflow > 0.0 {
            if white_floored && !black_floored {
                black -= overflow;
            } else if black_floored && !white_floored {
                white -= overflow;
            }
        }

        Self::new(white, black, habitable_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_daisy_type_names() {
        for daisy in DaisyType::ALL {
            assert_eq!(DaisyType::from_str(daisy.as_str()), Some(daisy));
        }
        assert_eq!(DaisyType::from_str("purple"), None);
    }

    #[test]
    fn test_new_derives_ground() {
        let cover = SurfaceCover::new(0.2, 0.5, 1.0);
        assert_abs_diff_eq!(cover.ground, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(cover.total(), 1.0, epsilon = 1e-12);
        assert_eq!(cover.get(DaisyType::White), 0.2);
        assert_eq!(cover.get(DaisyType::Black), 0.5);
    }

    #[test]
    fn test_clamped_removes_negative_cover() {
        let cover = SurfaceCover {
            white: -0.05,
            black: 0.4,
            ground: 0.65,
        }
        .clamped(1.0);

        assert_eq!(cover.white, 0.0);
        assert_eq!(cover.black, 0.4);
        assert_abs_diff_eq!(cover.ground, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(cover.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_scales_overfilled_cover() {
        let cover = SurfaceCover {
            white: 0.9,
            black: 0.3,
            ground: -0.2,
        }
        .clamped(1.0);

        assert_abs_diff_eq!(cover.white, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(cover.black, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(cover.ground, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_floor_resets_to_exact_floor() {
        let cover = SurfaceCover::new(1.0e-7, 0.0, 1.0).apply_floor(0.01, 1.0);

        assert_eq!(cover.white, 0.01);
        assert_eq!(cover.black, 0.01);
        assert_abs_diff_eq!(cover.ground, 0.98, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_floor_keeps_healthy_cover() {
        let cover = SurfaceCover::new(0.4, 0.005, 1.0).apply_floor(0.01, 1.0);

        assert_eq!(cover.white, 0.4);
        assert_eq!(cover.black, 0.01);
        assert_abs_diff_eq!(cover.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_floor_on_full_planet() {
        let cover = SurfaceCover::new(1.0, 0.0, 1.0).apply_floor(0.01, 1.0);

        assert_eq!(cover.black, 0.01);
        assert_abs_diff_eq!(cover.white, 0.99, epsilon = 1e-12);
        assert_abs_diff_eq!(cover.ground, 0.0, epsilon = 1e-12);
    }
}
