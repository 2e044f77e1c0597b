//! Color ramps for attribute contouring.
//!
//! A ramp is a static table of RGB control points sampled with clamped
//! linear interpolation over `[0, 1]`.

/// Lookup table of evenly spaced RGB control points
#[derive(Clone, Copy)]
pub struct ColorRamp {
    points: &'static [[f32; 3]],
}

impl ColorRamp {
    /// Sample the ramp at `t` in `[0, 1]`; out-of-range values clamp
    pub fn sample(&self, t: f32) -> [f32; 3] {
        let t = t.clamp(0.0, 1.0);
        let n = self.points.len();
        if n == 1 {
            return self.points[0];
        }

        let scaled = t * (n - 1) as f32;
        let i = (scaled.floor() as usize).min(n - 2);
        let frac = scaled - i as f32;

        let a = self.points[i];
        let b = self.points[i + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

/// Blue through cyan, green and yellow to red (the legacy legend palette)
pub const RAINBOW: ColorRamp = ColorRamp {
    points: &[
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
    ],
};

/// Perceptually uniform dark-violet to yellow
pub const VIRIDIS: ColorRamp = ColorRamp {
    points: &[
        [0.267, 0.005, 0.329],
        [0.283, 0.141, 0.458],
        [0.254, 0.265, 0.530],
        [0.207, 0.372, 0.553],
        [0.164, 0.471, 0.558],
        [0.128, 0.567, 0.551],
        [0.135, 0.659, 0.518],
        [0.267, 0.749, 0.441],
        [0.478, 0.821, 0.318],
        [0.741, 0.873, 0.150],
        [0.993, 0.906, 0.144],
    ],
};

/// Selectable ramp, default rainbow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RampKind {
    #[default]
    Rainbow,
    Viridis,
}

impl RampKind {
    pub fn ramp(self) -> ColorRamp {
        match self {
            RampKind::Rainbow => RAINBOW,
            RampKind::Viridis => VIRIDIS,
        }
    }

    pub fn all() -> [RampKind; 2] {
        [RampKind::Rainbow, RampKind::Viridis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_endpoints() {
        assert_eq!(RAINBOW.sample(0.0), [0.0, 0.0, 1.0]);
        assert_eq!(RAINBOW.sample(1.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rainbow_midpoint_is_green() {
        let c = RAINBOW.sample(0.5);
        assert!(c[0] < 0.01);
        assert!((c[1] - 1.0).abs() < 0.01);
        assert!(c[2] < 0.01);
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        assert_eq!(RAINBOW.sample(-1.0), RAINBOW.sample(0.0));
        assert_eq!(RAINBOW.sample(2.0), RAINBOW.sample(1.0));
    }

    #[test]
    fn test_sample_interpolates_between_points() {
        // Halfway between blue and cyan
        let c = RAINBOW.sample(0.125);
        assert!((c[1] - 0.5).abs() < 0.01);
        assert!((c[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_viridis_monotonic_red() {
        let mut prev = VIRIDIS.sample(0.1)[0];
        for i in 2..=10 {
            let r = VIRIDIS.sample(i as f32 / 10.0)[0];
            assert!(r >= prev - 0.05, "red channel should trend upward");
            prev = r;
        }
    }

    #[test]
    fn test_ramp_kind_default_is_rainbow() {
        assert_eq!(RampKind::default(), RampKind::Rainbow);
    }
}
