// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`

use crate::interp::clamp;

/// Cubic ease-out: `1 - (1 - t)^3`.
///
/// Decelerates toward completion. Input is clamped to `[0, 1]`, so
/// `ease_out_cubic(0.0) == 0.0`, `ease_out_cubic(1.0) == 1.0`, and the curve is
/// monotonically non-decreasing in between.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - clamp(t, 0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Exponential ease-out: `1 - 2^(-10 t)`, pinned to exactly `1` at `t = 1`.
///
/// This is the inertial curve used by the smooth scroll driver.
#[must_use]
pub fn ease_out_expo(t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Named easing curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// [`ease_out_cubic`].
    OutCubic,
    /// [`ease_out_expo`].
    OutExpo,
}

impl Easing {
    /// Applies the curve to `t`, clamping `t` into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => clamp(t, 0.0, 1.0),
            Self::OutCubic => ease_out_cubic(t),
            Self::OutExpo => ease_out_expo(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Easing, ease_out_cubic, ease_out_expo};

    #[test]
    fn cubic_endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn cubic_is_monotonic_on_unit_interval() {
        let mut last = ease_out_cubic(0.0);
        for step in 1..=1000 {
            let v = ease_out_cubic(f64::from(step) / 1000.0);
            assert!(v >= last, "ease_out_cubic decreased at step {step}");
            last = v;
        }
    }

    #[test]
    fn cubic_decelerates() {
        // Front-loaded: half the input covers most of the output.
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn expo_endpoints_and_monotonicity() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        let mut last = 0.0;
        for step in 1..=100 {
            let v = ease_out_expo(f64::from(step) / 100.0);
            assert!(v >= last, "ease_out_expo decreased at step {step}");
            last = v;
        }
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        for easing in [Easing::Linear, Easing::OutCubic, Easing::OutExpo] {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(4.0), 1.0);
        }
    }
}
