// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Restricts `value` to the closed interval `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics. A NaN `value` yields `lo`, and if
/// `lo > hi` the result is `hi`.
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Linear interpolation between `a` and `b`.
///
/// Exact at both ends: `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
/// For `t` in `[0, 1]` the result never leaves the interval spanned by `a`
/// and `b`. Outside that range it extrapolates.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let value = a * (1.0 - t) + b * t;
    if (0.0..=1.0).contains(&t) {
        clamp(value, a.min(b), a.max(b))
    } else {
        value
    }
}

/// Component-wise [`lerp`] for translations.
#[must_use]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use super::{clamp, lerp, lerp_vec2};
    use kurbo::Vec2;

    #[test]
    fn clamp_stays_in_range_and_is_idempotent() {
        let cases = [
            (-5.0, 0.0, 1.0),
            (0.5, 0.0, 1.0),
            (7.0, 0.0, 1.0),
            (3.0, 3.0, 3.0),
            (-1e9, -10.0, 10.0),
        ];
        for (v, lo, hi) in cases {
            let once = clamp(v, lo, hi);
            assert!(once >= lo && once <= hi, "{once} outside [{lo}, {hi}]");
            assert_eq!(clamp(once, lo, hi), once, "clamp must be idempotent");
        }
    }

    #[test]
    fn clamp_maps_nan_to_lower_bound() {
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn lerp_is_exact_at_endpoints() {
        let pairs = [(0.1, 0.3), (-240.0, 0.0), (1.28, 1.0), (5.0, 5.0)];
        for (a, b) in pairs {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn lerp_is_bounded_for_unit_t() {
        for step in 0..=100 {
            let t = f64::from(step) / 100.0;
            for (a, b) in [(-13.0, 7.5), (7.5, -13.0), (0.1, 0.3)] {
                let v = lerp(a, b, t);
                assert!(v >= a.min(b) && v <= a.max(b), "lerp({a}, {b}, {t}) = {v}");
            }
        }
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range() {
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn lerp_vec2_interpolates_each_axis() {
        let v = lerp_vec2(Vec2::new(0.0, -240.0), Vec2::new(10.0, 0.0), 0.5);
        assert_eq!(v, Vec2::new(5.0, -120.0));
    }
}
