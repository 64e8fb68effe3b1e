// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::interp::clamp;

/// Denominators below this are treated as a step function.
const MIN_SPAN: f64 = 1e-6;

/// Local progress of an item whose start is delayed by `offset` within a
/// shared global progress.
///
/// `local = clamp((progress - offset) / (1 - offset), 0, 1)`.
///
/// Items with a larger offset start later, but every item reaches `1` exactly
/// when `progress` reaches `1`. `offset` is clamped into `[0, 1]`. When the
/// remaining span `1 - offset` is too small to divide by, the item snaps from
/// `0` to `1` at the end of the global progress.
#[must_use]
pub fn stagger(progress: f64, offset: f64) -> f64 {
    let progress = clamp(progress, 0.0, 1.0);
    let offset = clamp(offset, 0.0, 1.0);
    let span = 1.0 - offset;
    if span < MIN_SPAN {
        return if progress >= 1.0 { 1.0 } else { 0.0 };
    }
    clamp((progress - offset) / span, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::stagger;

    #[test]
    fn zero_until_offset_then_one_at_end() {
        for offset in [0.0, 0.12, 0.22, 0.34, 0.5, 0.9, 0.999_999_9] {
            assert_eq!(stagger(offset, offset), 0.0);
            assert_eq!(stagger(offset * 0.5, offset), 0.0);
            assert_eq!(stagger(1.0, offset), 1.0, "offset {offset} must finish at 1");
        }
    }

    #[test]
    fn no_offset_is_identity() {
        assert_eq!(stagger(0.37, 0.0), 0.37);
    }

    #[test]
    fn later_offsets_lag_behind() {
        let early = stagger(0.6, 0.1);
        let late = stagger(0.6, 0.4);
        assert!(late < early);
    }

    #[test]
    fn degenerate_offset_is_a_step() {
        assert_eq!(stagger(0.99, 1.0), 0.0);
        assert_eq!(stagger(1.0, 1.0), 1.0);
        assert!(stagger(0.5, 1.0).is_finite());
    }
}
