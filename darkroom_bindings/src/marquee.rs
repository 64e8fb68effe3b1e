// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

use darkroom_easing::Progress;

/// Loop period of the travel rows: a slow baseline that speeds up as the
/// section scrolls by, `max(90, 160 - 50 * progress)` seconds.
#[must_use]
pub fn travel_marquee_seconds(progress: Progress) -> f64 {
    (160.0 - progress.get() * 50.0).max(90.0)
}

/// Items repeated twice, so a row scrolled by half its width looks unchanged.
#[must_use]
pub fn looped<T: Clone>(items: &[T]) -> Vec<T> {
    let mut row = Vec::with_capacity(items.len() * 2);
    row.extend_from_slice(items);
    row.extend_from_slice(items);
    row
}

/// Scroll direction of a marquee row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeDirection {
    /// Content moves toward the left edge.
    Left,
    /// Content moves toward the right edge.
    Right,
}

/// Endless row of doubled content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    /// Direction of travel.
    pub direction: MarqueeDirection,
    /// Seconds per loop.
    pub period_seconds: f64,
}

impl Marquee {
    /// Period of the testimonials row.
    pub const TESTIMONIAL_SECONDS: f64 = 40.0;

    /// Creates a marquee.
    #[must_use]
    pub fn new(direction: MarqueeDirection, period_seconds: f64) -> Self {
        Self {
            direction,
            period_seconds,
        }
    }

    /// Horizontal offset of a doubled row `row_width` wide after
    /// `elapsed_seconds`, in `[-row_width / 2, 0]`.
    #[must_use]
    pub fn offset(&self, elapsed_seconds: f64, row_width: f64) -> f64 {
        let period = self.period_seconds.max(f64::EPSILON);
        let cycles = elapsed_seconds.max(0.0) / period;
        let phase = cycles - cycles.floor();
        let half = row_width * 0.5;
        match self.direction {
            MarqueeDirection::Left => -phase * half,
            MarqueeDirection::Right => -(1.0 - phase) * half,
        }
    }
}
