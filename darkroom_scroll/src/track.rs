// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal travel driven by vertical scroll.
//!
//! A gallery section is made taller than the viewport by the distance its
//! card strip has to travel sideways. While the user scrolls through that
//! extra height, a sticky viewport shows the strip translated left in
//! proportion.
//!
//! Travel is measured so that the last card's center stops on the viewport's
//! center line, after a leading gap that starts the first card off-screen to
//! the right. The extra height is `travel * density`; a density below `1`
//! makes horizontal motion faster than the vertical scroll driving it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

use darkroom_easing::{Progress, clamp};

use crate::viewport::Viewport;

/// Measured geometry of the card strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    /// Width of one card.
    pub card_width: f64,
    /// Gap between adjacent cards.
    pub gap: f64,
    /// Number of cards.
    pub count: usize,
}

impl TrackMetrics {
    /// Metrics before any card has been measured: cards are
    /// `min(0.52 * viewport_width, 560)` wide with a 24px gap.
    #[must_use]
    pub fn estimated(viewport: Viewport, count: usize) -> Self {
        Self {
            card_width: (viewport.width() * 0.52).min(560.0),
            gap: 24.0,
            count,
        }
    }
}

/// Where the strip sits for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPosition {
    /// Progress through the section's scrollable height.
    pub progress: Progress,
    /// Horizontal translation of the strip, in `[-travel, 0]`.
    pub x: f64,
}

/// Virtual scrollbar mapping vertical scroll to horizontal strip offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalTrack {
    density: f64,
    leading_gap: f64,
    travel: f64,
    section_height: f64,
}

impl Default for HorizontalTrack {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DENSITY)
    }
}

impl HorizontalTrack {
    /// Scroll height spent per pixel of horizontal travel.
    pub const DEFAULT_DENSITY: f64 = 0.7;
    /// Leading gap as a fraction of viewport width.
    pub const LEADING_FRACTION: f64 = 0.7;

    /// Creates an unmeasured track. `density` is floored at a small positive
    /// value so the section always has scrollable height when there is travel.
    #[must_use]
    pub fn new(density: f64) -> Self {
        Self {
            density: density.max(0.05),
            leading_gap: 0.0,
            travel: 0.0,
            section_height: 0.0,
        }
    }

    /// Recomputes leading gap, travel, and section height. Call on mount and
    /// on every resize.
    pub fn measure(&mut self, viewport: Viewport, metrics: TrackMetrics) {
        let leading_gap = (viewport.width() * Self::LEADING_FRACTION).floor().max(0.0);
        self.leading_gap = leading_gap;
        self.travel = if metrics.count == 0 {
            0.0
        } else {
            let preceding = (metrics.count - 1) as f64;
            let last_center = leading_gap
                + preceding * (metrics.card_width + metrics.gap)
                + metrics.card_width * 0.5;
            (viewport.center_x() - last_center).abs()
        };
        self.section_height = viewport.height() + self.travel * self.density;
    }

    /// Padding before the first card.
    #[must_use]
    pub fn leading_gap(&self) -> f64 {
        self.leading_gap
    }

    /// Total horizontal travel distance.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// Height the section must occupy to provide the travel.
    #[must_use]
    pub fn section_height(&self) -> f64 {
        self.section_height
    }

    /// Strip position when the section's top edge is at `section_top` in
    /// viewport coordinates.
    ///
    /// Monotonic in scroll: as `section_top` decreases, `x` never increases.
    #[must_use]
    pub fn position(&self, section_top: f64, viewport_height: f64) -> TrackPosition {
        let scrollable = (self.section_height - viewport_height).max(1.0);
        let progressed = clamp(-section_top, 0.0, scrollable);
        let progress = Progress::new(progressed / scrollable);
        TrackPosition {
            progress,
            x: -progress.get() * self.travel,
        }
    }
}
