// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased-inertial scrolling.
//!
//! Wheel input moves a *target* scroll position immediately; the *animated*
//! position then chases it over a fixed duration along an ease-out curve. The
//! host calls [`SmoothScroll::frame`] from its animation-frame callback and
//! writes the returned position to the page.

use darkroom_easing::{Easing, clamp, lerp};

/// Tuning for [`SmoothScroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScrollConfig {
    /// Time for the animated position to reach a new target.
    pub duration_ms: f64,
    /// Scale applied to raw wheel deltas.
    pub wheel_multiplier: f64,
    /// Curve used while chasing the target.
    pub easing: Easing,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1100.0,
            wheel_multiplier: 1.1,
            easing: Easing::OutExpo,
        }
    }
}

/// Vertical smooth scroll driver.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    limit: f64,
    animated: f64,
    from: f64,
    target: f64,
    started_at: Option<f64>,
    running: bool,
    destroyed: bool,
}

impl SmoothScroll {
    /// Creates a driver at scroll position `0` with scrollable range
    /// `[0, limit]`.
    #[must_use]
    pub fn new(config: SmoothScrollConfig, limit: f64) -> Self {
        Self {
            config,
            limit: limit.max(0.0),
            animated: 0.0,
            from: 0.0,
            target: 0.0,
            started_at: None,
            running: false,
            destroyed: false,
        }
    }

    /// Updates the maximum scroll position, e.g. after a resize.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = clamp(self.target, 0.0, self.limit);
        self.animated = clamp(self.animated, 0.0, self.limit);
    }

    /// Feeds a raw wheel delta. Positive scrolls down.
    pub fn wheel(&mut self, delta: f64) {
        if self.destroyed || delta == 0.0 {
            return;
        }
        let target = self.target + delta * self.config.wheel_multiplier;
        self.retarget(target);
    }

    /// Scrolls to `position`, animated unless `immediate`.
    pub fn scroll_to(&mut self, position: f64, immediate: bool) {
        if self.destroyed {
            return;
        }
        if immediate {
            self.target = clamp(position, 0.0, self.limit);
            self.animated = self.target;
            self.running = false;
            self.started_at = None;
        } else {
            self.retarget(position);
        }
    }

    fn retarget(&mut self, target: f64) {
        self.target = clamp(target, 0.0, self.limit);
        self.from = self.animated;
        self.started_at = None;
        self.running = self.target != self.animated;
    }

    /// Advances the animation to `time_ms` and returns the scroll position to
    /// apply.
    ///
    /// The first frame after a retarget anchors the animation start.
    pub fn frame(&mut self, time_ms: f64) -> f64 {
        if !self.running || self.destroyed {
            return self.animated;
        }
        let start = *self.started_at.get_or_insert(time_ms);
        let duration = self.config.duration_ms.max(1.0);
        let t = clamp((time_ms - start) / duration, 0.0, 1.0);
        if t >= 1.0 {
            self.animated = self.target;
            self.running = false;
            self.started_at = None;
        } else {
            self.animated = lerp(self.from, self.target, self.config.easing.apply(t));
        }
        self.animated
    }

    /// Current animated position.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.animated
    }

    /// Position the animation is heading to.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether frames are still needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running && !self.destroyed
    }

    /// Stops the driver permanently; further input is ignored.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.running = false;
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
