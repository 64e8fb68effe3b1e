// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use darkroom_easing::Progress;

/// Idle spin of the globe, in radians per millisecond.
pub const GLOBE_IDLE_RATE: f64 = 0.000_07;

/// Globe rotation about its vertical axis: a slow idle spin plus one full turn
/// across the section's scroll progress.
#[must_use]
pub fn globe_rotation(time_ms: f64, progress: Progress) -> f64 {
    time_ms * GLOBE_IDLE_RATE + progress.get() * TAU
}
