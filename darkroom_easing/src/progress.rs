// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::curve::Easing;
use crate::interp::{clamp, lerp};
use crate::stagger::stagger;

/// Normalized animation progress, always within `[0, 1]`.
///
/// Construction clamps, and NaN becomes `0`. Derived operations
/// ([`Progress::ease`], [`Progress::stagger`]) stay in range, so code that
/// only ever sees `Progress` cannot read an out-of-range value.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// The start of an animation.
    pub const ZERO: Self = Self(0.0);
    /// The end of an animation.
    pub const ONE: Self = Self(1.0);

    /// Clamps `value` into `[0, 1]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(clamp(value, 0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` once the animation has fully completed.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }

    /// Reshapes this progress with `easing`.
    #[must_use]
    pub fn ease(self, easing: Easing) -> Self {
        Self::new(easing.apply(self.0))
    }

    /// Local progress for an item delayed by `offset`; see [`stagger`].
    #[must_use]
    pub fn stagger(self, offset: f64) -> Self {
        Self::new(stagger(self.0, offset))
    }

    /// Interpolates between `a` and `b` at this progress.
    #[must_use]
    pub fn lerp(self, a: f64, b: f64) -> f64 {
        lerp(a, b, self.0)
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}
