// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::Rect;

use darkroom_easing::Progress;

/// Left-to-right reveal of an overlay by clipping its right edge.
///
/// A dim copy of the text sits underneath; the bright copy on top is clipped
/// with `inset(0 R% 0 0)` where `R = max(0, 100 - 100 * progress)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WipeReveal {
    /// Hidden share of the overlay's right side, in percent.
    pub right_inset_percent: f64,
}

impl WipeReveal {
    /// Inset for `progress`.
    #[must_use]
    pub fn at(progress: Progress) -> Self {
        Self {
            right_inset_percent: (100.0 - progress.get() * 100.0).max(0.0),
        }
    }

    /// CSS `clip-path` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("inset(0 {}% 0 0)", self.right_inset_percent)
    }

    /// The visible part of `bounds`.
    #[must_use]
    pub fn clip(&self, bounds: Rect) -> Rect {
        let visible = bounds.width() * (1.0 - self.right_inset_percent / 100.0);
        Rect::new(bounds.x0, bounds.y0, bounds.x0 + visible, bounds.y1)
    }
}
