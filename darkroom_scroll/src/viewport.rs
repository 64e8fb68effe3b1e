// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Snapshot of the visible window, in device-independent pixels.
///
/// Recomputed by the host on every scroll or resize; it carries no identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    size: Size,
}

impl Viewport {
    /// Creates a viewport of the given dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Creates a viewport from a [`Size`].
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self { size }
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the viewport height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The horizontal center line.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.size.width * 0.5
    }

    /// The viewport as a rectangle anchored at the origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.size.to_rect()
    }
}
