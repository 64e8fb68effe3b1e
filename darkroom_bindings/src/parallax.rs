// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::transform::Transform;

/// Pointer position relative to the center of `section`.
#[must_use]
pub fn pointer_offset(section: Rect, pointer: Point) -> Vec2 {
    pointer - section.center()
}

/// A blurred glow that drifts against (or with) the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    /// Pointer offset multiplier per axis.
    pub factor: Vec2,
    /// Horizontal stretch.
    pub scale_x: f64,
    /// Fixed rotation in degrees.
    pub rotate_deg: f64,
}

impl Orb {
    /// Upper-left glow; drifts opposite to the pointer.
    pub const WARM: Self = Self {
        factor: Vec2::new(-0.02, -0.04),
        scale_x: 1.6,
        rotate_deg: -8.0,
    };

    /// Lower-right glow; follows the pointer.
    pub const EMBER: Self = Self {
        factor: Vec2::new(0.02, 0.03),
        scale_x: 1.4,
        rotate_deg: 12.0,
    };

    /// Transform for a pointer at `offset` from the section center.
    #[must_use]
    pub fn transform(&self, offset: Vec2) -> Transform {
        Transform::new()
            .translate(Vec2::new(offset.x * self.factor.x, offset.y * self.factor.y))
            .scale_x(self.scale_x)
            .rotate(self.rotate_deg)
    }
}
