// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use darkroom_easing::{Easing, Progress};

use crate::tilt::{Tilt, tilt_for};
use crate::transform::Transform;

/// Polaroid drop animation.
///
/// A card starts `start_y_offset` above its resting place, enlarged, rotated
/// to its start tilt and transparent; as its local progress advances along a
/// cubic ease-out it falls into place, shrinks to scale `1`, rotates to its
/// end tilt and fades in. `stagger` delays the start within the shared
/// progress of the parent section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallIn {
    /// Card width in pixels.
    pub width: f64,
    /// Horizontal placement relative to the parent.
    pub x: f64,
    /// Distance above the resting place at progress `0`.
    pub start_y_offset: f64,
    /// Start and end rotation.
    pub tilt: Tilt,
    /// Scale at progress `0`.
    pub start_scale: f64,
    /// Delay within the parent's progress, in `[0, 1)`.
    pub stagger: f64,
}

impl FallIn {
    /// Default card width.
    pub const DEFAULT_WIDTH: f64 = 220.0;
    /// Default fall distance.
    pub const DEFAULT_START_Y_OFFSET: f64 = 240.0;
    /// Default starting scale.
    pub const DEFAULT_START_SCALE: f64 = 1.28;

    /// Defaults for an image, with its tilt derived from `id`.
    #[must_use]
    pub fn for_image(id: &str) -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            x: 0.0,
            start_y_offset: Self::DEFAULT_START_Y_OFFSET,
            tilt: tilt_for(id),
            start_scale: Self::DEFAULT_START_SCALE,
            stagger: 0.0,
        }
    }

    /// Sets the card width.
    #[must_use]
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// Sets the horizontal placement.
    #[must_use]
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Sets the fall distance.
    #[must_use]
    pub fn with_start_y_offset(self, start_y_offset: f64) -> Self {
        Self {
            start_y_offset,
            ..self
        }
    }

    /// Overrides either end of the derived tilt.
    #[must_use]
    pub fn with_rotation(self, start_deg: Option<f64>, end_deg: Option<f64>) -> Self {
        Self {
            tilt: self.tilt.with_overrides(start_deg, end_deg),
            ..self
        }
    }

    /// Sets the starting scale.
    #[must_use]
    pub fn with_start_scale(self, start_scale: f64) -> Self {
        Self {
            start_scale,
            ..self
        }
    }

    /// Sets the stagger offset.
    #[must_use]
    pub fn with_stagger(self, stagger: f64) -> Self {
        Self { stagger, ..self }
    }

    /// Visual state at the parent's `progress`.
    #[must_use]
    pub fn frame(&self, progress: Progress) -> FallFrame {
        let eased = progress.stagger(self.stagger).ease(Easing::OutCubic);
        FallFrame {
            translate: Vec2::new(self.x, eased.lerp(-self.start_y_offset, 0.0)),
            rotate_deg: eased.lerp(self.tilt.start_deg, self.tilt.end_deg),
            scale: eased.lerp(self.start_scale, 1.0),
            opacity: eased.get(),
        }
    }
}

/// Output of [`FallIn::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallFrame {
    /// Offset from the resting place.
    pub translate: Vec2,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl FallFrame {
    /// `translate3d(..) rotate(..) scale(..)`.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new()
            .translate(self.translate)
            .rotate(self.rotate_deg)
            .scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use darkroom_easing::Progress;

    use super::FallIn;

    #[test]
    fn starts_above_and_settles() {
        let card = FallIn::for_image("quiet-street")
            .with_x(-120.0)
            .with_start_y_offset(280.0)
            .with_rotation(Some(-4.0), Some(-2.0));

        let start = card.frame(Progress::ZERO);
        assert_eq!(start.translate.x, -120.0);
        assert_eq!(start.translate.y, -280.0);
        assert_eq!(start.rotate_deg, -4.0);
        assert_eq!(start.scale, 1.28);
        assert_eq!(start.opacity, 0.0);

        let end = card.frame(Progress::ONE);
        assert_eq!(end.translate.y, 0.0);
        assert_eq!(end.rotate_deg, -2.0);
        assert_eq!(end.scale, 1.0);
        assert_eq!(end.opacity, 1.0);
    }

    #[test]
    fn staggered_card_waits() {
        let card = FallIn::for_image("edges").with_stagger(0.34);
        let waiting = card.frame(Progress::new(0.3));
        assert_eq!(waiting.opacity, 0.0);
        let moving = card.frame(Progress::new(0.6));
        assert!(moving.opacity > 0.0 && moving.opacity < 1.0);
    }
}
