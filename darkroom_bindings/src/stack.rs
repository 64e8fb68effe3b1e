// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::transform::Transform;

/// Resting position of one card in the polaroid stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    /// Offset from the container center.
    pub offset: Vec2,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Stacking order; later cards sit on top.
    pub z: i32,
}

impl CardPose {
    /// Transform for this pose.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new().translate(self.offset).rotate(self.rotate_deg)
    }
}

/// Hover target for a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverPose {
    /// Lift in pixels (negative is up).
    pub lift: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Uniform scale.
    pub scale: f64,
}

/// Layout for a pile of cards that fans out into a row.
///
/// Stacked, each card takes a fixed rotation from a short cycle plus a small
/// horizontal jitter around the center and a 2px vertical step. Expanded, the
/// cards line up unrotated, centered on the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackLayout {
    /// Card width used for row spacing.
    pub card_width: f64,
    /// Gap between cards in the row.
    pub row_gap: f64,
    /// Horizontal spread per card while stacked.
    pub jitter: f64,
    /// Vertical step per card while stacked.
    pub step: f64,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            card_width: 220.0,
            row_gap: 18.0,
            jitter: 14.0,
            step: 2.0,
        }
    }
}

impl StackLayout {
    /// Rotation cycle for stacked cards, in degrees.
    pub const ROTATIONS: [f64; 5] = [-10.0, 6.0, -3.0, 12.0, -7.0];

    /// Base z-index of the first card.
    pub const BASE_Z: i32 = 10;

    /// Stacked rotation for the card at `index`.
    #[must_use]
    pub fn rotation(index: usize) -> f64 {
        Self::ROTATIONS[index % Self::ROTATIONS.len()]
    }

    /// Pose of card `index` of `total`.
    #[must_use]
    pub fn pose(&self, index: usize, total: usize, expanded: bool) -> CardPose {
        let centered = index as f64 - (total.max(1) as f64 - 1.0) / 2.0;
        let z = i32::try_from(index)
            .unwrap_or(i32::MAX)
            .saturating_add(Self::BASE_Z);
        if expanded {
            CardPose {
                offset: Vec2::new(centered * (self.card_width + self.row_gap), 0.0),
                rotate_deg: 0.0,
                z,
            }
        } else {
            let step = index as f64 * self.step;
            CardPose {
                offset: Vec2::new(centered * self.jitter, step),
                rotate_deg: Self::rotation(index),
                z,
            }
        }
    }

    /// Poses of all `total` cards.
    #[must_use]
    pub fn poses(&self, total: usize, expanded: bool) -> SmallVec<[CardPose; 8]> {
        (0..total).map(|i| self.pose(i, total, expanded)).collect()
    }

    /// Hover target of card `index`. Stacked cards tip two extra degrees.
    #[must_use]
    pub fn hover(&self, index: usize, expanded: bool) -> HoverPose {
        HoverPose {
            lift: -8.0,
            rotate_deg: Self::rotation(index) + if expanded { 0.0 } else { 2.0 },
            scale: 1.02,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::StackLayout;

    #[test]
    fn stacked_poses_jitter_around_center() {
        let layout = StackLayout::default();
        let poses = layout.poses(5, false);
        assert_eq!(poses.len(), 5);
        assert_eq!(poses[0].offset, Vec2::new(-28.0, 0.0));
        assert_eq!(poses[2].offset, Vec2::new(0.0, 4.0));
        assert_eq!(poses[4].offset, Vec2::new(28.0, 8.0));
        assert_eq!(poses[3].rotate_deg, 12.0);
        assert_eq!(poses[4].z, 14);
    }

    #[test]
    fn expanded_poses_form_a_flat_row() {
        let layout = StackLayout::default();
        let poses = layout.poses(5, true);
        assert_eq!(poses[0].offset, Vec2::new(-476.0, 0.0));
        assert_eq!(poses[4].offset, Vec2::new(476.0, 0.0));
        assert!(poses.iter().all(|p| p.rotate_deg == 0.0));
    }

    #[test]
    fn rotation_cycles() {
        assert_eq!(StackLayout::rotation(5), StackLayout::rotation(0));
    }

    #[test]
    fn hover_tips_stacked_cards() {
        let layout = StackLayout::default();
        assert_eq!(layout.hover(1, false).rotate_deg, 8.0);
        assert_eq!(layout.hover(1, true).rotate_deg, 6.0);
        assert_eq!(layout.hover(1, true).lift, -8.0);
    }
}
