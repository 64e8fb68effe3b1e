// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::viewport::Viewport;

/// Activation state of one card in a horizontally scrolling strip.
///
/// A card is *active* while its center is within a quarter of its width of
/// the viewport's center line; activation is measured horizontally so a
/// sticky section never flickers. A card has *entered* once its right edge
/// has reached the viewport; that flag latches. Every card but the first
/// starts out entered, so only the first title waits for scrolling to begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideActivation {
    active: bool,
    entered: bool,
}

impl SlideActivation {
    /// Fraction of the card width within which the card counts as centered.
    pub const ACTIVE_BAND: f64 = 0.25;

    /// Initial state for the card at `index`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            active: false,
            entered: index != 0,
        }
    }

    /// Updates from the card's current viewport-relative bounds.
    pub fn update(&mut self, card: Rect, viewport: Viewport) {
        let distance = (card.center().x - viewport.center_x()).abs();
        self.active = distance < card.width() * Self::ACTIVE_BAND;
        if card.x1 <= viewport.width() {
            self.entered = true;
        }
    }

    /// Whether the card is centered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the card has ever been fully revealed on the right.
    #[must_use]
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Opacity of the card's title overlay.
    #[must_use]
    pub fn title_opacity(&self) -> f64 {
        if self.active || self.entered { 1.0 } else { 0.0 }
    }

    /// Scale of the card's title overlay.
    #[must_use]
    pub fn title_scale(&self) -> f64 {
        if self.active { 1.0 } else { 0.96 }
    }
}
