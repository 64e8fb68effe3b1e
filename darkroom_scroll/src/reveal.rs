// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use darkroom_easing::clamp;

use crate::probe::LayoutProbe;
use crate::viewport::Viewport;

/// Fraction of `bounds`' area that lies inside the viewport.
///
/// Degenerate (zero-area) bounds are never visible.
#[must_use]
pub fn visible_fraction(bounds: Rect, viewport: Viewport) -> f64 {
    let area = bounds.area();
    if area <= 0.0 {
        return 0.0;
    }
    let visible = bounds.intersect(viewport.rect()).area().max(0.0);
    clamp(visible / area, 0.0, 1.0)
}

/// Visibility threshold trigger, the headless form of an intersection
/// observer.
///
/// A one-shot trigger latches the first time the visible fraction reaches its
/// threshold; a repeating trigger follows visibility in both directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    once: bool,
    revealed: bool,
}

impl RevealTrigger {
    /// A trigger that latches once `threshold` of the element is visible.
    #[must_use]
    pub fn once(threshold: f64) -> Self {
        Self {
            threshold: clamp(threshold, 0.0, 1.0),
            once: true,
            revealed: false,
        }
    }

    /// A trigger that resets when visibility drops below `threshold`.
    #[must_use]
    pub fn repeating(threshold: f64) -> Self {
        Self {
            once: false,
            ..Self::once(threshold)
        }
    }

    /// Observes the element and returns `true` if the revealed state changed.
    ///
    /// An unmeasurable element counts as not visible.
    pub fn observe<P: LayoutProbe + ?Sized>(&mut self, probe: &P, viewport: Viewport) -> bool {
        if self.once && self.revealed {
            return false;
        }
        let fraction = probe
            .bounds()
            .map_or(0.0, |bounds| visible_fraction(bounds, viewport));
        let visible = fraction > 0.0 && fraction >= self.threshold;
        let changed = visible != self.revealed;
        self.revealed = visible;
        changed
    }

    /// Whether the element is (or, for one-shot triggers, has been) revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Forgets any previous reveal, for remounts.
    pub fn reset(&mut self) {
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{RevealTrigger, visible_fraction};
    use crate::Viewport;

    const VP: Viewport = Viewport::new(1000.0, 800.0);

    #[test]
    fn fraction_of_partially_visible_element() {
        let half = Rect::new(0.0, 600.0, 1000.0, 1000.0);
        assert_eq!(visible_fraction(half, VP), 0.5);
        let below = Rect::new(0.0, 900.0, 1000.0, 1300.0);
        assert_eq!(visible_fraction(below, VP), 0.0);
        assert_eq!(visible_fraction(Rect::ZERO, VP), 0.0);
    }

    #[test]
    fn once_latches() {
        let mut trigger = RevealTrigger::once(0.25);
        assert!(!trigger.observe(&Rect::new(0.0, 790.0, 1000.0, 1190.0), VP));
        assert!(trigger.observe(&Rect::new(0.0, 600.0, 1000.0, 1000.0), VP));
        assert!(!trigger.observe(&Rect::new(0.0, 2000.0, 1000.0, 2400.0), VP));
        assert!(trigger.is_revealed());
    }

    #[test]
    fn repeating_follows_visibility() {
        let mut trigger = RevealTrigger::repeating(0.5);
        assert!(trigger.observe(&Rect::new(0.0, 0.0, 100.0, 100.0), VP));
        assert!(trigger.observe(&None::<Rect>, VP));
        assert!(!trigger.is_revealed());
    }
}
