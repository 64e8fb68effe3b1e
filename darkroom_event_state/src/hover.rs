// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/leave latch for hover-driven UI.

/// Remembers whether the pointer is over an element.
///
/// [`enter`](Self::enter) and [`leave`](Self::leave) report whether the state
/// actually changed, so duplicate events from nested elements can be dropped
/// without re-rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverLatch {
    hovered: bool,
}

impl HoverLatch {
    /// Creates an unhovered latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { hovered: false }
    }

    /// Pointer entered. Returns `true` if this changed the state.
    pub fn enter(&mut self) -> bool {
        !core::mem::replace(&mut self.hovered, true)
    }

    /// Pointer left. Returns `true` if this changed the state.
    pub fn leave(&mut self) -> bool {
        core::mem::replace(&mut self.hovered, false)
    }

    /// Whether the pointer is over the element.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Picks between two values by hover state.
    #[must_use]
    pub fn select<T>(&self, idle: T, hovered: T) -> T {
        if self.hovered { hovered } else { idle }
    }
}

#[cfg(test)]
mod tests {
    use super::HoverLatch;

    #[test]
    fn reports_changes_only() {
        let mut latch = HoverLatch::new();
        assert!(!latch.leave());
        assert!(latch.enter());
        assert!(!latch.enter());
        assert!(latch.is_hovered());
        assert!(latch.leave());
        assert!(!latch.is_hovered());
    }

    #[test]
    fn select_follows_state() {
        let mut latch = HoverLatch::new();
        assert_eq!(latch.select(0.0, 1.0), 0.0);
        latch.enter();
        assert_eq!(latch.select(0.95, 1.0), 1.0);
    }
}
