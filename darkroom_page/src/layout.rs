// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical stacking of section heights.

use darkroom_scroll::{LayoutProbe, Viewport};
use kurbo::Rect;

use crate::section::SectionId;

/// Sections stacked top to bottom in document order.
///
/// Each entry stores only a height; tops are prefix sums. The layout answers
/// "where is this section in the viewport" for a given scroll position, which
/// is what every progress computation needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    entries: Vec<(SectionId, f64)>,
    width: f64,
}

impl PageLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section, or updates its height if it is already present.
    /// Negative and non-finite heights are stored as zero.
    pub fn set_height(&mut self, id: SectionId, height: f64) {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        match self.entries.iter_mut().find(|(entry, _)| *entry == id) {
            Some(entry) => entry.1 = height,
            None => self.entries.push((id, height)),
        }
    }

    /// Sets the width every section spans.
    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    /// Height of a section.
    #[must_use]
    pub fn height(&self, id: SectionId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, height)| *height)
    }

    /// Document-space top of a section.
    #[must_use]
    pub fn top(&self, id: SectionId) -> Option<f64> {
        let mut top = 0.0;
        for (entry, height) in &self.entries {
            if *entry == id {
                return Some(top);
            }
            top += height;
        }
        None
    }

    /// Total document height.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.entries.iter().map(|(_, height)| height).sum()
    }

    /// Largest scroll position for a viewport.
    #[must_use]
    pub fn scroll_limit(&self, viewport: Viewport) -> f64 {
        (self.total_height() - viewport.height()).max(0.0)
    }

    /// Viewport-relative bounds of a section at `scroll_y`.
    #[must_use]
    pub fn bounds(&self, id: SectionId, scroll_y: f64) -> Option<Rect> {
        let top = self.top(id)? - scroll_y;
        let height = self.height(id)?;
        Some(Rect::new(0.0, top, self.width, top + height))
    }

    /// A [`LayoutProbe`] for one section at a fixed scroll position.
    #[must_use]
    pub fn probe(&self, id: SectionId, scroll_y: f64) -> SectionProbe<'_> {
        SectionProbe {
            layout: self,
            id,
            scroll_y,
        }
    }

    /// Section ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}

/// Probe answering bounds queries for one section of a [`PageLayout`].
#[derive(Clone, Copy, Debug)]
pub struct SectionProbe<'a> {
    layout: &'a PageLayout,
    id: SectionId,
    scroll_y: f64,
}

impl LayoutProbe for SectionProbe<'_> {
    fn bounds(&self) -> Option<Rect> {
        self.layout.bounds(self.id, self.scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::PageLayout;
    use crate::section::SectionId;
    use darkroom_scroll::{LayoutProbe, Viewport};

    fn layout() -> PageLayout {
        let mut layout = PageLayout::new();
        layout.set_width(1280.0);
        layout.set_height(SectionId::Hero, 800.0);
        layout.set_height(SectionId::About, 720.0);
        layout.set_height(SectionId::Gallery, 3000.0);
        layout
    }

    #[test]
    fn tops_are_prefix_sums() {
        let layout = layout();
        assert_eq!(layout.top(SectionId::Hero), Some(0.0));
        assert_eq!(layout.top(SectionId::About), Some(800.0));
        assert_eq!(layout.top(SectionId::Gallery), Some(1520.0));
        assert_eq!(layout.top(SectionId::Contact), None);
        assert_eq!(layout.total_height(), 4520.0);
    }

    #[test]
    fn updating_height_shifts_later_sections() {
        let mut layout = layout();
        layout.set_height(SectionId::About, 1000.0);
        assert_eq!(layout.top(SectionId::Gallery), Some(1800.0));
        assert_eq!(layout.ids().count(), 3);
    }

    #[test]
    fn bounds_follow_scroll() {
        let layout = layout();
        let probe = layout.probe(SectionId::About, 600.0);
        let rect = probe.bounds().unwrap();
        assert_eq!(rect.y0, 200.0);
        assert_eq!(rect.height(), 720.0);
        assert_eq!(rect.width(), 1280.0);
        assert!(layout.probe(SectionId::Quote, 0.0).bounds().is_none());
    }

    #[test]
    fn scroll_limit_never_negative() {
        let layout = layout();
        assert_eq!(layout.scroll_limit(Viewport::new(1280.0, 800.0)), 3720.0);
        assert_eq!(PageLayout::new().scroll_limit(Viewport::new(1280.0, 800.0)), 0.0);
    }

    #[test]
    fn bad_heights_clamp_to_zero() {
        let mut layout = PageLayout::new();
        layout.set_height(SectionId::Hero, -5.0);
        layout.set_height(SectionId::Quote, f64::NAN);
        assert_eq!(layout.total_height(), 0.0);
    }
}
