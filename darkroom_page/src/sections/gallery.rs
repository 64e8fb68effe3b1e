// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{Palette, css_hex};
use darkroom_easing::Progress;
use darkroom_scroll::{
    HorizontalTrack, ListenerId, ListenerKinds, SlideActivation, TrackMetrics, TrackPosition,
    Viewport,
};
use kurbo::Rect;
use peniko::Color;
use tracing::debug;

use crate::config::ImageEntry;
use crate::event::PageEvent;
use crate::section::{Section, SectionCx, SectionId};

/// Pinned strip of cards that slides left as the page scrolls down, over a
/// background that steps through a palette.
#[derive(Clone, Debug)]
pub struct GallerySection {
    heading: String,
    images: Vec<ImageEntry>,
    palette: Palette,
    track: HorizontalTrack,
    metrics: TrackMetrics,
    position: TrackPosition,
    slides: Vec<SlideActivation>,
    listener: Option<ListenerId>,
}

impl GallerySection {
    /// Card height over card width.
    pub const CARD_ASPECT: f64 = 1.25;

    /// Builds the section.
    #[must_use]
    pub fn new(
        heading: impl Into<String>,
        images: Vec<ImageEntry>,
        palette: Palette,
        density: f64,
    ) -> Self {
        let slides = (0..images.len()).map(SlideActivation::new).collect();
        Self {
            heading: heading.into(),
            metrics: TrackMetrics {
                card_width: 0.0,
                gap: 0.0,
                count: images.len(),
            },
            images,
            palette,
            track: HorizontalTrack::new(density),
            position: TrackPosition {
                progress: Progress::ZERO,
                x: 0.0,
            },
            slides,
            listener: None,
        }
    }

    /// Heading text.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Cards, left to right.
    #[must_use]
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    /// Measured track.
    #[must_use]
    pub fn track(&self) -> &HorizontalTrack {
        &self.track
    }

    /// Current strip position.
    #[must_use]
    pub fn position(&self) -> TrackPosition {
        self.position
    }

    /// Current background stop.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.palette.at(self.position.progress)
    }

    /// Current background as CSS hex.
    #[must_use]
    pub fn background_css(&self) -> Option<String> {
        self.background().map(css_hex)
    }

    /// Activation of each card.
    #[must_use]
    pub fn slides(&self) -> &[SlideActivation] {
        &self.slides
    }

    /// Viewport-relative bounds of card `index` while the strip is pinned.
    #[must_use]
    pub fn card_rect(&self, index: usize, viewport: Viewport) -> Rect {
        let width = self.metrics.card_width;
        let height = width * Self::CARD_ASPECT;
        let left = self.track.leading_gap()
            + index as f64 * (width + self.metrics.gap)
            + self.position.x;
        let top = (viewport.height() - height) * 0.5;
        Rect::new(left, top, left + width, top + height)
    }

    fn measure(&mut self, viewport: Viewport) {
        self.metrics = TrackMetrics::estimated(viewport, self.images.len());
        self.track.measure(viewport, self.metrics);
    }

    fn update(&mut self, cx: &SectionCx<'_>) -> bool {
        let Some(bounds) = cx.bounds else {
            return false;
        };
        let position = self.track.position(bounds.y0, cx.viewport.height());
        let changed = position != self.position;
        self.position = position;
        for index in 0..self.slides.len() {
            let card = self.card_rect(index, cx.viewport);
            self.slides[index].update(card, cx.viewport);
        }
        changed
    }
}

impl Section for GallerySection {
    fn id(&self) -> SectionId {
        SectionId::Gallery
    }

    fn height(&self, viewport: Viewport) -> f64 {
        let mut track = self.track;
        track.measure(viewport, TrackMetrics::estimated(viewport, self.images.len()));
        track.section_height()
    }

    fn mount(&mut self, cx: &mut SectionCx<'_>) {
        self.slides = (0..self.images.len()).map(SlideActivation::new).collect();
        self.position = TrackPosition {
            progress: Progress::ZERO,
            x: 0.0,
        };
        if self.listener.is_none() {
            self.listener = Some(cx.listeners.subscribe(ListenerKinds::SCROLL_AND_RESIZE));
        }
        self.measure(cx.viewport);
        self.update(cx);
        debug!(
            travel = self.track.travel(),
            section_height = self.track.section_height(),
            "gallery mounted"
        );
    }

    fn unmount(&mut self, cx: &mut SectionCx<'_>) {
        if let Some(id) = self.listener.take() {
            cx.listeners.unsubscribe(id);
        }
        debug!("gallery unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        match event {
            PageEvent::Resize(_) => {
                self.measure(cx.viewport);
                self.update(cx);
                true
            }
            PageEvent::Scroll { .. } => self.update(cx),
            _ => false,
        }
    }
}
