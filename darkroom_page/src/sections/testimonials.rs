// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{Marquee, MarqueeDirection, looped};
use darkroom_scroll::Viewport;
use tracing::debug;

use crate::config::Testimonial;
use crate::event::PageEvent;
use crate::section::{Section, SectionCx, SectionId};

/// A single full-bleed row of client quotes drifting right at a fixed pace.
#[derive(Clone, Debug)]
pub struct TestimonialsSection {
    items: Vec<Testimonial>,
    marquee: Marquee,
    started_ms: Option<f64>,
    elapsed_seconds: f64,
}

impl TestimonialsSection {
    /// Builds the section.
    #[must_use]
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self {
            items,
            marquee: Marquee::new(MarqueeDirection::Right, Marquee::TESTIMONIAL_SECONDS),
            started_ms: None,
            elapsed_seconds: 0.0,
        }
    }

    /// The row's entries, doubled for a seamless loop.
    #[must_use]
    pub fn row(&self) -> Vec<Testimonial> {
        looped(&self.items)
    }

    /// Row offset for a doubled row `row_width` wide.
    #[must_use]
    pub fn offset(&self, row_width: f64) -> f64 {
        self.marquee.offset(self.elapsed_seconds, row_width)
    }
}

impl Section for TestimonialsSection {
    fn id(&self) -> SectionId {
        SectionId::Testimonials
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height() * 0.6
    }

    fn mount(&mut self, _cx: &mut SectionCx<'_>) {
        self.started_ms = None;
        self.elapsed_seconds = 0.0;
        debug!(count = self.items.len(), "testimonials mounted");
    }

    fn unmount(&mut self, _cx: &mut SectionCx<'_>) {
        debug!("testimonials unmounted");
    }

    fn handle(&mut self, _event: &PageEvent, _cx: &mut SectionCx<'_>) -> bool {
        false
    }

    fn frame(&mut self, time_ms: f64, _cx: &mut SectionCx<'_>) {
        let start = *self.started_ms.get_or_insert(time_ms);
        self.elapsed_seconds = (time_ms - start) / 1000.0;
    }
}
