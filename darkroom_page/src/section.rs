// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract every page section implements.

use core::fmt::Debug;

use darkroom_event_state::scroll_lock::OverflowHost;
use darkroom_scroll::{ListenerRegistry, Viewport};
use kurbo::Rect;

use crate::event::PageEvent;

/// Identifies a section in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    /// Full-height intro with pointer parallax.
    Hero,
    /// Heading wipe and dropped polaroids.
    About,
    /// Pinned horizontal gallery.
    Gallery,
    /// Word-by-word quote.
    Quote,
    /// Marquee rows and the globe.
    Travel,
    /// Polaroid pile with lightbox.
    Polaroids,
    /// Client quotes marquee.
    Testimonials,
    /// Postcard form.
    Contact,
}

/// What a section sees while handling a call.
pub struct SectionCx<'a> {
    /// Page-wide listener registry.
    pub listeners: &'a mut ListenerRegistry,
    /// Current viewport.
    pub viewport: Viewport,
    /// The section's viewport-relative bounds, if laid out.
    pub bounds: Option<Rect>,
    /// The page's scrolling element.
    pub body: &'a mut dyn OverflowHost,
}

impl Debug for SectionCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionCx")
            .field("listeners", &self.listeners.len())
            .field("viewport", &self.viewport)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

/// A self-contained part of the page.
///
/// Sections own their subscriptions: whatever [`mount`](Section::mount)
/// registers, [`unmount`](Section::unmount) must release.
pub trait Section: Debug {
    /// This section's identity.
    fn id(&self) -> SectionId;

    /// Height the section occupies in a viewport.
    fn height(&self, viewport: Viewport) -> f64;

    /// Subscribes listeners and computes initial state.
    fn mount(&mut self, cx: &mut SectionCx<'_>);

    /// Releases everything `mount` acquired.
    fn unmount(&mut self, cx: &mut SectionCx<'_>);

    /// Reacts to an event. Returns `true` if visible state changed.
    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool;

    /// Advances time-based animation.
    fn frame(&mut self, _time_ms: f64, _cx: &mut SectionCx<'_>) {}
}
