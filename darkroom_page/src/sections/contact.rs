// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::Transform;
use darkroom_easing::lerp;
use darkroom_event_state::flip::{FlipCard, FlipSide};
use darkroom_scroll::{ListenerId, ListenerKinds, RevealTrigger, Viewport};
use kurbo::Vec2;
use tracing::debug;

use crate::config::ImageEntry;
use crate::event::{ClickTarget, PageEvent};
use crate::postcard::{Acknowledgement, Postcard};
use crate::section::{Section, SectionCx, SectionId};

/// The postcard form beside a flippable card of recent work, with a stamp
/// that settles into place once the section is in view.
#[derive(Clone, Debug)]
pub struct ContactSection {
    images: Vec<ImageEntry>,
    postcard: Postcard,
    card: FlipCard,
    stamp: RevealTrigger,
    observer: Option<ListenerId>,
    exit_started_ms: Option<f64>,
    acknowledgement: Option<Acknowledgement>,
}

impl ContactSection {
    /// Stamp text.
    pub const STAMP: &'static str = "NRG PHOTO";
    /// Length of a carousel image's exit.
    pub const EXIT_MS: f64 = 400.0;

    /// Builds the section with `images` in the flip card's carousel.
    #[must_use]
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            card: FlipCard::new(images.len()),
            images,
            postcard: Postcard::new(),
            stamp: RevealTrigger::once(0.4),
            observer: None,
            exit_started_ms: None,
            acknowledgement: None,
        }
    }

    /// The form.
    #[must_use]
    pub fn postcard(&self) -> &Postcard {
        &self.postcard
    }

    /// Mutable access to the form for text input.
    pub fn postcard_mut(&mut self) -> &mut Postcard {
        &mut self.postcard
    }

    /// Carousel images.
    #[must_use]
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    /// Image on the front of the card.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageEntry> {
        self.images.get(self.card.carousel().current())
    }

    /// The flip card.
    #[must_use]
    pub fn card(&self) -> &FlipCard {
        &self.card
    }

    /// Side of the flip card showing.
    #[must_use]
    pub fn side(&self) -> FlipSide {
        self.card.side()
    }

    /// Result of the last send, if any.
    #[must_use]
    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    /// Stamp transform: it starts lifted and tipped, then settles.
    #[must_use]
    pub fn stamp_transform(&self) -> Transform {
        let t = if self.stamp.is_revealed() { 1.0 } else { 0.0 };
        Transform::new()
            .translate(Vec2::new(0.0, lerp(-6.0, 0.0, t)))
            .rotate(lerp(-12.0, -8.0, t))
    }

    /// Stamp opacity.
    #[must_use]
    pub fn stamp_opacity(&self) -> f64 {
        if self.stamp.is_revealed() { 1.0 } else { 0.0 }
    }

    fn observe(&mut self, cx: &mut SectionCx<'_>) -> bool {
        if self.observer.is_none() {
            return false;
        }
        let changed = self.stamp.observe(&cx.bounds, cx.viewport);
        if self.stamp.is_revealed() {
            if let Some(id) = self.observer.take() {
                cx.listeners.unsubscribe(id);
            }
        }
        changed
    }

    fn click(&mut self, target: ClickTarget) -> bool {
        let moved = match target {
            ClickTarget::FlipCard => {
                let side = self.card.flip();
                debug!(?side, "contact card flipped");
                return true;
            }
            ClickTarget::SendPostcard => {
                self.acknowledgement = Some(self.postcard.submit());
                return true;
            }
            ClickTarget::CarouselPrev => self.card.carousel_mut().prev(),
            ClickTarget::CarouselNext => self.card.carousel_mut().next(),
            _ => return false,
        };
        if moved {
            self.exit_started_ms = None;
        }
        moved
    }
}

impl Section for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height()
    }

    fn mount(&mut self, cx: &mut SectionCx<'_>) {
        self.stamp.reset();
        self.card = FlipCard::new(self.images.len());
        self.postcard = Postcard::new();
        self.acknowledgement = None;
        self.exit_started_ms = None;
        if self.observer.is_none() {
            self.observer = Some(cx.listeners.subscribe(ListenerKinds::INTERSECTION));
        }
        self.observe(cx);
        debug!("contact mounted");
    }

    fn unmount(&mut self, cx: &mut SectionCx<'_>) {
        if let Some(id) = self.observer.take() {
            cx.listeners.unsubscribe(id);
        }
        self.card.carousel_mut().finish_exit();
        self.exit_started_ms = None;
        debug!("contact unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        match *event {
            PageEvent::Scroll { .. } | PageEvent::Resize(_) => self.observe(cx),
            PageEvent::Click(target) => self.click(target),
            _ => false,
        }
    }

    fn frame(&mut self, time_ms: f64, _cx: &mut SectionCx<'_>) {
        if self.card.carousel().previous().is_none() {
            return;
        }
        let start = *self.exit_started_ms.get_or_insert(time_ms);
        if time_ms - start >= Self::EXIT_MS {
            self.card.carousel_mut().finish_exit();
            self.exit_started_ms = None;
        }
    }
}
