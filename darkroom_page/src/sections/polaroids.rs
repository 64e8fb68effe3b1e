// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{CardPose, HoverPose, LightboxLayout, SlideStyle, StackLayout};
use darkroom_event_state::lightbox::{Lightbox, LightboxEvent};
use darkroom_event_state::stack::{CardStack, StackState};
use darkroom_scroll::{ListenerId, ListenerKinds, Viewport};
use kurbo::Size;
use smallvec::SmallVec;
use tracing::debug;

use crate::config::ImageEntry;
use crate::event::{ClickTarget, HoverTarget, PageEvent};
use crate::section::{Section, SectionCx, SectionId};

/// A pile of polaroids that spreads into a row and opens into a lightbox.
///
/// The keydown listener only exists while the lightbox is open.
#[derive(Clone, Debug)]
pub struct PolaroidStackSection {
    images: Vec<ImageEntry>,
    stack: CardStack,
    lightbox: Lightbox,
    layout: StackLayout,
    lightbox_layout: LightboxLayout,
    hovered: Option<usize>,
    keys: Option<ListenerId>,
}

impl PolaroidStackSection {
    /// Builds the section.
    #[must_use]
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            lightbox: Lightbox::new(images.len()),
            images,
            stack: CardStack::new(),
            layout: StackLayout::default(),
            lightbox_layout: LightboxLayout::measure(Size::new(1200.0, 800.0)),
            hovered: None,
            keys: None,
        }
    }

    /// Cards, bottom to top.
    #[must_use]
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    /// Stacked or expanded.
    #[must_use]
    pub fn stack_state(&self) -> StackState {
        self.stack.state()
    }

    /// The lightbox.
    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Resting pose of every card.
    #[must_use]
    pub fn card_poses(&self) -> SmallVec<[CardPose; 8]> {
        self.layout
            .poses(self.images.len(), self.stack.state().is_expanded())
    }

    /// Hovered card and its hover pose.
    #[must_use]
    pub fn hover_pose(&self) -> Option<(usize, HoverPose)> {
        let index = self.hovered?;
        Some((
            index,
            self.layout.hover(index, self.stack.state().is_expanded()),
        ))
    }

    /// Lightbox track translation for the viewed slide.
    #[must_use]
    pub fn lightbox_track_offset(&self) -> Option<f64> {
        self.lightbox
            .current()
            .map(|index| self.lightbox_layout.track_offset(index))
    }

    /// Emphasis of every lightbox slide, if open.
    #[must_use]
    pub fn slide_styles(&self) -> Option<Vec<SlideStyle>> {
        let current = self.lightbox.current()?;
        Some(
            (0..self.images.len())
                .map(|index| LightboxLayout::slide_style(index, current))
                .collect(),
        )
    }

    /// Current lightbox measurements.
    #[must_use]
    pub fn lightbox_layout(&self) -> LightboxLayout {
        self.lightbox_layout
    }

    fn track_keys(&mut self, cx: &mut SectionCx<'_>) {
        match (self.lightbox.is_open(), self.keys) {
            (true, None) => {
                self.keys = Some(cx.listeners.subscribe(ListenerKinds::KEYDOWN));
            }
            (false, Some(id)) => {
                cx.listeners.unsubscribe(id);
                self.keys = None;
            }
            _ => {}
        }
    }

    fn click(&mut self, target: ClickTarget, cx: &mut SectionCx<'_>) -> bool {
        let event = match target {
            ClickTarget::StackToggle => {
                self.stack.toggle();
                return true;
            }
            ClickTarget::StackContainer => return self.stack.click_container(),
            ClickTarget::StackCard(index) if index < self.images.len() => {
                match self.stack.click_card(index) {
                    Some(index) => self.lightbox.open(index, &mut *cx.body),
                    None => return true,
                }
            }
            ClickTarget::LightboxClose => self.lightbox.close(&mut *cx.body),
            ClickTarget::LightboxBackdrop => self.lightbox.click_outside(&mut *cx.body),
            ClickTarget::LightboxPrev => self.lightbox.prev(),
            ClickTarget::LightboxNext => self.lightbox.next(),
            _ => return false,
        };
        self.settle(event, cx)
    }

    fn settle(&mut self, event: Option<LightboxEvent>, cx: &mut SectionCx<'_>) -> bool {
        self.track_keys(cx);
        if let Some(event) = event {
            debug!(?event, "lightbox");
        }
        event.is_some()
    }
}

impl Section for PolaroidStackSection {
    fn id(&self) -> SectionId {
        SectionId::Polaroids
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height() * 1.2
    }

    fn mount(&mut self, cx: &mut SectionCx<'_>) {
        self.lightbox.close(&mut *cx.body);
        self.track_keys(cx);
        self.stack = CardStack::new();
        self.hovered = None;
        self.lightbox_layout = LightboxLayout::for_viewport(cx.viewport.size());
        debug!(cards = self.images.len(), "polaroid stack mounted");
    }

    fn unmount(&mut self, cx: &mut SectionCx<'_>) {
        self.lightbox.close(&mut *cx.body);
        self.track_keys(cx);
        self.hovered = None;
        debug!("polaroid stack unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        match *event {
            PageEvent::Resize(size) => {
                self.lightbox_layout = LightboxLayout::for_viewport(size);
                self.lightbox.is_open()
            }
            PageEvent::Click(target) => self.click(target, cx),
            PageEvent::Key(key) => {
                let event = self.lightbox.handle_key(key, &mut *cx.body);
                self.settle(event, cx)
            }
            PageEvent::Hover {
                target: HoverTarget::StackCard(index),
                entered,
            } if index < self.images.len() => {
                let next = if entered {
                    Some(index)
                } else if self.hovered == Some(index) {
                    None
                } else {
                    self.hovered
                };
                let changed = next != self.hovered;
                self.hovered = next;
                changed
            }
            _ => false,
        }
    }
}
