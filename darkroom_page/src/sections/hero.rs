// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{Orb, Transform, pointer_offset};
use darkroom_scroll::Viewport;
use kurbo::Vec2;
use tracing::debug;

use crate::event::PageEvent;
use crate::section::{Section, SectionCx, SectionId};

/// Full-height intro whose glow orbs drift against the pointer.
#[derive(Clone, Debug, Default)]
pub struct HeroSection {
    pointer: Vec2,
}

impl HeroSection {
    /// Headline copy.
    pub const HEADLINE: &'static str = "Turn Your Vision Into an Experience That Lasts";

    /// Creates the section with the orbs at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer offset from the section center.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Transforms of the warm and ember orbs.
    #[must_use]
    pub fn orb_transforms(&self) -> [Transform; 2] {
        [
            Orb::WARM.transform(self.pointer),
            Orb::EMBER.transform(self.pointer),
        ]
    }
}

impl Section for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height()
    }

    fn mount(&mut self, _cx: &mut SectionCx<'_>) {
        self.pointer = Vec2::ZERO;
        debug!("hero mounted");
    }

    fn unmount(&mut self, _cx: &mut SectionCx<'_>) {
        debug!("hero unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        let PageEvent::PointerMove(point) = *event else {
            return false;
        };
        let Some(bounds) = cx.bounds else {
            return false;
        };
        if !bounds.contains(point) {
            return false;
        }
        self.pointer = pointer_offset(bounds, point);
        true
    }
}
