// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{QuoteToken, split_quote};
use darkroom_scroll::{ListenerId, ListenerKinds, RevealTrigger, Viewport};
use tracing::debug;

use crate::config::QuoteConfig;
use crate::event::PageEvent;
use crate::section::{Section, SectionCx, SectionId};

/// A quote whose words rise one by one, followed by its attribution and an
/// underline, each revealed at its own visibility threshold.
#[derive(Clone, Debug)]
pub struct QuoteSection {
    text: String,
    accent: String,
    author: String,
    words: RevealTrigger,
    attribution: RevealTrigger,
    underline: RevealTrigger,
    observer: Option<ListenerId>,
}

impl QuoteSection {
    /// Builds the section.
    #[must_use]
    pub fn new(config: &QuoteConfig) -> Self {
        Self {
            text: config.text.clone(),
            accent: config.accent.clone(),
            author: config.author.clone(),
            words: RevealTrigger::once(0.5),
            attribution: RevealTrigger::once(0.6),
            underline: RevealTrigger::once(0.7),
            observer: None,
        }
    }

    /// The quote split for animation.
    #[must_use]
    pub fn tokens(&self) -> Vec<QuoteToken<'_>> {
        split_quote(&self.text, &self.accent)
    }

    /// Attribution line.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the words have started rising.
    #[must_use]
    pub fn words_revealed(&self) -> bool {
        self.words.is_revealed()
    }

    /// Whether the attribution is shown.
    #[must_use]
    pub fn attribution_revealed(&self) -> bool {
        self.attribution.is_revealed()
    }

    /// Whether the underline is drawn.
    #[must_use]
    pub fn underline_revealed(&self) -> bool {
        self.underline.is_revealed()
    }

    fn observe(&mut self, cx: &mut SectionCx<'_>) -> bool {
        if self.observer.is_none() {
            return false;
        }
        let mut changed = false;
        for trigger in [&mut self.words, &mut self.attribution, &mut self.underline] {
            changed |= trigger.observe(&cx.bounds, cx.viewport);
        }
        if self.underline.is_revealed()
            && self.attribution.is_revealed()
            && self.words.is_revealed()
        {
            if let Some(id) = self.observer.take() {
                cx.listeners.unsubscribe(id);
            }
        }
        changed
    }
}

impl Section for QuoteSection {
    fn id(&self) -> SectionId {
        SectionId::Quote
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height() * 0.8
    }

    fn mount(&mut self, cx: &mut SectionCx<'_>) {
        for trigger in [&mut self.words, &mut self.attribution, &mut self.underline] {
            trigger.reset();
        }
        if self.observer.is_none() {
            self.observer = Some(cx.listeners.subscribe(ListenerKinds::INTERSECTION));
        }
        self.observe(cx);
        debug!("quote mounted");
    }

    fn unmount(&mut self, cx: &mut SectionCx<'_>) {
        if let Some(id) = self.observer.take() {
            cx.listeners.unsubscribe(id);
        }
        debug!("quote unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        match event {
            PageEvent::Scroll { .. } | PageEvent::Resize(_) => self.observe(cx),
            _ => false,
        }
    }
}
