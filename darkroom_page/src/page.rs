// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled page.

use darkroom_easing::clamp;
use darkroom_event_state::scroll_lock::Overflow;
use darkroom_scroll::{
    ListenerId, ListenerKinds, ListenerRegistry, SmoothScroll, SmoothScrollConfig, Viewport,
};
use tracing::{debug, trace};

use crate::config::{ConfigError, SiteConfig};
use crate::event::{HoverTarget, PageEvent};
use crate::header::Header;
use crate::layout::PageLayout;
use crate::section::{Section, SectionCx, SectionId};
use crate::sections::{
    AboutSection, ContactSection, GallerySection, HeroSection, PolaroidStackSection,
    QuoteSection, TestimonialsSection, TravelSection,
};

/// Scroll positions closer than this are the same position.
const SCROLL_EPSILON: f64 = 0.01;

/// Every section plus the shared state they run against.
///
/// ## Lifecycle
///
/// 1. [`Page::new`] builds the sections from a [`SiteConfig`] and lays them
///    out for the initial viewport.
/// 2. [`Page::mount`] mounts every section in document order and installs the
///    smooth-scroll wheel and frame listeners.
/// 3. [`Page::dispatch`] routes events; scroll and resize reach every section
///    with its own viewport-relative bounds.
/// 4. [`Page::unmount`] unmounts every section. The listener registry is empty
///    afterwards and the page's overflow is back to its mount-time value.
///
/// Events dispatched while unmounted are ignored.
#[derive(Debug)]
pub struct Page {
    header: Header,
    hero: HeroSection,
    about: AboutSection,
    gallery: GallerySection,
    quote: QuoteSection,
    travel: TravelSection,
    polaroids: PolaroidStackSection,
    testimonials: TestimonialsSection,
    contact: ContactSection,
    listeners: ListenerRegistry,
    layout: PageLayout,
    viewport: Viewport,
    body: Overflow,
    scroll_y: f64,
    smooth_config: SmoothScrollConfig,
    smooth: SmoothScroll,
    smooth_listener: Option<ListenerId>,
    mounted: bool,
}

impl Page {
    /// Builds an unmounted page.
    ///
    /// Fails only if the gallery palette does not parse.
    pub fn new(config: &SiteConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        let lines = config.scroll.progress_lines();
        let smooth_config = config.scroll.smooth_scroll();
        let mut page = Self {
            header: Header::new(config.brand.clone()),
            hero: HeroSection::new(),
            about: AboutSection::new(&config.about, lines),
            gallery: GallerySection::new(
                config.gallery.heading.clone(),
                config.gallery.images.clone(),
                config.palette()?,
                config.gallery.density,
            ),
            quote: QuoteSection::new(&config.quote),
            travel: TravelSection::new(&config.travel, lines),
            polaroids: PolaroidStackSection::new(config.stack.images.clone()),
            testimonials: TestimonialsSection::new(config.testimonials.clone()),
            contact: ContactSection::new(config.contact.images.clone()),
            listeners: ListenerRegistry::new(),
            layout: PageLayout::new(),
            viewport,
            body: Overflow::default(),
            scroll_y: 0.0,
            smooth_config,
            smooth: SmoothScroll::new(smooth_config, 0.0),
            smooth_listener: None,
            mounted: false,
        };
        page.relayout();
        Ok(page)
    }

    /// Sets the overflow value the page's scrolling element starts with.
    pub fn set_body_overflow(&mut self, overflow: Overflow) {
        self.body = overflow;
    }

    /// Mounts every section. Mounting twice is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.relayout();
        let limit = self.layout.scroll_limit(self.viewport);
        self.smooth = SmoothScroll::new(self.smooth_config, limit);
        self.smooth.scroll_to(self.scroll_y, true);
        self.smooth_listener =
            Some(self.listeners.subscribe(ListenerKinds::WHEEL | ListenerKinds::FRAME));
        self.visit(|section, cx| section.mount(cx));
        debug!(
            listeners = self.listeners.len(),
            height = self.layout.total_height(),
            "page mounted"
        );
    }

    /// Unmounts every section and releases all listeners.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.visit(|section, cx| section.unmount(cx));
        if let Some(id) = self.smooth_listener.take() {
            self.listeners.unsubscribe(id);
        }
        self.smooth.destroy();
        self.mounted = false;
        debug!(leaked = self.listeners.len(), "page unmounted");
    }

    /// Routes one event. Returns `true` if anything visible changed.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        if !self.mounted {
            return false;
        }
        match event {
            PageEvent::Scroll { y } => {
                let y = clamp(y, 0.0, self.layout.scroll_limit(self.viewport));
                self.smooth.scroll_to(y, true);
                self.scroll_to(y)
            }
            PageEvent::Resize(size) => {
                self.viewport = Viewport::from_size(size);
                self.relayout();
                let limit = self.layout.scroll_limit(self.viewport);
                self.smooth.set_limit(limit);
                self.scroll_y = clamp(self.scroll_y, 0.0, limit);
                self.broadcast(&event)
            }
            PageEvent::Wheel { delta } => {
                self.smooth.wheel(delta);
                false
            }
            PageEvent::Frame { time_ms } => {
                let y = self.smooth.frame(time_ms);
                let scrolled = (y - self.scroll_y).abs() > SCROLL_EPSILON && self.scroll_to(y);
                self.visit(|section, cx| section.frame(time_ms, cx));
                scrolled
            }
            PageEvent::Hover {
                target: HoverTarget::NavLink(index),
                entered,
            } => self.header.hover_link(index, entered),
            PageEvent::Hover {
                target: HoverTarget::ShopMenu,
                entered,
            } => self.header.hover_shop(entered),
            PageEvent::Hover { .. }
            | PageEvent::PointerMove(_)
            | PageEvent::Key(_)
            | PageEvent::Click(_) => self.broadcast(&event),
        }
    }

    fn scroll_to(&mut self, y: f64) -> bool {
        self.scroll_y = y;
        trace!(y, "scroll");
        self.broadcast(&PageEvent::Scroll { y })
    }

    fn broadcast(&mut self, event: &PageEvent) -> bool {
        let mut changed = false;
        self.visit(|section, cx| changed |= section.handle(event, cx));
        changed
    }

    fn relayout(&mut self) {
        self.layout.set_width(self.viewport.width());
        let viewport = self.viewport;
        let heights: [(SectionId, f64); 8] = [
            (self.hero.id(), self.hero.height(viewport)),
            (self.about.id(), self.about.height(viewport)),
            (self.gallery.id(), self.gallery.height(viewport)),
            (self.quote.id(), self.quote.height(viewport)),
            (self.travel.id(), self.travel.height(viewport)),
            (self.polaroids.id(), self.polaroids.height(viewport)),
            (self.testimonials.id(), self.testimonials.height(viewport)),
            (self.contact.id(), self.contact.height(viewport)),
        ];
        for (id, height) in heights {
            self.layout.set_height(id, height);
        }
    }

    /// Calls `f` on every section in document order with its context.
    fn visit(&mut self, mut f: impl FnMut(&mut dyn Section, &mut SectionCx<'_>)) {
        let sections: [&mut dyn Section; 8] = [
            &mut self.hero,
            &mut self.about,
            &mut self.gallery,
            &mut self.quote,
            &mut self.travel,
            &mut self.polaroids,
            &mut self.testimonials,
            &mut self.contact,
        ];
        for section in sections {
            let mut cx = SectionCx {
                listeners: &mut self.listeners,
                viewport: self.viewport,
                bounds: self.layout.bounds(section.id(), self.scroll_y),
                body: &mut self.body,
            };
            f(section, &mut cx);
        }
    }

    /// Whether the page is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Section stacking.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Live listener subscriptions.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Overflow of the page's scrolling element.
    #[must_use]
    pub fn body_overflow(&self) -> Overflow {
        self.body
    }

    /// Smooth-scroll driver.
    #[must_use]
    pub fn smooth_scroll(&self) -> &SmoothScroll {
        &self.smooth
    }

    /// The header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The hero.
    #[must_use]
    pub fn hero(&self) -> &HeroSection {
        &self.hero
    }

    /// The about section.
    #[must_use]
    pub fn about(&self) -> &AboutSection {
        &self.about
    }

    /// The horizontal gallery.
    #[must_use]
    pub fn gallery(&self) -> &GallerySection {
        &self.gallery
    }

    /// The quote.
    #[must_use]
    pub fn quote(&self) -> &QuoteSection {
        &self.quote
    }

    /// The travel section.
    #[must_use]
    pub fn travel(&self) -> &TravelSection {
        &self.travel
    }

    /// The polaroid stack.
    #[must_use]
    pub fn polaroids(&self) -> &PolaroidStackSection {
        &self.polaroids
    }

    /// The testimonials.
    #[must_use]
    pub fn testimonials(&self) -> &TestimonialsSection {
        &self.testimonials
    }

    /// The contact section.
    #[must_use]
    pub fn contact(&self) -> &ContactSection {
        &self.contact
    }

    /// Mutable contact section, for form input.
    pub fn contact_mut(&mut self) -> &mut ContactSection {
        &mut self.contact
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount();
    }
}
