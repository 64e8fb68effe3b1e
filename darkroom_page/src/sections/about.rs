// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{FallFrame, FallIn, WipeReveal};
use darkroom_easing::Progress;
use darkroom_scroll::{
    ListenerId, ListenerKinds, ProgressLines, RevealTrigger, ScrollProgressTracker, Viewport,
};
use tracing::debug;

use crate::config::AboutConfig;
use crate::event::PageEvent;
use crate::section::{Section, SectionCx, SectionId};

/// Heading with a scroll-linked wipe, plus polaroids that drop in once the
/// section is a quarter visible.
#[derive(Clone, Debug)]
pub struct AboutSection {
    bio: String,
    captions: Vec<String>,
    photos: Vec<FallIn>,
    tracker: ScrollProgressTracker,
    trigger: RevealTrigger,
    observer: Option<ListenerId>,
    drop_started_ms: Option<f64>,
    drop: Progress,
}

impl AboutSection {
    /// Visible fraction that starts the drop.
    pub const DROP_THRESHOLD: f64 = 0.25;
    /// Length of the drop.
    pub const DROP_MS: f64 = 900.0;
    /// Scale the photos fall from.
    pub const DROP_START_SCALE: f64 = 1.1;

    /// Builds the section from its config.
    #[must_use]
    pub fn new(config: &AboutConfig, lines: ProgressLines) -> Self {
        let photos = config
            .photos
            .iter()
            .map(|photo| {
                FallIn::for_image(&photo.src)
                    .with_width(photo.width)
                    .with_rotation(photo.start_rotation, photo.end_rotation)
                    .with_x(photo.x)
                    .with_start_y_offset(photo.start_y_offset)
                    .with_start_scale(Self::DROP_START_SCALE)
                    .with_stagger(photo.stagger)
            })
            .collect();
        Self {
            bio: config.bio.clone(),
            captions: config.photos.iter().map(|p| p.caption.clone()).collect(),
            photos,
            tracker: ScrollProgressTracker::new(lines),
            trigger: RevealTrigger::once(Self::DROP_THRESHOLD),
            observer: None,
            drop_started_ms: None,
            drop: Progress::ZERO,
        }
    }

    /// Biography paragraph.
    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Photo captions.
    #[must_use]
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// Heading reveal progress.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    /// Clip of the bright heading layer.
    #[must_use]
    pub fn heading_wipe(&self) -> WipeReveal {
        WipeReveal::at(self.tracker.progress())
    }

    /// Whether the drop has been triggered.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.trigger.is_revealed()
    }

    /// Overall drop progress.
    #[must_use]
    pub fn drop_progress(&self) -> Progress {
        self.drop
    }

    /// Drop parameters for each photo, in config order.
    #[must_use]
    pub fn photos(&self) -> &[FallIn] {
        &self.photos
    }

    /// Per-photo frames for the current drop progress.
    #[must_use]
    pub fn photo_frames(&self) -> Vec<FallFrame> {
        self.photos.iter().map(|photo| photo.frame(self.drop)).collect()
    }

    fn observe(&mut self, cx: &mut SectionCx<'_>) {
        if self.observer.is_none() {
            return;
        }
        if self.trigger.observe(&cx.bounds, cx.viewport) && self.trigger.is_revealed() {
            debug!("about polaroids triggered");
            // One-shot: the observer is not needed after it fires.
            if let Some(id) = self.observer.take() {
                cx.listeners.unsubscribe(id);
            }
        }
    }
}

impl Section for AboutSection {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height() * 0.9
    }

    fn mount(&mut self, cx: &mut SectionCx<'_>) {
        self.trigger.reset();
        self.drop = Progress::ZERO;
        self.drop_started_ms = None;
        self.tracker.mount(cx.listeners, cx.viewport, &cx.bounds);
        if self.observer.is_none() {
            self.observer = Some(cx.listeners.subscribe(ListenerKinds::INTERSECTION));
        }
        self.observe(cx);
        debug!(progress = self.tracker.progress().get(), "about mounted");
    }

    fn unmount(&mut self, cx: &mut SectionCx<'_>) {
        self.tracker.unmount(cx.listeners);
        if let Some(id) = self.observer.take() {
            cx.listeners.unsubscribe(id);
        }
        debug!("about unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        match event {
            PageEvent::Scroll { .. } | PageEvent::Resize(_) => {
                let before = self.tracker.progress();
                self.tracker.update(cx.viewport, &cx.bounds);
                let was_triggered = self.trigger.is_revealed();
                self.observe(cx);
                before != self.tracker.progress() || was_triggered != self.trigger.is_revealed()
            }
            _ => false,
        }
    }

    fn frame(&mut self, time_ms: f64, _cx: &mut SectionCx<'_>) {
        if !self.trigger.is_revealed() || self.drop.is_complete() {
            return;
        }
        let start = *self.drop_started_ms.get_or_insert(time_ms);
        self.drop = Progress::new((time_ms - start) / Self::DROP_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::AboutSection;
    use crate::config::AboutConfig;
    use crate::event::PageEvent;
    use crate::section::{Section, SectionCx};
    use darkroom_event_state::scroll_lock::Overflow;
    use darkroom_scroll::{ListenerKinds, ListenerRegistry, ProgressLines, Viewport};
    use kurbo::Rect;

    #[test]
    fn drop_runs_after_trigger_and_releases_observer() {
        let mut listeners = ListenerRegistry::new();
        let mut body = Overflow::Unset;
        let viewport = Viewport::new(1280.0, 800.0);
        let mut about = AboutSection::new(&AboutConfig::default(), ProgressLines::default());

        let below = Rect::new(0.0, 900.0, 1280.0, 1620.0);
        let mut cx = SectionCx {
            listeners: &mut listeners,
            viewport,
            bounds: Some(below),
            body: &mut body,
        };
        about.mount(&mut cx);
        assert!(!about.is_triggered());
        assert_eq!(cx.listeners.count(ListenerKinds::INTERSECTION), 1);

        about.frame(0.0, &mut cx);
        assert_eq!(about.drop_progress().get(), 0.0);

        cx.bounds = Some(Rect::new(0.0, 400.0, 1280.0, 1120.0));
        assert!(about.handle(&PageEvent::Scroll { y: 500.0 }, &mut cx));
        assert!(about.is_triggered());
        assert_eq!(cx.listeners.count(ListenerKinds::INTERSECTION), 0);

        about.frame(1000.0, &mut cx);
        about.frame(1450.0, &mut cx);
        assert_eq!(about.drop_progress().get(), 0.5);
        about.frame(5000.0, &mut cx);
        assert!(about.drop_progress().is_complete());
        for frame in about.photo_frames() {
            assert_eq!(frame.opacity, 1.0);
        }

        about.unmount(&mut cx);
        assert!(cx.listeners.is_empty());
    }

    #[test]
    fn pinned_photos_keep_width_and_tilt() {
        let about = AboutSection::new(&AboutConfig::default(), ProgressLines::default());
        let widths: Vec<f64> = about.photos().iter().map(|photo| photo.width).collect();
        assert_eq!(widths[..3], [220.0, 200.0, 280.0]);

        let frames = about.photo_frames();
        assert_eq!(frames[0].rotate_deg, -10.0);
        assert_eq!(frames[1].rotate_deg, 8.0);
        assert_eq!(frames[2].rotate_deg, -4.0);
        let ends: Vec<f64> = about.photos()[..3].iter().map(|photo| photo.tilt.end_deg).collect();
        assert_eq!(ends, [-5.0, 6.0, -2.0]);
    }

    #[test]
    fn remount_restarts_the_drop() {
        let mut listeners = ListenerRegistry::new();
        let mut body = Overflow::Unset;
        let mut about = AboutSection::new(&AboutConfig::default(), ProgressLines::default());
        let mut cx = SectionCx {
            listeners: &mut listeners,
            viewport: Viewport::new(1280.0, 800.0),
            bounds: Some(Rect::new(0.0, 400.0, 1280.0, 1120.0)),
            body: &mut body,
        };
        about.mount(&mut cx);
        about.frame(0.0, &mut cx);
        about.frame(2000.0, &mut cx);
        assert!(about.drop_progress().is_complete());
        about.unmount(&mut cx);

        cx.bounds = Some(Rect::new(0.0, 900.0, 1280.0, 1620.0));
        about.mount(&mut cx);
        assert!(!about.is_triggered());
        assert_eq!(about.drop_progress().get(), 0.0);
        assert_eq!(cx.listeners.count(ListenerKinds::INTERSECTION), 1);

        cx.bounds = Some(Rect::new(0.0, 400.0, 1280.0, 1120.0));
        about.handle(&PageEvent::Scroll { y: 500.0 }, &mut cx);
        about.frame(3000.0, &mut cx);
        about.frame(3450.0, &mut cx);
        assert_eq!(about.drop_progress().get(), 0.5, "drop clock restarts");
        about.unmount(&mut cx);
        assert!(cx.listeners.is_empty());
    }
}
