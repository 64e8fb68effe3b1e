// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_bindings::{Marquee, MarqueeDirection, globe_rotation, looped, travel_marquee_seconds};
use darkroom_easing::Progress;
use darkroom_scroll::{ProgressLines, ScrollProgressTracker, Viewport};
use tracing::debug;

use crate::config::{ImageEntry, TravelConfig};
use crate::event::PageEvent;
use crate::frame_loop::{FrameLoop, GpuResources};
use crate::section::{Section, SectionCx, SectionId};

/// Two marquee rows running in opposite directions that speed up as the
/// section scrolls, beside a globe that turns once over the section.
#[derive(Debug)]
pub struct TravelSection {
    heading: String,
    images: Vec<ImageEntry>,
    tracker: ScrollProgressTracker,
    globe: FrameLoop<GpuResources>,
    globe_rotation: f64,
    started_ms: Option<f64>,
    elapsed_seconds: f64,
}

impl TravelSection {
    /// Segments of the globe sphere.
    pub const GLOBE_SEGMENTS: u32 = 64;
    /// Direction of each marquee row, top to bottom.
    pub const ROWS: [MarqueeDirection; 2] = [MarqueeDirection::Left, MarqueeDirection::Right];

    /// Builds the section.
    #[must_use]
    pub fn new(config: &TravelConfig, lines: ProgressLines) -> Self {
        Self {
            heading: config.heading.clone(),
            images: config.images.clone(),
            tracker: ScrollProgressTracker::new(lines),
            globe: FrameLoop::new(),
            globe_rotation: 0.0,
            started_ms: None,
            elapsed_seconds: 0.0,
        }
    }

    /// Heading text.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Scroll progress through the section.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    /// Seconds per marquee loop at the current progress.
    #[must_use]
    pub fn marquee_seconds(&self) -> f64 {
        travel_marquee_seconds(self.tracker.progress())
    }

    /// Images of one row, doubled for a seamless loop.
    #[must_use]
    pub fn row_images(&self) -> Vec<ImageEntry> {
        looped(&self.images)
    }

    /// Offset of each row for a doubled row `row_width` wide.
    #[must_use]
    pub fn row_offsets(&self, row_width: f64) -> [f64; 2] {
        let seconds = self.marquee_seconds();
        Self::ROWS.map(|direction| {
            Marquee::new(direction, seconds).offset(self.elapsed_seconds, row_width)
        })
    }

    /// Globe Y rotation in radians as of the last frame.
    #[must_use]
    pub fn globe_rotation(&self) -> f64 {
        self.globe_rotation
    }

    /// Whether the globe's frame loop is running.
    #[must_use]
    pub fn is_globe_running(&self) -> bool {
        self.globe.is_running()
    }
}

impl Section for TravelSection {
    fn id(&self) -> SectionId {
        SectionId::Travel
    }

    fn height(&self, viewport: Viewport) -> f64 {
        viewport.height() * 1.5
    }

    fn mount(&mut self, cx: &mut SectionCx<'_>) {
        self.tracker.mount(cx.listeners, cx.viewport, &cx.bounds);
        self.globe.start(cx.listeners, GpuResources::new(Self::GLOBE_SEGMENTS));
        self.started_ms = None;
        self.elapsed_seconds = 0.0;
        self.globe_rotation = 0.0;
        debug!(progress = self.tracker.progress().get(), "travel mounted");
    }

    fn unmount(&mut self, cx: &mut SectionCx<'_>) {
        self.tracker.unmount(cx.listeners);
        self.globe.cancel(cx.listeners);
        debug!("travel unmounted");
    }

    fn handle(&mut self, event: &PageEvent, cx: &mut SectionCx<'_>) -> bool {
        match event {
            PageEvent::Scroll { .. } | PageEvent::Resize(_) => {
                let before = self.tracker.progress();
                self.tracker.update(cx.viewport, &cx.bounds);
                before != self.tracker.progress()
            }
            _ => false,
        }
    }

    fn frame(&mut self, time_ms: f64, _cx: &mut SectionCx<'_>) {
        let progress = self.tracker.progress();
        if self.globe.tick(time_ms).is_none() {
            return;
        }
        self.globe_rotation = globe_rotation(time_ms, progress);
        let start = *self.started_ms.get_or_insert(time_ms);
        self.elapsed_seconds = (time_ms - start) / 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::TravelSection;
    use crate::config::TravelConfig;
    use crate::section::{Section, SectionCx};
    use darkroom_bindings::GLOBE_IDLE_RATE;
    use darkroom_event_state::scroll_lock::Overflow;
    use darkroom_scroll::{ListenerKinds, ListenerRegistry, ProgressLines, Viewport};
    use kurbo::Rect;

    #[test]
    fn globe_spins_only_while_mounted() {
        let mut travel = TravelSection::new(&TravelConfig::default(), ProgressLines::default());
        let mut listeners = ListenerRegistry::new();
        let mut body = Overflow::Unset;
        let mut cx = SectionCx {
            listeners: &mut listeners,
            viewport: Viewport::new(1280.0, 800.0),
            bounds: Some(Rect::new(0.0, 2000.0, 1280.0, 3200.0)),
            body: &mut body,
        };
        travel.mount(&mut cx);
        assert!(travel.is_globe_running());
        assert_eq!(cx.listeners.count(ListenerKinds::FRAME), 1);
        assert_eq!(travel.marquee_seconds(), 160.0);

        travel.frame(1000.0, &mut cx);
        assert_eq!(travel.globe_rotation(), 1000.0 * GLOBE_IDLE_RATE);

        travel.unmount(&mut cx);
        assert!(cx.listeners.is_empty());
        travel.frame(2000.0, &mut cx);
        assert_eq!(travel.globe_rotation(), 1000.0 * GLOBE_IDLE_RATE);
    }

    #[test]
    fn rows_loop_and_run_opposite() {
        let mut travel = TravelSection::new(&TravelConfig::default(), ProgressLines::default());
        let mut listeners = ListenerRegistry::new();
        let mut body = Overflow::Unset;
        let mut cx = SectionCx {
            listeners: &mut listeners,
            viewport: Viewport::new(1280.0, 800.0),
            bounds: None,
            body: &mut body,
        };
        travel.mount(&mut cx);
        assert_eq!(travel.row_images().len(), 10);
        travel.frame(0.0, &mut cx);
        assert_eq!(travel.row_offsets(2000.0), [0.0, -1000.0]);
        travel.frame(40_000.0, &mut cx);
        let [left, right] = travel.row_offsets(2000.0);
        assert_eq!(left, -250.0);
        assert_eq!(right, -750.0);
        travel.unmount(&mut cx);
    }
}
