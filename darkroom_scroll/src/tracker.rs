// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_easing::Progress;

use crate::lines::ProgressLines;
use crate::listeners::{ListenerId, ListenerKinds, ListenerRegistry};
use crate::probe::LayoutProbe;
use crate::viewport::Viewport;

/// Converts page scroll into progress through one tracked container.
///
/// Lifecycle:
///
/// 1. [`mount`](Self::mount) subscribes to scroll (passive) and resize, resets
///    the progress, and computes once immediately so the first frame is
///    correct before any scroll happens.
/// 2. [`update`](Self::update) recomputes on every scroll or resize tick. The
///    computation is a pure function of the current measurements, so
///    repeated calls with the same inputs are idempotent.
/// 3. [`unmount`](Self::unmount) releases the subscription.
///
/// If the probe cannot measure the container, updates are no-ops and the last
/// progress is retained.
#[derive(Clone, Debug)]
pub struct ScrollProgressTracker {
    lines: ProgressLines,
    progress: Progress,
    listener: Option<ListenerId>,
}

impl ScrollProgressTracker {
    /// Creates an unmounted tracker with the given entry/exit policy.
    #[must_use]
    pub fn new(lines: ProgressLines) -> Self {
        Self {
            lines,
            progress: Progress::ZERO,
            listener: None,
        }
    }

    /// Returns the entry/exit policy.
    #[must_use]
    pub fn lines(&self) -> ProgressLines {
        self.lines
    }

    /// Subscribes and performs the initial computation.
    ///
    /// Mounting an already mounted tracker does not subscribe twice.
    pub fn mount<P: LayoutProbe + ?Sized>(
        &mut self,
        listeners: &mut ListenerRegistry,
        viewport: Viewport,
        probe: &P,
    ) -> Option<Progress> {
        if self.listener.is_none() {
            self.listener = Some(listeners.subscribe(ListenerKinds::SCROLL_AND_RESIZE));
        }
        self.progress = Progress::ZERO;
        self.update(viewport, probe)
    }

    /// Recomputes progress from the current measurements.
    ///
    /// Returns `None`, leaving progress unchanged, when the container cannot
    /// be measured.
    pub fn update<P: LayoutProbe + ?Sized>(
        &mut self,
        viewport: Viewport,
        probe: &P,
    ) -> Option<Progress> {
        let bounds = probe.bounds()?;
        self.progress = self
            .lines
            .progress(bounds.y0, viewport.height(), bounds.height());
        Some(self.progress)
    }

    /// Releases the subscription. Safe to call when not mounted.
    pub fn unmount(&mut self, listeners: &mut ListenerRegistry) {
        if let Some(id) = self.listener.take() {
            listeners.unsubscribe(id);
        }
    }

    /// Returns `true` between [`mount`](Self::mount) and
    /// [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Returns the most recent progress.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::ScrollProgressTracker;
    use crate::{ListenerRegistry, ProgressLines, Viewport};

    fn section_at(top: f64) -> Rect {
        Rect::new(0.0, top, 1200.0, top + 800.0)
    }

    #[test]
    fn mount_computes_immediately() {
        let mut reg = ListenerRegistry::new();
        let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
        let p = tracker.mount(&mut reg, Viewport::new(1200.0, 1000.0), &section_at(100.0));
        assert_eq!(p.map(|p| p.get()), Some(0.5));
        assert!(tracker.is_mounted());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unmeasurable_container_is_a_noop() {
        let mut reg = ListenerRegistry::new();
        let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
        let vp = Viewport::new(1200.0, 1000.0);
        tracker.mount(&mut reg, vp, &section_at(-600.0));
        assert_eq!(tracker.progress().get(), 1.0);

        let missing: Option<Rect> = None;
        assert!(tracker.update(vp, &missing).is_none());
        assert_eq!(tracker.progress().get(), 1.0);
    }

    #[test]
    fn remount_starts_from_scratch_and_does_not_leak() {
        let mut reg = ListenerRegistry::new();
        let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
        let vp = Viewport::new(1200.0, 1000.0);
        tracker.mount(&mut reg, vp, &section_at(-600.0));
        tracker.mount(&mut reg, vp, &None::<Rect>);
        assert_eq!(tracker.progress().get(), 0.0);
        assert_eq!(reg.len(), 1);

        tracker.unmount(&mut reg);
        tracker.unmount(&mut reg);
        assert!(reg.is_empty());
        assert!(!tracker.is_mounted());
    }

    #[test]
    fn update_is_idempotent() {
        let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
        let vp = Viewport::new(1200.0, 1000.0);
        let a = tracker.update(vp, &section_at(250.0));
        let b = tracker.update(vp, &section_at(250.0));
        assert_eq!(a, b);
    }
}
