// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scroll scenarios across the tracker, track, and smooth scroll.

use darkroom_scroll::{
    HorizontalTrack, ListenerRegistry, ProgressLines, ScrollProgressTracker, SmoothScroll,
    SmoothScrollConfig, TrackMetrics, Viewport,
};
use kurbo::Rect;

fn container(top: f64) -> Rect {
    Rect::new(0.0, top, 1000.0, top + 800.0)
}

#[test]
fn tall_viewport_short_container() {
    let viewport = Viewport::new(1000.0, 1000.0);
    let mut listeners = ListenerRegistry::new();
    let mut tracker = ScrollProgressTracker::new(ProgressLines::default());

    let at_entry = tracker.mount(&mut listeners, viewport, &container(800.0));
    assert_eq!(at_entry.map(|p| p.get()), Some(0.0));

    let mut last = 0.0;
    for top in [700.0, 400.0, 100.0, -200.0, -600.0] {
        let p = tracker.update(viewport, &container(top)).unwrap().get();
        assert!(p >= last, "progress went backwards at top {top}");
        last = p;
    }
    assert_eq!(last, 1.0);
    assert_eq!(tracker.update(viewport, &container(100.0)).unwrap().get(), 0.5);
    assert_eq!(tracker.update(viewport, &container(-5000.0)).unwrap().get(), 1.0);
    assert_eq!(tracker.update(viewport, &container(5000.0)).unwrap().get(), 0.0);

    tracker.unmount(&mut listeners);
    assert!(listeners.is_empty());
}

#[test]
fn unmeasured_container_keeps_last_progress() {
    let viewport = Viewport::new(1000.0, 1000.0);
    let mut listeners = ListenerRegistry::new();
    let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
    tracker.mount(&mut listeners, viewport, &container(100.0));
    assert_eq!(tracker.update(viewport, &None::<Rect>), None);
    assert_eq!(tracker.progress().get(), 0.5);
    tracker.unmount(&mut listeners);
}

#[test]
fn wheel_driven_track_reaches_last_card() {
    let viewport = Viewport::new(1280.0, 800.0);
    let mut track = HorizontalTrack::default();
    track.measure(viewport, TrackMetrics::estimated(viewport, 5));
    let scrollable = track.section_height() - viewport.height();

    let mut smooth = SmoothScroll::new(SmoothScrollConfig::default(), scrollable);
    smooth.wheel(scrollable * 10.0);
    smooth.frame(0.0);
    let mut last_x = 0.0;
    for step in 1..=12 {
        let y = smooth.frame(f64::from(step) * 100.0);
        let x = track.position(-y, viewport.height()).x;
        assert!(x <= last_x);
        last_x = x;
    }
    assert_eq!(smooth.position(), scrollable);
    assert_eq!(last_x, -track.travel());
}
