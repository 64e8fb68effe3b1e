// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use darkroom_scroll::{
    HorizontalTrack, ListenerKinds, ListenerRegistry, ProgressLines, ScrollProgressTracker, SmoothScroll,
    SmoothScrollConfig, TrackMetrics, Viewport,
};
use kurbo::Rect;

const VIEWPORT: Viewport = Viewport::new(1440.0, 900.0);

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("darkroom_scroll");
    group.sample_size(50);

    group.bench_function("tracker_update_sweep(1000)", |b| {
        let mut listeners = ListenerRegistry::new();
        let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
        tracker.mount(&mut listeners, VIEWPORT, &Rect::new(0.0, 900.0, 1440.0, 2100.0));
        b.iter(|| {
            let mut sum = 0.0;
            for step in 0..1000 {
                let top = 900.0 - f64::from(step) * 3.0;
                let bounds = Rect::new(0.0, top, 1440.0, top + 1200.0);
                if let Some(p) = tracker.update(VIEWPORT, &bounds) {
                    sum += p.get();
                }
            }
            black_box(sum)
        });
    });

    for cards in [5_usize, 50, 500] {
        group.bench_function(format!("track_measure_and_position(n={cards})"), |b| {
            b.iter(|| {
                let mut track = HorizontalTrack::default();
                track.measure(VIEWPORT, TrackMetrics::estimated(VIEWPORT, black_box(cards)));
                let mut x = 0.0;
                for step in 0..100 {
                    x += track.position(-f64::from(step) * 40.0, VIEWPORT.height()).x;
                }
                black_box(x)
            });
        });
    }

    group.bench_function("smooth_scroll_frames(120)", |b| {
        b.iter(|| {
            let mut smooth = SmoothScroll::new(SmoothScrollConfig::default(), 20_000.0);
            smooth.wheel(black_box(2400.0));
            let mut y = 0.0;
            for frame in 0..120 {
                y = smooth.frame(f64::from(frame) * 16.0);
            }
            black_box(y)
        });
    });

    group.bench_function("listener_churn(256)", |b| {
        let mut listeners = ListenerRegistry::new();
        b.iter(|| {
            let ids: Vec<_> = (0..256)
                .map(|_| listeners.subscribe(ListenerKinds::SCROLL_AND_RESIZE))
                .collect();
            for id in ids {
                listeners.unsubscribe(id);
            }
            black_box(listeners.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scroll);
criterion_main!(benches);
