// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use darkroom_page::{Page, PageEvent, SiteConfig};
use darkroom_scroll::Viewport;

fn bench_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("darkroom_page");
    group.sample_size(30);

    let config = SiteConfig::default();
    let viewport = Viewport::new(1440.0, 900.0);

    group.bench_function("mount_unmount", |b| {
        b.iter_batched(
            || Page::new(&config, viewport).expect("default palette parses"),
            |mut page| {
                page.mount();
                page.unmount();
                black_box(page.listeners().len())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("scroll_dispatch_sweep(200)", |b| {
        let mut page = Page::new(&config, viewport).expect("default palette parses");
        page.mount();
        let limit = page.layout().scroll_limit(viewport);
        b.iter(|| {
            let mut changed = 0_u32;
            for step in 0..200 {
                let y = limit * f64::from(step) / 200.0;
                changed += u32::from(page.dispatch(PageEvent::Scroll { y }));
            }
            black_box(changed)
        });
    });

    group.bench_function("frames_after_wheel(60)", |b| {
        let mut page = Page::new(&config, viewport).expect("default palette parses");
        page.mount();
        let mut t = 0.0;
        b.iter(|| {
            page.dispatch(PageEvent::Scroll { y: 0.0 });
            page.dispatch(PageEvent::Wheel { delta: 1200.0 });
            for _ in 0..60 {
                t += 16.0;
                page.dispatch(PageEvent::Frame { time_ms: t });
            }
            black_box(page.scroll_y())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_page);
criterion_main!(benches);
