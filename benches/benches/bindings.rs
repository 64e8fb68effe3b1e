// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use darkroom_bindings::{FallIn, Palette, StackLayout, WipeReveal, split_quote};
use darkroom_easing::Progress;

fn bench_bindings(c: &mut Criterion) {
    let mut group = c.benchmark_group("darkroom_bindings");
    group.sample_size(50);

    let photos: Vec<FallIn> = (0..32)
        .map(|i| FallIn::for_image(&format!("photo-{i}")).with_stagger(f64::from(i) / 64.0))
        .collect();

    group.bench_function("fall_in_frames_css(32)", |b| {
        b.iter(|| {
            let p = Progress::new(black_box(0.42));
            let mut len = 0;
            for photo in &photos {
                len += photo.frame(p).transform().to_css().len();
            }
            black_box(len)
        });
    });

    group.bench_function("fall_in_frames_affine(32)", |b| {
        b.iter(|| {
            let p = Progress::new(black_box(0.42));
            let mut acc = 0.0;
            for photo in &photos {
                acc += photo.frame(p).transform().to_affine().translation().y;
            }
            black_box(acc)
        });
    });

    let palette = Palette::gallery();
    group.bench_function("palette_and_wipe_sweep(1000)", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for step in 0..1000 {
                let p = Progress::new(f64::from(step) / 1000.0);
                hits += palette.index_at(p).unwrap_or(0);
                hits += WipeReveal::at(p).to_css().len();
            }
            black_box(hits)
        });
    });

    let layout = StackLayout::default();
    group.bench_function("stack_poses(8)", |b| {
        b.iter(|| {
            let stacked = layout.poses(black_box(8), false);
            let expanded = layout.poses(black_box(8), true);
            black_box((stacked.len(), expanded.len()))
        });
    });

    let quote = "\u{201c}The master of greens\u{201c} said the quiet light, again and again";
    group.bench_function("split_quote", |b| {
        b.iter(|| black_box(split_quote(black_box(quote), "greens").len()));
    });

    group.finish();
}

criterion_group!(benches, bench_bindings);
criterion_main!(benches);
