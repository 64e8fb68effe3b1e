// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless tour of the portfolio page.
//!
//! Builds a [`Page`] from a TOML site config (or the built-in defaults),
//! mounts it, and drives it with a scripted scroll, wheel, click and key
//! sequence while logging what each section would render.
//!
//! ```text
//! RUST_LOG=darkroom_page=debug cargo run -p darkroom_demos -- --steps 12
//! ```

use std::path::PathBuf;

use anyhow::{Context, ensure};
use clap::Parser;
use darkroom_page::{ClickTarget, Key, Page, PageEvent, SiteConfig};
use darkroom_scroll::Viewport;
use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frame interval the tour advances by, in milliseconds.
const FRAME_MS: f64 = 16.0;

#[derive(Parser, Debug)]
#[command(about = "Scroll through the portfolio page without a browser")]
struct Args {
    /// Site config to load; missing or invalid files fall back to defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,
    /// Number of evenly spaced scroll stops between top and bottom.
    #[arg(long, default_value_t = 8)]
    steps: u32,
    /// Wheel delta used for the smooth-scroll leg of the tour.
    #[arg(long, default_value_t = 1200.0)]
    wheel: f64,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    ensure!(
        args.width > 0.0 && args.height > 0.0,
        "viewport must have a positive size, got {}x{}",
        args.width,
        args.height
    );

    let config = match &args.config {
        Some(path) => SiteConfig::load_or_default(path),
        None => SiteConfig::default(),
    };
    let viewport = Viewport::new(args.width, args.height);
    let mut page = Page::new(&config, viewport).context("building the page")?;
    page.mount();
    info!(
        brand = %page.header().brand,
        height = page.layout().total_height(),
        listeners = page.listeners().len(),
        "mounted"
    );

    scroll_tour(&mut page, args.steps);
    wheel_tour(&mut page, args.wheel);
    stack_tour(&mut page);
    contact_tour(&mut page);

    page.unmount();
    ensure!(
        page.listeners().is_empty(),
        "{} listeners leaked after unmount",
        page.listeners().len()
    );
    info!("unmounted cleanly");
    Ok(())
}

fn scroll_tour(page: &mut Page, steps: u32) {
    let limit = page.layout().scroll_limit(page.viewport());
    let steps = steps.max(1);
    page.dispatch(PageEvent::PointerMove(Point::new(
        page.viewport().width() * 0.75,
        page.viewport().height() * 0.25,
    )));
    for step in 0..=steps {
        let y = limit * f64::from(step) / f64::from(steps);
        page.dispatch(PageEvent::Scroll { y });
        let gallery = page.gallery().position();
        info!(
            y,
            about = page.about().progress().get(),
            wipe = %page.about().heading_wipe().to_css(),
            gallery = gallery.progress.get(),
            track_x = gallery.x,
            background = page.gallery().background_css().as_deref().unwrap_or("-"),
            quote = page.quote().words_revealed(),
            travel = page.travel().progress().get(),
            marquee_s = page.travel().marquee_seconds(),
            globe = page.travel().is_globe_running(),
            "scroll stop"
        );
    }
}

fn wheel_tour(page: &mut Page, delta: f64) {
    page.dispatch(PageEvent::Scroll { y: 0.0 });
    page.dispatch(PageEvent::Wheel { delta });
    let mut time_ms = 0.0;
    let mut frames = 0_u32;
    while page.smooth_scroll().is_animating() && frames < 600 {
        time_ms += FRAME_MS;
        frames += 1;
        page.dispatch(PageEvent::Frame { time_ms });
    }
    info!(
        frames,
        y = page.scroll_y(),
        target = page.smooth_scroll().target(),
        "wheel settled"
    );
}

fn stack_tour(page: &mut Page) {
    page.dispatch(PageEvent::Click(ClickTarget::StackToggle));
    page.dispatch(PageEvent::Click(ClickTarget::StackCard(0)));
    for key in [Key::ArrowRight, Key::ArrowRight, Key::ArrowLeft] {
        page.dispatch(PageEvent::Key(key));
        info!(
            current = ?page.polaroids().lightbox().current(),
            track = ?page.polaroids().lightbox_track_offset(),
            overflow = ?page.body_overflow(),
            "lightbox"
        );
    }
    page.dispatch(PageEvent::Key(Key::Escape));
    info!(
        open = page.polaroids().lightbox().is_open(),
        overflow = ?page.body_overflow(),
        "lightbox closed"
    );
}

fn contact_tour(page: &mut Page) {
    let postcard = page.contact_mut().postcard_mut();
    postcard.set_line(0, "Loved the greens series.");
    postcard.set_line(2, "Any prints left?");
    page.dispatch(PageEvent::Click(ClickTarget::FlipCard));
    page.dispatch(PageEvent::Click(ClickTarget::SendPostcard));
    info!(
        side = ?page.contact().side(),
        message = ?page.contact().postcard().compose_message(),
        ack = page.contact().acknowledgement().map_or("-", |ack| ack.message),
        "postcard"
    );
}
