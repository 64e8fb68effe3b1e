// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=darkroom_scroll --heading-base-level=0

//! Darkroom Scroll: turn page scroll into normalized progress.
//!
//! Each section of a scroll-driven page wants the same thing: a number in
//! `[0, 1]` describing how far the user has scrolled through it. This crate
//! isolates every layout query behind that number, so the rest of the system
//! never touches raw bounding rectangles.
//!
//! - [`Viewport`]: the size of the visible window.
//! - [`LayoutProbe`]: how a tracker asks the host for an element's
//!   viewport-relative bounds. Returns `None` while the element is unmounted.
//! - [`ProgressLines`]: the entry/exit policy mapping a container's top edge to
//!   progress.
//! - [`ScrollProgressTracker`]: the mount/update/unmount lifecycle around
//!   [`ProgressLines`].
//! - [`ListenerRegistry`]: symmetric acquire/release of scroll, resize, key,
//!   frame, and intersection subscriptions.
//! - [`HorizontalTrack`]: the "virtual scrollbar" that converts vertical scroll
//!   through a tall section into horizontal travel.
//! - [`SlideActivation`], [`RevealTrigger`]: latching visibility state.
//! - [`SmoothScroll`]: eased-inertial wheel scrolling advanced per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use darkroom_scroll::{ListenerRegistry, ProgressLines, ScrollProgressTracker, Viewport};
//!
//! let mut listeners = ListenerRegistry::new();
//! let viewport = Viewport::new(1280.0, 1000.0);
//! let mut tracker = ScrollProgressTracker::new(ProgressLines::default());
//!
//! // An 800px tall section whose top sits at y = 100 in the viewport.
//! let section = Rect::new(0.0, 100.0, 1280.0, 900.0);
//! let progress = tracker.mount(&mut listeners, viewport, &section).unwrap();
//! assert_eq!(progress.get(), 0.5);
//!
//! tracker.unmount(&mut listeners);
//! assert!(listeners.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod lines;
mod listeners;
mod probe;
mod reveal;
mod slide;
mod smooth;
mod track;
mod tracker;
mod viewport;

pub use lines::{ProgressLines, progress_between};
pub use listeners::{ListenerId, ListenerKinds, ListenerRegistry};
pub use probe::LayoutProbe;
pub use reveal::{RevealTrigger, visible_fraction};
pub use slide::SlideActivation;
pub use smooth::{SmoothScroll, SmoothScrollConfig};
pub use track::{HorizontalTrack, TrackMetrics, TrackPosition};
pub use tracker::ScrollProgressTracker;
pub use viewport::Viewport;
