// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=darkroom_bindings --heading-base-level=0

//! Darkroom Bindings: progress in, visual parameters out.
//!
//! Each binding here is a pure function from a [`Progress`] (or, for the hero,
//! a pointer offset) to concrete style values. Nothing in this crate measures
//! layout or keeps state between frames; feed it the output of
//! `darkroom_scroll` and hand the results to a renderer.
//!
//! - [`Transform`]: an ordered list of translate/rotate/scale operations that
//!   renders both as a CSS transform string and as a [`kurbo::Affine`].
//! - [`Tilt`] / [`tilt_for`]: deterministic per-image rotation from a string
//!   hash, so the same image always gets the same tilt.
//! - [`FallIn`]: the polaroid drop (fall, settle, unrotate, fade in).
//! - [`Palette`]: discrete background color by rounded progress.
//! - [`WipeReveal`]: left-to-right clip inset for text reveals.
//! - [`Orb`]: pointer parallax for the hero glows.
//! - [`StackLayout`], [`LightboxLayout`]: card poses for the polaroid stack.
//! - [`Marquee`], [`globe_rotation`], [`split_quote`]: travel, globe, and
//!   quote helpers.
//!
//! ## Minimal example
//!
//! ```rust
//! use darkroom_bindings::FallIn;
//! use darkroom_easing::Progress;
//!
//! let card = FallIn::for_image("studio-light.jpg").with_stagger(0.12);
//!
//! let start = card.frame(Progress::ZERO);
//! assert_eq!(start.opacity, 0.0);
//! assert_eq!(start.translate.y, -240.0);
//!
//! let end = card.frame(Progress::ONE);
//! assert_eq!(end.opacity, 1.0);
//! assert_eq!(end.scale, 1.0);
//! let css = end.transform().to_css();
//! assert!(css.starts_with("translate3d("));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fall;
mod globe;
mod lightbox;
mod marquee;
mod palette;
mod parallax;
mod quote;
mod stack;
mod tilt;
mod transform;
mod wipe;

pub use fall::{FallFrame, FallIn};
pub use globe::{GLOBE_IDLE_RATE, globe_rotation};
pub use lightbox::{LightboxLayout, SlideStyle};
pub use marquee::{Marquee, MarqueeDirection, looped, travel_marquee_seconds};
pub use palette::{Palette, css_hex};
pub use parallax::{Orb, pointer_offset};
pub use quote::{QuoteToken, split_quote};
pub use stack::{CardPose, HoverPose, StackLayout};
pub use tilt::{Tilt, tilt_for};
pub use transform::{Transform, TransformOp};
pub use wipe::WipeReveal;

pub use darkroom_easing::Progress;
