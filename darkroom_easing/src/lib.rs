// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=darkroom_easing --heading-base-level=0

//! Darkroom Easing: clamped progress and the small math used to shape it.
//!
//! Every scroll-driven animation in Darkroom reduces to the same steps:
//! measure something, normalize it into `[0, 1]`, optionally reshape it, and
//! interpolate a visual parameter. This crate owns the last three.
//!
//! - [`Progress`]: a value that is always within `[0, 1]`. Bindings accept
//!   `Progress` rather than raw `f64`, so an out-of-range value can never reach
//!   an interpolation.
//! - [`clamp`], [`lerp`], [`lerp_vec2`]: the interpolation primitives.
//! - [`Easing`], [`ease_out_cubic`], [`ease_out_expo`]: deceleration curves.
//! - [`stagger`]: delays an item's start within a shared progress while still
//!   finishing with everyone else.
//!
//! ## Minimal example
//!
//! ```rust
//! use darkroom_easing::{Easing, Progress, lerp};
//!
//! // Raw measurement that overshot the active range.
//! let p = Progress::new(1.4);
//! assert_eq!(p.get(), 1.0);
//!
//! // A card with stagger 0.25 has not started yet at 20% global progress.
//! let local = Progress::new(0.2).stagger(0.25);
//! assert_eq!(local, Progress::ZERO);
//!
//! let eased = Progress::new(0.5).ease(Easing::OutCubic);
//! let y = lerp(-240.0, 0.0, eased.get());
//! assert!(y > -120.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod curve;
mod interp;
mod progress;
mod stagger;

pub use curve::{Easing, ease_out_cubic, ease_out_expo};
pub use interp::{clamp, lerp, lerp_vec2};
pub use progress::Progress;
pub use stagger::stagger;
