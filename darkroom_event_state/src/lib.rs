// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=darkroom_event_state --heading-base-level=0

//! Darkroom Event State: small state machines for click- and key-driven
//! interactions.
//!
//! Scroll-driven animation is stateless: every frame is a pure function of the
//! current measurements. A few interactions are not, and this crate models
//! those as explicit states with explicit transitions:
//!
//! - [`stack`]: a pile of cards toggled between stacked and expanded.
//! - [`lightbox`]: a modal viewer over N images with wrap-around navigation,
//!   keyboard handling, and page scroll locking.
//! - [`scroll_lock`]: the scoped scroll lock the lightbox holds while open.
//! - [`flip`]: a two-sided card with an image carousel on one side.
//! - [`hover`]: enter/leave latches for menus and hover glows.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: one interaction pattern per type.
//! - **Host-agnostic**: inputs are already-interpreted intents (a click on the
//!   container, a key) and side effects go through small host traits such as
//!   [`scroll_lock::OverflowHost`].
//! - **Total**: no transition can fail; invalid requests are ignored and
//!   reported as `None`.
//!
//! ## Usage
//!
//! ```rust
//! use darkroom_event_state::Key;
//! use darkroom_event_state::lightbox::{Lightbox, LightboxEvent};
//! use darkroom_event_state::scroll_lock::Overflow;
//!
//! let mut body = Overflow::Auto;
//! let mut lightbox = Lightbox::new(3);
//!
//! lightbox.open(1, &mut body);
//! assert_eq!(body, Overflow::Hidden);
//!
//! lightbox.next();
//! lightbox.next();
//! assert_eq!(lightbox.current(), Some(0));
//!
//! let event = lightbox.handle_key(Key::Escape, &mut body);
//! assert_eq!(event, Some(LightboxEvent::Closed));
//! assert_eq!(body, Overflow::Auto);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod flip;
pub mod hover;
pub mod lightbox;
pub mod scroll_lock;
pub mod stack;

/// Keys the interactive sections respond to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape.
    Escape,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Any other key.
    Other,
}
