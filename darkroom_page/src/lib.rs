// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=darkroom_page --heading-base-level=0

//! Darkroom Page: the portfolio page, assembled and driven headlessly.
//!
//! A [`Page`] owns eight [`Section`]s in document order, a shared
//! [`ListenerRegistry`](darkroom_scroll::ListenerRegistry), and a
//! [`PageLayout`] that stacks the sections' heights. Hosts feed it
//! [`PageEvent`]s (scroll, resize, pointer, keys, clicks, frames, wheel) and
//! read back whatever each section exposes: transforms, clip insets,
//! background colors, lightbox state.
//!
//! Content and tuning come from a [`SiteConfig`], usually loaded from TOML;
//! see [`config`].
//!
//! ```rust
//! use darkroom_page::{Page, PageEvent, SiteConfig};
//! use darkroom_scroll::Viewport;
//!
//! let mut page = Page::new(&SiteConfig::default(), Viewport::new(1280.0, 800.0))?;
//! page.mount();
//!
//! let about_top = page.layout().top(darkroom_page::SectionId::About).unwrap();
//! page.dispatch(PageEvent::Scroll { y: about_top });
//! assert!(page.about().progress().get() > 0.0);
//!
//! page.unmount();
//! assert!(page.listeners().is_empty());
//! # Ok::<(), darkroom_page::ConfigError>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: section mount and unmount at `debug`,
//! postcard submissions at `info`, and per-event dispatch spans at `trace`.
//! Installing a subscriber is up to the host.

pub mod config;
mod event;
mod frame_loop;
mod header;
mod layout;
mod page;
mod postcard;
mod section;
pub mod sections;

pub use config::{ConfigError, SiteConfig};
pub use event::{ClickTarget, HoverTarget, Key, PageEvent};
pub use frame_loop::{FrameLoop, GpuResources, ReleaseResources};
pub use header::{HaloStyle, Header, NavLink};
pub use layout::{PageLayout, SectionProbe};
pub use page::Page;
pub use postcard::{Acknowledgement, MESSAGE_LINES, Postcard, THANK_YOU};
pub use section::{Section, SectionCx, SectionId};
