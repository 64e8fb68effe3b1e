// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal image viewer with wrap-around navigation.
//!
//! ## States
//!
//! The lightbox is either closed or viewing one of `len` images. Opening
//! acquires a [`ScrollLock`] on the host; closing releases it. Navigation wraps
//! in both directions so that `next` from the last image shows the first.
//!
//! ## Keys
//!
//! While viewing, [`Lightbox::handle_key`] maps Escape to close and the arrow
//! keys to previous/next. Keys are ignored while closed, which lets the host
//! keep a single keydown listener for the page's lifetime if it wants to.
//!
//! ```rust
//! use darkroom_event_state::lightbox::{Lightbox, LightboxEvent};
//! use darkroom_event_state::scroll_lock::Overflow;
//!
//! let mut body = Overflow::Unset;
//! let mut lightbox = Lightbox::new(5);
//! assert_eq!(lightbox.open(0, &mut body), Some(LightboxEvent::Opened(0)));
//! assert_eq!(lightbox.prev(), Some(LightboxEvent::Moved { from: 0, to: 4 }));
//! ```

use crate::Key;
use crate::scroll_lock::{OverflowHost, ScrollLock};

/// Index after `index` in a ring of `len`. `len` must be non-zero.
#[must_use]
pub const fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Index before `index` in a ring of `len`. `len` must be non-zero.
#[must_use]
pub const fn wrap_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Whether the lightbox is showing an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LightboxState {
    /// Nothing is shown.
    #[default]
    Closed,
    /// Showing the image at this index.
    Viewing(usize),
}

/// Transitions reported by [`Lightbox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxEvent {
    /// The lightbox opened, or jumped, to this index.
    Opened(usize),
    /// Navigation moved between two images.
    Moved {
        /// Index shown before the move.
        from: usize,
        /// Index shown now.
        to: usize,
    },
    /// The lightbox closed.
    Closed,
}

/// Lightbox over a fixed number of images.
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
    lock: ScrollLock,
}

impl Lightbox {
    /// Creates a closed lightbox over `len` images.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
            lock: ScrollLock::new(),
        }
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no images to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// Index being viewed, if open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Viewing(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// Whether an image is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }

    /// Whether the page scroll lock is held.
    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.lock.is_held()
    }

    /// Shows the image at `index`, locking page scroll if the lightbox was
    /// closed.
    ///
    /// Out-of-range indices are ignored.
    pub fn open<H: OverflowHost + ?Sized>(
        &mut self,
        index: usize,
        host: &mut H,
    ) -> Option<LightboxEvent> {
        if index >= self.len {
            return None;
        }
        self.lock.acquire(host);
        self.state = LightboxState::Viewing(index);
        Some(LightboxEvent::Opened(index))
    }

    /// Advances to the next image, wrapping to the first.
    pub fn next(&mut self) -> Option<LightboxEvent> {
        let from = self.current()?;
        self.move_to(from, wrap_next(from, self.len))
    }

    /// Steps back to the previous image, wrapping to the last.
    pub fn prev(&mut self) -> Option<LightboxEvent> {
        let from = self.current()?;
        self.move_to(from, wrap_prev(from, self.len))
    }

    fn move_to(&mut self, from: usize, to: usize) -> Option<LightboxEvent> {
        self.state = LightboxState::Viewing(to);
        Some(LightboxEvent::Moved { from, to })
    }

    /// Closes the lightbox and restores page scroll.
    pub fn close<H: OverflowHost + ?Sized>(&mut self, host: &mut H) -> Option<LightboxEvent> {
        // Release even if already closed so a stray lock can never outlive the
        // lightbox.
        self.lock.release(host);
        match self.state {
            LightboxState::Closed => None,
            LightboxState::Viewing(_) => {
                self.state = LightboxState::Closed;
                Some(LightboxEvent::Closed)
            }
        }
    }

    /// Handles a key while viewing. Ignored while closed.
    pub fn handle_key<H: OverflowHost + ?Sized>(
        &mut self,
        key: Key,
        host: &mut H,
    ) -> Option<LightboxEvent> {
        if !self.is_open() {
            return None;
        }
        match key {
            Key::Escape => self.close(host),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => None,
        }
    }

    /// Handles a click on the backdrop outside the image.
    pub fn click_outside<H: OverflowHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Option<LightboxEvent> {
        self.close(host)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lightbox, LightboxEvent, LightboxState, wrap_next, wrap_prev};
    use crate::Key;
    use crate::scroll_lock::Overflow;

    #[test]
    fn wrap_helpers() {
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_prev(0, 3), 2);
        assert_eq!(wrap_next(0, 1), 0);
        assert_eq!(wrap_prev(0, 1), 0);
    }

    #[test]
    fn navigation_requires_open() {
        let mut lb = Lightbox::new(3);
        assert_eq!(lb.next(), None);
        assert_eq!(lb.prev(), None);
        assert_eq!(lb.state(), LightboxState::Closed);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut body = Overflow::Auto;
        let mut lb = Lightbox::new(2);
        assert_eq!(lb.open(2, &mut body), None);
        assert!(!lb.is_open());
        assert_eq!(body, Overflow::Auto);

        let mut empty = Lightbox::new(0);
        assert_eq!(empty.open(0, &mut body), None);
    }

    #[test]
    fn reopening_while_viewing_keeps_one_lock() {
        let mut body = Overflow::Scroll;
        let mut lb = Lightbox::new(4);
        lb.open(1, &mut body);
        lb.open(3, &mut body);
        assert_eq!(lb.current(), Some(3));
        lb.close(&mut body);
        assert_eq!(body, Overflow::Scroll);
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut body = Overflow::Unset;
        let mut lb = Lightbox::new(3);
        assert_eq!(lb.handle_key(Key::ArrowRight, &mut body), None);
        assert_eq!(lb.handle_key(Key::Escape, &mut body), None);
        assert!(!lb.is_open());
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut body = Overflow::Unset;
        let mut lb = Lightbox::new(3);
        lb.open(2, &mut body);
        assert_eq!(lb.handle_key(Key::Other, &mut body), None);
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn backdrop_click_closes() {
        let mut body = Overflow::Visible;
        let mut lb = Lightbox::new(3);
        lb.open(0, &mut body);
        assert_eq!(lb.click_outside(&mut body), Some(LightboxEvent::Closed));
        assert_eq!(body, Overflow::Visible);
        assert!(!lb.holds_scroll_lock());
        assert_eq!(lb.click_outside(&mut body), None);
    }
}
