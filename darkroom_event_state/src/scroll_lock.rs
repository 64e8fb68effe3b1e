// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped suspension of page scrolling.
//!
//! A modal overlay must stop the page behind it from scrolling and, when it
//! goes away, put things back exactly as they were. [`ScrollLock`] saves the
//! host's prior overflow value on acquire and writes that same value back on
//! release, rather than assuming a default, so a page that was already locked
//! by someone else stays locked.

/// CSS `overflow` value of the page's scrolling element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// No inline value set.
    #[default]
    Unset,
    /// `visible`.
    Visible,
    /// `hidden`.
    Hidden,
    /// `clip`.
    Clip,
    /// `scroll`.
    Scroll,
    /// `auto`.
    Auto,
}

/// Host side of the scroll lock: read and write the page's overflow.
pub trait OverflowHost {
    /// Current overflow value.
    fn overflow(&self) -> Overflow;
    /// Replaces the overflow value.
    fn set_overflow(&mut self, value: Overflow);
}

impl OverflowHost for Overflow {
    fn overflow(&self) -> Overflow {
        *self
    }

    fn set_overflow(&mut self, value: Overflow) {
        *self = value;
    }
}

/// Saved-state handle for a page scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    saved: Option<Overflow>,
}

impl ScrollLock {
    /// Creates a released lock.
    #[must_use]
    pub const fn new() -> Self {
        Self { saved: None }
    }

    /// Saves the host's overflow and hides it.
    ///
    /// Returns `false` without touching the host if this lock is already held,
    /// so repeated acquires never overwrite the original value.
    pub fn acquire<H: OverflowHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.saved.is_some() {
            return false;
        }
        self.saved = Some(host.overflow());
        host.set_overflow(Overflow::Hidden);
        true
    }

    /// Restores the saved overflow. Returns `false` if the lock was not held.
    pub fn release<H: OverflowHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.saved.take() {
            Some(prior) => {
                host.set_overflow(prior);
                true
            }
            None => false,
        }
    }

    /// Whether the lock is held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.saved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{Overflow, ScrollLock};

    #[test]
    fn restores_exact_prior_value() {
        for prior in [Overflow::Unset, Overflow::Auto, Overflow::Scroll, Overflow::Hidden] {
            let mut host = prior;
            let mut lock = ScrollLock::new();
            assert!(lock.acquire(&mut host));
            assert_eq!(host, Overflow::Hidden);
            assert!(lock.release(&mut host));
            assert_eq!(host, prior);
        }
    }

    #[test]
    fn repeated_acquire_keeps_original() {
        let mut host = Overflow::Auto;
        let mut lock = ScrollLock::new();
        lock.acquire(&mut host);
        assert!(!lock.acquire(&mut host));
        lock.release(&mut host);
        assert_eq!(host, Overflow::Auto);
        assert!(!lock.release(&mut host));
        assert_eq!(host, Overflow::Auto);
    }

    #[test]
    fn nested_locks_unwind_in_order() {
        let mut host = Overflow::Visible;
        let mut outer = ScrollLock::new();
        let mut inner = ScrollLock::new();
        outer.acquire(&mut host);
        inner.acquire(&mut host);
        inner.release(&mut host);
        assert_eq!(host, Overflow::Hidden);
        outer.release(&mut host);
        assert_eq!(host, Overflow::Visible);
    }
}
