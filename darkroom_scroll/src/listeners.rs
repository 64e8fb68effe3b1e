// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription bookkeeping for page-level event sources.
//!
//! The host owns the actual event sources (window scroll, resize, keydown,
//! animation frames, intersection observers). Sections acquire a
//! [`ListenerId`] on mount and must release it on unmount; the registry makes
//! that symmetry checkable, since an empty registry after teardown means no
//! handler outlived its owner.

use alloc::vec::Vec;

bitflags::bitflags! {
    /// Event sources a listener is attached to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKinds: u8 {
        /// Page scroll. Always registered passive.
        const SCROLL       = 0b0000_0001;
        /// Viewport resize.
        const RESIZE       = 0b0000_0010;
        /// Keyboard input.
        const KEYDOWN      = 0b0000_0100;
        /// Per-frame animation callback.
        const FRAME        = 0b0000_1000;
        /// Visibility threshold observation.
        const INTERSECTION = 0b0001_0000;
        /// Raw wheel input, consumed by the smooth scroll driver.
        const WHEEL        = 0b0010_0000;
    }
}

impl ListenerKinds {
    /// The pair every scroll-progress tracker needs.
    pub const SCROLL_AND_RESIZE: Self = Self::SCROLL.union(Self::RESIZE);
}

/// Handle to a live subscription.
///
/// Slot index plus generation, like a tree node handle: a released id never
/// aliases a later subscription that reuses its slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u32, u32);

impl ListenerId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    kinds: Option<ListenerKinds>,
}

/// Registry of live subscriptions.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to `kinds` and returns the handle to release later.
    pub fn subscribe(&mut self, kinds: ListenerKinds) -> ListenerId {
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.kinds = Some(kinds);
            return ListenerId(idx, slot.generation);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a page never holds anywhere near u32::MAX listeners"
        )]
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            kinds: Some(kinds),
        });
        ListenerId(idx, 1)
    }

    /// Releases a subscription.
    ///
    /// Returns `false` if `id` was already released or is stale.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some(slot) = self.slots.get_mut(id.idx()) else {
            return false;
        };
        if slot.generation != id.1 || slot.kinds.is_none() {
            return false;
        }
        slot.kinds = None;
        self.free.push(id.0);
        self.live -= 1;
        true
    }

    /// Returns `true` if `id` refers to a live subscription.
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.kinds(id).is_some()
    }

    /// Returns the kinds `id` is subscribed to, if live.
    #[must_use]
    pub fn kinds(&self, id: ListenerId) -> Option<ListenerKinds> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.kinds)
    }

    /// Returns `true` if the subscription must not block native scrolling.
    ///
    /// Every subscription that includes [`ListenerKinds::SCROLL`] or
    /// [`ListenerKinds::WHEEL`] is passive.
    #[must_use]
    pub fn is_passive(&self, id: ListenerId) -> bool {
        self.kinds(id)
            .is_some_and(|k| k.intersects(ListenerKinds::SCROLL | ListenerKinds::WHEEL))
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` when nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of live subscriptions that include any of `kinds`.
    #[must_use]
    pub fn count(&self, kinds: ListenerKinds) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.kinds.is_some_and(|k| k.intersects(kinds)))
            .count()
    }
}
