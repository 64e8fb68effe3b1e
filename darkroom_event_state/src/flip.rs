// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-sided card with an image carousel on its front.
//!
//! The [`Carousel`] keeps the outgoing index around while its exit transition
//! runs so the host can render both images at once. The host calls
//! [`Carousel::finish_exit`] when that transition ends. Starting another
//! change before then drops the older outgoing image immediately.

use crate::lightbox::{wrap_next, wrap_prev};

/// Which face of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlipSide {
    /// The picture side.
    #[default]
    Front,
    /// The message side.
    Back,
}

impl FlipSide {
    /// The other side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Y rotation of the card in degrees.
    #[must_use]
    pub const fn rotate_y_deg(self) -> f64 {
        match self {
            Self::Front => 0.0,
            Self::Back => 180.0,
        }
    }
}

/// Current and outgoing image indices of a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    previous: Option<usize>,
}

impl Carousel {
    /// Creates a carousel over `len` images showing the first.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            previous: None,
        }
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the image shown.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Index of the image still exiting, if any.
    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Shows image `index`. Returns `false` for out-of-range or unchanged
    /// indices.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.previous = Some(self.current);
        self.current = index;
        true
    }

    /// Advances with wrap-around.
    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.show(wrap_next(self.current, self.len))
    }

    /// Steps back with wrap-around.
    pub fn prev(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.show(wrap_prev(self.current, self.len))
    }

    /// Drops the outgoing image once its exit transition has ended.
    pub fn finish_exit(&mut self) -> Option<usize> {
        self.previous.take()
    }
}

/// A flippable card carrying a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipCard {
    side: FlipSide,
    carousel: Carousel,
}

impl FlipCard {
    /// Creates a card showing its front, with `images` carousel entries.
    #[must_use]
    pub const fn new(images: usize) -> Self {
        Self {
            side: FlipSide::Front,
            carousel: Carousel::new(images),
        }
    }

    /// Side showing.
    #[must_use]
    pub fn side(&self) -> FlipSide {
        self.side
    }

    /// Turns the card over and returns the new side.
    pub fn flip(&mut self) -> FlipSide {
        self.side = self.side.flipped();
        self.side
    }

    /// The card's carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Mutable access to the card's carousel.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }
}

#[cfg(test)]
mod tests {
    use super::{Carousel, FlipCard, FlipSide};

    #[test]
    fn flip_round_trip() {
        let mut card = FlipCard::new(3);
        assert_eq!(card.flip(), FlipSide::Back);
        assert_eq!(card.side().rotate_y_deg(), 180.0);
        assert_eq!(card.flip(), FlipSide::Front);
    }

    #[test]
    fn previous_held_until_exit_finishes() {
        let mut c = Carousel::new(3);
        assert!(c.next());
        assert_eq!((c.current(), c.previous()), (1, Some(0)));
        assert_eq!(c.finish_exit(), Some(0));
        assert_eq!(c.previous(), None);
        assert_eq!(c.finish_exit(), None);
    }

    #[test]
    fn rapid_changes_replace_previous() {
        let mut c = Carousel::new(4);
        c.next();
        c.next();
        assert_eq!((c.current(), c.previous()), (2, Some(1)));
        c.prev();
        c.prev();
        c.prev();
        assert_eq!((c.current(), c.previous()), (3, Some(0)));
    }

    #[test]
    fn ignores_invalid_targets() {
        let mut c = Carousel::new(2);
        assert!(!c.show(0));
        assert!(!c.show(7));
        assert_eq!(c.previous(), None);

        let mut single = Carousel::new(1);
        assert!(!single.next());
        let mut empty = Carousel::new(0);
        assert!(!empty.next());
        assert!(!empty.prev());
    }
}
