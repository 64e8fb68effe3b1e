// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input the page reacts to.

use kurbo::{Point, Size};

pub use darkroom_event_state::Key;

/// Something a click can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The stack's expand/collapse button.
    StackToggle,
    /// The stack's background.
    StackContainer,
    /// A card in the stack.
    StackCard(usize),
    /// The lightbox close button.
    LightboxClose,
    /// The lightbox backdrop outside the image.
    LightboxBackdrop,
    /// The lightbox's previous button.
    LightboxPrev,
    /// The lightbox's next button.
    LightboxNext,
    /// The contact card's flip control.
    FlipCard,
    /// The contact carousel's previous control.
    CarouselPrev,
    /// The contact carousel's next control.
    CarouselNext,
    /// The postcard's send button.
    SendPostcard,
}

/// Something the pointer can hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// A header navigation link.
    NavLink(usize),
    /// The header's shop menu.
    ShopMenu,
    /// A card in the stack.
    StackCard(usize),
}

/// One input to [`Page::dispatch`](crate::Page::dispatch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// The document scrolled to `y`.
    Scroll {
        /// New scroll position.
        y: f64,
    },
    /// The viewport changed size.
    Resize(Size),
    /// The pointer moved to a viewport position.
    PointerMove(Point),
    /// The pointer entered or left a hover target.
    Hover {
        /// What was hovered.
        target: HoverTarget,
        /// `true` on enter, `false` on leave.
        entered: bool,
    },
    /// A key was pressed.
    Key(Key),
    /// A click landed on a target.
    Click(ClickTarget),
    /// An animation frame.
    Frame {
        /// Frame timestamp.
        time_ms: f64,
    },
    /// A wheel gesture.
    Wheel {
        /// Raw vertical delta.
        delta: f64,
    },
}
