// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked/expanded card pile.
//!
//! The pile starts stacked. The toggle button flips between the two states;
//! clicking anywhere on the container while stacked expands it. Card clicks
//! only count once expanded, where they open the card in a lightbox.

/// Layout state of a card pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StackState {
    /// Cards overlap in a loose pile.
    #[default]
    Stacked,
    /// Cards are spread into a grid.
    Expanded,
}

impl StackState {
    /// The other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::Expanded,
            Self::Expanded => Self::Stacked,
        }
    }

    /// Whether this is [`StackState::Expanded`].
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Label for the toggle button in this state.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Stacked => "Spread them out",
            Self::Expanded => "Stack them up",
        }
    }
}

/// Click handling for a card pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardStack {
    state: StackState,
}

impl CardStack {
    /// Creates a stacked pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: StackState::Stacked,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StackState {
        self.state
    }

    /// Flips the state from the toggle button and returns the new one.
    pub fn toggle(&mut self) -> StackState {
        self.state = self.state.toggled();
        self.state
    }

    /// Handles a click on the container background. Returns `true` if the
    /// pile expanded.
    pub fn click_container(&mut self) -> bool {
        if self.state.is_expanded() {
            return false;
        }
        self.state = StackState::Expanded;
        true
    }

    /// Handles a click on card `index`.
    ///
    /// While stacked the click falls through to the container and expands the
    /// pile. While expanded it returns the card to open.
    pub fn click_card(&mut self, index: usize) -> Option<usize> {
        if self.state.is_expanded() {
            Some(index)
        } else {
            self.click_container();
            None
        }
    }
}
