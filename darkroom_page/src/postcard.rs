// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contact postcard form.

use tracing::info;

/// Number of ruled message lines on the card.
pub const MESSAGE_LINES: usize = 6;

/// Text shown after sending.
pub const THANK_YOU: &str = "Thanks \u{2014} your postcard is ready to send!";

/// Form state of the postcard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postcard {
    /// Ruled message lines, top to bottom.
    pub lines: [String; MESSAGE_LINES],
    /// Recipient name.
    pub to: String,
    /// Street address.
    pub address: String,
    /// City and postal code.
    pub city_zip: String,
    /// Reply email.
    pub email: String,
}

/// Confirmation returned by [`Postcard::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Message to show the sender.
    pub message: &'static str,
}

impl Postcard {
    /// An empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets message line `index`. Out-of-range lines are ignored.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        if let Some(line) = self.lines.get_mut(index) {
            *line = text.into();
        }
    }

    /// Non-empty message lines joined with newlines.
    #[must_use]
    pub fn compose_message(&self) -> String {
        self.lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Hands the card off. Never fails; the composed card is logged.
    pub fn submit(&self) -> Acknowledgement {
        info!(
            to = %self.to,
            address = %self.address,
            city_zip = %self.city_zip,
            email = %self.email,
            message = %self.compose_message(),
            "postcard submitted"
        );
        Acknowledgement { message: THANK_YOU }
    }
}
