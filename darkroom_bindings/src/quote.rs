// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// One piece of a quote split for word-by-word animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuoteToken<'a> {
    /// A word that rises into place after `delay_seconds`.
    Word {
        /// The word, including any attached quotation marks.
        text: &'a str,
        /// Whether the word gets the accent color.
        accent: bool,
        /// Start delay of the word's rise.
        delay_seconds: f64,
    },
    /// A whitespace run, rendered as a non-breaking space and not animated.
    Space,
}

/// Delay before the first word rises.
const FIRST_DELAY: f64 = 0.1;
/// Delay between successive words.
const WORD_STAGGER: f64 = 0.06;

/// Splits `quote` into words and whitespace runs.
///
/// Whitespace is kept as tokens so it is never collapsed. A word is accented
/// when, stripped of curly quotes, it equals `accent_word` ignoring ASCII case.
#[must_use]
pub fn split_quote<'a>(quote: &'a str, accent_word: &str) -> Vec<QuoteToken<'a>> {
    let mut tokens = Vec::new();
    let mut words = 0_u32;
    let mut rest = quote;
    while !rest.is_empty() {
        let starts_with_space = rest.starts_with(char::is_whitespace);
        let end = rest
            .find(|c: char| c.is_whitespace() != starts_with_space)
            .unwrap_or(rest.len());
        let (piece, tail) = rest.split_at(end);
        if starts_with_space {
            tokens.push(QuoteToken::Space);
        } else {
            let bare = piece.trim_matches(|c| c == '\u{201c}' || c == '\u{201d}');
            tokens.push(QuoteToken::Word {
                text: piece,
                accent: bare.eq_ignore_ascii_case(accent_word),
                delay_seconds: FIRST_DELAY + WORD_STAGGER * f64::from(words),
            });
            words += 1;
        }
        rest = tail;
    }
    tokens
}
