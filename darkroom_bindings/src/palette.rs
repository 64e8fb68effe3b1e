// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use peniko::Color;
use smallvec::SmallVec;

use darkroom_easing::Progress;

/// Fixed list of colors indexed by progress.
///
/// There is no blending between stops: the host is expected to transition
/// between successive colors itself.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: SmallVec<[Color; 8]>,
}

impl Palette {
    /// Creates a palette from its stops, in order.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// The dark, slightly tinted stops behind the portfolio gallery.
    #[must_use]
    pub fn gallery() -> Self {
        Self::new([
            Color::from_rgb8(0x0c, 0x0c, 0x0c),
            Color::from_rgb8(0x06, 0x16, 0x1a),
            Color::from_rgb8(0x1a, 0x0a, 0x10),
            Color::from_rgb8(0x0e, 0x15, 0x06),
            Color::from_rgb8(0x12, 0x12, 0x12),
        ])
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Stop index for `progress`: `round(progress * (len - 1))`.
    ///
    /// Returns `None` for an empty palette.
    #[must_use]
    pub fn index_at(&self, progress: Progress) -> Option<usize> {
        let last = self.colors.len().checked_sub(1)?;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the rounded value is within 0..=last and clamped again below"
        )]
        let idx = (progress.get() * last as f64).round() as usize;
        Some(idx.min(last))
    }

    /// Color for `progress`, or `None` for an empty palette.
    #[must_use]
    pub fn at(&self, progress: Progress) -> Option<Color> {
        self.index_at(progress).map(|idx| self.colors[idx])
    }
}

/// Formats an opaque color as a lowercase `#rrggbb` string.
#[must_use]
pub fn css_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

#[cfg(test)]
mod tests {
    use darkroom_easing::Progress;

    use super::{Palette, css_hex};

    #[test]
    fn rounds_progress_to_nearest_stop() {
        let palette = Palette::gallery();
        assert_eq!(palette.index_at(Progress::ZERO), Some(0));
        assert_eq!(palette.index_at(Progress::new(0.12)), Some(0));
        assert_eq!(palette.index_at(Progress::new(0.13)), Some(1));
        assert_eq!(palette.index_at(Progress::new(0.5)), Some(2));
        assert_eq!(palette.index_at(Progress::ONE), Some(4));
    }

    #[test]
    fn hex_round_trips_gallery_stops() {
        let palette = Palette::gallery();
        assert_eq!(palette.at(Progress::ZERO).map(css_hex).as_deref(), Some("#0c0c0c"));
        assert_eq!(palette.at(Progress::new(0.25)).map(css_hex).as_deref(), Some("#06161a"));
        assert_eq!(palette.at(Progress::ONE).map(css_hex).as_deref(), Some("#121212"));
    }

    #[test]
    fn empty_palette_has_no_color() {
        let palette = Palette::new([]);
        assert!(palette.is_empty());
        assert!(palette.at(Progress::new(0.5)).is_none());
    }
}
