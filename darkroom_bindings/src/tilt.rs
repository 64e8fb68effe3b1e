// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Start and end rotation of a card, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    /// Rotation before the card has settled.
    pub start_deg: f64,
    /// Rotation once settled.
    pub end_deg: f64,
}

impl Tilt {
    /// A fixed tilt that does not change while settling.
    #[must_use]
    pub const fn fixed(deg: f64) -> Self {
        Self {
            start_deg: deg,
            end_deg: deg,
        }
    }

    /// Replaces either end with an explicit value.
    #[must_use]
    pub fn with_overrides(self, start_deg: Option<f64>, end_deg: Option<f64>) -> Self {
        Self {
            start_deg: start_deg.unwrap_or(self.start_deg),
            end_deg: end_deg.unwrap_or(self.end_deg),
        }
    }
}

/// Deterministic tilt for an image identifier.
///
/// The seed is the sum of the identifier's UTF-16 code units. The settled
/// angle is `((seed % 26) - 13) * 1.2` plus a small `((seed % 7) - 3) * 0.6`
/// jitter, and the card starts 6 degrees further counter-clockwise. This is a
/// stable hash, not a random source: equal identifiers always tilt the same.
#[must_use]
pub fn tilt_for(id: &str) -> Tilt {
    let seed: u32 = id.encode_utf16().map(u32::from).sum();
    let base = (f64::from(seed % 26) - 13.0) * 1.2;
    let delta = (f64::from(seed % 7) - 3.0) * 0.6;
    Tilt {
        start_deg: base - 6.0,
        end_deg: base + delta,
    }
}
