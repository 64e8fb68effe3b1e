// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use darkroom_easing::Progress;

/// Entry/exit policy mapping a container's top edge to progress.
///
/// Both fields are fractions of the viewport height:
///
/// - the entry line sits `entry * viewport_height` below the top of the
///   viewport; progress is `0` while the container's top is at or below it.
/// - the exit line sits at `-(container_height - exit_margin * viewport_height)`,
///   so progress reaches `1` as the container's bottom rises to within
///   `exit_margin` of the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressLines {
    /// Entry line as a fraction of viewport height.
    pub entry: f64,
    /// Distance of the container's bottom from the viewport top at exit, as a
    /// fraction of viewport height.
    pub exit_margin: f64,
}

impl Default for ProgressLines {
    fn default() -> Self {
        Self {
            entry: 0.8,
            exit_margin: 0.2,
        }
    }
}

impl ProgressLines {
    /// Resolves the policy to `(entry_line, exit_line)` in viewport pixels.
    #[must_use]
    pub fn resolve(&self, viewport_height: f64, container_height: f64) -> (f64, f64) {
        let entry_line = viewport_height * self.entry;
        let exit_line = -(container_height - viewport_height * self.exit_margin);
        (entry_line, exit_line)
    }

    /// Progress for a container of `container_height` whose top edge is at
    /// `top` in viewport coordinates.
    #[must_use]
    pub fn progress(&self, top: f64, viewport_height: f64, container_height: f64) -> Progress {
        let (entry_line, exit_line) = self.resolve(viewport_height, container_height);
        progress_between(top, entry_line, exit_line)
    }
}

/// `clamp((entry_line - top) / (entry_line - exit_line), 0, 1)`.
///
/// The denominator is floored at `1` so degenerate containers never produce
/// NaN or infinity.
#[must_use]
pub fn progress_between(top: f64, entry_line: f64, exit_line: f64) -> Progress {
    let span = (entry_line - exit_line).max(1.0);
    Progress::new((entry_line - top) / span)
}
