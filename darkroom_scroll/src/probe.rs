// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Source of an element's bounds relative to the viewport.
///
/// This is the only way trackers read layout. Hosts implement it over their
/// own element handles; `None` means the element is not mounted or not yet
/// measurable, and trackers treat that as a no-op.
pub trait LayoutProbe {
    /// Returns the element's current viewport-relative bounds.
    fn bounds(&self) -> Option<Rect>;
}

impl LayoutProbe for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl LayoutProbe for Option<Rect> {
    fn bounds(&self) -> Option<Rect> {
        *self
    }
}

impl<P: LayoutProbe + ?Sized> LayoutProbe for &P {
    fn bounds(&self) -> Option<Rect> {
        (**self).bounds()
    }
}
