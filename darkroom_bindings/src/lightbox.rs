// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::Size;

/// Sliding-track geometry of the lightbox overlay.
///
/// Slides sit side by side with a fixed gap; the track is translated so the
/// viewed slide is centered in the container. Slide width is the largest that
/// fits both 80% of the container width (capped at 900px) and the container
/// height less room for the polaroid frame and caption at a 4:3 ratio, but
/// never below 220px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightboxLayout {
    container: Size,
    slide_width: f64,
}

/// Visual emphasis of one lightbox slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideStyle {
    /// Uniform scale.
    pub scale: f64,
    /// Opacity.
    pub opacity: f64,
    /// Stacking order.
    pub z: i32,
}

impl LightboxLayout {
    /// Space between slides.
    pub const GAP: f64 = 40.0;
    /// Vertical room taken by the polaroid border and caption.
    pub const FRAME_ALLOWANCE: f64 = 120.0;
    /// Smallest slide width.
    pub const MIN_SLIDE: f64 = 220.0;
    /// Largest slide width.
    pub const MAX_SLIDE: f64 = 900.0;
    /// Widest the overlay container gets.
    pub const MAX_CONTAINER_WIDTH: f64 = 1200.0;
    /// Horizontal padding between the viewport edge and the container.
    pub const CONTAINER_INSET: f64 = 24.0;
    /// Container height as a fraction of the viewport height.
    pub const CONTAINER_HEIGHT_FRACTION: f64 = 0.8;

    /// Overlay container size for a viewport: inset on both sides, capped
    /// in width, and a fixed share of the viewport tall.
    #[must_use]
    pub fn container_for(viewport: Size) -> Size {
        Size::new(
            (viewport.width - 2.0 * Self::CONTAINER_INSET)
                .min(Self::MAX_CONTAINER_WIDTH)
                .max(0.0),
            (viewport.height * Self::CONTAINER_HEIGHT_FRACTION).floor(),
        )
    }

    /// Measures the overlay container of a viewport.
    #[must_use]
    pub fn for_viewport(viewport: Size) -> Self {
        Self::measure(Self::container_for(viewport))
    }

    /// Measures a container.
    #[must_use]
    pub fn measure(container: Size) -> Self {
        let by_width = (container.width * 0.8).floor().min(Self::MAX_SLIDE);
        let by_height = ((container.height - Self::FRAME_ALLOWANCE) * 3.0 / 4.0).floor();
        Self {
            container,
            slide_width: by_width.min(by_height).max(Self::MIN_SLIDE),
        }
    }

    /// Measured container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Width of every slide.
    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// Track translation that centers slide `index`.
    #[must_use]
    pub fn track_offset(&self, index: usize) -> f64 {
        self.container.width / 2.0
            - self.slide_width / 2.0
            - index as f64 * (self.slide_width + Self::GAP)
    }

    /// Emphasis of slide `index` while `current` is viewed.
    #[must_use]
    pub fn slide_style(index: usize, current: usize) -> SlideStyle {
        if index == current {
            SlideStyle {
                scale: 1.0,
                opacity: 1.0,
                z: 3,
            }
        } else {
            SlideStyle {
                scale: 0.88,
                opacity: 0.7,
                z: 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::LightboxLayout;

    #[test]
    fn width_limited_by_height() {
        let layout = LightboxLayout::measure(Size::new(1200.0, 760.0));
        // by width: min(960, 900) = 900; by height: (760 - 120) * 3 / 4 = 480
        assert_eq!(layout.slide_width(), 480.0);
    }

    #[test]
    fn width_limited_by_container_width() {
        let layout = LightboxLayout::measure(Size::new(500.0, 2000.0));
        assert_eq!(layout.slide_width(), 400.0);
    }

    #[test]
    fn never_below_minimum() {
        let layout = LightboxLayout::measure(Size::new(100.0, 100.0));
        assert_eq!(layout.slide_width(), LightboxLayout::MIN_SLIDE);
    }

    #[test]
    fn track_centers_current_slide() {
        let layout = LightboxLayout::measure(Size::new(1200.0, 760.0));
        assert_eq!(layout.track_offset(0), 360.0);
        assert_eq!(layout.track_offset(2), 360.0 - 2.0 * 520.0);
    }

    #[test]
    fn container_is_inset_and_capped() {
        let desktop = LightboxLayout::for_viewport(Size::new(1440.0, 900.0));
        assert_eq!(desktop.container(), Size::new(1200.0, 720.0));
        assert_eq!(desktop.slide_width(), 450.0);
        assert_eq!(desktop.track_offset(0), 375.0);

        let phone = LightboxLayout::container_for(Size::new(390.0, 844.0));
        assert_eq!(phone.width, 342.0);
        assert_eq!(phone.height, 675.0);
    }

    #[test]
    fn current_slide_is_emphasized() {
        assert_eq!(LightboxLayout::slide_style(1, 1).scale, 1.0);
        assert_eq!(LightboxLayout::slide_style(0, 1).opacity, 0.7);
    }
}
