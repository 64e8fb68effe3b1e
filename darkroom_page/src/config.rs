// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site configuration.
//!
//! Everything a deployment may want to change (image lists, palette stops,
//! copy, scroll tuning) lives in [`SiteConfig`], loaded from TOML. Every table
//! and field is optional; anything missing falls back to the published site's
//! content so an empty file yields the full page.

use std::fs;
use std::path::{Path, PathBuf};

use darkroom_bindings::Palette;
use darkroom_easing::Easing;
use darkroom_scroll::{HorizontalTrack, ProgressLines, SmoothScrollConfig};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while loading a [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read site config {}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A palette entry is not a CSS color.
    #[error("invalid palette color {value:?}: {reason}")]
    Color {
        /// The offending entry.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// The gallery palette has no stops.
    #[error("gallery palette must have at least one color")]
    EmptyPalette,
}

/// An image shown somewhere on the page.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ImageEntry {
    /// Image URL. Also seeds the polaroid tilt.
    pub src: String,
    /// Title or caption.
    #[serde(default)]
    pub title: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageEntry {
    fn new(src: &str, title: &str) -> Self {
        Self {
            src: src.to_owned(),
            title: title.to_owned(),
            alt: None,
        }
    }

    fn with_alt(mut self, alt: &str) -> Self {
        self.alt = Some(alt.to_owned());
        self
    }
}

/// A polaroid dropped into the about section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AboutPhoto {
    /// Image URL.
    pub src: String,
    /// Caption under the photo.
    #[serde(default)]
    pub caption: String,
    /// Card width in pixels.
    #[serde(default = "default_photo_width")]
    pub width: f64,
    /// Horizontal nudge in pixels.
    #[serde(default)]
    pub x: f64,
    /// Distance the photo falls from.
    #[serde(default = "default_drop_offset")]
    pub start_y_offset: f64,
    /// Fraction of the drop to wait before moving.
    #[serde(default)]
    pub stagger: f64,
    /// Start rotation in degrees; derived from `src` when absent.
    #[serde(default)]
    pub start_rotation: Option<f64>,
    /// Resting rotation in degrees; derived from `src` when absent.
    #[serde(default)]
    pub end_rotation: Option<f64>,
}

impl AboutPhoto {
    fn new(src: &str, caption: &str, x: f64, start_y_offset: f64, stagger: f64) -> Self {
        Self {
            src: src.to_owned(),
            caption: caption.to_owned(),
            width: default_photo_width(),
            x,
            start_y_offset,
            stagger,
            start_rotation: None,
            end_rotation: None,
        }
    }

    fn pinned(mut self, width: f64, start_rotation: f64, end_rotation: f64) -> Self {
        self.width = width;
        self.start_rotation = Some(start_rotation);
        self.end_rotation = Some(end_rotation);
        self
    }
}

/// A client quote.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    /// Quote body.
    pub quote: String,
    /// Who said it.
    pub author: String,
    /// Role and company.
    #[serde(default)]
    pub title: Option<String>,
}

/// Horizontal gallery.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Heading shown above the strip.
    pub heading: String,
    /// Cards, left to right.
    pub images: Vec<ImageEntry>,
    /// Background stops as CSS colors.
    pub palette: Vec<String>,
    /// Scroll height spent per pixel of horizontal travel.
    pub density: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            heading: "NRG".to_owned(),
            images: vec![
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1516574187841-cb9cc2ca948b",
                    "Neon",
                )
                .with_alt("Neon portrait"),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1512428559087-560fa5ceab42",
                    "Studio",
                )
                .with_alt("Studio fashion"),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1503341455253-b2e723bb3dbb",
                    "Street",
                )
                .with_alt("Street shot"),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1519452575417-564c1401ecc0",
                    "Editorial",
                )
                .with_alt("Editorial portrait"),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1519345182560-3f2917c472ef",
                    "Monochrome",
                )
                .with_alt("Black and white"),
            ],
            palette: ["#0c0c0c", "#06161a", "#1a0a10", "#0e1506", "#121212"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            density: HorizontalTrack::DEFAULT_DENSITY,
        }
    }
}

/// About section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AboutConfig {
    /// Short biography.
    pub bio: String,
    /// Polaroids around the heading.
    pub photos: Vec<AboutPhoto>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            bio: "Photographer working at the edge of light and material. Reduced \
                  compositions, bold contrast, and a documentary approach to form. \
                  Based in SF, available worldwide."
                .to_owned(),
            photos: vec![
                AboutPhoto::new(
                    "https://images.unsplash.com/photo-1542038784456-1ea8e935640e",
                    "Sunset walk",
                    -500.0,
                    220.0,
                    0.0,
                )
                .pinned(220.0, -10.0, -5.0),
                AboutPhoto::new(
                    "https://images.unsplash.com/photo-1506086679524-493c64fdfaa6",
                    "Studio light",
                    260.0,
                    260.0,
                    0.12,
                )
                .pinned(200.0, 8.0, 6.0),
                AboutPhoto::new(
                    "https://images.unsplash.com/photo-1503342217505-b0a15cf70489",
                    "Quiet street",
                    -120.0,
                    280.0,
                    0.22,
                )
                .pinned(280.0, -4.0, -2.0),
                AboutPhoto::new(
                    "https://images.unsplash.com/photo-1520975867597-0f56a9a69a6d",
                    "Edges of light",
                    80.0,
                    340.0,
                    0.34,
                ),
            ],
        }
    }
}

/// Quote section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Quote text, including its quotation marks.
    pub text: String,
    /// Word drawn in the accent color.
    pub accent: String,
    /// Attribution line.
    pub author: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            text: "\u{201c}The master of greens\u{201c}".to_owned(),
            accent: "greens".to_owned(),
            author: "\u{2014} Rohan Ugale".to_owned(),
        }
    }
}

/// Travel section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Heading.
    pub heading: String,
    /// Images in both marquee rows.
    pub images: Vec<ImageEntry>,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            heading: "Travel With Me".to_owned(),
            images: vec![
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee",
                    "Desert",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1501785888041-af3ef285b470",
                    "Forest",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1482192596544-9eb780fc7f66",
                    "City",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1500534623283-312aade485b7",
                    "Mountains",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
                    "Water",
                ),
            ],
        }
    }
}

/// Polaroid stack section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StackConfig {
    /// Cards in the pile, bottom to top.
    pub images: Vec<ImageEntry>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            images: vec![
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1516574187841-cb9cc2ca948b",
                    "Neon",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1512428559087-560fa5ceab42",
                    "Studio",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1503341455253-b2e723bb3dbb",
                    "Street",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1519452575417-564c1401ecc0",
                    "Editorial",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1519345182560-3f2917c472ef",
                    "Mono",
                ),
            ],
        }
    }
}

/// Contact section.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Images in the flip card's carousel.
    pub images: Vec<ImageEntry>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            images: vec![
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1516574187841-cb9cc2ca948b",
                    "Neon",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1503341455253-b2e723bb3dbb",
                    "Street",
                ),
                ImageEntry::new(
                    "https://images.unsplash.com/photo-1519345182560-3f2917c472ef",
                    "Monochrome",
                ),
            ],
        }
    }
}

/// Scroll tuning.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Entry line as a fraction of viewport height.
    pub entry: f64,
    /// Exit margin as a fraction of viewport height.
    pub exit_margin: f64,
    /// Smooth-scroll chase duration.
    pub smooth_duration_ms: f64,
    /// Multiplier on wheel deltas.
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        let lines = ProgressLines::default();
        let smooth = SmoothScrollConfig::default();
        Self {
            entry: lines.entry,
            exit_margin: lines.exit_margin,
            smooth_duration_ms: smooth.duration_ms,
            wheel_multiplier: smooth.wheel_multiplier,
        }
    }
}

impl ScrollConfig {
    /// Entry/exit policy for section progress.
    #[must_use]
    pub fn progress_lines(&self) -> ProgressLines {
        ProgressLines {
            entry: self.entry,
            exit_margin: self.exit_margin,
        }
    }

    /// Smooth-scroll tuning. The chase curve is always exponential ease-out.
    #[must_use]
    pub fn smooth_scroll(&self) -> SmoothScrollConfig {
        SmoothScrollConfig {
            duration_ms: self.smooth_duration_ms,
            wheel_multiplier: self.wheel_multiplier,
            easing: Easing::OutExpo,
        }
    }
}

/// Whole-site configuration; deserializable from TOML.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the header.
    pub brand: String,
    /// Horizontal gallery.
    pub gallery: GalleryConfig,
    /// About section.
    pub about: AboutConfig,
    /// Quote section.
    pub quote: QuoteConfig,
    /// Travel section.
    pub travel: TravelConfig,
    /// Polaroid stack.
    pub stack: StackConfig,
    /// Contact postcard and flip card.
    pub contact: ContactConfig,
    /// Testimonials marquee.
    pub testimonials: Vec<Testimonial>,
    /// Scroll tuning.
    pub scroll: ScrollConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let testimonial = |quote: &str, author: &str, title: &str| Testimonial {
            quote: quote.to_owned(),
            author: author.to_owned(),
            title: Some(title.to_owned()),
        };
        Self {
            brand: "NICHOLAS GOULD".to_owned(),
            gallery: GalleryConfig::default(),
            about: AboutConfig::default(),
            quote: QuoteConfig::default(),
            travel: TravelConfig::default(),
            stack: StackConfig::default(),
            contact: ContactConfig::default(),
            testimonials: vec![
                testimonial(
                    "Nicholas captured the essence of our brand launch. Every shot felt \
                     intentional and alive.",
                    "Avery Collins",
                    "Brand Manager, Lumen Co.",
                ),
                testimonial(
                    "The portraits were timeless. Our team felt at ease, and it absolutely \
                     shows in the results.",
                    "Jordan Reeves",
                    "Creative Director, North & Pine",
                ),
                testimonial(
                    "From planning to delivery, everything was seamless. The images elevated \
                     our whole campaign.",
                    "Morgan Lee",
                    "Marketing Lead, Arctis",
                ),
                testimonial(
                    "A perfect balance of artistry and professionalism. We can\u{2019}t wait \
                     to collaborate again.",
                    "Riley Bennett",
                    "Founder, Atlas Studio",
                ),
            ],
            scroll: ScrollConfig::default(),
        }
    }
}

fn default_drop_offset() -> f64 {
    240.0
}

fn default_photo_width() -> f64 {
    220.0
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.palette()?;
        Ok(config)
    }

    /// Reads and validates the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing or invalid file yields the
    /// defaults so the page can always render.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no site config found, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "falling back to default site config");
                Self::default()
            }
        }
    }

    /// Parses the gallery palette.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        if self.gallery.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let colors = self
            .gallery
            .palette
            .iter()
            .map(|value| parse_palette_color(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette::new(colors))
    }
}

fn parse_palette_color(value: &str) -> Result<Color, ConfigError> {
    parse_color(value)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|err| ConfigError::Color {
            value: value.to_owned(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SiteConfig};
    use darkroom_bindings::css_hex;
    use darkroom_easing::Progress;

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.gallery.images.len(), 5);
        assert_eq!(config.about.photos.len(), 4);
        assert_eq!(config.testimonials.len(), 4);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r##"
            [gallery]
            density = 0.5
            palette = ["#000000", "#ffffff"]

            [scroll]
            entry = 0.9
            "##,
        )
        .unwrap();
        assert_eq!(config.gallery.density, 0.5);
        assert_eq!(config.gallery.heading, "NRG");
        assert_eq!(config.gallery.images.len(), 5);
        assert_eq!(config.scroll.entry, 0.9);
        assert_eq!(config.scroll.exit_margin, 0.2);
        let palette = config.palette().unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(css_hex(palette.at(Progress::ONE).unwrap()), "#ffffff");
    }

    #[test]
    fn default_palette_round_trips_hex() {
        let config = SiteConfig::default();
        let palette = config.palette().unwrap();
        assert_eq!(css_hex(palette.at(Progress::ZERO).unwrap()), "#0c0c0c");
        assert_eq!(css_hex(palette.at(Progress::new(0.5)).unwrap()), "#1a0a10");
    }

    #[test]
    fn about_photo_overrides_parse() {
        let config = SiteConfig::from_toml_str(
            r#"
            [[about.photos]]
            src = "a.jpg"
            start_rotation = -4.0

            [[contact.images]]
            src = "b.jpg"
            "#,
        )
        .unwrap();
        let photo = &config.about.photos[0];
        assert_eq!(config.about.photos.len(), 1);
        assert_eq!(photo.start_rotation, Some(-4.0));
        assert_eq!(photo.end_rotation, None);
        assert_eq!(photo.width, 220.0);
        assert_eq!(photo.start_y_offset, 240.0);
        assert_eq!(config.contact.images.len(), 1);
        assert_eq!(config.gallery.images.len(), 5);
    }

    #[test]
    fn default_about_photos_are_pinned() {
        let photos = SiteConfig::default().about.photos;
        let pinned: Vec<_> = photos
            .iter()
            .map(|p| (p.width, p.start_rotation, p.end_rotation))
            .collect();
        assert_eq!(pinned[0], (220.0, Some(-10.0), Some(-5.0)));
        assert_eq!(pinned[1], (200.0, Some(8.0), Some(6.0)));
        assert_eq!(pinned[2], (280.0, Some(-4.0), Some(-2.0)));
        assert_eq!(pinned[3], (220.0, None, None));
    }

    #[test]
    fn bad_color_is_reported() {
        let err = SiteConfig::from_toml_str(
            r#"
            [gallery]
            palette = ["not-a-color"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Color { ref value, .. } if value == "not-a-color"));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = SiteConfig::from_toml_str("[gallery]\npalette = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPalette));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = SiteConfig::from_toml_str("brand = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back() {
        let config = SiteConfig::load_or_default("/nonexistent/darkroom/site.toml");
        assert_eq!(config.brand, "NICHOLAS GOULD");
        let err = SiteConfig::load("/nonexistent/darkroom/site.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
