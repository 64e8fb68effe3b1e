// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed header: brand, nav links with hover glow, and the shop dropdown.

use darkroom_event_state::hover::HoverLatch;

/// Glow under a hovered nav link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HaloStyle {
    /// Opacity of the tight inner glow.
    pub inner_opacity: f64,
    /// Scale of the inner glow.
    pub inner_scale: f64,
    /// Opacity of the wide outer glow.
    pub outer_opacity: f64,
}

/// A navigation link.
#[derive(Clone, Debug)]
pub struct NavLink {
    /// Visible label.
    pub label: &'static str,
    /// Destination.
    pub href: &'static str,
    glow: HoverLatch,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            glow: HoverLatch::new(),
        }
    }

    /// Current glow.
    #[must_use]
    pub fn halo(&self) -> HaloStyle {
        HaloStyle {
            inner_opacity: self.glow.select(0.0, 1.0),
            inner_scale: self.glow.select(0.95, 1.0),
            outer_opacity: self.glow.select(0.0, 0.8),
        }
    }
}

/// Header state.
#[derive(Clone, Debug)]
pub struct Header {
    /// Brand text on the left.
    pub brand: String,
    links: [NavLink; 4],
    shop: HoverLatch,
}

impl Header {
    /// Index of the link that owns the shop dropdown.
    pub const SHOP_LINK: usize = 2;
    /// Entries of the shop dropdown.
    pub const SHOP_ITEMS: [(&'static str, &'static str); 2] =
        [("Prints", "/shop/prints"), ("Presets", "/shop/presets")];

    /// Creates the header with the standard links.
    #[must_use]
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            links: [
                NavLink::new("Home", "/"),
                NavLink::new("Projects", "/projects"),
                NavLink::new("Shop", "#"),
                NavLink::new("Blog", "/blog"),
            ],
            shop: HoverLatch::new(),
        }
    }

    /// Navigation links, left to right.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Pointer entered or left link `index`. Returns `true` on change.
    pub fn hover_link(&mut self, index: usize, entered: bool) -> bool {
        let Some(link) = self.links.get_mut(index) else {
            return false;
        };
        if entered {
            link.glow.enter()
        } else {
            link.glow.leave()
        }
    }

    /// Pointer entered or left the shop menu. Returns `true` on change.
    pub fn hover_shop(&mut self, entered: bool) -> bool {
        if entered {
            self.shop.enter()
        } else {
            self.shop.leave()
        }
    }

    /// Whether the shop dropdown is showing.
    #[must_use]
    pub fn is_shop_open(&self) -> bool {
        self.shop.is_hovered()
    }
}

#[cfg(test)]
mod tests {
    use super::Header;

    #[test]
    fn glow_follows_hover() {
        let mut header = Header::new("Brand");
        assert_eq!(header.links()[1].halo().inner_opacity, 0.0);
        assert!(header.hover_link(1, true));
        let halo = header.links()[1].halo();
        assert_eq!(halo.inner_opacity, 1.0);
        assert_eq!(halo.inner_scale, 1.0);
        assert_eq!(halo.outer_opacity, 0.8);
        assert!(!header.hover_link(1, true));
        assert!(header.hover_link(1, false));
        assert_eq!(header.links()[1].halo().inner_scale, 0.95);
    }

    #[test]
    fn unknown_link_is_ignored() {
        let mut header = Header::new("Brand");
        assert!(!header.hover_link(7, true));
    }

    #[test]
    fn shop_menu_latches() {
        let mut header = Header::new("Brand");
        assert!(header.hover_shop(true));
        assert!(header.is_shop_open());
        assert!(header.hover_shop(false));
        assert!(!header.is_shop_open());
    }
}
