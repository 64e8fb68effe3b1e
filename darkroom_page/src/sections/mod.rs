// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page's sections, in document order.

mod about;
mod contact;
mod gallery;
mod hero;
mod polaroids;
mod quote;
mod testimonials;
mod travel;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use polaroids::PolaroidStackSection;
pub use quote::QuoteSection;
pub use testimonials::TestimonialsSection;
pub use travel::TravelSection;
