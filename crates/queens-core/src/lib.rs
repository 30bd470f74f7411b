//! Core types shared across the `queens` workspace.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete capture backend or image codec; the detection and
//! solver crates build on the buffer and layout types defined here.

mod image;
mod layout;
mod logger;
mod point;

pub use image::{RgbImage, RgbImageView, RgbPixel};
pub use layout::ScreenLayout;
pub use point::PixelPoint;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
