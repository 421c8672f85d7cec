//! Paint model shared between the composition layer and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - source-over blending of a color into an RGBA8 pixel
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
