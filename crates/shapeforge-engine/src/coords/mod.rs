//! Coordinate and geometry types shared across the rasterizer and composition code.
//!
//! Canonical CPU space:
//! - Logical pixels (one logical pixel = one surface pixel)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Pixel `(x, y)` covers the half-open square `[x, x + 1) × [y, y + 1)` and is
//! sampled at its center.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
