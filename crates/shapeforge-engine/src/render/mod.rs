//! CPU rendering subsystem.
//!
//! The rasterizer consumes `scene` draw streams and writes premultiplied RGBA8
//! pixels into a [`Surface`]. Each shape module owns its own coverage function.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down), one per surface pixel
//! - pixels are sampled at their centers
//! - anything outside the surface is clipped, never rejected

mod raster;
mod surface;
pub mod shapes;

pub use raster::{Rasterizer, RenderStats};
pub use surface::Surface;
