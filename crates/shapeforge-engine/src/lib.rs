//! Shapeforge engine crate.
//!
//! This crate owns the geometry, paint model, draw stream and CPU rasterizer
//! used by the composition layer. It knows nothing about layers or anchors.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
