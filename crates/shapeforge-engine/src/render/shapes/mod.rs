//! Per-shape signed distance functions.
//!
//! Every function returns the signed distance from `p` to the shape outline:
//! negative inside, positive outside. `common::coverage` turns that into a
//! per-pixel fill fraction.

pub(crate) mod common;

pub mod circle;
pub mod rect;
pub mod triangle;
