use anyhow::Result;
use image::{Rgba, RgbaImage};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Fixed-size raster target holding premultiplied RGBA8 pixels.
///
/// Dimensions are chosen at construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Allocates a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "surface has zero size ({width}x{height})");
        Ok(Self { image: RgbaImage::new(width, height) })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Size in logical pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(f64::from(self.width()), f64::from(self.height()))
    }

    /// The whole surface as a rect at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), self.size())
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.clear_to(Color::transparent());
    }

    /// Resets every pixel to `color`.
    pub fn clear_to(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Premultiplied RGBA8 at `(x, y)`, or `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Row-major premultiplied RGBA8 bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Composites `color` at `coverage` onto one pixel. Out-of-range coordinates are ignored.
    #[inline]
    pub(crate) fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        if let Some(p) = self.image.get_pixel_mut_checked(x, y) {
            p.0 = color.blend_over(p.0, coverage);
        }
    }
}
