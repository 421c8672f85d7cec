//! Anchor placement: where a layer's bounding box lands on the surface.

use shapeforge_engine::coords::{Rect, Vec2};

use crate::model::{Column, PositionKey, Row};

/// One axis of a placed box: its two edges and the line halfway between them.
///
/// Each line is computed from the anchor it is tied to, not from the others, so
/// the line the anchor pins to the surface is exact for any size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Span {
    pub start: f64,
    pub mid: f64,
    pub end: f64,
}

impl Span {
    /// Span of `size` starting at `start`.
    pub fn from_start(start: f64, size: f64) -> Self {
        Self { start, mid: start + size / 2.0, end: start + size }
    }

    fn centered(mid: f64, size: f64) -> Self {
        let half = size / 2.0;
        Self { start: mid - half, mid, end: mid + half }
    }

    fn from_end(end: f64, size: f64) -> Self {
        Self { start: end - size, mid: end - size / 2.0, end }
    }
}

/// A `size`×`size` box positioned on the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub x: Span,
    pub y: Span,
    pub size: f64,
}

impl Placement {
    /// Box with its top-left corner at `origin`.
    pub fn from_origin(origin: Vec2, size: f64) -> Self {
        Self {
            x: Span::from_start(origin.x, size),
            y: Span::from_start(origin.y, size),
            size,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x.start, self.y.start)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x.mid, self.y.mid)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_min_max(self.origin(), Vec2::new(self.x.end, self.y.end))
    }
}

/// Places a `size`×`size` box anchored at `position` on a
/// `surface_width`×`surface_height` surface.
///
/// | axis       | start | center                | end           |
/// |------------|-------|-----------------------|---------------|
/// | horizontal | 0     | width / 2 − size / 2  | width − size  |
/// | vertical   | 0     | height / 2 − size / 2 | height − size |
///
/// No clamping: a box larger than the surface gets negative or overhanging
/// coordinates and is clipped by the surface when painted.
pub fn place(position: PositionKey, size: f64, surface_width: f64, surface_height: f64) -> Placement {
    let x = match position.column() {
        Column::Left => Span::from_start(0.0, size),
        Column::Center => Span::centered(surface_width / 2.0, size),
        Column::Right => Span::from_end(surface_width, size),
    };

    let y = match position.row() {
        Row::Top => Span::from_start(0.0, size),
        Row::Middle => Span::centered(surface_height / 2.0, size),
        Row::Bottom => Span::from_end(surface_height, size),
    };

    Placement { x, y, size }
}

/// Top-left corner of the box [`place`] computes.
pub fn origin(position: PositionKey, size: f64, surface_width: f64, surface_height: f64) -> Vec2 {
    place(position, size, surface_width, surface_height).origin()
}

/// The full bounding box for a layer of `size` at `position`.
pub fn bounds(position: PositionKey, size: f64, surface_width: f64, surface_height: f64) -> Rect {
    place(position, size, surface_width, surface_height).bounds()
}
