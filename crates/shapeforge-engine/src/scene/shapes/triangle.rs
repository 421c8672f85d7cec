use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled triangle payload.
///
/// Vertex winding is not significant; the rasterizer accepts either orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub fn new(points: [Vec2; 3], color: Color) -> Self {
        Self { points, color }
    }
}

impl DrawList {
    /// Records a filled triangle.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, points: [Vec2; 3], color: Color) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(points, color)));
    }
}
