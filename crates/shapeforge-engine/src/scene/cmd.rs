use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching coverage function under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Triangle(TriangleCmd),
}

impl DrawCmd {
    /// Fill color of the command.
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::Rect(c) => c.color,
            DrawCmd::Circle(c) => c.color,
            DrawCmd::Triangle(c) => c.color,
        }
    }

    /// Axis-aligned bounds of the filled geometry.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCmd::Rect(c) => c.rect,
            DrawCmd::Circle(c) => c.bounds,
            DrawCmd::Triangle(c) => Rect::bounding(&c.points),
        }
    }
}
