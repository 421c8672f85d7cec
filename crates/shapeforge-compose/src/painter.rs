//! Layer-to-pixel pipeline: shape dispatch and full-surface redraw.

use shapeforge_engine::coords::Vec2;
use shapeforge_engine::render::{Rasterizer, RenderStats, Surface};
use shapeforge_engine::scene::shapes::circle::CircleCmd;
use shapeforge_engine::scene::shapes::rect::RectCmd;
use shapeforge_engine::scene::shapes::triangle::TriangleCmd;
use shapeforge_engine::scene::{DrawCmd, DrawList, ZIndex};

use crate::model::{ColorName, Layer, ShapeKind};
use crate::placement::{self, Placement};
use crate::store::paint_order;

/// Engine draw command for one shape filling the placed box `at`.
///
/// - Circle: disc inscribed in the box.
/// - Square: the box itself.
/// - Triangle: apex at the middle of the top edge, base along the bottom edge.
///   The triangle's bounding box is exactly the layer's box; no centroid shift.
///
/// Geometry is taken from the box's anchored lines, so the edges pinned to the
/// surface stay exact however large the box is.
pub fn placed_cmd(kind: ShapeKind, color: ColorName, at: &Placement) -> DrawCmd {
    let color = color.color();
    let (x, y) = (at.x, at.y);

    match kind {
        ShapeKind::Circle => {
            DrawCmd::Circle(CircleCmd::inscribed(at.bounds(), at.center(), at.size / 2.0, color))
        }
        ShapeKind::Square => DrawCmd::Rect(RectCmd::new(at.bounds(), color)),
        ShapeKind::Triangle => DrawCmd::Triangle(TriangleCmd::new(
            [Vec2::new(x.mid, y.start), Vec2::new(x.start, y.end), Vec2::new(x.end, y.end)],
            color,
        )),
    }
}

/// Engine draw command for one shape whose bounding box starts at `origin`.
pub fn shape_cmd(kind: ShapeKind, color: ColorName, origin: Vec2, size: f64) -> DrawCmd {
    placed_cmd(kind, color, &Placement::from_origin(origin, size))
}

/// Paints a single shape onto `surface` immediately, over whatever is already there.
pub fn paint(surface: &mut Surface, kind: ShapeKind, color: ColorName, origin: Vec2, size: f64) {
    Rasterizer::new().draw(surface, &shape_cmd(kind, color, origin, size));
}

/// Clears `surface` and repaints every layer.
///
/// `layers` is in storage order (newest first). Layers are painted in the
/// reverse of that order so the newest ends up on top.
pub fn redraw(surface: &mut Surface, layers: &[Layer]) -> RenderStats {
    redraw_with(&mut Rasterizer::new(), surface, layers)
}

/// [`redraw`] through a caller-owned rasterizer that outlives the frame.
pub fn redraw_with(rasterizer: &mut Rasterizer, surface: &mut Surface, layers: &[Layer]) -> RenderStats {
    let mut list = record(surface, layers);
    surface.clear();
    let stats = rasterizer.render(surface, &mut list);
    log::trace!("redraw: {} layers, {} pixels", stats.drawn, stats.pixels);
    stats
}

/// Records `layers` into a draw list, oldest first.
fn record(surface: &Surface, layers: &[Layer]) -> DrawList {
    let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
    let mut list = DrawList::with_capacity(layers.len());

    for layer in paint_order(layers) {
        let at = placement::place(layer.position(), layer.size().get(), w, h);
        list.push(ZIndex::default(), placed_cmd(layer.kind(), layer.color(), &at));
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeforge_engine::coords::Rect;
    use crate::model::PositionKey;
    use crate::store::LayerStore;

    fn rgba(c: ColorName) -> Option<[u8; 4]> {
        let [r, g, b] = c.rgb();
        Some([r, g, b, 0xff])
    }

    const CLEAR: Option<[u8; 4]> = Some([0, 0, 0, 0]);

    // ── shape_cmd ─────────────────────────────────────────────────────────

    #[test]
    fn circle_is_inscribed() {
        let cmd = shape_cmd(ShapeKind::Circle, ColorName::Lime, Vec2::new(180.0, 110.0), 200.0);
        let DrawCmd::Circle(c) = &cmd else { panic!("expected circle, got {cmd:?}") };
        assert_eq!(c.center, Vec2::new(280.0, 210.0));
        assert_eq!(c.radius, 100.0);
    }

    #[test]
    fn square_is_the_box() {
        let cmd = shape_cmd(ShapeKind::Square, ColorName::Cyan, Vec2::new(10.0, 20.0), 30.0);
        assert_eq!(cmd.bounds(), Rect::new(10.0, 20.0, 30.0, 30.0));
        assert!(matches!(cmd, DrawCmd::Rect(_)));
    }

    #[test]
    fn triangle_apex_top_middle_base_bottom_corners() {
        let cmd = shape_cmd(ShapeKind::Triangle, ColorName::Amber, Vec2::new(10.0, 20.0), 100.0);
        let DrawCmd::Triangle(t) = &cmd else { panic!("expected triangle, got {cmd:?}") };
        assert_eq!(
            t.points,
            [Vec2::new(60.0, 20.0), Vec2::new(10.0, 120.0), Vec2::new(110.0, 120.0)]
        );
        assert_eq!(cmd.bounds(), Rect::new(10.0, 20.0, 100.0, 100.0));
    }

    #[test]
    fn color_resolves_through_table() {
        let cmd = shape_cmd(ShapeKind::Square, ColorName::Crimson, Vec2::zero(), 1.0);
        assert_eq!(cmd.color(), ColorName::Crimson.color());
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_draws_over_existing_pixels() {
        let mut s = Surface::new(20, 20).unwrap();
        paint(&mut s, ShapeKind::Square, ColorName::Snow, Vec2::zero(), 20.0);
        paint(&mut s, ShapeKind::Square, ColorName::Slate, Vec2::new(5.0, 5.0), 5.0);

        assert_eq!(s.pixel(0, 0), rgba(ColorName::Snow));
        assert_eq!(s.pixel(6, 6), rgba(ColorName::Slate));
    }

    // ── redraw ────────────────────────────────────────────────────────────

    #[test]
    fn newest_layer_is_on_top() {
        let mut store = LayerStore::new();
        store.add_layer(ShapeKind::Square, ColorName::Crimson, 400.0, PositionKey::C).unwrap();
        store.add_layer(ShapeKind::Square, ColorName::Amber, 200.0, PositionKey::C).unwrap();
        store.add_layer(ShapeKind::Circle, ColorName::Violet, 100.0, PositionKey::C).unwrap();

        let mut s = Surface::new(560, 420).unwrap();
        let stats = redraw(&mut s, store.list_layers());
        assert_eq!(stats.drawn, 3);

        assert_eq!(s.pixel(280, 210), rgba(ColorName::Violet));
        assert_eq!(s.pixel(200, 120), rgba(ColorName::Amber));
        assert_eq!(s.pixel(90, 20), rgba(ColorName::Crimson));
        assert_eq!(s.pixel(5, 5), CLEAR);
    }

    #[test]
    fn redraw_clears_previous_frame() {
        let mut s = Surface::new(560, 420).unwrap();
        let mut store = LayerStore::new();
        let id = store.add_layer(ShapeKind::Square, ColorName::Lime, 100.0, PositionKey::TL).unwrap();
        redraw(&mut s, store.list_layers());
        assert_eq!(s.pixel(50, 50), rgba(ColorName::Lime));

        store.delete_layer(id);
        let stats = redraw(&mut s, store.list_layers());
        assert_eq!(stats, RenderStats::default());
        assert!(s.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut store = LayerStore::new();
        store.add_layer(ShapeKind::Triangle, ColorName::Cyan, 200.0, PositionKey::MR).unwrap();
        store.add_layer(ShapeKind::Circle, ColorName::Crimson, 100.0, PositionKey::TC).unwrap();
        store.add_layer(ShapeKind::Circle, ColorName::Snow, 400.0, PositionKey::BL).unwrap();

        let mut s = Surface::new(560, 420).unwrap();
        redraw(&mut s, store.list_layers());
        let first = s.as_raw().to_vec();
        redraw(&mut s, store.list_layers());
        assert_eq!(s.as_raw(), first.as_slice());
    }

    #[test]
    fn oversized_layer_is_clipped_not_rejected() {
        let mut store = LayerStore::new();
        store.add_layer(ShapeKind::Square, ColorName::Slate, 1000.0, PositionKey::C).unwrap();

        let mut s = Surface::new(560, 420).unwrap();
        let stats = redraw(&mut s, store.list_layers());
        assert_eq!(stats.pixels, 560 * 420);
        assert_eq!(s.pixel(0, 0), rgba(ColorName::Slate));
        assert_eq!(s.pixel(559, 419), rgba(ColorName::Slate));
    }

    // ── sizes far beyond the surface ──────────────────────────────────────

    fn redraw_one(kind: ShapeKind, color: ColorName, size: f64, at: PositionKey) -> (Surface, RenderStats) {
        let mut store = LayerStore::new();
        store.add_layer(kind, color, size, at).unwrap();
        let mut s = Surface::new(560, 420).unwrap();
        let stats = redraw(&mut s, store.list_layers());
        (s, stats)
    }

    #[test]
    fn huge_bottom_right_square_covers_the_whole_surface() {
        for size in [45_969_572.0, 183_878_290.0, 11_768_210_000.0, 1e20, f64::MAX] {
            let (s, stats) = redraw_one(ShapeKind::Square, ColorName::Slate, size, PositionKey::BR);
            assert_eq!(stats.pixels, 560 * 420, "{size}");
            assert_eq!(s.pixel(0, 0), rgba(ColorName::Slate), "{size}");
            assert_eq!(s.pixel(559, 419), rgba(ColorName::Slate), "{size}");
        }
    }

    #[test]
    fn huge_top_left_triangle_leaves_the_surface_empty() {
        // Apex at x = 5e19; the whole surface lies left of the triangle's left edge.
        let (s, stats) = redraw_one(ShapeKind::Triangle, ColorName::Lime, 1e20, PositionKey::TL);
        assert_eq!(stats.pixels, 0);
        assert_eq!(s.pixel(0, 0), CLEAR);
        assert!(s.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn huge_top_center_triangle_keeps_its_apex() {
        let (s, _) = redraw_one(ShapeKind::Triangle, ColorName::Lime, 1e20, PositionKey::TC);
        // Half-width at row 400 is about 200: 80..480.
        assert_eq!(s.pixel(280, 5), rgba(ColorName::Lime));
        assert_eq!(s.pixel(290, 5), CLEAR);
        assert_eq!(s.pixel(100, 400), rgba(ColorName::Lime));
        assert_eq!(s.pixel(5, 400), CLEAR);
    }

    #[test]
    fn huge_top_center_circle_fills_from_the_top_row() {
        let (s, stats) = redraw_one(ShapeKind::Circle, ColorName::Cyan, 1e20, PositionKey::TC);
        assert_eq!(stats.pixels, 560 * 420);
        assert_eq!(s.pixel(280, 0), rgba(ColorName::Cyan));
        assert_eq!(s.pixel(0, 0), rgba(ColorName::Cyan));
    }

    #[test]
    fn huge_corner_circle_misses_its_corner() {
        // The surface sits in the bounding-box corner the disc does not reach.
        let (s, stats) = redraw_one(ShapeKind::Circle, ColorName::Cyan, 1e20, PositionKey::BR);
        assert_eq!(stats.pixels, 0);
        assert_eq!(s.pixel(559, 419), CLEAR);
    }

    // ── rasterizer reuse ──────────────────────────────────────────────────

    #[test]
    fn redraw_with_matches_redraw() {
        let mut store = LayerStore::new();
        store.add_layer(ShapeKind::Triangle, ColorName::Amber, 300.0, PositionKey::ML).unwrap();
        store.add_layer(ShapeKind::Circle, ColorName::Violet, 200.0, PositionKey::C).unwrap();

        let mut a = Surface::new(560, 420).unwrap();
        let mut b = Surface::new(560, 420).unwrap();
        let mut raster = Rasterizer::new();
        redraw(&mut a, store.list_layers());
        redraw_with(&mut raster, &mut b, store.list_layers());
        redraw_with(&mut raster, &mut b, store.list_layers());
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
