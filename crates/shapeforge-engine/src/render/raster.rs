use crate::render::Surface;
use crate::render::shapes::{circle, common, rect, triangle};
use crate::scene::{DrawCmd, DrawList};

/// Per-call counters returned by [`Rasterizer::render`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// Commands that reached the coverage scan.
    pub drawn: u32,
    /// Commands skipped because their geometry was degenerate.
    pub skipped: u32,
    /// Pixels that received any coverage.
    pub pixels: u64,
}

/// Rasterizer for every `DrawCmd` variant.
///
/// Does not clear the surface; callers that want a full repaint clear first.
/// Keep one instance alive across frames: degenerate commands are reported
/// once per instance, not once per frame.
#[derive(Debug, Default)]
pub struct Rasterizer {
    warned_degenerate: bool,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints every item of `draw_list` back-to-front.
    pub fn render(&mut self, surface: &mut Surface, draw_list: &mut DrawList) -> RenderStats {
        let mut stats = RenderStats::default();

        for item in draw_list.iter_in_paint_order() {
            match self.draw(surface, &item.cmd) {
                Some(pixels) => {
                    stats.drawn += 1;
                    stats.pixels += pixels;
                }
                None => stats.skipped += 1,
            }
        }

        log::trace!(
            "rasterized {} commands ({} skipped, {} pixels)",
            stats.drawn,
            stats.skipped,
            stats.pixels
        );
        stats
    }

    /// Paints a single command.
    ///
    /// Returns the number of pixels touched, or `None` if the geometry was degenerate.
    pub fn draw(&mut self, surface: &mut Surface, cmd: &DrawCmd) -> Option<u64> {
        let drawable = match cmd {
            DrawCmd::Rect(c) => rect::is_drawable(c),
            DrawCmd::Circle(c) => circle::is_drawable(c),
            DrawCmd::Triangle(c) => triangle::is_drawable(c),
        };

        if !drawable || !cmd.color().is_finite() {
            if !self.warned_degenerate {
                log::debug!("Rasterizer: degenerate draw command skipped: {cmd:?}");
                self.warned_degenerate = true;
            }
            return None;
        }

        let bounds = cmd.bounds();
        let color = cmd.color();
        let pixels = match cmd {
            DrawCmd::Rect(c) => common::fill_sdf(surface, bounds, color, |p| rect::signed_distance(c, p)),
            DrawCmd::Circle(c) => common::fill_sdf(surface, bounds, color, |p| circle::signed_distance(c, p)),
            DrawCmd::Triangle(c) => {
                common::fill_sdf(surface, bounds, color, |p| triangle::signed_distance(c, p))
            }
        };
        Some(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::ZIndex;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn red() -> Color { Color::from_srgb_u8(255, 0, 0, 255) }
    fn blue() -> Color { Color::from_srgb_u8(0, 0, 255, 255) }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn integer_rect_is_pixel_exact() {
        let mut s = Surface::new(20, 20).unwrap();
        let mut list = DrawList::new();
        list.push_rect(ZIndex::default(), Rect::new(2.0, 3.0, 5.0, 4.0), red());

        let stats = Rasterizer::new().render(&mut s, &mut list);
        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.pixels, 20);

        assert_eq!(s.pixel(2, 3), Some(RED));
        assert_eq!(s.pixel(6, 6), Some(RED));
        assert_eq!(s.pixel(7, 6), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(6, 7), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(1, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn rect_hanging_off_surface_is_clipped() {
        let mut s = Surface::new(10, 10).unwrap();
        let mut list = DrawList::new();
        list.push_rect(ZIndex::default(), Rect::new(-5.0, -5.0, 8.0, 8.0), red());

        let stats = Rasterizer::new().render(&mut s, &mut list);
        assert_eq!(stats.pixels, 9);
        assert_eq!(s.pixel(0, 0), Some(RED));
        assert_eq!(s.pixel(3, 0), Some([0, 0, 0, 0]));
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_fills_center_not_corners() {
        let mut s = Surface::new(40, 40).unwrap();
        let mut list = DrawList::new();
        list.push_circle(ZIndex::default(), Vec2::new(20.0, 20.0), 10.0, red());
        Rasterizer::new().render(&mut s, &mut list);

        assert_eq!(s.pixel(20, 20), Some(RED));
        assert_eq!(s.pixel(11, 20), Some(RED));
        assert_eq!(s.pixel(10, 10), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(29, 29), Some([0, 0, 0, 0]));
    }

    // ── triangle ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_fills_base_not_top_corners() {
        let mut s = Surface::new(100, 100).unwrap();
        let mut list = DrawList::new();
        list.push_triangle(
            ZIndex::default(),
            [Vec2::new(50.0, 0.0), Vec2::new(0.0, 100.0), Vec2::new(100.0, 100.0)],
            red(),
        );
        Rasterizer::new().render(&mut s, &mut list);

        assert_eq!(s.pixel(50, 90), Some(RED));
        assert_eq!(s.pixel(50, 10), Some(RED));
        assert_eq!(s.pixel(5, 5), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(94, 5), Some([0, 0, 0, 0]));
    }

    // ── ordering / degenerate ─────────────────────────────────────────────

    #[test]
    fn later_push_wins_on_overlap() {
        let mut s = Surface::new(10, 10).unwrap();
        let mut list = DrawList::new();
        list.push_rect(ZIndex::default(), Rect::new(0.0, 0.0, 10.0, 10.0), red());
        list.push_rect(ZIndex::default(), Rect::new(0.0, 0.0, 5.0, 5.0), blue());
        Rasterizer::new().render(&mut s, &mut list);

        assert_eq!(s.pixel(1, 1), Some(BLUE));
        assert_eq!(s.pixel(8, 8), Some(RED));
    }

    #[test]
    fn degenerate_commands_are_skipped() {
        let mut s = Surface::new(10, 10).unwrap();
        let mut list = DrawList::new();
        list.push_circle(ZIndex::default(), Vec2::new(5.0, 5.0), 0.0, red());
        list.push_rect(ZIndex::default(), Rect::new(0.0, 0.0, f64::NAN, 4.0), red());

        let stats = Rasterizer::new().render(&mut s, &mut list);
        assert_eq!(stats, RenderStats { drawn: 0, skipped: 2, pixels: 0 });
        assert!(s.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn degenerate_warning_is_latched_across_frames() {
        let mut s = Surface::new(10, 10).unwrap();
        let mut raster = Rasterizer::new();
        let mut list = DrawList::new();
        list.push_circle(ZIndex::default(), Vec2::new(5.0, 5.0), 0.0, red());

        assert!(!raster.warned_degenerate);
        assert_eq!(raster.render(&mut s, &mut list).skipped, 1);
        assert!(raster.warned_degenerate);

        // The next frame still skips and counts the command.
        assert_eq!(raster.render(&mut s, &mut list).skipped, 1);
        assert!(raster.warned_degenerate);
    }
}
