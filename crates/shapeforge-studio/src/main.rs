use anyhow::Result;

use shapeforge_compose::prelude::*;
use shapeforge_engine::logging::{init_logging, LoggingConfig};

/// Thumbnail sampling step in surface pixels. Terminal cells are about twice as tall as wide.
const CELL_W: u32 = 20;
const CELL_H: u32 = 30;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║      SHAPEFORGE — CANVAS COMPOSER      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut session = Session::new(SessionConfig::default())?;
    show(&session);

    let circle = session.add_layer(ShapeKind::Circle, ColorName::Lime, 200.0, PositionKey::C)?;
    session.add_layer(ShapeKind::Square, ColorName::Cyan, 100.0, PositionKey::TL)?;
    session.add_layer(
        ShapeKind::Triangle,
        ColorName::Crimson,
        f64::from(SizePreset::Small.px()),
        PositionKey::BR,
    )?;
    show(&session);

    session.delete_layer(circle);
    show(&session);

    if let Err(e) = session.add_layer(ShapeKind::Square, ColorName::Amber, 0.0, PositionKey::C) {
        println!("  rejected: {e}");
        println!();
    }

    log::info!("session finished after {} redraws", session.redraw_count());
    Ok(())
}

/// Prints the layer panel and a coarse thumbnail of the surface.
fn show(session: &Session) {
    println!("  LAYERS  {}", layer_count_label(session.layers().len()));

    let rows = layer_rows(session.layers());
    if rows.is_empty() {
        println!("    {EMPTY_PANEL_MESSAGE}");
    }
    for row in &rows {
        let marker = if row.is_newest { '>' } else { ' ' };
        println!("  {marker} {row}  {}", row.color_hex);
    }
    println!();

    let surface = session.surface();
    for y in (0..surface.height()).step_by(CELL_H as usize) {
        let line: String = (0..surface.width())
            .step_by(CELL_W as usize)
            .map(|x| swatch_char(surface.pixel(x + CELL_W / 2, y + CELL_H / 2)))
            .collect();
        println!("    |{line}|");
    }
    println!();
}

/// First letter of the palette entry under the pixel, `.` for empty.
fn swatch_char(px: Option<[u8; 4]>) -> char {
    let Some([r, g, b, a]) = px else { return ' ' };
    if a == 0 {
        return '.';
    }
    ColorName::ALL
        .into_iter()
        .find(|c| c.rgb() == [r, g, b])
        .and_then(|c| c.label().chars().next())
        .unwrap_or('+')
}
