//! Text summaries the layer panel renders.

use std::fmt;

use crate::model::{Layer, LayerId, PositionKey, ShapeKind};

/// Shown in place of the list while the store is empty.
pub const EMPTY_PANEL_MESSAGE: &str = "No layers yet.";

/// One row of the layer panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRow {
    /// Zero-based position in storage order.
    pub index: usize,
    pub id: LayerId,
    pub kind: ShapeKind,
    pub position: PositionKey,
    pub size: f64,
    pub color_hex: String,
    /// Set on the first row only: the most recently added layer.
    pub is_newest: bool,
}

impl LayerRow {
    /// One-based, two-digit row number, e.g. `#01`.
    pub fn number(&self) -> String {
        format!("#{:02}", self.index + 1)
    }

    /// Size badge, e.g. `200px`.
    pub fn size_badge(&self) -> String {
        format!("{}px", self.size)
    }
}

impl fmt::Display for LayerRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}] {}", self.number(), self.kind, self.position, self.size_badge())
    }
}

/// Rows for `layers` in storage order (newest first).
pub fn layer_rows(layers: &[Layer]) -> Vec<LayerRow> {
    layers
        .iter()
        .enumerate()
        .map(|(index, layer)| LayerRow {
            index,
            id: layer.id(),
            kind: layer.kind(),
            position: layer.position(),
            size: layer.size().get(),
            color_hex: layer.color().hex(),
            is_newest: index == 0,
        })
        .collect()
}

/// Header badge, e.g. `1 LAYER` / `3 LAYERS`.
pub fn layer_count_label(n: usize) -> String {
    let plural = if n == 1 { "" } else { "S" };
    format!("{n} LAYER{plural}")
}
