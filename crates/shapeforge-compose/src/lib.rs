//! Shapeforge composition core — layers on top of `shapeforge-engine`.
//!
//! A [`LayerStore`] owns the live layers, newest first. [`redraw`] repaints a
//! [`Surface`](shapeforge_engine::render::Surface) from scratch, oldest layer
//! first, so the newest layer ends up on top. [`Session`] ties the two together
//! and repaints after every mutation.
//!
//! ```rust,ignore
//! use shapeforge_compose::prelude::*;
//!
//! let mut session = Session::new(SessionConfig::default())?;
//! let circle = session.add_layer(ShapeKind::Circle, ColorName::Lime, 200.0, PositionKey::C)?;
//! session.add_layer(ShapeKind::Square, ColorName::Cyan, 100.0, PositionKey::TL)?;
//! session.delete_layer(circle);
//! assert_eq!(session.layers().len(), 1);
//! ```

pub mod error;
pub mod model;
pub mod painter;
pub mod placement;
pub mod session;
pub mod store;
pub mod summary;

pub use error::ValidationError;
pub use model::{ColorName, Layer, LayerId, LayerSize, PositionKey, ShapeKind, SizePreset};
pub use painter::{paint, placed_cmd, redraw, redraw_with, shape_cmd};
pub use placement::{origin, place, Placement};
pub use session::{Session, SessionConfig};
pub use store::{paint_order, LayerStore};

/// Everything presentation glue needs. Import this in the shell.
pub mod prelude {
    pub use crate::error::ValidationError;
    pub use crate::model::{
        Column, ColorName, Layer, LayerId, LayerSize, PositionKey, Row, ShapeKind, SizePreset,
    };
    pub use crate::painter::{paint, redraw};
    pub use crate::placement::{bounds, origin, place, Placement};
    pub use crate::session::{Session, SessionConfig};
    pub use crate::store::{paint_order, LayerStore};
    pub use crate::summary::{layer_count_label, layer_rows, LayerRow, EMPTY_PANEL_MESSAGE};

    pub use shapeforge_engine::coords::{Rect, Vec2};
    pub use shapeforge_engine::render::Surface;
}
