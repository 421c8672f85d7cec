//! Closed vocabularies and the layer record.
//!
//! Shape kind, color and anchor position are closed enums so that an invalid
//! value is rejected when text is parsed, never during painting.

mod color;
mod layer;
mod position;
mod shape;
mod size;

pub use color::ColorName;
pub use layer::{Layer, LayerId};
pub use position::{Column, PositionKey, Row};
pub use shape::ShapeKind;
pub use size::{LayerSize, SizePreset};
