use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The shapes a layer can hold.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Picker order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Three-letter uppercase picker caption.
    pub fn short_label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "CIR",
            ShapeKind::Square => "SQU",
            ShapeKind::Triangle => "TRI",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.label() == s)
            .ok_or_else(|| ValidationError::UnknownShape(s.to_string()))
    }
}
