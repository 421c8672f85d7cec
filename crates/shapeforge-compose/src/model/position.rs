use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Vertical band of the 3×3 anchor grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

/// Horizontal band of the 3×3 anchor grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Column {
    Left,
    Center,
    Right,
}

/// One of nine anchor cells on the surface.
///
/// Two-letter keys read row first, column second (`TR` = top row, right column).
/// `C` is the dead center: middle row, center column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PositionKey {
    TL,
    TC,
    TR,
    ML,
    C,
    MR,
    BL,
    BC,
    BR,
}

impl PositionKey {
    /// Grid order, row-major from the top-left cell.
    pub const ALL: [PositionKey; 9] = [
        PositionKey::TL,
        PositionKey::TC,
        PositionKey::TR,
        PositionKey::ML,
        PositionKey::C,
        PositionKey::MR,
        PositionKey::BL,
        PositionKey::BC,
        PositionKey::BR,
    ];

    /// Symbolic key as shown in the layer list.
    pub fn key(self) -> &'static str {
        match self {
            PositionKey::TL => "TL",
            PositionKey::TC => "TC",
            PositionKey::TR => "TR",
            PositionKey::ML => "ML",
            PositionKey::C => "C",
            PositionKey::MR => "MR",
            PositionKey::BL => "BL",
            PositionKey::BC => "BC",
            PositionKey::BR => "BR",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PositionKey::TL => "Top Left",
            PositionKey::TC => "Top Center",
            PositionKey::TR => "Top Right",
            PositionKey::ML => "Mid Left",
            PositionKey::C => "Center",
            PositionKey::MR => "Mid Right",
            PositionKey::BL => "Bot Left",
            PositionKey::BC => "Bot Center",
            PositionKey::BR => "Bot Right",
        }
    }

    pub fn row(self) -> Row {
        match self {
            PositionKey::TL | PositionKey::TC | PositionKey::TR => Row::Top,
            PositionKey::ML | PositionKey::C | PositionKey::MR => Row::Middle,
            PositionKey::BL | PositionKey::BC | PositionKey::BR => Row::Bottom,
        }
    }

    pub fn column(self) -> Column {
        match self {
            PositionKey::TL | PositionKey::ML | PositionKey::BL => Column::Left,
            PositionKey::TC | PositionKey::C | PositionKey::BC => Column::Center,
            PositionKey::TR | PositionKey::MR | PositionKey::BR => Column::Right,
        }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PositionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PositionKey::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ValidationError::UnknownPosition(s.to_string()))
    }
}
