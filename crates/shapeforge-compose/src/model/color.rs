use std::fmt;
use std::str::FromStr;

use shapeforge_engine::paint::Color;

use crate::error::ValidationError;

/// Named palette entries a layer can be painted with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorName {
    Lime,
    Crimson,
    Cyan,
    Amber,
    Violet,
    Snow,
    Slate,
}

impl ColorName {
    /// Swatch order.
    pub const ALL: [ColorName; 7] = [
        ColorName::Lime,
        ColorName::Crimson,
        ColorName::Cyan,
        ColorName::Amber,
        ColorName::Violet,
        ColorName::Snow,
        ColorName::Slate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorName::Lime => "Lime",
            ColorName::Crimson => "Crimson",
            ColorName::Cyan => "Cyan",
            ColorName::Amber => "Amber",
            ColorName::Violet => "Violet",
            ColorName::Snow => "Snow",
            ColorName::Slate => "Slate",
        }
    }

    /// Straight sRGB bytes of the swatch, fully opaque.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorName::Lime => [0xc8, 0xff, 0x00],
            ColorName::Crimson => [0xff, 0x2d, 0x55],
            ColorName::Cyan => [0x00, 0xff, 0xd1],
            ColorName::Amber => [0xff, 0xb8, 0x00],
            ColorName::Violet => [0xbf, 0x5a, 0xf2],
            ColorName::Snow => [0xf5, 0xf5, 0xf5],
            ColorName::Slate => [0x4a, 0x55, 0x68],
        }
    }

    /// `#rrggbb`, lowercase.
    pub fn hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Display color used by the rasterizer.
    #[inline]
    pub fn color(self) -> Color {
        let [r, g, b] = self.rgb();
        Color::from_srgb_u8(r, g, b, 0xff)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}
