/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Surfaces store premultiplied RGBA8, so blending never has to divide.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (straight alpha). The leading `#` is optional.
    ///
    /// Returns `None` for any other shape of input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();

        match digits.len() {
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 0xff)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Premultiplied RGBA8, rounded to nearest.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Source-over composite of `self`, scaled by `coverage`, onto a premultiplied RGBA8 pixel.
    ///
    /// `coverage` is clamped to `[0, 1]`. Full coverage of an opaque color replaces
    /// the destination exactly.
    #[inline]
    pub fn blend_over(self, dst: [u8; 4], coverage: f32) -> [u8; 4] {
        let cov = coverage.clamp(0.0, 1.0);
        let keep = 1.0 - self.a * cov;
        let src = [self.r, self.g, self.b, self.a];

        let mut out = [0u8; 4];
        for i in 0..4 {
            out[i] = to_u8(src[i] * cov + (dst[i] as f32 / 255.0) * keep);
        }
        out
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_hex ──────────────────────────────────────────────────────────

    #[test]
    fn hex_six_digits_is_opaque() {
        let c = Color::from_hex("#c8ff00").unwrap();
        assert_eq!(c.to_rgba8(), [0xc8, 0xff, 0x00, 0xff]);
    }

    #[test]
    fn hex_eight_digits_premultiplies() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!(c.to_rgba8(), [0x80, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    // ── blend_over ────────────────────────────────────────────────────────

    #[test]
    fn full_coverage_opaque_replaces_destination() {
        let c = Color::from_srgb_u8(0x00, 0xff, 0xd1, 0xff);
        assert_eq!(c.blend_over([10, 20, 30, 255], 1.0), [0x00, 0xff, 0xd1, 0xff]);
    }

    #[test]
    fn zero_coverage_keeps_destination() {
        let c = Color::from_srgb_u8(0xff, 0x2d, 0x55, 0xff);
        assert_eq!(c.blend_over([1, 2, 3, 4], 0.0), [1, 2, 3, 4]);
    }

    #[test]
    fn half_coverage_onto_transparent() {
        let c = Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff);
        assert_eq!(c.blend_over([0, 0, 0, 0], 0.5), [128, 128, 128, 128]);
    }
}
