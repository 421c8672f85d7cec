use crate::error::ValidationError;

/// Side length of a layer's square bounding box (diameter for circles).
///
/// Always finite and strictly positive. Any such value is accepted; the
/// [`SizePreset`]s are suggestions for the picker only.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct LayerSize(f64);

impl LayerSize {
    pub fn new(px: f64) -> Result<Self, ValidationError> {
        if !px.is_finite() {
            return Err(ValidationError::NonFiniteSize(px));
        }
        if px <= 0.0 {
            return Err(ValidationError::NonPositiveSize(px));
        }
        Ok(Self(px))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<SizePreset> for LayerSize {
    fn from(preset: SizePreset) -> Self {
        Self(f64::from(preset.px()))
    }
}

/// Suggested sizes offered by the size picker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Small, SizePreset::Medium, SizePreset::Large];

    pub fn px(self) -> u32 {
        match self {
            SizePreset::Small => 100,
            SizePreset::Medium => 200,
            SizePreset::Large => 400,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Small => "100 × 100",
            SizePreset::Medium => "200 × 200",
            SizePreset::Large => "400 × 400",
        }
    }
}
