use std::fmt;

/// Rejected input at the layer-store boundary.
///
/// A rejected operation leaves the store untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Size was zero or negative.
    NonPositiveSize(f64),
    /// Size was NaN or infinite.
    NonFiniteSize(f64),
    UnknownShape(String),
    UnknownColor(String),
    UnknownPosition(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveSize(v) => write!(f, "layer size must be positive, got {v}"),
            ValidationError::NonFiniteSize(v) => write!(f, "layer size must be finite, got {v}"),
            ValidationError::UnknownShape(s) => write!(f, "unknown shape '{s}'"),
            ValidationError::UnknownColor(s) => write!(f, "unknown color '{s}'"),
            ValidationError::UnknownPosition(s) => write!(f, "unknown position '{s}'"),
        }
    }
}

impl std::error::Error for ValidationError {}
