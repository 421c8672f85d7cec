pub mod circle;
pub mod rect;
pub mod triangle;
