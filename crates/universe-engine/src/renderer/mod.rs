pub mod circle;
pub mod color;
