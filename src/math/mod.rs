mod color;
mod point;
mod rect;
mod timing;

pub use color::Color;
pub use point::Point2;
pub use rect::Rect;
pub use timing::Timing;
