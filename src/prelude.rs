pub use super::math::*;
pub use super::render::*;
pub use super::runner::*;
pub use super::software::*;
pub use super::window::*;
pub use super::{create_pixel_buffer, create_render_queue, create_runner};
