//! Shapes, sprites and the queue that paints them.

mod circle;
mod queue;
mod shape;
mod sprite;
mod texture;

pub use circle::MidpointCircle;
pub use queue::RenderQueue;
pub use shape::Shape;
pub use sprite::Sprite;
pub use texture::{Texture, TextureError};

use crate::{
    math::Point2,
    software::{Canvas, PixelBufferError},
};

/// Where a finished frame goes.
pub trait Present {
    /// Current target size in pixels. The queue paints frames at this size.
    fn size(&self) -> Point2;

    /// Show `canvas`, which is exactly [`Present::size`] large.
    fn present(&mut self, canvas: &Canvas) -> Result<(), PixelBufferError>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("present failed: {0}")]
    Present(#[from] PixelBufferError),
}
