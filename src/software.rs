//! Software rendering: a CPU [`Canvas`] and the surfaces it is presented on.
//!
//! [`PixelBuffer`] shows a canvas inside a window through softbuffer.
//! [`Headless`] keeps the last presented frame in memory instead, which is
//! what tests and screenshot runs use.

mod canvas;
mod pixel_buffer;

pub use canvas::Canvas;
pub use pixel_buffer::PixelBuffer;
pub(crate) use pixel_buffer::PixelBufferInner;

use crate::{math::Point2, render::Present};

/// Off-screen presenter with a fixed size.
#[derive(Clone, Debug, Default)]
pub struct Headless {
    size: Point2,
    last_frame: Option<Canvas>,
    frames_presented: u64,
}

impl Headless {
    pub fn new(size: Point2) -> Self {
        Self {
            size,
            last_frame: None,
            frames_presented: 0,
        }
    }

    /// Change the reported size, as a window resize would.
    pub fn set_size(&mut self, size: Point2) {
        self.size = size;
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&Canvas> {
        self.last_frame.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Present for Headless {
    fn size(&self) -> Point2 {
        self.size
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), PixelBufferError> {
        if canvas.size() != self.size {
            return Err(PixelBufferError::SizeMismatch {
                expected: self.size,
                actual: canvas.size(),
            });
        }

        match &mut self.last_frame {
            Some(frame) => frame.clone_from(canvas),
            None => self.last_frame = Some(canvas.clone()),
        }

        self.frames_presented += 1;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PixelBufferError {
    #[error("window is closed")]
    WindowClosed,
    #[error("window already has a pixel buffer bound")]
    AlreadyBound,
    #[error("failed to create pixel buffer context: {0}")]
    ContextCreationFailed(String),
    #[error("failed to create pixel buffer surface: {0}")]
    SurfaceCreationFailed(String),
    #[error("failed to resize pixel buffer surface: {0}")]
    ResizeFailed(String),
    #[error("invalid size: {0}x{1}")]
    InvalidSize(i32, i32),
    #[error("pixel buffer surface size is zero")]
    InvalidSurfaceSize,
    #[error("frame is {}x{} but surface is {}x{}", .actual.x, .actual.y, .expected.x, .expected.y)]
    SizeMismatch { expected: Point2, actual: Point2 },
    #[error("failed to fetch pixel buffer: {0}")]
    BufferFetchFailed(String),
    #[error("pixel buffer is too small")]
    BufferTooSmall,
    #[error("failed to present pixel buffer: {0}")]
    PresentFailed(String),
}
