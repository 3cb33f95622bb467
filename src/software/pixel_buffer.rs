use std::{num::NonZero, sync::Arc};

use softbuffer::{Context, Surface};
use winit::dpi::PhysicalSize;

use crate::{math::Point2, render::Present, utils::SharedRef, window::Window};

use super::{Canvas, PixelBufferError};

type SoftbufferSurface = Surface<Arc<winit::window::Window>, Arc<winit::window::Window>>;
type SoftbufferContext = Context<Arc<winit::window::Window>>;

pub(crate) struct PixelBufferInner {
    _context: SoftbufferContext,
    surface: SoftbufferSurface,
    surface_size: Point2,
}

impl PixelBufferInner {
    pub fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), PixelBufferError> {
        let (Some(width), Some(height)) = (NonZero::new(size.width), NonZero::new(size.height))
        else {
            // Minimised windows report 0x0; keep the surface, skip presenting.
            self.surface_size = Point2::ZERO;
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .map_err(|e| PixelBufferError::ResizeFailed(e.to_string()))?;

        self.surface_size = Point2::from(size);
        Ok(())
    }
}

/// Presents a [`Canvas`] into a window through softbuffer.
///
/// The surface follows the window size: resize events handled by the
/// [`Runner`](crate::runner::Runner) resize it before the next frame.
pub struct PixelBuffer {
    pub(crate) inner: SharedRef<PixelBufferInner>,
}

impl PixelBuffer {
    pub fn new(window: &mut Window) -> Result<Self, PixelBufferError> {
        let mut window_inner = window.inner.borrow_mut();

        if window_inner.pixelbuffer.is_some() {
            return Err(PixelBufferError::AlreadyBound);
        }

        let handle = window_inner
            .window_pointer
            .clone()
            .ok_or(PixelBufferError::WindowClosed)?;

        let context = SoftbufferContext::new(handle.clone())
            .map_err(|e| PixelBufferError::ContextCreationFailed(e.to_string()))?;

        let surface = SoftbufferSurface::new(&context, handle.clone())
            .map_err(|e| PixelBufferError::SurfaceCreationFailed(e.to_string()))?;

        let mut inner = PixelBufferInner {
            _context: context,
            surface,
            surface_size: Point2::ZERO,
        };

        inner.resize(handle.inner_size())?;

        crate::dbg_log!(
            "Pixel buffer bound to window {} ({}x{})",
            window_inner.window_id,
            inner.surface_size.x,
            inner.surface_size.y
        );

        let inner = SharedRef::new(inner);
        window_inner.pixelbuffer = Some(inner.clone());

        Ok(PixelBuffer { inner })
    }

    /// Size of the window surface in pixels.
    pub fn size(&self) -> Point2 {
        self.inner.borrow().surface_size
    }

    /// Copy `pixels` (`0x00RRGGBB`, row-major, `size.x * size.y` long) to the
    /// surface and present it.
    pub fn write_buffers(&mut self, pixels: &[u32], size: Point2) -> Result<(), PixelBufferError> {
        let mut inner = self.inner.borrow_mut();

        if size.is_empty() || pixels.len() != (size.x * size.y) as usize {
            return Err(PixelBufferError::InvalidSize(size.x, size.y));
        }

        if inner.surface_size.is_empty() {
            return Err(PixelBufferError::InvalidSurfaceSize);
        }

        if inner.surface_size != size {
            return Err(PixelBufferError::SizeMismatch {
                expected: inner.surface_size,
                actual: size,
            });
        }

        let mut buffer = inner
            .surface
            .buffer_mut()
            .map_err(|e| PixelBufferError::BufferFetchFailed(e.to_string()))?;

        if buffer.len() < pixels.len() {
            return Err(PixelBufferError::BufferTooSmall);
        }

        buffer[..pixels.len()].copy_from_slice(pixels);

        buffer
            .present()
            .map_err(|e| PixelBufferError::PresentFailed(e.to_string()))
    }
}

impl Present for PixelBuffer {
    fn size(&self) -> Point2 {
        PixelBuffer::size(self)
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), PixelBufferError> {
        self.write_buffers(canvas.pixels(), canvas.size())
    }
}
