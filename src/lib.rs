//! Tiny winit & softbuffer 2D renderer.
//!
//! Queue up shapes and sprites once, then paint them every frame:
//!
//! ```no_run
//! use quadrant::prelude::*;
//!
//! let mut runner = quadrant::create_runner().expect("event loop");
//! let mut window = runner
//!     .create_window("My 2D Game", Point2::new(800, 600))
//!     .pos(WindowPosition::Centered)
//!     .build()
//!     .expect("window");
//!
//! let pixels = quadrant::create_pixel_buffer(&mut window).expect("surface");
//! let mut queue = quadrant::create_render_queue(pixels);
//! queue.add_shape(Shape::rectangle(Rect::new(100, 100, 200, 100), Color::RED));
//!
//! while runner.pool_events(PollMode::Poll) {
//!     if runner.events().iter().any(Event::is_key_release) {
//!         break;
//!     }
//!
//!     queue.render().expect("frame");
//! }
//! ```

#[doc(hidden)]
pub use tracing as __tracing;

/// Mathematical utilities and types
pub mod math;
/// Predefined types and traits for easy access
pub mod prelude;
/// Shapes, sprites, textures and the render queue
pub mod render;
/// Runner for managing the main event loop and window lifecycle
pub mod runner;
/// Software rendering surfaces
pub mod software;
/// Utility functions and types for common tasks
pub mod utils;
/// Window management
pub mod window;

/// Create the [`runner::Runner`], required before any window can exist.
///
/// The first successful call binds the event loop to the calling thread;
/// calls from any other thread afterwards fail with
/// [`runner::RunnerError::ThreadMismatch`].
pub fn create_runner() -> Result<runner::Runner, runner::RunnerError> {
    runner::Runner::new()
}

/// Bind a softbuffer surface to `window`.
pub fn create_pixel_buffer(
    window: &mut window::Window,
) -> Result<software::PixelBuffer, software::PixelBufferError> {
    software::PixelBuffer::new(window)
}

/// Create an empty [`render::RenderQueue`] that presents through `presenter`.
pub fn create_render_queue<P: render::Present>(presenter: P) -> render::RenderQueue<P> {
    render::RenderQueue::new(presenter)
}
