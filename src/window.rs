use std::sync::Arc;

use winit::event;

use crate::{
    math::Point2,
    runner::{Runner, RunnerError},
    software::PixelBufferInner,
    utils::SharedRef,
};

/// Where a new window is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPosition {
    /// Let the platform decide.
    #[default]
    Default,
    /// Centre on the primary monitor (falls back to the platform default
    /// where positioning is unsupported, e.g. Wayland).
    Centered,
}

/// Handle to a window created by a [`Runner`].
///
/// The window stays open until the user closes it; the runner then reports
/// [`Event::WindowClosed`](crate::runner::Event::WindowClosed).
pub struct Window {
    pub(crate) inner: SharedRef<WindowInner>,
}

impl Window {
    pub(crate) fn new(
        runner: &mut Runner,
        title: String,
        size: Point2,
        pos: WindowPosition,
        resizable: bool,
    ) -> Result<Self, WindowError> {
        let window_id = runner.internal_new_window(title.clone(), size, pos, resizable)?;

        let window_events = runner
            .get_events_pointer(window_id)
            .ok_or(WindowError::WindowNotFound)?;
        let window_pointer = runner
            .get_window_pointer(window_id)
            .ok_or(WindowError::WindowNotFound)?;

        let size = Point2::from(window_pointer.inner_size());

        let inner = SharedRef::new(WindowInner {
            window_id,
            window_events,
            window_pointer: Some(window_pointer),
            size,
            title,
            pixelbuffer: None,
        });

        runner.window_events_attributes.push(inner.clone());

        crate::log!("Opened window {} \"{}\" ({}x{})", window_id, inner.borrow().title, size.x, size.y);

        Ok(Self { inner })
    }

    /// Identifier carried by every [`Event`](crate::runner::Event) of this
    /// window.
    pub fn id(&self) -> usize {
        self.inner.borrow().window_id
    }

    /// Inner size in physical pixels, as of the last processed resize.
    pub fn size(&self) -> Point2 {
        self.inner.borrow().size
    }

    pub fn title(&self) -> String {
        self.inner.borrow().title.clone()
    }

    /// True once the window has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().window_pointer.is_none()
    }
}

pub struct WindowBuilder<'a> {
    runner: &'a mut Runner,
    title: String,
    size: Point2,
    pos: WindowPosition,
    resizable: bool,
}

impl<'a> WindowBuilder<'a> {
    pub(crate) fn new(runner: &'a mut Runner, title: &str, size: Point2) -> Self {
        WindowBuilder {
            runner,
            title: title.to_string(),
            size,
            pos: WindowPosition::Default,
            resizable: false,
        }
    }

    pub fn pos(mut self, pos: WindowPosition) -> Self {
        self.pos = pos;
        self
    }

    /// Windows are fixed-size unless this is set.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn build(self) -> Result<Window, WindowError> {
        if self.size.is_empty() {
            return Err(WindowError::InvalidSize(self.size.x, self.size.y));
        }

        Window::new(self.runner, self.title, self.size, self.pos, self.resizable)
    }
}

pub(crate) struct WindowInner {
    pub window_id: usize,
    pub window_events: SharedRef<Vec<event::WindowEvent>>,
    pub window_pointer: Option<Arc<winit::window::Window>>,
    pub size: Point2,
    pub title: String,

    pub(crate) pixelbuffer: Option<SharedRef<PixelBufferInner>>,
}

impl WindowInner {
    pub fn process_event(&mut self, event: &event::WindowEvent) {
        match event {
            event::WindowEvent::CloseRequested => {
                self.pixelbuffer = None;
                self.window_pointer = None;
            }
            event::WindowEvent::Resized(size) => {
                if let Some(pixelbuffer) = &self.pixelbuffer {
                    if let Err(e) = pixelbuffer.borrow_mut().resize(*size) {
                        crate::warn_log!("Window {}: {}", self.window_id, e);
                    }
                }

                self.size = Point2::from(*size);
            }
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error(transparent)]
    RunnerError(#[from] RunnerError),
    #[error("window was created but is not tracked by the runner")]
    WindowNotFound,
    #[error("invalid window size: {0}x{1}")]
    InvalidSize(i32, i32),
}
