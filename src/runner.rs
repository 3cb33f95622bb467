//! Event loop wrapper.
//!
//! [`Runner`] owns the winit event loop and pumps it on demand instead of
//! handing control over to winit, so the application keeps a plain
//! `while runner.pool_events(..) { .. }` loop.

use std::{
    sync::{Arc, Mutex, PoisonError},
    thread::ThreadId,
    time::Duration,
};

use fxhash::FxHashMap;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{self, ElementState},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::Key,
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window as WinitWindow, WindowAttributes, WindowId},
};

use crate::{
    math::{Point2, Timing},
    utils::SharedRef,
    window::{WindowBuilder, WindowInner, WindowPosition},
};

mod runner_enums;

pub use runner_enums::{Event, PollMode, RunnerError};
pub(crate) use runner_enums::{WindowCommand, named_key_to_str};

#[cfg(target_os = "windows")]
use winit::platform::windows::EventLoopBuilderExtWindows;

#[cfg(all(not(feature = "x11"), target_os = "linux"))]
use winit::platform::wayland::EventLoopBuilderExtWayland;

#[cfg(all(feature = "x11", target_os = "linux"))]
use winit::platform::x11::EventLoopBuilderExtX11;

const MAX_WINDOWS: usize = 1000;

// winit allows a single event loop per process. The first thread to build one
// owns it; any other thread asking for a runner is refused up front instead of
// tripping winit's own panic.
lazy_static::lazy_static! {
    static ref LOOP_THREAD_ID: Mutex<Option<ThreadId>> = Mutex::new(None);
}

pub struct Runner {
    pub(crate) app_runner: RunnerInner,
    pub(crate) event_loop: EventLoop<WindowCommand>,
    pub(crate) window_events_attributes: Vec<SharedRef<WindowInner>>,
    pub(crate) rate_timing: Timing,
    pub(crate) pending_events: Vec<Event>,
    exited: bool,
}

impl Runner {
    pub(crate) fn new() -> Result<Self, RunnerError> {
        let thread_id = std::thread::current().id();

        let claimed = {
            let mut owner = LOOP_THREAD_ID.lock().unwrap_or_else(PoisonError::into_inner);

            match *owner {
                Some(owner_id) if owner_id != thread_id => {
                    return Err(RunnerError::ThreadMismatch);
                }
                Some(_) => false,
                None => {
                    *owner = Some(thread_id);
                    true
                }
            }
        };

        // Hand the thread claim back if the event loop never comes up.
        let release = scopeguard::guard(claimed, |claimed| {
            if claimed {
                *LOOP_THREAD_ID.lock().unwrap_or_else(PoisonError::into_inner) = None;
            }
        });

        let event_loop = std::panic::catch_unwind(|| {
            let mut builder = EventLoop::<WindowCommand>::with_user_event();

            #[cfg(any(target_os = "windows", target_os = "linux"))]
            {
                builder.with_any_thread(true);
            }

            builder.build()
        })
        .map_err(|_| RunnerError::WinitEventLoopPanic)?
        .map_err(|e| RunnerError::WinitEventLoopFailed(e.to_string()))?;

        scopeguard::ScopeGuard::into_inner(release);

        crate::dbg_log!("Event loop created on {:?}", thread_id);

        Ok(Self {
            app_runner: RunnerInner::new(),
            event_loop,
            window_events_attributes: Vec::new(),
            rate_timing: Timing::new(0),
            pending_events: Vec::new(),
            exited: false,
        })
    }

    /// Events collected by the last [`Runner::pool_events`] call.
    pub fn events(&self) -> &[Event] {
        &self.pending_events
    }

    /// Start building a window.
    pub fn create_window(&mut self, title: &str, size: Point2) -> WindowBuilder<'_> {
        WindowBuilder::new(self, title, size)
    }

    /// Asks the event loop to create a window and pumps it once so the
    /// window exists when this returns.
    pub(crate) fn internal_new_window(
        &mut self,
        title: String,
        size: Point2,
        pos: WindowPosition,
        resizable: bool,
    ) -> Result<usize, RunnerError> {
        if self.exited {
            return Err(RunnerError::FailedToCreateWindow(
                "event loop has exited".to_string(),
            ));
        }

        let window_id = self.app_runner.reserve_ref_id()?;

        self.event_loop
            .create_proxy()
            .send_event(WindowCommand::Create {
                ref_id: window_id,
                title,
                size,
                pos,
                resizable,
            })
            .map_err(|_| RunnerError::FailedToCreateWindow("event loop is closed".to_string()))?;

        self.app_runner.last_error = None;
        self.event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app_runner);

        if self.app_runner.get_window_handle_by_ref(window_id).is_none() {
            let err = self
                .app_runner
                .last_error
                .take()
                .unwrap_or_else(|| "window was not created".to_string());

            return Err(RunnerError::FailedToCreateWindow(err));
        }

        Ok(window_id)
    }

    /// Pump the event loop and collect events.
    ///
    /// - [`PollMode::Poll`] handles whatever is pending and returns at once.
    /// - [`PollMode::Wait`] blocks until at least one event arrives.
    ///
    /// Passing `None` is the same as [`PollMode::Poll`]. The collected events
    /// are available from [`Runner::events`] until the next call.
    ///
    /// Returns `false` once the event loop has exited, which happens when the
    /// last window closes.
    pub fn pool_events<T>(&mut self, mode: T) -> bool
    where
        T: Into<Option<PollMode>>,
    {
        self.pending_events.clear();

        if self.exited {
            return false;
        }

        let timeout = mode.into().unwrap_or_default().timeout();

        let status = self.event_loop.pump_app_events(timeout, &mut self.app_runner);

        self.collect_window_events();

        if let PumpStatus::Exit(_code) = status {
            crate::dbg_log!("Event loop exited with code: {}", _code);
            self.exited = true;
            return false;
        }

        self.rate_timing.sleep();

        true
    }

    fn collect_window_events(&mut self) {
        for window in self.window_events_attributes.iter() {
            let Some(mut window) = window.try_borrow_mut() else {
                continue;
            };

            let events = std::mem::take(&mut *window.window_events.borrow_mut());
            let window_id = window.window_id;

            for event in events.iter() {
                window.process_event(event);

                if let Some(event) = translate_event(window_id, event) {
                    self.pending_events.push(event);
                }
            }
        }
    }

    /// Cap the loop at `fps` iterations per second. 0 (the default) leaves it
    /// unthrottled, so only the presentation backend paces frames.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.rate_timing.set_fps(fps);
    }

    pub(crate) fn get_events_pointer(
        &self,
        window_id: usize,
    ) -> Option<SharedRef<Vec<event::WindowEvent>>> {
        self.app_runner.get_window_events_by_ref(window_id)
    }

    pub(crate) fn get_window_pointer(&self, window_id: usize) -> Option<Arc<WinitWindow>> {
        self.app_runner.get_window_handle_by_ref(window_id)
    }
}

/// Map a raw winit event to a crate [`Event`]; `None` for events the crate
/// does not surface.
pub(crate) fn translate_event(window_id: usize, event: &event::WindowEvent) -> Option<Event> {
    match event {
        event::WindowEvent::CloseRequested => Some(Event::WindowClosed { window_id }),
        event::WindowEvent::Resized(size) => Some(Event::WindowResized {
            window_id,
            size: Point2::from(*size),
        }),
        event::WindowEvent::Focused(focused) => Some(Event::WindowFocused {
            window_id,
            focused: *focused,
        }),
        event::WindowEvent::RedrawRequested => Some(Event::RedrawRequested { window_id }),
        event::WindowEvent::KeyboardInput {
            event,
            is_synthetic,
            ..
        } => {
            if *is_synthetic {
                return None;
            }

            let key = match &event.logical_key {
                Key::Character(text) => text.clone(),
                Key::Named(named) => named_key_to_str(named)?,
                _ => return None,
            };

            Some(Event::KeyboardInput {
                window_id,
                key,
                pressed: event.state == ElementState::Pressed,
            })
        }
        _ => None,
    }
}

/// Top-left position that centres a window of `window_size` on a monitor.
pub(crate) fn centered_position(monitor_pos: Point2, monitor_size: Point2, window_size: Point2) -> Point2 {
    Point2 {
        x: monitor_pos.x + (monitor_size.x - window_size.x) / 2,
        y: monitor_pos.y + (monitor_size.y - window_size.y) / 2,
    }
}

pub(crate) struct WindowHandle {
    pub window: Arc<WinitWindow>,
    pub events: SharedRef<Vec<event::WindowEvent>>,

    pub ref_id: usize,
}

impl Drop for WindowHandle {
    fn drop(&mut self) {
        crate::dbg_log!("WindowHandle dropped: {}", self.ref_id);
    }
}

/// Attributes for a new window; its position is resolved separately since
/// that needs the active event loop.
pub(crate) fn window_attributes(title: String, size: PhysicalSize<u32>, resizable: bool) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(title)
        .with_visible(true)
        .with_inner_size(size)
        .with_resizable(resizable)
}

pub(crate) struct RunnerInner {
    pub handles: FxHashMap<WindowId, WindowHandle>,
    pub last_error: Option<String>,
    next_ref_id: usize,
}

impl RunnerInner {
    pub fn new() -> Self {
        Self {
            handles: FxHashMap::default(),
            last_error: None,
            next_ref_id: 0,
        }
    }

    /// Id for the next window. Only windows still open count toward
    /// [`MAX_WINDOWS`].
    pub fn reserve_ref_id(&mut self) -> Result<usize, RunnerError> {
        if self.handles.len() >= MAX_WINDOWS {
            return Err(RunnerError::MaximumWindowReached);
        }

        let ref_id = self.next_ref_id;
        self.next_ref_id += 1;

        Ok(ref_id)
    }

    fn find_by_ref(&self, ref_id: usize) -> Option<(&WindowId, &WindowHandle)> {
        self.handles.iter().find(|(_, handle)| handle.ref_id == ref_id)
    }

    pub fn get_window_handle_by_ref(&self, ref_id: usize) -> Option<Arc<WinitWindow>> {
        self.find_by_ref(ref_id)
            .map(|(_, handle)| handle.window.clone())
    }

    pub fn get_window_events_by_ref(
        &self,
        ref_id: usize,
    ) -> Option<SharedRef<Vec<event::WindowEvent>>> {
        self.find_by_ref(ref_id)
            .map(|(_, handle)| handle.events.clone())
    }

    fn resolve_position(
        event_loop: &ActiveEventLoop,
        pos: WindowPosition,
        size: PhysicalSize<u32>,
    ) -> Option<PhysicalPosition<i32>> {
        match pos {
            WindowPosition::Default => None,
            WindowPosition::Centered => {
                // Wayland reports no primary monitor, and does not let
                // clients place windows anyway.
                let monitor = event_loop
                    .primary_monitor()
                    .or_else(|| event_loop.available_monitors().next())?;

                let pos = centered_position(
                    monitor.position().into(),
                    monitor.size().into(),
                    size.into(),
                );

                Some(pos.into())
            }
        }
    }

    fn remove_window(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        if let Some(handle) = self.handles.remove(&window_id) {
            crate::dbg_log!("Window {} closed", handle.ref_id);
        }

        if self.handles.is_empty() {
            crate::dbg_log!("All windows closed, exiting event loop");
            event_loop.exit();
        }
    }
}

impl ApplicationHandler<WindowCommand> for RunnerInner {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: event::WindowEvent,
    ) {
        let Some(handle) = self.handles.get(&window_id) else {
            return;
        };

        let close = matches!(event, event::WindowEvent::CloseRequested);
        handle.events.borrow_mut().push(event);

        if close {
            self.remove_window(event_loop, window_id);
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: WindowCommand) {
        match event {
            WindowCommand::Create {
                ref_id,
                title,
                size,
                pos,
                resizable,
            } => {
                let size: PhysicalSize<u32> = size.into();
                let mut attributes = window_attributes(title, size, resizable);

                if let Some(pos) = Self::resolve_position(event_loop, pos, size) {
                    attributes = attributes.with_position(pos);
                }

                match event_loop.create_window(attributes) {
                    Ok(window) => {
                        let handle = WindowHandle {
                            window: Arc::new(window),
                            events: SharedRef::new(Vec::new()),
                            ref_id,
                        };

                        crate::dbg_log!("Window {} created", ref_id);
                        self.handles.insert(handle.window.id(), handle);
                    }
                    Err(e) => {
                        crate::error_log!("Failed to create window: {}", e);
                        self.last_error = Some(e.to_string());
                    }
                }
            }
        }
    }
}
