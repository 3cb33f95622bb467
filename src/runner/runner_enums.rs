use std::time::Duration;

use smol_str::SmolStr;
use winit::keyboard::NamedKey;

use crate::{math::Point2, window::WindowPosition};

pub(crate) fn named_key_to_str(key: &NamedKey) -> Option<SmolStr> {
    let name = match key {
        NamedKey::Alt => "Alt",
        NamedKey::AltGraph => "AltGraph",
        NamedKey::CapsLock => "CapsLock",
        NamedKey::Control => "Control",
        NamedKey::Shift => "Shift",
        NamedKey::Meta => "Meta",
        NamedKey::Super => "Super",
        NamedKey::Enter => "Enter",
        NamedKey::Tab => "Tab",
        NamedKey::Space => "Space",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::End => "End",
        NamedKey::Home => "Home",
        NamedKey::PageDown => "PageDown",
        NamedKey::PageUp => "PageUp",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        NamedKey::Insert => "Insert",
        NamedKey::Escape => "Escape",
        NamedKey::Pause => "Pause",
        NamedKey::F1 => "F1",
        NamedKey::F2 => "F2",
        NamedKey::F3 => "F3",
        NamedKey::F4 => "F4",
        NamedKey::F5 => "F5",
        NamedKey::F6 => "F6",
        NamedKey::F7 => "F7",
        NamedKey::F8 => "F8",
        NamedKey::F9 => "F9",
        NamedKey::F10 => "F10",
        NamedKey::F11 => "F11",
        NamedKey::F12 => "F12",
        _ => return None,
    };

    Some(SmolStr::new(name))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PollMode {
    /// Process whatever is pending and return immediately.
    #[default]
    Poll,
    /// Block until at least one event arrives.
    Wait,
}

impl PollMode {
    /// Timeout handed to winit's `pump_app_events`; `None` blocks.
    pub(crate) fn timeout(self) -> Option<Duration> {
        match self {
            PollMode::Poll => Some(Duration::ZERO),
            PollMode::Wait => None,
        }
    }
}

/// Events collected by [`Runner::pool_events`](super::Runner::pool_events).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    WindowClosed {
        window_id: usize,
    },
    WindowResized {
        window_id: usize,
        size: Point2,
    },
    WindowFocused {
        window_id: usize,
        focused: bool,
    },
    RedrawRequested {
        window_id: usize,
    },
    /// A key went down (`pressed`) or up. `key` is the logical key: the
    /// typed character, or a name such as `"Escape"` or `"ArrowUp"`.
    KeyboardInput {
        window_id: usize,
        key: SmolStr,
        pressed: bool,
    },
}

impl Event {
    pub fn window_id(&self) -> usize {
        match self {
            Event::WindowClosed { window_id }
            | Event::WindowResized { window_id, .. }
            | Event::WindowFocused { window_id, .. }
            | Event::RedrawRequested { window_id }
            | Event::KeyboardInput { window_id, .. } => *window_id,
        }
    }

    pub fn is_key_release(&self) -> bool {
        matches!(self, Event::KeyboardInput { pressed: false, .. })
    }
}

/// Requests sent to the event loop through its proxy.
#[derive(Clone, Debug)]
pub(crate) enum WindowCommand {
    Create {
        ref_id: usize,
        title: String,
        size: Point2,
        pos: WindowPosition,
        resizable: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunnerError {
    #[error("the event loop belongs to another thread")]
    ThreadMismatch,
    #[error("winit panicked while creating the event loop")]
    WinitEventLoopPanic,
    #[error("failed to create the event loop: {0}")]
    WinitEventLoopFailed(String),
    #[error("maximum number of windows reached")]
    MaximumWindowReached,
    #[error("failed to create window: {0}")]
    FailedToCreateWindow(String),
}
