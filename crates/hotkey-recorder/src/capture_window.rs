//! Native capture window used as the recorder's keyboard event stream.
//!
//! While attached the window is shown and focused so it receives every key
//! event before any other application. Events are translated from tao's
//! keyboard model into the core's [`RawKeyEvent`].

use crate::{AppError, AppResult};

use hotkey_recorder_core::{
    CoreResult, KeyEventStream, ListenerHandle, ModifierFlags, RawKeyEvent, RecorderFeedback,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    dpi::LogicalSize,
    event::KeyEvent,
    event_loop::EventLoop,
    keyboard::{Key, ModifiersState},
    window::{Window, WindowBuilder},
};
use tracing::{debug, instrument};

const WINDOW_TITLE: &str = "Press a hotkey (Esc to cancel)";

/// Hidden-until-attached window that captures key events for recording.
pub struct CaptureWindow {
    window: Window,
    next_id: u64,
    attached: Option<ListenerHandle>,
}

impl CaptureWindow {
    /// Create the (hidden) capture window on `event_loop`.
    #[track_caller]
    #[instrument(skip(event_loop))]
    pub fn new<T: 'static>(event_loop: &EventLoop<T>) -> AppResult<Self> {
        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(480.0, 96.0))
            .with_resizable(false)
            .with_always_on_top(true)
            .with_visible(false)
            .build(event_loop)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create capture window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            window,
            next_id: 0,
            attached: None,
        })
    }

    /// Whether key events should currently be routed to the recorder.
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Reflect live recording feedback in the window title.
    pub fn show_feedback(&self, feedback: &RecorderFeedback) {
        let title = match feedback {
            RecorderFeedback::Recording { target_id, live_keys } if live_keys.is_empty() => {
                format!("{} - {}", target_id, WINDOW_TITLE)
            }
            RecorderFeedback::Recording { target_id, live_keys } => {
                format!("{} - {}", target_id, live_keys.join(" "))
            }
            RecorderFeedback::Saved {
                target_id,
                descriptor,
            } => format!("{} - saved {}", target_id, descriptor),
            RecorderFeedback::SaveFailed { target_id, .. } => {
                format!("{} - could not save hotkey", target_id)
            }
            RecorderFeedback::Cancelled { .. } | RecorderFeedback::Idle => {
                WINDOW_TITLE.to_string()
            }
        };
        self.window.set_title(&title);
    }
}

impl KeyEventStream for CaptureWindow {
    fn attach(&mut self) -> CoreResult<ListenerHandle> {
        self.next_id += 1;
        let handle = ListenerHandle::new(self.next_id);

        self.window.set_visible(true);
        self.window.set_focus();
        self.attached = Some(handle);

        debug!(listener = handle.id(), "Capture window attached");
        Ok(handle)
    }

    fn detach(&mut self, handle: ListenerHandle) {
        if self.attached != Some(handle) {
            debug!(listener = handle.id(), "Ignoring detach of stale listener");
            return;
        }

        self.attached = None;
        self.window.set_visible(false);
        debug!(listener = handle.id(), "Capture window detached");
    }
}

/// Translate a tao key event. Returns None for keys with no usable name
/// (dead keys, unidentified native codes).
pub fn raw_key_event(event: &KeyEvent, modifiers: ModifiersState) -> Option<RawKeyEvent> {
    let key = key_name(&event.logical_key)?;
    let raw = RawKeyEvent::new(key, modifier_flags(modifiers));

    Some(if event.repeat { raw.repeated() } else { raw })
}

/// Host key name in the vocabulary the core normalizer understands.
pub fn key_name(key: &Key<'_>) -> Option<String> {
    let name = match key {
        Key::Character(text) => return Some(text.to_string()),
        Key::Unidentified(_) | Key::Dead(_) => return None,
        Key::Space => " ",
        Key::Control => "Control",
        Key::Alt | Key::AltGraph => "Alt",
        Key::Shift => "Shift",
        Key::Super => "Meta",
        Key::Escape => "Escape",
        other => return Some(format!("{:?}", other)),
    };
    Some(name.to_string())
}

/// Held-modifier flags from tao's modifier state.
pub fn modifier_flags(state: ModifiersState) -> ModifierFlags {
    ModifierFlags {
        ctrl: state.control_key(),
        alt: state.alt_key(),
        shift: state.shift_key(),
        meta: state.super_key(),
    }
}
