//! Hotkey Recorder Core Library
//!
//! Turns a live stream of raw key events into a canonical hotkey descriptor
//! and hands it to a persistence gateway. Two hotkey shapes are recognized:
//! modifier combos read from the held-modifier flags of a terminating key
//! (`Ctrl + Shift + K`), and double-taps of a single modifier inside a
//! 500 ms window (`Meta`, `Meta`).
//!
//! # Example
//!
//! ```
//! use hotkey_recorder_core::{
//!     CoreResult, HotkeyRegistry, KeyEventStream, ListenerHandle, ModifierFlags, RawKeyEvent,
//!     SessionCoordinator,
//! };
//!
//! struct WindowKeys;
//!
//! impl KeyEventStream for WindowKeys {
//!     fn attach(&mut self) -> CoreResult<ListenerHandle> {
//!         Ok(ListenerHandle::new(1))
//!     }
//!
//!     fn detach(&mut self, _handle: ListenerHandle) {}
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let mut registry = HotkeyRegistry::new();
//!     let mut coordinator = SessionCoordinator::new(WindowKeys, &mut registry);
//!
//!     coordinator.start_recording("/Applications/Terminal.app")?;
//!     let ctrl = ModifierFlags { ctrl: true, ..Default::default() };
//!     coordinator.handle_key_down(&RawKeyEvent::new("t", ctrl))?;
//!     drop(coordinator);
//!
//!     let bound = registry.get("/Applications/Terminal.app").map(ToString::to_string);
//!     assert_eq!(bound.as_deref(), Some("Ctrl + T"));
//!     Ok(())
//! }
//! ```

mod clock;
mod coordinator;
mod descriptor;
mod error;
mod keys;
mod persistence;
mod session;
mod stream;

pub use {
    clock::{Clock, ManualClock, SystemClock},
    coordinator::{RecorderFeedback, SessionCoordinator},
    descriptor::{
        DISPLAY_SEPARATOR, HotkeyDescriptor, SPACE_KEY, format_for_display, normalize_key_name,
        ordered_modifiers,
    },
    error::{CaptureError, Result as CoreResult},
    keys::{KeyEventNormalizer, ModifierFlags, ModifierKey, NormalizedKeyEvent, RawKeyEvent},
    persistence::{HotkeyRegistry, PersistenceGateway},
    session::{DOUBLE_TAP_WINDOW, RecordingSession, SessionState, Transition},
    stream::{KeyDisposition, KeyEventStream, ListenerHandle},
};

#[cfg(test)]
mod tests;
