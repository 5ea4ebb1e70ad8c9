//! Host keyboard event stream abstraction.
//!
//! The recorder does not depend on a UI runtime. A host (a native window,
//! an OS keyboard hook, a webview bridge) implements [`KeyEventStream`] to
//! start and stop routing capture-phase key events to the coordinator, and
//! honours the [`KeyDisposition`] returned for each event.

use crate::CoreResult;

/// One capture-phase registration covering key-down and key-up together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    /// Wrap a host-assigned registration id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Host-assigned registration id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A source of raw key events that can be captured ahead of other handlers.
pub trait KeyEventStream {
    /// Attach capture-phase key-down and key-up listeners.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::ListenerAttachFailed`](crate::CaptureError::ListenerAttachFailed)
    /// when the host cannot start routing events.
    fn attach(&mut self) -> CoreResult<ListenerHandle>;

    /// Detach both listeners of a registration returned by [`attach`](Self::attach).
    fn detach(&mut self, handle: ListenerHandle);
}

impl<S: KeyEventStream + ?Sized> KeyEventStream for &mut S {
    fn attach(&mut self) -> CoreResult<ListenerHandle> {
        (**self).attach()
    }

    fn detach(&mut self, handle: ListenerHandle) {
        (**self).detach(handle)
    }
}

/// What the host must do with an event it routed to the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The recorder owns the event: prevent its default behaviour and stop
    /// it from reaching any other handler, including Escape-to-close.
    Consumed,
    /// No recording is active; handle the event normally.
    PassThrough,
}
