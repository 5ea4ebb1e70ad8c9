//! Ownership of the single active recording session.
//!
//! The coordinator holds at most one [`RecordingSession`] together with the
//! listener registration feeding it. Starting a new recording cancels the
//! previous one and detaches its listeners before attaching new ones, and
//! every exit path (finalize, Escape, explicit cancel, close, drop) detaches.

use crate::{
    CaptureError, CoreResult, HotkeyDescriptor,
    clock::{Clock, SystemClock},
    coordinator::RecorderFeedback,
    keys::{KeyEventNormalizer, RawKeyEvent},
    persistence::PersistenceGateway,
    session::{DOUBLE_TAP_WINDOW, RecordingSession, Transition},
    stream::{KeyDisposition, KeyEventStream, ListenerHandle},
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

struct ActiveSession {
    session: RecordingSession,
    listener: ListenerHandle,
}

/// Owns at most one recording session for a recording context.
///
/// Share one coordinator between every control that records into the same
/// registry to keep recordings mutually exclusive across those controls.
pub struct SessionCoordinator<S, G, C = SystemClock>
where
    S: KeyEventStream,
    G: PersistenceGateway,
    C: Clock,
{
    stream: S,
    gateway: G,
    clock: C,
    double_tap_window: Duration,
    active: Option<ActiveSession>,
    feedback_tx: watch::Sender<RecorderFeedback>,
}

impl<S, G> SessionCoordinator<S, G, SystemClock>
where
    S: KeyEventStream,
    G: PersistenceGateway,
{
    /// Coordinator using the wall clock.
    pub fn new(stream: S, gateway: G) -> Self {
        Self::with_clock(stream, gateway, SystemClock)
    }
}

impl<S, G, C> SessionCoordinator<S, G, C>
where
    S: KeyEventStream,
    G: PersistenceGateway,
    C: Clock,
{
    /// Coordinator using an injected clock.
    pub fn with_clock(stream: S, gateway: G, clock: C) -> Self {
        let (feedback_tx, _) = watch::channel(RecorderFeedback::Idle);

        Self {
            stream,
            gateway,
            clock,
            double_tap_window: DOUBLE_TAP_WINDOW,
            active: None,
            feedback_tx,
        }
    }

    /// Override the double-tap window for sessions started from now on.
    pub fn with_double_tap_window(mut self, window: Duration) -> Self {
        self.double_tap_window = window;
        self
    }

    /// Subscribe to live recording feedback.
    pub fn subscribe(&self) -> watch::Receiver<RecorderFeedback> {
        self.feedback_tx.subscribe()
    }

    /// Whether a session is attached to the event stream.
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// The active session, if any.
    pub fn active_session(&self) -> Option<&RecordingSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Target scope of the active session, if any.
    pub fn active_target(&self) -> Option<&str> {
        self.active_session().map(RecordingSession::target_id)
    }

    /// The persistence gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The keyboard event stream.
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Mutable access to the keyboard event stream.
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Begin recording a hotkey for `target_id`.
    ///
    /// An active session is cancelled first; its listeners are detached
    /// before the new session's listeners are attached.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::EmptyTarget`] for a blank target, or the
    /// stream's error if listeners cannot be attached. No session is active
    /// after an error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_recording(&mut self, target_id: &str) -> CoreResult<()> {
        if target_id.trim().is_empty() {
            return Err(CaptureError::EmptyTarget {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(previous) = self.active_target() {
            info!(previous_target = %previous, "Replacing active recording session");
            self.cancel_recording();
        }

        let listener = self.stream.attach()?;
        let session = RecordingSession::with_double_tap_window(target_id, self.double_tap_window);

        info!(
            session_id = %session.session_id(),
            target_id = %target_id,
            listener = listener.id(),
            "Recording started"
        );

        self.feedback_tx.send_replace(RecorderFeedback::Recording {
            target_id: target_id.to_string(),
            live_keys: Vec::new(),
        });
        self.active = Some(ActiveSession { session, listener });

        Ok(())
    }

    /// Cancel the active session without persisting anything.
    ///
    /// A no-op when nothing is recording.
    #[instrument(skip(self))]
    pub fn cancel_recording(&mut self) {
        let Some(mut active) = self.active.take() else {
            debug!("No active recording to cancel");
            return;
        };

        active.session.cancel();
        let target_id = active.session.target_id().to_string();
        info!(
            session_id = %active.session.session_id(),
            target_id = %target_id,
            "Recording cancelled"
        );
        self.teardown(active, RecorderFeedback::Cancelled { target_id });
    }

    /// Cancel any active session because the owning UI context is closing.
    pub fn close(&mut self) {
        self.cancel_recording();
    }

    /// Remove the hotkey bound to `target_id`.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's failure.
    #[instrument(skip(self))]
    pub fn clear_binding(&mut self, target_id: &str) -> CoreResult<()> {
        self.gateway.save(target_id, None)?;
        info!(target_id = %target_id, "Hotkey binding cleared");
        Ok(())
    }

    /// Route a key-down event to the active session.
    ///
    /// Returns [`KeyDisposition::PassThrough`] when nothing is recording.
    /// Every event seen during a recording is consumed, repeats and Escape
    /// included.
    ///
    /// # Errors
    ///
    /// When a hotkey was finalized but the gateway failed to store it. The
    /// event was still consumed and the session has already ended.
    pub fn handle_key_down(&mut self, raw: &RawKeyEvent) -> CoreResult<KeyDisposition> {
        let now = self.clock.now();
        let Some(active) = self.active.as_mut() else {
            return Ok(KeyDisposition::PassThrough);
        };

        let event = KeyEventNormalizer::normalize(raw);
        let transition = active.session.handle_key_down(&event, now);

        match transition {
            Transition::Discarded => {}
            Transition::Pending { live_keys } => {
                self.feedback_tx.send_replace(RecorderFeedback::Recording {
                    target_id: active.session.target_id().to_string(),
                    live_keys,
                });
            }
            Transition::Cancelled => {
                if let Some(active) = self.active.take() {
                    let target_id = active.session.target_id().to_string();
                    info!(
                        session_id = %active.session.session_id(),
                        target_id = %target_id,
                        "Recording cancelled"
                    );
                    self.teardown(active, RecorderFeedback::Cancelled { target_id });
                }
            }
            Transition::Finalized(descriptor) => {
                if let Some(active) = self.active.take() {
                    self.complete(active, descriptor)?;
                }
            }
        }

        Ok(KeyDisposition::Consumed)
    }

    /// Route a key-up event. No transition depends on key-up; it is only
    /// consumed while recording.
    pub fn handle_key_up(&mut self, raw: &RawKeyEvent) -> KeyDisposition {
        if self.active.is_none() {
            return KeyDisposition::PassThrough;
        }

        debug!(key = %raw.key, "Key up consumed");
        KeyDisposition::Consumed
    }

    fn complete(&mut self, active: ActiveSession, descriptor: HotkeyDescriptor) -> CoreResult<()> {
        let target_id = active.session.target_id().to_string();
        let session_id = active.session.session_id();

        let saved = self.gateway.save(&target_id, Some(&descriptor));

        match saved {
            Ok(()) => {
                info!(
                    session_id = %session_id,
                    target_id = %target_id,
                    descriptor = %descriptor,
                    "Hotkey recorded"
                );
                self.teardown(
                    active,
                    RecorderFeedback::Saved {
                        target_id,
                        descriptor,
                    },
                );
                Ok(())
            }
            Err(e) => {
                // The session is torn down regardless; the store and the
                // user's expectation may now disagree.
                error!(
                    session_id = %session_id,
                    target_id = %target_id,
                    descriptor = %descriptor,
                    error = %e,
                    "Failed to persist recorded hotkey"
                );
                self.teardown(
                    active,
                    RecorderFeedback::SaveFailed {
                        target_id,
                        descriptor,
                        reason: e.to_string(),
                    },
                );
                Err(e)
            }
        }
    }

    fn teardown(&mut self, active: ActiveSession, outcome: RecorderFeedback) {
        self.stream.detach(active.listener);
        debug!(
            session_id = %active.session.session_id(),
            listener = active.listener.id(),
            "Key listeners detached"
        );
        self.feedback_tx.send_replace(outcome);
    }
}

impl<S, G, C> Drop for SessionCoordinator<S, G, C>
where
    S: KeyEventStream,
    G: PersistenceGateway,
    C: Clock,
{
    fn drop(&mut self) {
        self.cancel_recording();
    }
}
