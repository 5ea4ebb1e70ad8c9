//! Per-target hotkey capture state machine.
//!
//! A bare modifier press is ambiguous: it may be the start of a combo or the
//! first half of a double-tap. Only a second press of the *same* modifier
//! inside the double-tap window finalizes on a modifier. Combos are read from
//! the held-modifier flags of the terminating non-modifier key event, so
//! modifier tracking never accumulates.

use crate::{
    HotkeyDescriptor,
    descriptor::{normalize_key_name, ordered_modifiers},
    keys::{ModifierKey, NormalizedKeyEvent},
    session::{SessionState, Transition},
};

use std::time::{Duration, Instant};

use tracing::{debug, warn};
use uuid::Uuid;

/// Maximum gap between two presses of one modifier for a double-tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(500);

/// In-progress capture for one target scope.
#[derive(Debug)]
pub struct RecordingSession {
    session_id: Uuid,
    target_id: String,
    state: SessionState,
    live_keys: Vec<String>,
    last_modifier: Option<ModifierKey>,
    last_modifier_at: Option<Instant>,
    finalized: Option<HotkeyDescriptor>,
    double_tap_window: Duration,
}

impl RecordingSession {
    /// Start recording for `target_id` with the default double-tap window.
    pub fn new(target_id: impl Into<String>) -> Self {
        Self::with_double_tap_window(target_id, DOUBLE_TAP_WINDOW)
    }

    /// Start recording for `target_id` with a custom double-tap window.
    pub fn with_double_tap_window(target_id: impl Into<String>, window: Duration) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            target_id: target_id.into(),
            state: SessionState::Recording,
            live_keys: Vec::new(),
            last_modifier: None,
            last_modifier_at: None,
            finalized: None,
            double_tap_window: window,
        }
    }

    /// Unique id for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Target scope this session records for.
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Keys pressed so far, for live feedback only.
    pub fn live_keys(&self) -> &[String] {
        &self.live_keys
    }

    /// Modifier currently tracked as a double-tap candidate.
    pub fn last_modifier(&self) -> Option<ModifierKey> {
        self.last_modifier
    }

    /// When [`last_modifier`](Self::last_modifier) was pressed.
    pub fn last_modifier_at(&self) -> Option<Instant> {
        self.last_modifier_at
    }

    /// The decided descriptor, once `Completing`.
    pub fn finalized(&self) -> Option<&HotkeyDescriptor> {
        self.finalized.as_ref()
    }

    /// Feed one normalized key-down event observed at `now`.
    pub fn handle_key_down(&mut self, event: &NormalizedKeyEvent, now: Instant) -> Transition {
        if event.is_repeat || self.state == SessionState::Completing || self.finalized.is_some() {
            debug!(
                session_id = %self.session_id,
                key = %event.raw_key,
                repeat = event.is_repeat,
                state = ?self.state,
                "Key event discarded"
            );
            return Transition::Discarded;
        }

        if event.is_escape() {
            self.cancel();
            return Transition::Cancelled;
        }

        match event.modifier {
            Some(modifier) => self.handle_modifier(modifier, now),
            None => self.handle_regular_key(event),
        }
    }

    /// Clear all capture state. The owner drops the session afterwards.
    pub fn cancel(&mut self) {
        self.live_keys.clear();
        self.last_modifier = None;
        self.last_modifier_at = None;

        debug!(
            session_id = %self.session_id,
            target_id = %self.target_id,
            "Recording session cancelled"
        );
    }

    fn handle_modifier(&mut self, modifier: ModifierKey, now: Instant) -> Transition {
        let elapsed = self
            .last_modifier_at
            .map(|at| now.saturating_duration_since(at));

        if let (Some(last), Some(elapsed)) = (self.last_modifier, elapsed)
            && last == modifier
            && elapsed < self.double_tap_window
        {
            debug!(
                session_id = %self.session_id,
                modifier = %modifier,
                elapsed_ms = elapsed.as_millis(),
                "Double-tap detected"
            );
            return self.finalize(HotkeyDescriptor::double_tap(modifier));
        }

        self.last_modifier = Some(modifier);
        self.last_modifier_at = Some(now);
        self.live_keys.push(modifier.name().to_string());

        debug!(
            session_id = %self.session_id,
            modifier = %modifier,
            elapsed_ms = elapsed.map(|e| e.as_millis()),
            "Tracking modifier for double-tap"
        );

        self.pending()
    }

    fn handle_regular_key(&mut self, event: &NormalizedKeyEvent) -> Transition {
        self.last_modifier = None;
        self.last_modifier_at = None;

        let modifiers = ordered_modifiers(event.flags);
        let key = normalize_key_name(&event.raw_key);

        if modifiers.is_empty() {
            debug!(
                session_id = %self.session_id,
                key = %key,
                "Key without modifiers cannot form a hotkey"
            );
            self.live_keys = vec![key];
            return self.pending();
        }

        match HotkeyDescriptor::combo(modifiers, &key) {
            Ok(descriptor) => self.finalize(descriptor),
            Err(e) => {
                warn!(
                    session_id = %self.session_id,
                    key = %key,
                    error = %e,
                    "Key cannot terminate a hotkey"
                );
                self.pending()
            }
        }
    }

    fn finalize(&mut self, descriptor: HotkeyDescriptor) -> Transition {
        self.state = SessionState::Completing;
        self.last_modifier = None;
        self.last_modifier_at = None;
        self.finalized = Some(descriptor.clone());

        debug!(
            session_id = %self.session_id,
            target_id = %self.target_id,
            descriptor = %descriptor,
            "Hotkey finalized"
        );

        Transition::Finalized(descriptor)
    }

    fn pending(&self) -> Transition {
        Transition::Pending {
            live_keys: self.live_keys.clone(),
        }
    }
}
