//! Global hotkey listener for stored bindings.
//!
//! Registers every combo binding from the registry with the OS and activates
//! the bound target when its hotkey fires. Uses async channels to forward
//! events off the blocking global-hotkey receiver.

use crate::{AppError, AppResult};

use hotkey_recorder_core::{HotkeyDescriptor, HotkeyRegistry, ModifierKey};

use std::{collections::HashMap, panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, error, info, instrument, warn};

const FORWARD_CHANNEL_CAPACITY: usize = 32;
const FORWARDER_STOP_TIMEOUT: Duration = Duration::from_secs(1);

/// Accelerator string understood by `global-hotkey` for a combo descriptor.
///
/// Returns None for double-tap descriptors, which the OS cannot register
/// as a global hotkey.
pub fn accelerator(descriptor: &HotkeyDescriptor) -> Option<String> {
    if descriptor.is_double_tap() {
        return None;
    }

    let parts: Vec<&str> = descriptor
        .modifiers
        .iter()
        .map(|m| match m {
            ModifierKey::Ctrl => "control",
            ModifierKey::Alt => "alt",
            ModifierKey::Shift => "shift",
            ModifierKey::Meta => "super",
        })
        .chain(std::iter::once(descriptor.key.as_str()))
        .collect();

    Some(parts.join("+"))
}

/// Combo bindings of `registry` as parsed global hotkeys, keyed by target.
///
/// Double-taps and accelerators `global-hotkey` does not understand are
/// skipped with a warning.
pub fn registrable(registry: &HotkeyRegistry) -> Vec<(String, HotKey)> {
    registry
        .iter()
        .filter_map(|(target_id, descriptor)| {
            let Some(accelerator) = accelerator(descriptor) else {
                warn!(
                    target_id = %target_id,
                    descriptor = %descriptor,
                    "Double-tap hotkeys cannot be registered globally, skipping"
                );
                return None;
            };

            match accelerator.parse::<HotKey>() {
                Ok(hotkey) => Some((target_id.to_string(), hotkey)),
                Err(e) => {
                    warn!(
                        target_id = %target_id,
                        accelerator = %accelerator,
                        error = %e,
                        "Hotkey not understood by the OS layer, skipping"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Move events off the blocking global-hotkey receiver onto a tokio channel.
///
/// The returned task ends once the channel's receiver is dropped and one
/// more event arrives.
fn forward_hotkey_events() -> (mpsc::Receiver<GlobalHotKeyEvent>, JoinHandle<()>) {
    let receiver = GlobalHotKeyEvent::receiver().clone();
    let (event_tx, event_rx) = mpsc::channel(FORWARD_CHANNEL_CAPACITY);

    let forwarder = tokio::task::spawn_blocking(move || {
        for event in receiver.iter() {
            if event_tx.blocking_send(event).is_err() {
                break;
            }
        }
    });

    (event_rx, forwarder)
}

/// Listens for registered global hotkeys and activates their targets.
pub struct HotkeyListener {
    bindings: HashMap<u32, String>,
}

impl HotkeyListener {
    /// Register every combo binding in `registry`.
    ///
    /// Must be called on a thread with a message pump (e.g. the main thread
    /// running a `tao` event loop) so that `WM_HOTKEY` messages are
    /// dispatched on Windows. The returned [`GlobalHotKeyManager`] must be
    /// kept alive on that thread for the hotkeys to remain registered.
    ///
    /// Bindings that cannot be registered are skipped with a warning. A
    /// registry with nothing registrable is not an error: the listener idles
    /// until shutdown.
    #[track_caller]
    #[instrument(skip(registry))]
    pub fn register_all(
        registry: &HotkeyRegistry,
    ) -> AppResult<(GlobalHotKeyManager, HashMap<u32, String>)> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut bindings = HashMap::new();

        for (target_id, hotkey) in registrable(registry) {
            if let Err(e) = manager.register(hotkey) {
                warn!(target_id = %target_id, error = %e, "Failed to register hotkey, skipping");
                continue;
            }

            info!(target_id = %target_id, hotkey = ?hotkey, "Global hotkey registered");
            bindings.insert(hotkey.id(), target_id);
        }

        if bindings.is_empty() {
            warn!(
                bindings = registry.len(),
                "No registrable hotkeys in the registry, nothing will be activated"
            );
        }

        Ok((manager, bindings))
    }

    /// Create a listener for hotkey ids returned by [`register_all`](Self::register_all).
    ///
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel.
    pub fn new(bindings: HashMap<u32, String>) -> Self {
        Self { bindings }
    }

    /// Run the listener event loop until a shutdown signal is received.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let (mut event_rx, forwarder) = forward_hotkey_events();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey listener shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => self.dispatch(&event),
            }
        }

        // Closing the receiver stops the forwarder on its next event.
        drop(event_rx);
        match tokio::time::timeout(FORWARDER_STOP_TIMEOUT, forwarder).await {
            Ok(Ok(())) => debug!("Hotkey forwarder stopped"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey forwarder panicked"),
            Err(_) => debug!("Hotkey forwarder still blocked in recv, leaving it to process exit"),
        }

        Ok(())
    }

    fn dispatch(&self, event: &GlobalHotKeyEvent) {
        if event.state != HotKeyState::Pressed {
            return;
        }

        match self.bindings.get(&event.id) {
            Some(target_id) => self.activate(target_id),
            None => debug!(hotkey_id = event.id, "Hotkey has no bound target"),
        }
    }

    fn activate(&self, target_id: &str) {
        info!(target_id = %target_id, "Hotkey triggered");

        if let Err(e) = open::that(target_id) {
            error!(target_id = %target_id, error = ?e, "Failed to activate target");
        }
    }
}
