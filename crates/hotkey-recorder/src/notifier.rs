use hotkey_recorder_core::HotkeyDescriptor;

use notify_rust::Notification;
use tracing::{instrument, warn};

/// Desktop notifications for outcomes the user would otherwise miss.
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    /// Create a notifier; a disabled one only logs.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Tell the user a recorded hotkey was not stored.
    #[instrument(skip(self))]
    pub fn save_failed(&self, target_id: &str, descriptor: &HotkeyDescriptor, reason: &str) {
        if !self.enabled {
            return;
        }

        let shown = Notification::new()
            .summary("Hotkey not saved")
            .body(&format!(
                "{} for {} could not be saved: {}",
                descriptor, target_id, reason
            ))
            .show();

        if let Err(e) = shown {
            warn!(error = %e, "Failed to show notification");
        }
    }
}
