use crate::config::default_double_tap_window_ms;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Recording behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Maximum gap between two presses of one modifier for a double-tap.
    #[serde(default = "default_double_tap_window_ms")]
    pub double_tap_window_ms: u64,
}

impl RecorderConfig {
    /// The double-tap window as a [`Duration`].
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: default_double_tap_window_ms(),
        }
    }
}
