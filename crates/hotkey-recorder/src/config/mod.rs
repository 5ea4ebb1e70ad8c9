mod notification_config;
mod recorder_config;
mod registry_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {
    config::Config, notification_config::NotificationConfig, recorder_config::RecorderConfig,
    registry_config::RegistryConfig,
};

pub(crate) const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 500;
pub(crate) const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;
pub(crate) const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 2000;
pub(crate) const DEFAULT_NOTIFICATIONS_ENABLED: bool = true;

pub(crate) fn default_double_tap_window_ms() -> u64 {
    DEFAULT_DOUBLE_TAP_WINDOW_MS
}

pub(crate) fn default_notifications_enabled() -> bool {
    DEFAULT_NOTIFICATIONS_ENABLED
}
