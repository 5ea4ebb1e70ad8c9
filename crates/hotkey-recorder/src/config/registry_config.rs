use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hotkey registry file location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry file (None = `hotkeys.toml` in the data directory).
    #[serde(default)]
    pub path: Option<PathBuf>,
}
