//! TOML-file-backed hotkey registry.
//!
//! The file is a table keyed by target scope identifier:
//!
//! ```toml
//! ["/Applications/Terminal.app"]
//! modifiers = ["Ctrl", "Alt"]
//! key = "T"
//! ```

use crate::{AppError, AppResult};

use hotkey_recorder_core::{
    CaptureError, CoreResult, HotkeyDescriptor, HotkeyRegistry, PersistenceGateway,
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Hotkey registry persisted to a TOML file on every change.
#[derive(Debug)]
pub struct FileRegistry {
    path: PathBuf,
    registry: HotkeyRegistry,
}

impl FileRegistry {
    /// Open the registry at `path`. A missing file is an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RegistryError`] if the file cannot be read,
    /// parsed, or contains an invalid descriptor.
    #[track_caller]
    #[instrument]
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(registry_path = ?path, "No registry file, starting empty");
            return Ok(Self {
                path: path.to_path_buf(),
                registry: HotkeyRegistry::new(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| AppError::RegistryError {
            reason: format!("Failed to read registry: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let registry: HotkeyRegistry =
            toml::from_str(&contents).map_err(|e| AppError::RegistryError {
                reason: format!("Failed to parse registry: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        registry.validate().map_err(|e| AppError::RegistryError {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(registry_path = ?path, bindings = registry.len(), "Registry loaded");

        Ok(Self {
            path: path.to_path_buf(),
            registry,
        })
    }

    /// The bindings currently stored.
    pub fn registry(&self) -> &HotkeyRegistry {
        &self.registry
    }

    /// Location of the registry file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `registry` to disk with a temp-file + rename.
    fn write(&self, registry: &HotkeyRegistry) -> std::io::Result<()> {
        let contents = toml::to_string_pretty(registry).map_err(std::io::Error::other)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("toml.tmp");
        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl PersistenceGateway for FileRegistry {
    /// Apply the change to a copy, write the copy, then adopt it, so the
    /// in-memory bindings never run ahead of the file.
    #[track_caller]
    fn save(&mut self, target_id: &str, descriptor: Option<&HotkeyDescriptor>) -> CoreResult<()> {
        let mut updated = self.registry.clone();
        updated.save(target_id, descriptor)?;

        self.write(&updated)
            .map_err(|e| CaptureError::PersistenceFailed {
                target_id: target_id.to_string(),
                reason: format!("Failed to write {:?}: {}", self.path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.registry = updated;
        info!(
            target_id = %target_id,
            registry_path = ?self.path,
            "Registry saved (atomic write)"
        );

        Ok(())
    }
}
