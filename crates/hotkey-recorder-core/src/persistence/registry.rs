use crate::{CaptureError, CoreResult, HotkeyDescriptor, persistence::PersistenceGateway};

use std::{collections::BTreeMap, panic::Location};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// In-memory `target scope → descriptor` map.
///
/// A target with no entry has no hotkey bound. Serializes as a plain table
/// keyed by target id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotkeyRegistry {
    bindings: BTreeMap<String, HotkeyDescriptor>,
}

impl HotkeyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor bound to `target_id`, if any.
    pub fn get(&self, target_id: &str) -> Option<&HotkeyDescriptor> {
        self.bindings.get(target_id)
    }

    /// All bindings in target order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HotkeyDescriptor)> {
        self.bindings.iter().map(|(t, d)| (t.as_str(), d))
    }

    /// Number of bound targets.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Another target already bound to `descriptor`.
    pub fn find_conflict(&self, descriptor: &HotkeyDescriptor, excluding: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(target, bound)| target.as_str() != excluding && *bound == descriptor)
            .map(|(target, _)| target.as_str())
    }

    /// Check every stored descriptor, e.g. after loading a hand-edited file.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        for (target, descriptor) in &self.bindings {
            descriptor
                .validate()
                .map_err(|e| CaptureError::InvalidDescriptor {
                    reason: format!("binding for '{}': {}", target, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }
        Ok(())
    }
}

impl PersistenceGateway for HotkeyRegistry {
    #[track_caller]
    fn save(&mut self, target_id: &str, descriptor: Option<&HotkeyDescriptor>) -> CoreResult<()> {
        match descriptor {
            Some(descriptor) => {
                descriptor
                    .validate()
                    .map_err(|e| CaptureError::PersistenceFailed {
                        target_id: target_id.to_string(),
                        reason: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

                if let Some(other) = self.find_conflict(descriptor, target_id) {
                    warn!(
                        target_id = %target_id,
                        other_target = %other,
                        descriptor = %descriptor,
                        "Hotkey already bound to another target"
                    );
                }

                self.bindings
                    .insert(target_id.to_string(), descriptor.clone());
                debug!(target_id = %target_id, descriptor = %descriptor, "Binding stored");
            }
            None => {
                if self.bindings.remove(target_id).is_some() {
                    debug!(target_id = %target_id, "Binding cleared");
                }
            }
        }
        Ok(())
    }
}
