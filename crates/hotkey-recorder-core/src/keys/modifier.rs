use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four modifier keys a hotkey can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModifierKey {
    /// Control key.
    Ctrl,
    /// Alt / Option key.
    Alt,
    /// Shift key.
    Shift,
    /// Meta / Command / Super / Windows key.
    Meta,
}

impl ModifierKey {
    /// Fixed display and priority order used when building combos.
    pub const ORDER: [ModifierKey; 4] = [
        ModifierKey::Ctrl,
        ModifierKey::Alt,
        ModifierKey::Shift,
        ModifierKey::Meta,
    ];

    /// Canonical name, also used as the `key` of a double-tap descriptor.
    pub fn name(self) -> &'static str {
        match self {
            ModifierKey::Ctrl => "Ctrl",
            ModifierKey::Alt => "Alt",
            ModifierKey::Shift => "Shift",
            ModifierKey::Meta => "Meta",
        }
    }

    /// Map a host-reported key name to a modifier.
    ///
    /// Accepts the names browsers, tao/winit and the common desktop
    /// toolkits report for the left/right variants of each modifier.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "control" | "ctrl" | "controlleft" | "controlright" => Some(ModifierKey::Ctrl),
            "alt" | "option" | "opt" | "altleft" | "altright" => Some(ModifierKey::Alt),
            "shift" | "shiftleft" | "shiftright" => Some(ModifierKey::Shift),
            "meta" | "super" | "command" | "cmd" | "os" | "win" | "metaleft" | "metaright"
            | "superleft" | "superright" => Some(ModifierKey::Meta),
            _ => None,
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Modifier-held flags reported alongside a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierFlags {
    /// Control is held.
    pub ctrl: bool,
    /// Alt is held.
    pub alt: bool,
    /// Shift is held.
    pub shift: bool,
    /// Meta is held.
    pub meta: bool,
}

impl ModifierFlags {
    /// Whether the flag for `modifier` is set.
    pub fn is_held(&self, modifier: ModifierKey) -> bool {
        match modifier {
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Shift => self.shift,
            ModifierKey::Meta => self.meta,
        }
    }

    /// True when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.meta)
    }
}
