use crate::{
    CaptureError, CoreResult,
    descriptor::{SPACE_KEY, format_for_display, normalize_key_name},
    keys::ModifierKey,
};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Canonical representation of one bound shortcut.
///
/// Always one of two shapes:
/// - combo: one or more modifiers plus a non-modifier key (`Ctrl + K`)
/// - double-tap: `[m, m]` with `key` equal to `m`'s name (`Meta` twice)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotkeyDescriptor {
    /// Modifiers in `Ctrl, Alt, Shift, Meta` order.
    pub modifiers: Vec<ModifierKey>,
    /// Normalized key name.
    pub key: String,
}

impl HotkeyDescriptor {
    /// Build a combo descriptor, normalizing the key name.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidDescriptor`] when no modifier is given
    /// or the key is blank or itself a modifier.
    #[track_caller]
    pub fn combo(modifiers: Vec<ModifierKey>, key: &str) -> CoreResult<Self> {
        let descriptor = Self {
            modifiers,
            key: normalize_key_name(key),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Build the double-tap descriptor for `modifier`.
    pub fn double_tap(modifier: ModifierKey) -> Self {
        Self {
            modifiers: vec![modifier, modifier],
            key: modifier.name().to_string(),
        }
    }

    /// The repeated modifier, if this is a double-tap descriptor.
    pub fn double_tap_modifier(&self) -> Option<ModifierKey> {
        match self.modifiers.as_slice() {
            [first, second] if first == second && self.key == first.name() => Some(*first),
            _ => None,
        }
    }

    /// Whether this is a double-tap descriptor.
    pub fn is_double_tap(&self) -> bool {
        self.double_tap_modifier().is_some()
    }

    /// Check the combo / double-tap shape invariants.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_double_tap() {
            return Ok(());
        }

        let reason = if self.modifiers.is_empty() {
            Some("a hotkey needs at least one modifier".to_string())
        } else if self.key.trim().is_empty() {
            Some("key must not be empty".to_string())
        } else if ModifierKey::from_key_name(&self.key).is_some() {
            Some(format!(
                "'{}' is a modifier; only a double-tap may end on a modifier",
                self.key
            ))
        } else if self.modifiers.windows(2).any(|pair| pair[0] >= pair[1]) {
            Some("modifiers must be unique and in Ctrl, Alt, Shift, Meta order".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CaptureError::InvalidDescriptor {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Parse the display form produced by [`format_for_display`].
    ///
    /// `"Ctrl + Shift + K"` (spacing around `+` optional) yields a combo;
    /// a lone modifier name such as `"Meta"` yields a double-tap. A trailing
    /// `+` is the key itself, so `"Shift + +"` reads back as Shift and `+`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::InvalidDescriptor`] for blank input, a missing
    /// key or modifier, or a name that is not a modifier where one is needed.
    #[track_caller]
    pub fn parse_display(text: &str) -> CoreResult<Self> {
        let text = text.trim();

        let (modifier_text, key) = match text.strip_suffix('+') {
            Some(rest) if rest.trim().is_empty() => (None, "+"),
            Some(rest) => match rest.trim_end().strip_suffix('+') {
                Some(modifier_text) => (Some(modifier_text), "+"),
                None => return Err(invalid(format!("'{}' has no key after '+'", text))),
            },
            None => match text.rsplit_once('+') {
                Some((modifier_text, key)) => (Some(modifier_text), key.trim()),
                None => (None, text),
            },
        };

        if key.is_empty() {
            return Err(invalid(format!("'{}' has no key", text)));
        }

        let Some(modifier_text) = modifier_text else {
            return ModifierKey::from_key_name(key)
                .map(Self::double_tap)
                .ok_or_else(|| invalid(format!("'{}' has no modifier", key)));
        };

        let mut modifiers = Vec::new();
        for name in modifier_text.split('+').map(str::trim) {
            if name.is_empty() {
                return Err(invalid(format!("'{}' has an empty modifier", text)));
            }
            let modifier = ModifierKey::from_key_name(name)
                .ok_or_else(|| invalid(format!("'{}' is not a modifier", name)))?;
            modifiers.push(modifier);
        }
        modifiers.sort();
        modifiers.dedup();

        if key.eq_ignore_ascii_case(SPACE_KEY) {
            return Self::combo(modifiers, " ");
        }
        Self::combo(modifiers, key)
    }
}

#[track_caller]
fn invalid(reason: String) -> CaptureError {
    CaptureError::InvalidDescriptor {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}

impl fmt::Display for HotkeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_for_display(self))
    }
}
