use crate::keys::{ModifierFlags, ModifierKey};

/// Key names hosts report for the Escape key.
const ESCAPE_NAMES: [&str; 2] = ["Escape", "Esc"];

/// A key event as delivered by the host's keyboard event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// Host-reported key name (`"a"`, `" "`, `"F5"`, `"Control"`, ...).
    pub key: String,
    /// Modifiers held while the event fired.
    pub modifiers: ModifierFlags,
    /// OS-level auto-repeat of a held key.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A first (non-repeat) press of `key` with the given modifiers held.
    pub fn new(key: impl Into<String>, modifiers: ModifierFlags) -> Self {
        Self {
            key: key.into(),
            modifiers,
            repeat: false,
        }
    }

    /// Mark this event as an auto-repeat.
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// A raw key event reduced to what the recording state machine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKeyEvent {
    /// The key itself is one of the four modifiers.
    pub is_modifier: bool,
    /// Which modifier, when `is_modifier` is set.
    pub modifier: Option<ModifierKey>,
    /// Key text exactly as reported.
    pub raw_key: String,
    /// Modifiers held while the event fired.
    pub flags: ModifierFlags,
    /// OS-level auto-repeat of a held key.
    pub is_repeat: bool,
}

impl NormalizedKeyEvent {
    /// Whether this is the Escape key, which cancels a recording.
    pub fn is_escape(&self) -> bool {
        ESCAPE_NAMES
            .iter()
            .any(|name| self.raw_key.eq_ignore_ascii_case(name))
    }
}

/// Stateless mapping from [`RawKeyEvent`] to [`NormalizedKeyEvent`].
pub struct KeyEventNormalizer;

impl KeyEventNormalizer {
    /// Normalize one raw key event.
    pub fn normalize(raw: &RawKeyEvent) -> NormalizedKeyEvent {
        let modifier = ModifierKey::from_key_name(&raw.key);

        NormalizedKeyEvent {
            is_modifier: modifier.is_some(),
            modifier,
            raw_key: raw.key.clone(),
            flags: raw.modifiers,
            is_repeat: raw.repeat,
        }
    }
}
