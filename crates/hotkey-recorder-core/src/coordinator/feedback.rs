use crate::HotkeyDescriptor;

/// Live recording status published to the hosting UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecorderFeedback {
    /// No session is active.
    #[default]
    Idle,
    /// Recording; `live_keys` are the keys pressed so far.
    Recording {
        /// Target scope being recorded.
        target_id: String,
        /// Keys pressed so far.
        live_keys: Vec<String>,
    },
    /// A hotkey was finalized and stored.
    Saved {
        /// Target scope the hotkey was stored for.
        target_id: String,
        /// The stored hotkey.
        descriptor: HotkeyDescriptor,
    },
    /// The session was cancelled without storing anything.
    Cancelled {
        /// Target scope whose recording was abandoned.
        target_id: String,
    },
    /// A hotkey was finalized but the store rejected it.
    SaveFailed {
        /// Target scope the hotkey was meant for.
        target_id: String,
        /// The hotkey that could not be stored.
        descriptor: HotkeyDescriptor,
        /// Why the store rejected it.
        reason: String,
    },
}
