use crate::HotkeyDescriptor;

/// Outcome of feeding one key-down event to a recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Repeat event, or the session already decided; nothing changed.
    Discarded,
    /// Still recording; carries the keys to show as live feedback.
    Pending {
        /// Keys pressed so far.
        live_keys: Vec<String>,
    },
    /// A descriptor was decided. The session is now `Completing`.
    Finalized(HotkeyDescriptor),
    /// Escape was pressed; the session state has been cleared.
    Cancelled,
}

impl Transition {
    /// Whether the session ends with this transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Transition::Finalized(_) | Transition::Cancelled)
    }
}
