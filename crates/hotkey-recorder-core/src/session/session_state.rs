/// Lifecycle state of a [`RecordingSession`](crate::RecordingSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Capturing key events.
    Recording,
    /// A descriptor has been decided; every further event is discarded
    /// until the coordinator tears the session down.
    Completing,
}
