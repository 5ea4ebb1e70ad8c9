use error_location::ErrorLocation;
use thiserror::Error;

/// Hotkey capture errors with source location tracking.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The persistence gateway rejected a save for a target.
    #[error("Failed to persist hotkey for '{target_id}': {reason} {location}")]
    PersistenceFailed {
        /// Target scope whose binding could not be stored.
        target_id: String,
        /// Description of the persistence failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The keyboard event stream refused the capture registration.
    #[error("Failed to attach key listeners: {reason} {location}")]
    ListenerAttachFailed {
        /// Description of the attach failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A descriptor does not have the combo or double-tap shape.
    #[error("Invalid hotkey descriptor: {reason} {location}")]
    InvalidDescriptor {
        /// Which invariant the descriptor violates.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Recording was requested for a blank target scope identifier.
    #[error("Target scope identifier must not be empty {location}")]
    EmptyTarget {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CaptureError`].
pub type Result<T> = std::result::Result<T, CaptureError>;
