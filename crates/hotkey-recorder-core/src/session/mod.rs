mod recording_session;
mod session_state;
mod transition;

pub use {
    recording_session::{DOUBLE_TAP_WINDOW, RecordingSession},
    session_state::SessionState,
    transition::Transition,
};
