mod feedback;
mod session_coordinator;

pub use {feedback::RecorderFeedback, session_coordinator::SessionCoordinator};
