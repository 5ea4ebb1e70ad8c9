/// Events sent from the async runtime to the main event loop thread.
///
/// The main thread owns the `GlobalHotKeyManager`, so process lifecycle
/// flows through this enum.
#[derive(Debug, Clone, Copy)]
pub enum ListenerEvent {
    /// Shut down; the main thread exits the event loop.
    Shutdown,
}
