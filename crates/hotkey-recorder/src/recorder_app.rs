//! `record` command: capture one hotkey for a target and store it.

use crate::{
    AppResult, CaptureWindow, FileRegistry, Notifier, capture_window::raw_key_event,
    config::Config,
};

use hotkey_recorder_core::{RecorderFeedback, SessionCoordinator};

use tao::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::ModifiersState,
};
use tracing::{debug, error, info, instrument};

/// Process exit code after the user cancels a recording.
pub(crate) const EXIT_CANCELLED: i32 = 2;
/// Process exit code after a recorded hotkey could not be stored.
pub(crate) const EXIT_SAVE_FAILED: i32 = 1;

/// Open the capture window and record a hotkey for `target_id`.
///
/// Runs the window event loop until the session is saved, cancelled or the
/// window is closed, then exits the process with a matching status code.
/// Only setup failures return.
#[instrument(skip(config))]
pub fn run(config: &Config, target_id: String) -> AppResult<()> {
    let registry = FileRegistry::open(&config.registry_path()?)?;
    info!(registry_path = ?registry.path(), "Recording into registry");

    let event_loop = EventLoop::new();
    let window = CaptureWindow::new(&event_loop)?;
    let notifier = Notifier::new(config.notifications.enabled);

    let mut coordinator = SessionCoordinator::new(window, registry)
        .with_double_tap_window(config.recorder.double_tap_window());
    let mut feedback_rx = coordinator.subscribe();

    coordinator.start_recording(&target_id)?;

    let mut modifiers = ModifiersState::empty();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let Event::WindowEvent { event, .. } = event else {
            return;
        };

        match event {
            WindowEvent::ModifiersChanged(state) => {
                modifiers = state;
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if !coordinator.stream().is_attached() {
                    return;
                }
                let Some(raw) = raw_key_event(&key_event, modifiers) else {
                    debug!(key = ?key_event.logical_key, "Ignoring key without a name");
                    return;
                };

                match key_event.state {
                    ElementState::Pressed => {
                        if let Err(e) = coordinator.handle_key_down(&raw) {
                            error!(
                                target_id = %target_id,
                                error = ?e,
                                "Recorded hotkey was not saved"
                            );
                        }
                    }
                    ElementState::Released => {
                        coordinator.handle_key_up(&raw);
                    }
                    _ => {}
                }
            }
            WindowEvent::CloseRequested => {
                info!("Capture window closed");
                coordinator.close();
            }
            _ => {}
        }

        if !feedback_rx.has_changed().unwrap_or(false) {
            return;
        }

        let feedback = feedback_rx.borrow_and_update().clone();
        coordinator.stream().show_feedback(&feedback);

        match feedback {
            RecorderFeedback::Saved { descriptor, .. } => {
                println!("{}\t{}", target_id, descriptor);
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            RecorderFeedback::SaveFailed {
                descriptor, reason, ..
            } => {
                notifier.save_failed(&target_id, &descriptor, &reason);
                *control_flow = ControlFlow::ExitWithCode(EXIT_SAVE_FAILED);
            }
            RecorderFeedback::Cancelled { .. } => {
                info!(target_id = %target_id, "Recording cancelled, nothing saved");
                *control_flow = ControlFlow::ExitWithCode(EXIT_CANCELLED);
            }
            RecorderFeedback::Recording { .. } | RecorderFeedback::Idle => {}
        }
    })
}
