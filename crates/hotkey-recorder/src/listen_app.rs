//! `listen` command: activate targets from their global hotkeys.

use crate::{AppResult, FileRegistry, HotkeyListener, ListenerEvent, config::Config};

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

/// Register every stored binding and run until Ctrl-C.
///
/// Hotkeys are registered on the main thread once the event loop starts,
/// since tao's event loop pumps the messages global hotkeys need. The
/// listener itself runs on a tokio runtime on a separate thread.
#[instrument(skip(config))]
pub fn run(config: &Config) -> AppResult<()> {
    let registry = FileRegistry::open(&config.registry_path()?)?.registry().clone();

    let event_loop = EventLoopBuilder::<ListenerEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // Dropping the manager unregisters every hotkey.
    let mut hotkey_manager = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(ListenerEvent::Shutdown) => {
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Event::NewEvents(StartCause::Init) => {
                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let (manager, bindings) = match HotkeyListener::register_all(&registry) {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to register hotkeys: {:?}", e);
                        std::process::exit(1);
                    }
                };
                hotkey_manager = Some(manager);
                info!(hotkeys = bindings.len(), "Listening for hotkeys, Ctrl-C to stop");

                let proxy = proxy.clone();

                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let listener = HotkeyListener::new(bindings);
                        let (shutdown_tx, shutdown_rx) = watch::channel(false);

                        tokio::join!(
                            async {
                                if let Err(e) = listener.run(shutdown_rx).await {
                                    error!(error = ?e, "Hotkey listener error");
                                }
                            },
                            async {
                                if let Err(e) = tokio::signal::ctrl_c().await {
                                    error!(error = ?e, "Failed to wait for Ctrl-C");
                                }
                                info!("Shutdown requested");
                                let _ = shutdown_tx.send(true);
                                if proxy.send_event(ListenerEvent::Shutdown).is_err() {
                                    warn!("Event loop already closed");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }

        // Keep hotkey_manager alive in the closure for the app's lifetime.
        let _ = &hotkey_manager;
    })
}
