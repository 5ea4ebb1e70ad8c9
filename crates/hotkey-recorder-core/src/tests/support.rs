use crate::{
    CaptureError, CoreResult, HotkeyDescriptor, KeyEventStream, ListenerHandle, ModifierFlags,
    PersistenceGateway, RawKeyEvent,
};

use std::panic::Location;

use error_location::ErrorLocation;

/// Event stream that records attach/detach calls.
#[derive(Debug, Default)]
pub(crate) struct FakeStream {
    next_id: u64,
    pub(crate) attached: Vec<ListenerHandle>,
    pub(crate) attach_calls: usize,
    pub(crate) detach_calls: usize,
    pub(crate) refuse_attach: bool,
}

impl FakeStream {
    /// A stream whose every attach fails.
    pub(crate) fn refusing() -> Self {
        Self {
            refuse_attach: true,
            ..Default::default()
        }
    }
}

impl KeyEventStream for FakeStream {
    fn attach(&mut self) -> CoreResult<ListenerHandle> {
        self.attach_calls += 1;
        if self.refuse_attach {
            return Err(CaptureError::ListenerAttachFailed {
                reason: "window closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.next_id += 1;
        let handle = ListenerHandle::new(self.next_id);
        self.attached.push(handle);
        Ok(handle)
    }

    fn detach(&mut self, handle: ListenerHandle) {
        self.detach_calls += 1;
        self.attached.retain(|h| *h != handle);
    }
}

/// Gateway that records every save and can be told to fail.
#[derive(Debug, Default)]
pub(crate) struct FakeGateway {
    pub(crate) saves: Vec<(String, Option<HotkeyDescriptor>)>,
    pub(crate) fail: bool,
}

impl PersistenceGateway for FakeGateway {
    fn save(&mut self, target_id: &str, descriptor: Option<&HotkeyDescriptor>) -> CoreResult<()> {
        self.saves
            .push((target_id.to_string(), descriptor.cloned()));
        if self.fail {
            return Err(CaptureError::PersistenceFailed {
                target_id: target_id.to_string(),
                reason: "disk full".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

pub(crate) fn no_modifiers() -> ModifierFlags {
    ModifierFlags::default()
}

pub(crate) fn held(ctrl: bool, alt: bool, shift: bool, meta: bool) -> ModifierFlags {
    ModifierFlags {
        ctrl,
        alt,
        shift,
        meta,
    }
}

/// Key-down of a bare modifier, with its own flag set as hosts report it.
pub(crate) fn modifier_press(name: &str) -> RawKeyEvent {
    let flags = match name {
        "Control" => held(true, false, false, false),
        "Alt" => held(false, true, false, false),
        "Shift" => held(false, false, true, false),
        _ => held(false, false, false, true),
    };
    RawKeyEvent::new(name, flags)
}

pub(crate) fn key_press(key: &str, flags: ModifierFlags) -> RawKeyEvent {
    RawKeyEvent::new(key, flags)
}
