use crate::hotkey_listener::{accelerator, registrable};

use hotkey_recorder_core::{HotkeyDescriptor, HotkeyRegistry, ModifierKey, PersistenceGateway};

use global_hotkey::hotkey::{Code, HotKey, Modifiers};

/// WHAT: Combo descriptors become global-hotkey accelerator strings
/// WHY: The listener registers exactly what the recorder stored
#[test]
#[allow(clippy::unwrap_used)]
fn given_combo_descriptor_when_converted_then_accelerator_parses() {
    // Given: Ctrl + Shift + K
    let descriptor = HotkeyDescriptor {
        modifiers: vec![ModifierKey::Ctrl, ModifierKey::Shift],
        key: "K".to_string(),
    };

    // When: Converting
    let text = accelerator(&descriptor).unwrap();

    // Then: global-hotkey understands it
    assert_eq!(text, "control+shift+K");
    let hotkey: HotKey = text.parse().unwrap();
    assert_eq!(
        hotkey,
        HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyK)
    );
}

/// WHAT: Meta maps to the super modifier
/// WHY: global-hotkey names the platform key "super"
#[test]
#[allow(clippy::unwrap_used)]
fn given_meta_combo_when_converted_then_super_used() {
    // Given: Meta + Alt + Space is stored in canonical order
    let descriptor = HotkeyDescriptor {
        modifiers: vec![ModifierKey::Alt, ModifierKey::Meta],
        key: "Space".to_string(),
    };

    // When / Then
    assert_eq!(accelerator(&descriptor).unwrap(), "alt+super+Space");
}

/// WHAT: Double-tap descriptors have no accelerator
/// WHY: The OS cannot register a lone modifier as a global hotkey
#[test]
fn given_double_tap_when_converted_then_none() {
    // Given: Double-tap Meta
    let descriptor = HotkeyDescriptor::double_tap(ModifierKey::Meta);

    // When / Then
    assert!(accelerator(&descriptor).is_none());
}

/// WHAT: A registry holding only double-taps yields nothing to register
/// WHY: Skipped bindings must leave `listen` idling, not failing
#[test]
#[allow(clippy::unwrap_used)]
fn given_only_double_tap_bindings_when_collected_then_empty_without_error() {
    // Given: Two double-tap bindings
    let mut registry = HotkeyRegistry::new();
    registry
        .save("plugin1", Some(&HotkeyDescriptor::double_tap(ModifierKey::Meta)))
        .unwrap();
    registry
        .save("plugin2", Some(&HotkeyDescriptor::double_tap(ModifierKey::Shift)))
        .unwrap();

    // When: Collecting registrable hotkeys
    let hotkeys = registrable(&registry);

    // Then: Nothing to register
    assert!(hotkeys.is_empty());
}

/// WHAT: Combo bindings are collected next to skipped double-taps
/// WHY: One unregistrable binding must not hide the others
#[test]
#[allow(clippy::unwrap_used)]
fn given_mixed_bindings_when_collected_then_only_combos_returned() {
    // Given: A combo for appA and a double-tap for plugin1
    let mut registry = HotkeyRegistry::new();
    let ctrl_alt_t = HotkeyDescriptor {
        modifiers: vec![ModifierKey::Ctrl, ModifierKey::Alt],
        key: "T".to_string(),
    };
    registry.save("appA", Some(&ctrl_alt_t)).unwrap();
    registry
        .save("plugin1", Some(&HotkeyDescriptor::double_tap(ModifierKey::Meta)))
        .unwrap();

    // When
    let hotkeys = registrable(&registry);

    // Then: Only appA, with the matching hotkey
    assert_eq!(hotkeys.len(), 1);
    assert_eq!(hotkeys[0].0, "appA");
    assert_eq!(
        hotkeys[0].1,
        HotKey::new(Some(Modifiers::CONTROL | Modifiers::ALT), Code::KeyT)
    );
}
