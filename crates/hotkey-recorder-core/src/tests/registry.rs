use crate::{
    CaptureError, HotkeyDescriptor, HotkeyRegistry, ModifierKey, PersistenceGateway,
};

fn ctrl_k() -> HotkeyDescriptor {
    HotkeyDescriptor {
        modifiers: vec![ModifierKey::Ctrl],
        key: "K".to_string(),
    }
}

/// WHAT: Saving Some binds and saving None unbinds
/// WHY: None means "no hotkey bound" for a target
#[test]
#[allow(clippy::unwrap_used)]
fn given_registry_when_saved_and_cleared_then_binding_follows() {
    // Given: An empty registry
    let mut registry = HotkeyRegistry::new();

    // When: appA bound, then cleared
    registry.save("appA", Some(&ctrl_k())).unwrap();
    assert_eq!(registry.get("appA"), Some(&ctrl_k()));
    registry.save("appA", None).unwrap();

    // Then: Nothing bound
    assert!(registry.get("appA").is_none());
    assert!(registry.is_empty());
}

/// WHAT: The registry refuses descriptors that break shape invariants
/// WHY: A bare key must never reach OS registration
#[test]
fn given_bare_key_descriptor_when_saved_then_persistence_failed() {
    // Given: A descriptor with no modifiers
    let mut registry = HotkeyRegistry::new();
    let bare = HotkeyDescriptor {
        modifiers: vec![],
        key: "K".to_string(),
    };

    // When
    let result = registry.save("appA", Some(&bare));

    // Then
    assert!(matches!(
        result,
        Err(CaptureError::PersistenceFailed { .. })
    ));
    assert!(registry.is_empty());
}

/// WHAT: Conflicts with other targets are found, the target itself is not
/// WHY: Rebinding a target to its current hotkey is not a conflict
#[test]
#[allow(clippy::unwrap_used)]
fn given_bound_descriptor_when_checking_conflicts_then_other_targets_reported() {
    // Given: appA bound to Ctrl + K
    let mut registry = HotkeyRegistry::new();
    registry.save("appA", Some(&ctrl_k())).unwrap();

    // When/Then
    assert_eq!(registry.find_conflict(&ctrl_k(), "appB"), Some("appA"));
    assert_eq!(registry.find_conflict(&ctrl_k(), "appA"), None);
}

/// WHAT: A registry document loads as target-keyed tables
/// WHY: The file-backed store persists the registry in this shape
#[test]
#[allow(clippy::unwrap_used)]
fn given_registry_document_when_loaded_then_bindings_and_validation_available() {
    // Given: Two valid bindings and one hand-edited broken one
    let valid = r#"
        ["/Applications/Terminal.app"]
        modifiers = ["Ctrl", "Alt"]
        key = "T"

        [plugin1]
        modifiers = ["Meta", "Meta"]
        key = "Meta"
    "#;
    let broken = r#"
        [appA]
        modifiers = []
        key = "K"
    "#;

    // When
    let registry: HotkeyRegistry = toml::from_str(valid).unwrap();
    let broken: HotkeyRegistry = toml::from_str(broken).unwrap();

    // Then
    assert_eq!(registry.len(), 2);
    assert!(registry.validate().is_ok());
    assert_eq!(
        registry.get("plugin1"),
        Some(&HotkeyDescriptor::double_tap(ModifierKey::Meta))
    );
    let targets: Vec<&str> = registry.iter().map(|(t, _)| t).collect();
    assert_eq!(targets, vec!["/Applications/Terminal.app", "plugin1"]);
    assert!(matches!(
        broken.validate(),
        Err(CaptureError::InvalidDescriptor { .. })
    ));
}
