use crate::{
    KeyEventNormalizer, ModifierKey, RawKeyEvent,
    tests::support::{held, no_modifiers},
};

/// WHAT: Host modifier names map onto the four modifiers
/// WHY: Browsers, tao and OS hooks name the same keys differently
#[test]
fn given_host_modifier_names_when_normalized_then_modifier_recognized() {
    // Given: Names reported by various hosts
    let cases = [
        ("Control", ModifierKey::Ctrl),
        ("ControlLeft", ModifierKey::Ctrl),
        ("Alt", ModifierKey::Alt),
        ("Option", ModifierKey::Alt),
        ("Shift", ModifierKey::Shift),
        ("ShiftRight", ModifierKey::Shift),
        ("Meta", ModifierKey::Meta),
        ("Super", ModifierKey::Meta),
        ("Command", ModifierKey::Meta),
    ];

    for (name, expected) in cases {
        // When
        let event = KeyEventNormalizer::normalize(&RawKeyEvent::new(name, no_modifiers()));

        // Then
        assert!(event.is_modifier, "{name} should be a modifier");
        assert_eq!(event.modifier, Some(expected));
    }
}

/// WHAT: Regular keys keep their raw text, flags, and repeat bit
/// WHY: The state machine reads held flags and repeat directly from the event
#[test]
fn given_regular_repeat_key_when_normalized_then_fields_carried_over() {
    // Given: A repeated "k" with Ctrl and Meta held
    let raw = RawKeyEvent::new("k", held(true, false, false, true)).repeated();

    // When
    let event = KeyEventNormalizer::normalize(&raw);

    // Then
    assert!(!event.is_modifier);
    assert_eq!(event.modifier, None);
    assert_eq!(event.raw_key, "k");
    assert_eq!(event.flags, held(true, false, false, true));
    assert!(event.is_repeat);
    assert!(!event.is_escape());
}

/// WHAT: Escape is recognized under both common names
/// WHY: Escape cancels recording
#[test]
fn given_escape_names_when_normalized_then_is_escape() {
    // Given/When/Then
    for name in ["Escape", "Esc", "escape"] {
        let event = KeyEventNormalizer::normalize(&RawKeyEvent::new(name, no_modifiers()));
        assert!(event.is_escape());
        assert!(!event.is_modifier);
    }
}
