//! Pure construction and formatting helpers for [`HotkeyDescriptor`].

use crate::{
    descriptor::HotkeyDescriptor,
    keys::{ModifierFlags, ModifierKey},
};

/// Separator between parts in the display form (`"Ctrl + Shift + K"`).
pub const DISPLAY_SEPARATOR: &str = " + ";

/// Token a literal space character is recorded as.
pub const SPACE_KEY: &str = "Space";

/// Canonicalize a host-reported key name.
///
/// The space character becomes `"Space"`, a single printable character is
/// upper-cased, and anything else (`"F5"`, `"ArrowUp"`, ...) passes through.
pub fn normalize_key_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(' '), None) => SPACE_KEY.to_string(),
        (Some(c), None) if !c.is_control() => c.to_uppercase().collect(),
        _ => raw.to_string(),
    }
}

/// Held modifiers in the fixed `Ctrl, Alt, Shift, Meta` order.
pub fn ordered_modifiers(flags: ModifierFlags) -> Vec<ModifierKey> {
    ModifierKey::ORDER
        .into_iter()
        .filter(|m| flags.is_held(*m))
        .collect()
}

/// Human-readable form of a descriptor.
///
/// Combos join every part with `" + "`; a double-tap collapses to the
/// repeated modifier's name.
pub fn format_for_display(descriptor: &HotkeyDescriptor) -> String {
    if let Some(modifier) = descriptor.double_tap_modifier() {
        return modifier.name().to_string();
    }

    descriptor
        .modifiers
        .iter()
        .map(|m| m.name())
        .chain(std::iter::once(descriptor.key.as_str()))
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}
