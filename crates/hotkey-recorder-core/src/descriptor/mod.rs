mod builder;
mod hotkey_descriptor;

pub use {
    builder::{
        DISPLAY_SEPARATOR, SPACE_KEY, format_for_display, normalize_key_name, ordered_modifiers,
    },
    hotkey_descriptor::HotkeyDescriptor,
};
