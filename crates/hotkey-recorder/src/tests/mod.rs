mod hotkey_listener;
