// Keyboard shortcuts. Kept free of web-sys so host tests can include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleHelp,
    Save,
    Load,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::ToggleHelp),
        "s" | "S" => Some(KeyAction::Save),
        "l" | "L" => Some(KeyAction::Load),
        _ => None,
    }
}
