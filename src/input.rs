//! Input mapping — normalizes pointer and keyboard input to note identifiers.
//!
//! Pure lookup, no side effects. A key or event that maps to nothing yields
//! `None`; callers treat that as "do nothing", never as a failure.

/// A normalized input event from the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press, carrying the key name as reported by the host
    /// (e.g. "a", "K", "Shift").
    KeyDown(String),
    /// A pointer press on a pad that declares its own note.
    PointerDown { note: String },
}

/// Map a key name to its note. Case-insensitive over the home row
/// `a s d f g h j k`; anything else (including multi-character key names
/// like "Shift") maps to nothing.
pub fn note_for_key(key: &str) -> Option<&'static str> {
    let key = key.to_ascii_lowercase();
    match key.as_str() {
        "a" => Some("pad1"),
        "s" => Some("pad2"),
        "d" => Some("pad3"),
        "f" => Some("pad4"),
        "g" => Some("pad5"),
        "h" => Some("pad6"),
        "j" => Some("pad7"),
        "k" => Some("pad8"),
        _ => None,
    }
}

/// Resolve an input event to the note it should trigger.
///
/// Pointer events are an identity mapping — the pad element already declares
/// its note. Key events go through the key table.
pub fn note_for_event(event: &InputEvent) -> Option<&str> {
    match event {
        InputEvent::KeyDown(key) => note_for_key(key),
        InputEvent::PointerDown { note } => Some(note),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_home_row_to_pads() {
        let expected = [
            ("a", "pad1"),
            ("s", "pad2"),
            ("d", "pad3"),
            ("f", "pad4"),
            ("g", "pad5"),
            ("h", "pad6"),
            ("j", "pad7"),
            ("k", "pad8"),
        ];
        for (key, note) in expected {
            assert_eq!(note_for_key(key), Some(note), "key '{key}'");
        }
    }

    #[test]
    fn key_lookup_is_case_insensitive() {
        assert_eq!(note_for_key("A"), Some("pad1"));
        assert_eq!(note_for_key("K"), Some("pad8"));
        assert_eq!(note_for_key("G"), note_for_key("g"));
    }

    #[test]
    fn unmapped_keys_yield_nothing() {
        for key in ["q", "z", "1", " ", "", "Shift", "Enter", "aa"] {
            assert_eq!(note_for_key(key), None, "key '{key}' should not map");
        }
    }

    #[test]
    fn pointer_events_carry_their_own_note() {
        let event = InputEvent::PointerDown { note: "pad8".to_string() };
        assert_eq!(note_for_event(&event), Some("pad8"));
    }

    #[test]
    fn key_events_go_through_the_table() {
        assert_eq!(note_for_event(&InputEvent::KeyDown("s".into())), Some("pad2"));
        assert_eq!(note_for_event(&InputEvent::KeyDown("x".into())), None);
    }
}
