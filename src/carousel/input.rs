//! Keyboard routing for the hero slideshow.

use raylib::consts::KeyboardKey;

use crate::carousel::NavIntent;

/// Map a pressed key to a navigation intent. The arrow keys step the
/// slideshow; every other key is ignored here and left to the caller.
pub fn nav_intent_for_key(key: KeyboardKey) -> Option<NavIntent> {
    match key {
        KeyboardKey::KEY_LEFT => Some(NavIntent::Prev),
        KeyboardKey::KEY_RIGHT => Some(NavIntent::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_intents() {
        assert_eq!(nav_intent_for_key(KeyboardKey::KEY_LEFT), Some(NavIntent::Prev));
        assert_eq!(nav_intent_for_key(KeyboardKey::KEY_RIGHT), Some(NavIntent::Next));
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in [
            KeyboardKey::KEY_UP,
            KeyboardKey::KEY_DOWN,
            KeyboardKey::KEY_ENTER,
            KeyboardKey::KEY_A,
            KeyboardKey::KEY_ESCAPE,
        ] {
            assert_eq!(nav_intent_for_key(key), None);
        }
    }
}
