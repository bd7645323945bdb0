//! Keyboard state tracking
//!
//! The browser delivers key-down (plus auto-repeat) and key-up events between
//! frames; the game loop samples the accumulated state once per frame.

use std::collections::HashSet;

use super::InputSource;
use crate::settings::{FireMode, KeyBindings, Settings};
use crate::sim::{GameState, TickInput};

#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    bindings: KeyBindings,
    fire_mode: FireMode,
    /// Keys currently down
    held: HashSet<String>,
    /// Keys that went down since the last sample (auto-repeat excluded)
    pressed: HashSet<String>,
}

impl KeyboardState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            bindings: settings.keys.clone(),
            fire_mode: settings.fire_mode,
            held: HashSet::new(),
            pressed: HashSet::new(),
        }
    }

    /// Apply new bindings/fire mode without dropping held keys
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.bindings = settings.keys.clone();
        self.fire_mode = settings.fire_mode;
    }

    /// Record a key-down event. Repeats of an already held key are ignored.
    pub fn key_down(&mut self, key: &str) {
        if self.held.insert(key.to_owned()) {
            self.pressed.insert(key.to_owned());
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Forget everything (window lost focus, game restarted)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// True if this key is bound to one of the game actions
    pub fn is_bound(&self, key: &str) -> bool {
        [&self.bindings.left, &self.bindings.right, &self.bindings.fire]
            .iter()
            .any(|keys| keys.iter().any(|b| b == key))
    }

    fn any_held(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }

    fn any_pressed(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.pressed.contains(k))
    }

    /// Build this frame's tick input and start a new press window
    pub fn take_input(&mut self) -> TickInput {
        let fire = match self.fire_mode {
            FireMode::WhileHeld => self.any_held(&self.bindings.fire),
            FireMode::PerPress => self.any_pressed(&self.bindings.fire),
        };
        let input = TickInput {
            left: self.any_held(&self.bindings.left),
            right: self.any_held(&self.bindings.right),
            fire,
        };
        self.pressed.clear();
        input
    }
}

impl InputSource for KeyboardState {
    fn sample(&mut self, _state: &GameState) -> TickInput {
        self.take_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard(fire_mode: FireMode) -> KeyboardState {
        KeyboardState::new(&Settings {
            fire_mode,
            ..Default::default()
        })
    }

    #[test]
    fn test_held_keys_map_to_input() {
        let mut kb = keyboard(FireMode::WhileHeld);
        kb.key_down("ArrowLeft");
        kb.key_down(" ");

        let input = kb.take_input();
        assert!(input.left);
        assert!(!input.right);
        assert!(input.fire);

        // Still held next frame
        assert_eq!(kb.take_input(), input);

        kb.key_up("ArrowLeft");
        kb.key_up(" ");
        assert_eq!(kb.take_input(), TickInput::default());
    }

    #[test]
    fn test_held_fire_keeps_firing() {
        let mut kb = keyboard(FireMode::WhileHeld);
        kb.key_down(" ");
        for _ in 0..5 {
            assert!(kb.take_input().fire);
        }
    }

    #[test]
    fn test_per_press_fires_once() {
        let mut kb = keyboard(FireMode::PerPress);
        kb.key_down(" ");
        assert!(kb.take_input().fire);

        // Auto-repeat does not count as a new press
        kb.key_down(" ");
        assert!(!kb.take_input().fire);

        kb.key_up(" ");
        kb.key_down(" ");
        assert!(kb.take_input().fire);
    }

    #[test]
    fn test_tap_between_frames_still_fires_per_press() {
        let mut kb = keyboard(FireMode::PerPress);
        kb.key_down(" ");
        kb.key_up(" ");
        assert!(kb.take_input().fire);
    }

    #[test]
    fn test_release_all() {
        let mut kb = keyboard(FireMode::WhileHeld);
        kb.key_down("ArrowRight");
        kb.release_all();
        assert!(!kb.is_held("ArrowRight"));
        assert_eq!(kb.take_input(), TickInput::default());
    }

    #[test]
    fn test_custom_bindings() {
        let mut settings = Settings::default();
        settings.keys.left = vec!["a".to_string(), "ArrowLeft".to_string()];
        let mut kb = KeyboardState::new(&settings);

        assert!(kb.is_bound("a"));
        assert!(!kb.is_bound("z"));

        kb.key_down("a");
        assert!(kb.take_input().left);
    }

    #[test]
    fn test_apply_settings_keeps_held_keys() {
        let mut kb = keyboard(FireMode::WhileHeld);
        kb.key_down(" ");
        kb.apply_settings(&Settings {
            fire_mode: FireMode::PerPress,
            ..Default::default()
        });
        // The press from before the switch is still pending
        assert!(kb.take_input().fire);
        assert!(!kb.take_input().fire);
    }
}
