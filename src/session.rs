//! A running game: state, input sources and the per-frame driver
//!
//! The frame scheduler (requestAnimationFrame in the browser, a plain loop
//! natively) calls [`Session::frame`] once per display frame.

use crate::platform::{Autopilot, InputSource, KeyboardState};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

pub struct Session {
    pub state: GameState,
    pub settings: Settings,
    pub keyboard: KeyboardState,
    autopilot: Autopilot,
    /// Idle/demo mode - the autopilot plays instead of the keyboard
    pub idle_mode: bool,
}

impl Session {
    pub fn new(tuning: Tuning, settings: Settings) -> Self {
        Self {
            state: GameState::new(tuning),
            keyboard: KeyboardState::new(&settings),
            settings,
            autopilot: Autopilot::new(),
            idle_mode: false,
        }
    }

    /// Run one simulation step with this frame's input
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let input = if self.idle_mode {
            // Keep the press window fresh so a queued press doesn't fire later
            self.keyboard.take_input();
            self.autopilot.sample(&self.state)
        } else {
            self.keyboard.sample(&self.state)
        };

        let events = tick(&mut self.state, &input);

        for event in &events {
            match event {
                GameEvent::EnemiesDestroyed { count, points } => {
                    log::debug!(
                        "frame {}: {} enemy(s) destroyed (+{}), score {}",
                        self.state.frame,
                        count,
                        points,
                        self.state.score
                    );
                    if self.state.enemies.is_empty() {
                        log::info!("All enemies destroyed - score {}", self.state.score);
                    }
                }
                GameEvent::GameOver { score } => {
                    log::info!("Game over at frame {} with score {}", self.state.frame, score);
                }
                GameEvent::BulletFired { .. } | GameEvent::EnemyBounced { .. } => {}
            }
        }

        events
    }

    /// Start a new round (restart button)
    pub fn restart(&mut self) {
        self.state.reset();
        self.keyboard.release_all();
        log::info!("Game restarted");
    }

    pub fn toggle_idle_mode(&mut self) {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
    }

    /// Replace settings (bindings, fire mode) and persist them
    pub fn apply_settings(&mut self, settings: Settings) {
        self.keyboard.apply_settings(&settings);
        self.settings = settings;
        self.settings.save();
    }

    /// Switch between continuous and per-press fire, persisting the choice
    pub fn toggle_fire_mode(&mut self) {
        let mut settings = self.settings.clone();
        settings.fire_mode = settings.fire_mode.toggled();
        log::info!("Fire mode: {}", settings.fire_mode.as_str());
        self.apply_settings(settings);
    }

    /// Show or hide the frame counter, persisting the choice
    pub fn toggle_show_debug(&mut self) {
        let mut settings = self.settings.clone();
        settings.show_debug = !settings.show_debug;
        log::info!("Debug HUD: {}", settings.show_debug);
        self.apply_settings(settings);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default(), Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FireMode;

    #[test]
    fn test_keyboard_drives_frames() {
        let mut session = Session::default();
        let x0 = session.state.player.pos.x;

        session.keyboard.key_down("ArrowRight");
        session.frame();
        session.frame();
        assert_eq!(session.state.player.pos.x, x0 + 10.0);

        session.keyboard.key_up("ArrowRight");
        session.frame();
        assert_eq!(session.state.player.pos.x, x0 + 10.0);
        assert_eq!(session.state.frame, 3);
    }

    #[test]
    fn test_held_fire_fills_bullet_cap() {
        let mut session = Session::default();
        session.keyboard.key_down(" ");
        for _ in 0..5 {
            session.frame();
        }
        assert_eq!(session.state.live_bullets(), 3);
    }

    #[test]
    fn test_per_press_fire_mode() {
        let settings = Settings {
            fire_mode: FireMode::PerPress,
            ..Default::default()
        };
        let mut session = Session::new(Tuning::default(), settings);
        session.keyboard.key_down(" ");
        for _ in 0..5 {
            session.frame();
        }
        assert_eq!(session.state.live_bullets(), 1);
    }

    #[test]
    fn test_restart_clears_round_and_input() {
        let mut session = Session::default();
        session.keyboard.key_down("ArrowLeft");
        session.keyboard.key_down(" ");
        for _ in 0..10 {
            session.frame();
        }
        session.state.score = 300;

        session.restart();
        assert_eq!(session.state.score, 0);
        assert_eq!(session.state.live_bullets(), 0);
        assert_eq!(session.state.enemies.len(), 15);
        assert_eq!(session.state.player.pos.x, 400.0);
        assert!(!session.keyboard.is_held("ArrowLeft"));
    }

    #[test]
    fn test_idle_mode_plays() {
        let mut session = Session::default();
        session.toggle_idle_mode();
        assert!(session.idle_mode);

        let mut fired = false;
        for _ in 0..600 {
            let events = session.frame();
            fired |= events
                .iter()
                .any(|e| matches!(e, GameEvent::BulletFired { .. }));
        }
        assert!(fired);
    }

    #[test]
    fn test_apply_settings_updates_keyboard() {
        let mut session = Session::default();
        let mut settings = Settings::default();
        settings.keys.right = vec!["d".to_string()];
        session.apply_settings(settings);

        let x0 = session.state.player.pos.x;
        session.keyboard.key_down("d");
        session.frame();
        assert_eq!(session.state.player.pos.x, x0 + 5.0);
    }

    #[test]
    fn test_toggle_fire_mode_switches_live_keyboard() {
        let mut session = Session::default();
        session.toggle_fire_mode();
        assert_eq!(session.settings.fire_mode, FireMode::PerPress);

        // Held fire now yields a single shot
        session.keyboard.key_down(" ");
        for _ in 0..5 {
            session.frame();
        }
        assert_eq!(session.state.live_bullets(), 1);

        session.toggle_fire_mode();
        assert_eq!(session.settings.fire_mode, FireMode::WhileHeld);
        session.frame();
        assert_eq!(session.state.live_bullets(), 2);
    }

    #[test]
    fn test_toggle_show_debug() {
        let mut session = Session::default();
        assert!(!session.settings.show_debug);
        session.toggle_show_debug();
        assert!(session.settings.show_debug);
        // Bindings and fire mode are untouched
        assert_eq!(session.settings.keys, Settings::default().keys);
        assert_eq!(session.settings.fire_mode, FireMode::WhileHeld);
        session.toggle_show_debug();
        assert!(!session.settings.show_debug);
    }
}
