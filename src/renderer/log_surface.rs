//! Headless surface for the native runner

use super::{Scene, SpriteKind, Surface};

/// Logs a summary every `every` frames and once when the round ends
#[derive(Debug, Clone)]
pub struct LogSurface {
    every: u64,
    reported_game_over: bool,
    frames_presented: u64,
}

impl LogSurface {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            reported_game_over: false,
            frames_presented: 0,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Default for LogSurface {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Surface for LogSurface {
    fn present(&mut self, scene: &Scene) {
        self.frames_presented += 1;

        if scene.game_over {
            if !self.reported_game_over {
                log::info!("GAME OVER - final score {}", scene.score);
                self.reported_game_over = true;
            }
            return;
        }
        self.reported_game_over = false;

        if scene.frame % self.every == 0 {
            log::debug!(
                "frame {}: score={} enemies={} bullets={}",
                scene.frame,
                scene.score,
                scene.count(SpriteKind::Enemy),
                scene.count(SpriteKind::Bullet),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_game_over_reported_once_per_round() {
        let mut surface = LogSurface::new(10);
        let mut state = GameState::default();
        state.phase = crate::sim::GamePhase::GameOver;
        let scene = Scene::from_state(&state);

        surface.present(&scene);
        assert!(surface.reported_game_over);
        surface.present(&scene);
        assert!(surface.reported_game_over);

        state.reset();
        surface.present(&Scene::from_state(&state));
        assert!(!surface.reported_game_over);
        assert_eq!(surface.frames_presented(), 3);
    }
}
