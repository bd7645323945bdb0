//! Game state and core simulation types
//!
//! Entities are plain values: no IDs, no references between them. Within a
//! frame, bullets and enemies are identified only by their index.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// An enemy reached the player's row; frozen until reset
    GameOver,
}

/// Horizontal travel direction of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalDir {
    Left,
    #[default]
    Right,
}

impl HorizontalDir {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            HorizontalDir::Left => -1.0,
            HorizontalDir::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            HorizontalDir::Left => HorizontalDir::Right,
            HorizontalDir::Right => HorizontalDir::Left,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    /// X coordinate of the ship's horizontal center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// A player bullet travelling up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
}

/// An enemy ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub dir: HorizontalDir,
}

impl Enemy {
    /// Y coordinate of the lower edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Player at round start: horizontally at the arena midpoint, near the bottom
pub fn spawn_player(tuning: &Tuning) -> Player {
    Player {
        pos: Vec2::new(tuning.arena_width / 2.0, tuning.player_y()),
        size: Vec2::new(tuning.player_width, tuning.player_height),
    }
}

/// The enemy grid at round start, column-major, all heading right
pub fn seed_enemy_grid(tuning: &Tuning) -> Vec<Enemy> {
    let size = Vec2::new(tuning.enemy_width, tuning.enemy_height);
    let mut enemies = Vec::with_capacity(tuning.enemy_count());
    for col in 0..tuning.enemy_cols {
        for row in 0..tuning.enemy_rows {
            let cell = Vec2::new(col as f32, row as f32);
            enemies.push(Enemy {
                pos: tuning.enemy_grid_origin + cell * tuning.enemy_grid_spacing,
                size,
                dir: HorizontalDir::Right,
            });
        }
    }
    enemies
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values the round was started with
    pub tuning: Tuning,
    pub player: Player,
    /// Live bullets (unordered)
    pub bullets: Vec<Bullet>,
    /// Surviving enemies (unordered)
    pub enemies: Vec<Enemy>,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation frames advanced since the last reset
    pub frame: u64,
}

impl GameState {
    /// Create a fresh round with the given tuning
    pub fn new(tuning: Tuning) -> Self {
        let mut state = Self {
            player: spawn_player(&tuning),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            tuning,
        };
        state.enemies = seed_enemy_grid(&state.tuning);
        state
    }

    /// Start over: clear score, bullets and game over, re-center the player,
    /// re-seed the enemy grid
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.frame = 0;
        self.bullets.clear();
        self.player = spawn_player(&self.tuning);
        self.enemies = seed_enemy_grid(&self.tuning);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Number of bullets currently in flight
    #[inline]
    pub fn live_bullets(&self) -> usize {
        self.bullets.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_grid_layout() {
        let enemies = seed_enemy_grid(&Tuning::default());
        assert_eq!(enemies.len(), 15);

        for i in 0..5 {
            for j in 0..3 {
                let expected = Vec2::new(100.0 + 120.0 * i as f32, 50.0 + 80.0 * j as f32);
                let enemy = enemies
                    .iter()
                    .find(|e| e.pos == expected)
                    .unwrap_or_else(|| panic!("no enemy at {expected:?}"));
                assert_eq!(enemy.size, Vec2::new(40.0, 40.0));
                assert_eq!(enemy.dir, HorizontalDir::Right);
            }
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.player.pos, Vec2::new(400.0, 540.0));
        assert_eq!(state.player.size, Vec2::new(50.0, 50.0));
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies.len(), 15);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reset_restores_round_start() {
        let mut state = GameState::default();
        let fresh = GameState::default();

        state.player.pos.x = 0.0;
        state.score = 1200;
        state.phase = GamePhase::GameOver;
        state.frame = 99;
        state.enemies.truncate(4);
        state.enemies[0].dir = HorizontalDir::Left;
        state.bullets.push(Bullet {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::new(4.0, 10.0),
        });

        state.reset();

        assert!(!state.is_game_over());
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.live_bullets(), 0);
        assert_eq!(state.player, fresh.player);
        assert_eq!(state.enemies, fresh.enemies);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(HorizontalDir::Right.sign(), 1.0);
        assert_eq!(HorizontalDir::Left.sign(), -1.0);
        assert_eq!(HorizontalDir::Right.flipped(), HorizontalDir::Left);
        assert_eq!(HorizontalDir::Left.flipped().flipped(), HorizontalDir::Left);
    }

    #[test]
    fn test_player_center() {
        let player = spawn_player(&Tuning::default());
        assert_eq!(player.center_x(), 425.0);
    }
}
