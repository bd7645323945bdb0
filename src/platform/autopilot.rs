//! Idle/demo mode - a bot that plays the game
//!
//! Picks the lowest enemy (closest to the ship), leads it by the time a bullet
//! needs to climb to its row, steers under that spot and fires when lined up.

use super::InputSource;
use crate::sim::{Enemy, GameState, TickInput};

#[derive(Debug, Clone, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Enemy to go after: lowest row first, then nearest horizontally
    fn pick_target<'a>(state: &'a GameState) -> Option<&'a Enemy> {
        let ship_x = state.player.center_x();
        state.enemies.iter().min_by(|a, b| {
            b.bottom()
                .total_cmp(&a.bottom())
                .then_with(|| {
                    let da = (center_x(a) - ship_x).abs();
                    let db = (center_x(b) - ship_x).abs();
                    da.total_cmp(&db)
                })
        })
    }

    /// Where the target's center will be when a bullet fired now reaches it
    fn aim_point(state: &GameState, target: &Enemy) -> f32 {
        let tuning = &state.tuning;
        let climb = (state.player.pos.y - target.bottom()).max(0.0);
        let frames = if tuning.bullet_speed > 0.0 {
            climb / tuning.bullet_speed
        } else {
            0.0
        };
        let lead = tuning.enemy_speed * target.dir.sign() * frames;
        let min = target.size.x / 2.0;
        let max = tuning.arena_width - target.size.x / 2.0;
        (center_x(target) + lead).clamp(min, max.max(min))
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        let Some(target) = Self::pick_target(state) else {
            return TickInput::default();
        };

        let aim = Self::aim_point(state, target);
        let dx = aim - state.player.center_x();
        // Close enough that one more step would overshoot
        let deadzone = state.tuning.player_speed.max(1.0);
        // Bullet lands inside the enemy's middle half
        let lined_up = dx.abs() < target.size.x / 4.0;

        TickInput {
            left: dx < -deadzone,
            right: dx > deadzone,
            fire: lined_up,
        }
    }
}

#[inline]
fn center_x(enemy: &Enemy) -> f32 {
    enemy.pos.x + enemy.size.x / 2.0
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::{HorizontalDir, tick};

    fn lone_enemy(x: f32, y: f32, dir: HorizontalDir) -> GameState {
        let mut state = GameState::default();
        state.enemies = vec![Enemy {
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 40.0),
            dir,
        }];
        state
    }

    #[test]
    fn test_steers_toward_target() {
        let mut bot = Autopilot::new();

        let state = lone_enemy(100.0, 50.0, HorizontalDir::Right);
        let input = bot.sample(&state);
        assert!(input.left && !input.right);
        assert!(!input.fire);

        let state = lone_enemy(700.0, 50.0, HorizontalDir::Left);
        let input = bot.sample(&state);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_fires_when_lined_up() {
        let mut bot = Autopilot::new();
        // Stationary enemy right above the ship's center (425)
        let mut state = lone_enemy(405.0, 50.0, HorizontalDir::Right);
        state.tuning.enemy_speed = 0.0;

        let input = bot.sample(&state);
        assert!(input.fire);
        assert!(!input.left && !input.right);
    }

    #[test]
    fn test_prefers_lowest_enemy() {
        let mut state = lone_enemy(100.0, 50.0, HorizontalDir::Right);
        state.enemies.push(Enemy {
            pos: Vec2::new(600.0, 210.0),
            size: Vec2::new(40.0, 40.0),
            dir: HorizontalDir::Right,
        });
        let target = Autopilot::pick_target(&state).unwrap();
        assert_eq!(target.pos.y, 210.0);
    }

    #[test]
    fn test_idle_without_enemies() {
        let mut state = GameState::default();
        state.enemies.clear();
        assert_eq!(Autopilot::new().sample(&state), TickInput::default());
    }

    #[test]
    fn test_stationary_target_gets_destroyed() {
        let mut bot = Autopilot::new();
        let mut state = lone_enemy(150.0, 50.0, HorizontalDir::Right);
        state.tuning.enemy_speed = 0.0;

        for _ in 0..300 {
            let input = bot.sample(&state);
            tick(&mut state, &input);
        }
        assert!(state.enemies.is_empty());
        assert!(state.score >= 100);
    }
}
