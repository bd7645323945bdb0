//! Fixed timestep simulation tick
//!
//! One call advances exactly one display frame; there is no delta-time
//! scaling. Step order matters for collision and game-over timing:
//! player, fire, bullets, enemies, collisions, round-over check.

use glam::Vec2;

use super::collision::{find_hits, retain_unmarked};
use super::state::{Bullet, GamePhase, GameState};

/// Keys held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A bullet left the ship at this position
    BulletFired { pos: Vec2 },
    /// An enemy hit a side wall and turned around
    EnemyBounced { pos: Vec2 },
    /// Enemies destroyed this frame and the points awarded for them
    EnemiesDestroyed { count: usize, points: u64 },
    /// An enemy reached the player's row
    GameOver { score: u64 },
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.frame += 1;

    // Collisions and the round-over check see the round as it stood when the
    // frame began. Bullets fired below are never part of that snapshot.
    let start_bullets = state.bullets.clone();
    let start_enemies = state.enemies.clone();
    let tuning = &state.tuning;

    // Player movement: sequential clamps, so left+right together can still
    // leave the ship displaced when it sits against a wall
    let player = &mut state.player;
    if input.left {
        player.pos.x = (player.pos.x - tuning.player_speed).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + tuning.player_speed).min(tuning.arena_width - player.size.x);
    }

    // Fire. The held-key set belongs to the caller and is not cleared here,
    // so a held fire key keeps firing every frame until the cap is reached.
    // The bullet spawns from the ship's post-move position.
    if input.fire && state.bullets.len() < tuning.max_bullets {
        let size = Vec2::new(tuning.bullet_width, tuning.bullet_height);
        let pos = Vec2::new(state.player.center_x() - size.x / 2.0, state.player.pos.y);
        state.bullets.push(Bullet { pos, size });
        events.push(GameEvent::BulletFired { pos });
    }

    // Bullets fly up; the ones past the top edge are dropped with the hits
    for bullet in &mut state.bullets {
        bullet.pos.y -= tuning.bullet_speed;
    }

    // Enemies: each one turns around on its own wall contact, and a rejected
    // move leaves it in place for this frame
    for enemy in &mut state.enemies {
        let new_x = enemy.pos.x + tuning.enemy_speed * enemy.dir.sign();
        if new_x <= 0.0 || new_x >= tuning.arena_width - enemy.size.x {
            enemy.dir = enemy.dir.flipped();
            events.push(GameEvent::EnemyBounced { pos: enemy.pos });
        } else {
            enemy.pos.x = new_x;
        }
    }

    // Collisions: all start-of-frame pairs tested before anything is removed.
    // Live indices still line up with the snapshot: enemies are never added
    // or dropped by movement, and a new bullet is appended past the end.
    let hits = find_hits(&start_bullets, &start_enemies);
    let mut index = 0;
    state.bullets.retain(|b| {
        let hit = hits.bullets.get(index).copied().unwrap_or(false);
        index += 1;
        !hit && b.pos.y > 0.0
    });
    if !hits.is_empty() {
        let count = hits.enemies_destroyed();
        let points = u64::from(hits.pairs) * tuning.kill_score;
        retain_unmarked(&mut state.enemies, &hits.enemies);
        state.score += points;
        events.push(GameEvent::EnemiesDestroyed { count, points });
    }

    // Round over once any enemy's lower edge had reached the ship, including
    // one destroyed this frame
    let player_y = state.player.pos.y;
    if start_enemies.iter().any(|e| e.bottom() >= player_y) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
