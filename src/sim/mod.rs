//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no delta time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Bounded, Hits, find_hits};
pub use state::{
    Bullet, Enemy, GamePhase, GameState, HorizontalDir, Player, seed_enemy_grid, spawn_player,
};
pub use tick::{GameEvent, TickInput, tick};
