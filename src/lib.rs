//! Space Invaders - a minimal browser arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: Rendering surfaces (DOM in the browser, log output natively)
//! - `platform`: Input sources (keyboard, autopilot)
//! - `session`: Glue that runs one simulation step per display frame
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (key bindings, fire mode)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use session::Session;
pub use settings::{FireMode, Settings};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Distance from the arena bottom to the ship's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 60.0;
    /// Horizontal step per frame while a move key is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Player bullets
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 7.0;
    pub const MAX_BULLETS: usize = 3;

    /// Enemies
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 1.0;

    /// Enemy grid layout at round start
    pub const ENEMY_COLS: u32 = 5;
    pub const ENEMY_ROWS: u32 = 3;
    pub const ENEMY_GRID_ORIGIN: (f32, f32) = (100.0, 50.0);
    pub const ENEMY_GRID_SPACING: (f32, f32) = (120.0, 80.0);

    /// Score per enemy destroyed
    pub const KILL_SCORE: u64 = 100;

    /// Largest enemy grid a tuning may ask for
    pub const MAX_ENEMIES: usize = 1024;
}
