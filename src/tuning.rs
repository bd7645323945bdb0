//! Data-driven game balance
//!
//! Every gameplay constant lives here so a round can be reconfigured from a
//! JSON blob (LocalStorage in the browser, a file natively) without a rebuild.
//! Missing fields fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Distance from the arena bottom to the ship's top edge
    pub player_bottom_margin: f32,
    pub player_speed: f32,

    // === Bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    /// Maximum live bullets at once
    pub max_bullets: usize,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub enemy_cols: u32,
    pub enemy_rows: u32,
    /// Top-left of the first enemy in the grid
    pub enemy_grid_origin: Vec2,
    /// Offset between neighbouring grid cells (x per column, y per row)
    pub enemy_grid_spacing: Vec2,

    // === Scoring ===
    pub kill_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_speed: PLAYER_SPEED,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,
            max_bullets: MAX_BULLETS,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            enemy_cols: ENEMY_COLS,
            enemy_rows: ENEMY_ROWS,
            enemy_grid_origin: Vec2::new(ENEMY_GRID_ORIGIN.0, ENEMY_GRID_ORIGIN.1),
            enemy_grid_spacing: Vec2::new(ENEMY_GRID_SPACING.0, ENEMY_GRID_SPACING.1),

            kill_score: KILL_SCORE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning blob and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and validate a tuning file (native runner)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Y coordinate of the player's top edge
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.arena_height - self.player_bottom_margin
    }

    /// Number of enemies seeded at round start
    #[inline]
    pub fn enemy_count(&self) -> usize {
        (self.enemy_cols as usize).saturating_mul(self.enemy_rows as usize)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::tuning(field, format!("must be finite and > 0, got {value}")));
            }
        }

        let speeds = [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
            ("player_bottom_margin", self.player_bottom_margin),
        ];
        for (field, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::tuning(field, format!("must be finite and >= 0, got {value}")));
            }
        }

        if !self.enemy_grid_origin.is_finite() || !self.enemy_grid_spacing.is_finite() {
            return Err(Error::tuning("enemy_grid", "origin and spacing must be finite"));
        }
        if self.player_width > self.arena_width {
            return Err(Error::tuning(
                "player_width",
                format!("{} is wider than the arena ({})", self.player_width, self.arena_width),
            ));
        }
        let player_y = self.player_y();
        if player_y < 0.0 || player_y > self.arena_height {
            return Err(Error::tuning(
                "player_bottom_margin",
                format!("places the player at y={player_y}, outside the arena"),
            ));
        }
        if self.max_bullets == 0 {
            return Err(Error::tuning("max_bullets", "must allow at least one bullet"));
        }
        if self.enemy_cols == 0 || self.enemy_rows == 0 {
            return Err(Error::tuning("enemy_cols/enemy_rows", "grid must not be empty"));
        }
        match (self.enemy_cols as usize).checked_mul(self.enemy_rows as usize) {
            Some(count) if count <= MAX_ENEMIES => {}
            _ => {
                return Err(Error::tuning(
                    "enemy_cols/enemy_rows",
                    format!(
                        "{}x{} grid exceeds {} enemies",
                        self.enemy_cols,
                        self.enemy_rows,
                        MAX_ENEMIES
                    ),
                ));
            }
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "space_invaders_tuning";

    /// Load tuning from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {e}"),
                }
            }
        }

        Self::default()
    }

    /// Native: defaults (use `from_path` for a file)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
