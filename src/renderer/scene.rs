//! Platform independent draw list

use serde::Serialize;

use crate::sim::{Aabb, Bounded, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Bullet,
    Enemy,
}

impl SpriteKind {
    /// CSS class used by the DOM surface
    pub fn css_class(&self) -> &'static str {
        match self {
            SpriteKind::Player => "sprite player",
            SpriteKind::Bullet => "sprite bullet",
            SpriteKind::Enemy => "sprite enemy",
        }
    }
}

/// One rectangle to draw, in arena pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    fn new(kind: SpriteKind, aabb: Aabb) -> Self {
        let size = aabb.size();
        Self {
            kind,
            x: aabb.min.x,
            y: aabb.min.y,
            width: size.x,
            height: size.y,
        }
    }
}

/// Everything a surface needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Enemies first, then bullets, player last (painter's order)
    pub sprites: Vec<Sprite>,
    pub score: u64,
    pub game_over: bool,
    pub frame: u64,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        let mut sprites =
            Vec::with_capacity(state.enemies.len() + state.bullets.len() + 1);
        sprites.extend(
            state
                .enemies
                .iter()
                .map(|e| Sprite::new(SpriteKind::Enemy, e.aabb())),
        );
        sprites.extend(
            state
                .bullets
                .iter()
                .map(|b| Sprite::new(SpriteKind::Bullet, b.aabb())),
        );
        sprites.push(Sprite::new(SpriteKind::Player, state.player.aabb()));

        Self {
            arena_width: state.tuning.arena_width,
            arena_height: state.tuning.arena_height,
            sprites,
            score: state.score,
            game_over: state.is_game_over(),
            frame: state.frame,
        }
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_scene_from_fresh_state() {
        let scene = Scene::from_state(&GameState::default());
        assert_eq!(scene.count(SpriteKind::Enemy), 15);
        assert_eq!(scene.count(SpriteKind::Bullet), 0);
        assert_eq!(scene.count(SpriteKind::Player), 1);
        assert_eq!(scene.score, 0);
        assert!(!scene.game_over);
        assert_eq!((scene.arena_width, scene.arena_height), (800.0, 600.0));

        let player = scene.sprites.last().unwrap();
        assert_eq!(player.kind, SpriteKind::Player);
        assert_eq!((player.x, player.y, player.width, player.height), (400.0, 540.0, 50.0, 50.0));
    }

    #[test]
    fn test_scene_tracks_bullets() {
        let mut state = GameState::default();
        tick(&mut state, &TickInput { fire: true, ..Default::default() });
        let scene = Scene::from_state(&state);

        assert_eq!(scene.count(SpriteKind::Bullet), 1);
        let bullet = scene
            .sprites
            .iter()
            .find(|s| s.kind == SpriteKind::Bullet)
            .unwrap();
        assert_eq!((bullet.width, bullet.height), (4.0, 10.0));
        assert_eq!(scene.frame, 1);
    }

    #[test]
    fn test_css_classes_are_distinct() {
        assert_ne!(SpriteKind::Enemy.css_class(), SpriteKind::Bullet.css_class());
        assert!(SpriteKind::Player.css_class().starts_with("sprite "));
    }
}
