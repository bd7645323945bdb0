//! Axis-aligned collision detection
//!
//! Every entity is a rectangle. Bullet/enemy resolution scans all pairs first
//! and removes afterwards, so a bullet overlapping two enemies takes both out
//! (and two bullets inside one enemy are both spent).

use glam::Vec2;

use super::state::{Bullet, Enemy, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on both axes; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Anything with a rectangular footprint
pub trait Bounded {
    fn aabb(&self) -> Aabb;
}

impl Bounded for Player {
    fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

impl Bounded for Bullet {
    fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

impl Bounded for Enemy {
    fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Outcome of a bullet/enemy scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hits {
    /// `bullets[i]` is true if bullet `i` struck anything
    pub bullets: Vec<bool>,
    /// `enemies[j]` is true if enemy `j` was struck
    pub enemies: Vec<bool>,
    /// Number of overlapping (bullet, enemy) pairs
    pub pairs: u32,
}

impl Hits {
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }

    pub fn enemies_destroyed(&self) -> usize {
        self.enemies.iter().filter(|&&hit| hit).count()
    }
}

/// Test every (bullet, enemy) pair against the unmodified collections
pub fn find_hits(bullets: &[Bullet], enemies: &[Enemy]) -> Hits {
    let mut hits = Hits {
        bullets: vec![false; bullets.len()],
        enemies: vec![false; enemies.len()],
        pairs: 0,
    };

    let enemy_boxes: Vec<Aabb> = enemies.iter().map(Bounded::aabb).collect();
    for (bi, bullet) in bullets.iter().enumerate() {
        let bullet_box = bullet.aabb();
        for (ei, enemy_box) in enemy_boxes.iter().enumerate() {
            if bullet_box.overlaps(enemy_box) {
                hits.bullets[bi] = true;
                hits.enemies[ei] = true;
                hits.pairs += 1;
            }
        }
    }

    hits
}

/// Keep only the entries whose mark is false
pub fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !marks.get(idx).copied().unwrap_or(false);
        idx += 1;
        keep
    });
}
