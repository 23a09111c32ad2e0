/// Shared game data types: plain values with a few arithmetic helpers.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A 2-D vector in world units (columns, rows).  `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle used for overlap tests.
///
/// Also used as a collider *template*, in which case `left`/`top` are
/// offsets from the owning entity's top-left position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColliderBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ColliderBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Place a template box at `pos`.
    pub fn at(&self, pos: Vec2) -> ColliderBox {
        ColliderBox {
            left: self.left + pos.x,
            top: self.top + pos.y,
            ..*self
        }
    }

    /// Shift horizontally, e.g. from world space into camera space.
    pub fn shifted(&self, dx: f64) -> ColliderBox {
        ColliderBox {
            left: self.left + dx,
            ..*self
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

// ── Kinds & states ────────────────────────────────────────────────────────────

/// Every kind of spawned entity.  Each kind has exactly one generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Cactus,
    Bird,
    Cloud,
    Star,
    Land,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Run,
    Jump,
    Fall,
    Duck,
    Attack,
    Crash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStart,
    Playing,
    GameOver,
}

/// Sound effects the engine can ask the audio collaborator for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Jump,
    Crash,
    Milestone,
}

/// Logical game size in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSize {
    pub width: f64,
    pub height: f64,
}

impl Default for GameSize {
    fn default() -> Self {
        Self { width: 80.0, height: 24.0 }
    }
}
