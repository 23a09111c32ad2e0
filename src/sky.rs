/// Day/night cycle and the moon.  Purely visual: nothing here feeds back
/// into collisions or scoring.

use crate::config::MoonConfig;
use crate::entities::{GameSize, Vec2};
use crate::error::ConfigError;
use crate::shape::Shape;
use crate::sprites::SpriteId;

/// Where in the day/night cycle `time` falls.
///
/// The first half of each period is day.  During the second half `density`
/// rises from 0 to 1 at midnight and falls back to 0 at dawn.
pub fn night_density(time: f64, period: f64) -> (bool, f64) {
    if !(period > 0.0) {
        return (false, 0.0);
    }
    let phase = (time.max(0.0) % period) / period;
    if phase < 0.5 {
        return (false, 0.0);
    }
    let night = (phase - 0.5) * 2.0;
    (true, 1.0 - (2.0 * night - 1.0).abs())
}

/// A moon that drifts slowly right-to-left across the screen and wraps.
///
/// Its screen position is a pure function of time, independent of the
/// camera; `pos` converts it to world space.
#[derive(Clone, Debug)]
pub struct Moon {
    shape: Shape,
    drift_speed: f64,
    y: f64,
    screen_width: f64,
    now: f64,
    camera_x: f64,
}

impl Moon {
    pub fn new(config: &MoonConfig, game_size: GameSize) -> Result<Self, ConfigError> {
        Ok(Self {
            shape: Shape::animated(config.frames.clone(), config.frame_seconds)?,
            drift_speed: config.drift_speed,
            y: config.y,
            screen_width: game_size.width,
            now: 0.0,
            camera_x: 0.0,
        })
    }

    pub fn update(&mut self, time: f64, camera_x: f64) {
        self.now = time;
        self.camera_x = camera_x;
    }

    pub fn reset(&mut self) {
        self.now = 0.0;
        self.camera_x = 0.0;
    }

    /// Screen x: starts at the right edge and wraps once fully off the left.
    pub fn screen_x(&self) -> f64 {
        let lane = self.screen_width + self.shape.width();
        let travelled = (self.now * self.drift_speed).rem_euclid(lane);
        self.screen_width - travelled
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.camera_x + self.screen_x(), self.y)
    }

    pub fn sprite(&self) -> SpriteId {
        self.shape.sprite_at(self.now)
    }
}
