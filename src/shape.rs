/// Visual/collider shape of an entity.
///
/// The animation phase is a pure function of time: the current frame is
/// `floor(t / frame_seconds) mod frames`, so nothing is mutated per tick.

use crate::entities::{ColliderBox, Vec2};
use crate::error::ConfigError;
use crate::sprites::SpriteId;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Static(SpriteId),
    Animated {
        frames: Vec<SpriteId>,
        frame_seconds: f64,
    },
}

impl Shape {
    pub fn still(sprite: SpriteId) -> Self {
        Shape::Static(sprite)
    }

    pub fn animated(frames: Vec<SpriteId>, frame_seconds: f64) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::invalid("frames", "animated shape needs at least one frame"));
        }
        if !(frame_seconds.is_finite() && frame_seconds > 0.0) {
            return Err(ConfigError::invalid(
                "frame_seconds",
                format!("must be positive, got {}", frame_seconds),
            ));
        }
        Ok(Shape::Animated { frames, frame_seconds })
    }

    /// Sprite shown at `time`.
    pub fn sprite_at(&self, time: f64) -> SpriteId {
        match self {
            Shape::Static(sprite) => *sprite,
            Shape::Animated { frames, frame_seconds } => {
                let phase = (time.max(0.0) / frame_seconds).floor() as usize;
                frames[phase % frames.len()]
            }
        }
    }

    /// Collider templates of the frame shown at `time`.
    pub fn collider_templates(&self, time: f64) -> &'static [ColliderBox] {
        self.sprite_at(time).sprite().colliders
    }

    /// World-space collider boxes with the shape placed at `pos`.
    pub fn collider_boxes(&self, time: f64, pos: Vec2) -> Vec<ColliderBox> {
        self.collider_templates(time).iter().map(|b| b.at(pos)).collect()
    }

    /// Widest frame, in cells.
    pub fn width(&self) -> f64 {
        match self {
            Shape::Static(sprite) => sprite.width(),
            Shape::Animated { frames, .. } => {
                frames.iter().map(|f| f.width()).fold(0.0, f64::max)
            }
        }
    }
}
