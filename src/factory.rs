/// Entity generators.
///
/// One `EntityFactory` per entity kind, built once from its validated spawn
/// table.  Spawners call `generate(offset_x, rng)` without knowing which kind
/// they hold.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{Range, ShapeConfig, SpawnConfig, YPlacement};
use crate::entities::{EntityKind, Vec2};
use crate::error::ConfigError;
use crate::movement::Movement;
use crate::obj::Obj;
use crate::shape::Shape;

#[derive(Clone, Debug)]
pub struct EntityFactory {
    kind: EntityKind,
    /// Candidate shapes; one is picked per spawn.
    shapes: Vec<Shape>,
    y: YPlacement,
    speed: Range,
    acceleration: Vec2,
}

impl EntityFactory {
    pub fn new(kind: EntityKind, config: &SpawnConfig) -> Result<Self, ConfigError> {
        let shapes = match &config.shape {
            ShapeConfig::Static { variants } => {
                variants.iter().map(|s| Shape::still(*s)).collect()
            }
            ShapeConfig::Animated { frames, frame_seconds } => {
                vec![Shape::animated(frames.clone(), *frame_seconds)?]
            }
        };
        if shapes.is_empty() {
            return Err(ConfigError::invalid(format!("{:?}.shape", kind), "no sprite variants"));
        }
        match &config.y {
            YPlacement::Choice(ys) if ys.is_empty() => {
                return Err(ConfigError::invalid(format!("{:?}.y", kind), "empty choice list"));
            }
            YPlacement::Range(r) if r.min > r.max => {
                return Err(ConfigError::invalid(format!("{:?}.y", kind), "inverted range"));
            }
            _ => {}
        }
        if config.speed.min > config.speed.max {
            return Err(ConfigError::invalid(format!("{:?}.speed", kind), "inverted range"));
        }
        Ok(Self {
            kind,
            shapes,
            y: config.y.clone(),
            speed: config.speed,
            acceleration: config.acceleration,
        })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Widest shape this factory can produce.
    pub fn max_width(&self) -> f64 {
        self.shapes.iter().map(Shape::width).fold(0.0, f64::max)
    }

    /// Build a new entity whose left edge sits at world x `offset_x`.
    pub fn generate(&self, offset_x: f64, rng: &mut impl Rng) -> Obj {
        let shape = self
            .shapes
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.shapes[0].clone());
        let y = match &self.y {
            YPlacement::Fixed(y) => *y,
            YPlacement::Choice(ys) => ys.choose(rng).copied().unwrap_or_default(),
            YPlacement::Range(r) => uniform(r, rng),
        };
        let vx = uniform(&self.speed, rng);
        let movement = Movement::new(Vec2::new(offset_x, y), Vec2::new(vx, 0.0), self.acceleration);
        Obj::new(self.kind, shape, movement)
    }
}

/// Uniform draw from `[min, max]`; degenerate ranges return `min` without
/// consuming randomness.
pub(crate) fn uniform(range: &Range, rng: &mut impl Rng) -> f64 {
    if range.max > range.min {
        rng.gen_range(range.min..=range.max)
    } else {
        range.min
    }
}
