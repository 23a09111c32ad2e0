/// Rolling-window spawner.
///
/// Keeps the entities of one kind that are between the camera's left edge
/// and `camera_x + viewport_width + lookahead`.  The next entity goes one
/// fresh gap beyond the furthest live entity's *current* x, so kinds that
/// drift with the camera are spaced in their own frame.  Live entities never
/// exceed `capacity_bound`, regardless of run length.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::config::SpawnConfig;
use crate::drawer::Drawer;
use crate::entities::{ColliderBox, EntityKind, Vec2};
use crate::error::ConfigError;
use crate::factory::EntityFactory;
use crate::obj::Obj;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GapPolicy {
    /// Uniform draw from `[min, max]` per spawn.
    Random { min: f64, max: f64 },
    /// Always exactly this distance.
    Fixed(f64),
}

impl GapPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            GapPolicy::Random { min, max } => {
                if !(min.is_finite() && min > 0.0) {
                    return Err(ConfigError::invalid("min_gap", format!("must be positive, got {}", min)));
                }
                if !max.is_finite() || min > max {
                    return Err(ConfigError::invalid("max_gap", format!("min_gap {} > max_gap {}", min, max)));
                }
            }
            GapPolicy::Fixed(w) => {
                if !(w.is_finite() && w > 0.0) {
                    return Err(ConfigError::invalid("gap", format!("must be positive, got {}", w)));
                }
            }
        }
        Ok(())
    }

    fn draw(&self, rng: &mut impl Rng) -> f64 {
        match *self {
            GapPolicy::Random { min, max } if max > min => rng.gen_range(min..=max),
            GapPolicy::Random { min, .. } => min,
            GapPolicy::Fixed(w) => w,
        }
    }

    /// Smallest gap this policy can produce.
    pub fn min(&self) -> f64 {
        match *self {
            GapPolicy::Random { min, .. } => min,
            GapPolicy::Fixed(w) => w,
        }
    }
}

#[derive(Debug)]
pub struct Spawner {
    factory: EntityFactory,
    gap: GapPolicy,
    start_x: f64,
    viewport_width: f64,
    lookahead: f64,
    entities: VecDeque<Obj>,
    cursor: f64,
    /// Gap drawn at the last spawn, measured from the furthest live entity.
    pending_gap: f64,
    now: f64,
    rng: StdRng,
}

impl Spawner {
    /// Spawner with the random gap policy from `config`.
    pub fn new(
        kind: EntityKind,
        config: &SpawnConfig,
        viewport_width: f64,
        lookahead: f64,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let factory = EntityFactory::new(kind, config)?;
        let gap = GapPolicy::Random {
            min: config.min_gap,
            max: config.max_gap,
        };
        Self::with_gap(factory, gap, config.start_x, viewport_width, lookahead, rng)
    }

    pub fn with_gap(
        factory: EntityFactory,
        gap: GapPolicy,
        start_x: f64,
        viewport_width: f64,
        lookahead: f64,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        gap.validate()?;
        Ok(Self {
            factory,
            gap,
            start_x,
            viewport_width,
            lookahead,
            entities: VecDeque::new(),
            cursor: start_x,
            pending_gap: 0.0,
            now: 0.0,
            rng,
        })
    }

    /// Move, retire and spawn for this tick.
    pub fn update(&mut self, time: f64, camera_x: f64) {
        self.now = time;
        for obj in self.entities.iter_mut() {
            obj.update(time);
        }

        // retire everything whose right edge scrolled past the viewport's left edge
        self.entities.retain(|obj| obj.right_edge() >= camera_x);

        let horizon = camera_x + self.viewport_width + self.lookahead;
        let capacity = self.capacity_bound();
        loop {
            let x = self.next_spawn_x();
            if x >= horizon || self.entities.len() >= capacity {
                break;
            }
            let mut obj = self.factory.generate(x, &mut self.rng);
            obj.update(time);
            self.pending_gap = self.gap.draw(&mut self.rng);
            self.cursor = x + self.pending_gap;
            // after a long jump of the camera the cursor may lag behind it
            if obj.right_edge() >= camera_x {
                self.entities.push_back(obj);
            }
        }
    }

    /// One pending gap past the furthest live entity, or the cursor when
    /// nothing is alive.
    fn next_spawn_x(&self) -> f64 {
        self.entities
            .iter()
            .map(|obj| obj.pos().x)
            .reduce(f64::max)
            .map_or(self.cursor, |furthest| furthest + self.pending_gap)
    }

    pub fn reset(&mut self) {
        debug!(kind = ?self.factory.kind(), dropped = self.entities.len(), "spawner reset");
        self.entities.clear();
        self.cursor = self.start_x;
        self.pending_gap = 0.0;
        self.now = 0.0;
    }

    /// Remove every entity overlapping any of `boxes`; returns how many went.
    pub fn remove_colliding(&mut self, boxes: &[ColliderBox]) -> usize {
        let now = self.now;
        let before = self.entities.len();
        self.entities
            .retain(|obj| !crate::collision::has_collided(&obj.collider_boxes(now), boxes));
        before - self.entities.len()
    }

    /// World-space collider boxes of all live entities.
    pub fn collider_boxes(&self) -> Vec<ColliderBox> {
        self.entities
            .iter()
            .flat_map(|obj| obj.collider_boxes(self.now))
            .collect()
    }

    /// Collider boxes relative to the camera, for debug drawing.
    pub fn collider_boxes_relative(&self, camera_x: f64) -> Vec<ColliderBox> {
        self.collider_boxes()
            .into_iter()
            .map(|b| b.shifted(-camera_x))
            .collect()
    }

    pub fn draw_canvas(&self, drawer: &mut dyn Drawer, camera_x: f64) {
        for obj in &self.entities {
            let pos = obj.pos();
            drawer.draw_sprite(obj.sprite_at(self.now), Vec2::new(pos.x - camera_x, pos.y));
        }
    }

    pub fn draw_collider_boxes(&self, drawer: &mut dyn Drawer, camera_x: f64) {
        drawer.draw_boxes(&self.collider_boxes_relative(camera_x));
    }

    pub fn kind(&self) -> EntityKind {
        self.factory.kind()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Obj> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// World x the last spawn scheduled the next one at.  For kinds that
    /// move, the actual spawn point follows the furthest live entity.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn gap_policy(&self) -> GapPolicy {
        self.gap
    }

    /// Upper bound on live entities: `ceil((viewport + lookahead) / min_gap) + 1`.
    pub fn capacity_bound(&self) -> usize {
        ((self.viewport_width + self.lookahead) / self.gap.min()).ceil() as usize + 1
    }
}

/// Ground spawner: segments tile edge to edge with no seam or overlap.
#[derive(Debug)]
pub struct LandSpawner {
    inner: Spawner,
}

impl LandSpawner {
    pub fn new(
        config: &SpawnConfig,
        viewport_width: f64,
        lookahead: f64,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let factory = EntityFactory::new(EntityKind::Land, config)?;
        if config.speed.min != 0.0 || config.speed.max != 0.0 {
            return Err(ConfigError::invalid("land.speed", "ground segments cannot move"));
        }
        let segment = factory.max_width();
        let inner = Spawner::with_gap(
            factory,
            GapPolicy::Fixed(segment),
            config.start_x,
            viewport_width,
            lookahead,
            rng,
        )?;
        Ok(Self { inner })
    }

    pub fn update(&mut self, time: f64, camera_x: f64) {
        self.inner.update(time, camera_x);
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn draw_canvas(&self, drawer: &mut dyn Drawer, camera_x: f64) {
        self.inner.draw_canvas(drawer, camera_x);
    }

    pub fn entities(&self) -> impl Iterator<Item = &Obj> {
        self.inner.entities()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity_bound(&self) -> usize {
        self.inner.capacity_bound()
    }

    /// Width of one ground segment, which is also the spawn gap.
    pub fn segment_width(&self) -> f64 {
        self.inner.gap_policy().min()
    }
}
