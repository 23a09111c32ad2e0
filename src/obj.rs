/// A positioned, drawable, collidable game object: one `Movement` plus one
/// `Shape`.

use crate::entities::{ColliderBox, EntityKind, Vec2};
use crate::movement::Movement;
use crate::shape::Shape;
use crate::sprites::SpriteId;

#[derive(Clone, Debug)]
pub struct Obj {
    kind: EntityKind,
    shape: Shape,
    movement: Movement,
}

impl Obj {
    pub fn new(kind: EntityKind, shape: Shape, movement: Movement) -> Self {
        Self { kind, shape, movement }
    }

    pub fn update(&mut self, time: f64) {
        self.movement.update(time);
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn pos(&self) -> Vec2 {
        self.movement.pos()
    }

    pub fn sprite_at(&self, time: f64) -> SpriteId {
        self.shape.sprite_at(time)
    }

    pub fn collider_boxes(&self, time: f64) -> Vec<ColliderBox> {
        self.shape.collider_boxes(time, self.pos())
    }

    /// World x of the right edge of the widest frame.
    pub fn right_edge(&self) -> f64 {
        self.pos().x + self.shape.width()
    }
}
