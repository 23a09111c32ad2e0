/// Kinematic integration.
///
/// Position is a closed-form function of the time elapsed since the motion
/// was anchored:
///
/// ```text
/// pos(t) = origin + v0·dt + ½·a·dt²      dt = t − anchor
/// vel(t) = v0 + a·dt
/// ```
///
/// so evaluating at the same `t` always yields the same result no matter how
/// often `update` was called in between.  The first `update` anchors the
/// motion, which lets spawned entities start moving from their spawn tick.

use crate::entities::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Movement {
    // construction-time values, restored by `reset`
    initial_pos: Vec2,
    initial_vel: Vec2,
    initial_acc: Vec2,

    origin: Vec2,
    v0: Vec2,
    acc: Vec2,
    anchor: Option<f64>,

    pos: Vec2,
    vel: Vec2,
}

impl Movement {
    pub fn new(pos: Vec2, vel: Vec2, acc: Vec2) -> Self {
        Self {
            initial_pos: pos,
            initial_vel: vel,
            initial_acc: acc,
            origin: pos,
            v0: vel,
            acc,
            anchor: None,
            pos,
            vel,
        }
    }

    /// Re-evaluate position and velocity at `time`.
    ///
    /// Times before the anchor evaluate to the anchor state.
    pub fn update(&mut self, time: f64) {
        let anchor = *self.anchor.get_or_insert(time);
        let dt = (time - anchor).max(0.0);
        self.pos = self.origin + self.v0 * dt + self.acc * (0.5 * dt * dt);
        self.vel = self.v0 + self.acc * dt;
    }

    /// Re-anchor the motion at `time` with a new position, velocity and
    /// acceleration.  Used where acceleration changes mid-flight.
    pub fn retarget(&mut self, time: f64, pos: Vec2, vel: Vec2, acc: Vec2) {
        self.origin = pos;
        self.v0 = vel;
        self.acc = acc;
        self.anchor = Some(time);
        self.pos = pos;
        self.vel = vel;
    }

    pub fn reset(&mut self) {
        *self = Movement::new(self.initial_pos, self.initial_vel, self.initial_acc);
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acc
    }
}
