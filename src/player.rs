/// The player: an entity with a finite-state machine and jump physics.
///
/// Transition table (anything not listed keeps the current state):
///
/// ```text
/// IDLE   --start-->                      RUN
/// RUN    --jump held, grounded-->        JUMP
/// JUMP   --vertical velocity >= 0-->     FALL
/// FALL   --reaches ground-->             RUN | DUCK
/// RUN    <--duck held / released-->      DUCK
/// RUN|DUCK|JUMP|FALL --attack pressed--> ATTACK (for attack_seconds)
/// ATTACK --timer expires-->              state implied by physics
/// any    --crash-->                      CRASH (terminal until reset)
/// ```

use std::collections::HashSet;

use crate::config::{MotionConfig, PlayerConfig};
use crate::entities::{ColliderBox, PlayerState, Vec2};
use crate::error::ConfigError;
use crate::input::Key;
use crate::movement::Movement;
use crate::shape::Shape;
use crate::sprites::SpriteId;

/// Something the engine may want to react to (e.g. with a sound).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    Jumped,
    Landed,
}

#[derive(Clone, Debug)]
struct PlayerShapes {
    idle: Shape,
    run: Shape,
    air: Shape,
    duck: Shape,
    attack: Shape,
    crash: Shape,
}

impl PlayerShapes {
    fn new(config: &PlayerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            idle: Shape::still(SpriteId::DinoStand),
            run: Shape::animated(vec![SpriteId::DinoRun1, SpriteId::DinoRun2], config.run_frame_seconds)?,
            air: Shape::still(SpriteId::DinoJump),
            duck: Shape::animated(vec![SpriteId::DinoDuck1, SpriteId::DinoDuck2], config.duck_frame_seconds)?,
            attack: Shape::still(SpriteId::DinoAttack),
            crash: Shape::still(SpriteId::DinoCrash),
        })
    }

    fn for_state(&self, state: PlayerState) -> &Shape {
        match state {
            PlayerState::Idle => &self.idle,
            PlayerState::Run => &self.run,
            PlayerState::Jump | PlayerState::Fall => &self.air,
            PlayerState::Duck => &self.duck,
            PlayerState::Attack => &self.attack,
            PlayerState::Crash => &self.crash,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    config: PlayerConfig,
    shapes: PlayerShapes,
    movement: Movement,
    state: PlayerState,
    airborne: bool,
    attack_until: f64,
    // attack fires on the rising edge only
    attack_armed: bool,
    now: f64,
}

impl Player {
    /// The player runs alongside the camera, `config.pos.x` cells from its
    /// left edge.
    pub fn new(config: &PlayerConfig, camera: &MotionConfig) -> Result<Self, ConfigError> {
        if !(config.attack_seconds > 0.0) {
            return Err(ConfigError::invalid("player.attack_seconds", "must be positive"));
        }
        let movement = Movement::new(
            Vec2::new(camera.pos.x + config.pos.x, config.pos.y),
            Vec2::new(camera.velocity.x, 0.0),
            Vec2::new(camera.acceleration.x, 0.0),
        );
        Ok(Self {
            config: config.clone(),
            shapes: PlayerShapes::new(config)?,
            movement,
            state: PlayerState::Idle,
            airborne: false,
            attack_until: 0.0,
            attack_armed: true,
            now: 0.0,
        })
    }

    /// IDLE → RUN.  Ignored in any other state.
    pub fn start(&mut self) {
        if self.state == PlayerState::Idle {
            self.state = PlayerState::Run;
        }
    }

    /// Enter the terminal CRASH state.
    pub fn crash(&mut self) {
        self.state = PlayerState::Crash;
    }

    pub fn reset(&mut self) {
        self.movement.reset();
        self.state = PlayerState::Idle;
        self.airborne = false;
        self.attack_until = 0.0;
        self.attack_armed = true;
        self.now = 0.0;
    }

    pub fn update(&mut self, time: f64, keys: &HashSet<Key>) -> Option<PlayerEvent> {
        if matches!(self.state, PlayerState::Idle | PlayerState::Crash) {
            return None;
        }
        self.now = time;
        self.movement.update(time);

        let jump = keys.contains(&Key::Jump);
        let duck = keys.contains(&Key::Duck);
        let attack = keys.contains(&Key::Attack);
        if !attack {
            self.attack_armed = true;
        }

        let mut event = None;
        let pos = self.movement.pos();
        let vel = self.movement.velocity();
        let acc = self.movement.acceleration();

        if self.airborne {
            let want = if duck {
                self.config.hard_drop_acceleration
            } else {
                self.config.fall_acceleration
            };
            if pos.y >= self.config.pos.y {
                self.movement.retarget(
                    time,
                    Vec2::new(pos.x, self.config.pos.y),
                    Vec2::new(vel.x, 0.0),
                    Vec2::new(acc.x, 0.0),
                );
                self.airborne = false;
                event = Some(PlayerEvent::Landed);
            } else if acc.y != want {
                self.movement.retarget(time, pos, vel, Vec2::new(acc.x, want));
            }
        } else if jump && !duck {
            self.movement.retarget(
                time,
                pos,
                Vec2::new(vel.x, -self.config.jump_speed),
                Vec2::new(acc.x, self.config.fall_acceleration),
            );
            self.airborne = true;
            event = Some(PlayerEvent::Jumped);
        }

        if self.state == PlayerState::Attack {
            if time >= self.attack_until {
                self.state = self.motion_state(duck);
            }
        } else if attack && self.attack_armed {
            self.state = PlayerState::Attack;
            self.attack_until = time + self.config.attack_seconds;
            self.attack_armed = false;
        } else {
            self.state = self.motion_state(duck);
        }

        event
    }

    fn motion_state(&self, duck: bool) -> PlayerState {
        if self.airborne {
            if self.movement.velocity().y < 0.0 {
                PlayerState::Jump
            } else {
                PlayerState::Fall
            }
        } else if duck {
            PlayerState::Duck
        } else {
            PlayerState::Run
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn pos(&self) -> Vec2 {
        self.movement.pos()
    }

    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity()
    }

    /// Standing row.
    pub fn ground_y(&self) -> f64 {
        self.config.pos.y
    }

    pub fn sprite(&self) -> SpriteId {
        self.shapes.for_state(self.state).sprite_at(self.now)
    }

    /// World-space collider boxes for the current state and frame.
    pub fn collider_boxes(&self) -> Vec<ColliderBox> {
        self.shapes
            .for_state(self.state)
            .collider_boxes(self.now, self.movement.pos())
    }
}
