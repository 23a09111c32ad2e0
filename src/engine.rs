//! The orchestrator: owns every simulation component and runs one tick at a
//! time in a fixed order.
//!
//! Per tick: drain input → clock → camera → decoration spawners → ground →
//! obstacle spawners → player → score → collisions.  Collision checks
//! therefore always see this tick's positions.  Drawing is a separate,
//! read-only pass.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::audio::AudioPlayer;
use crate::clock::Clock;
use crate::collision::has_collided;
use crate::config::GameConfig;
use crate::drawer::Drawer;
use crate::entities::{EntityKind, GameStatus, PlayerState, SoundKind, Vec2};
use crate::error::{ConfigError, ScoreStoreError};
use crate::info::InfoHandler;
use crate::input::{InputEvent, Key, KeyHandler};
use crate::movement::Movement;
use crate::player::{Player, PlayerEvent};
use crate::score_store::ScoreStore;
use crate::sky::{night_density, Moon};
use crate::spawner::{LandSpawner, Spawner};

/// What happened during one call to `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False when the tick was skipped (not playing, or unfocused).
    pub simulated: bool,
    /// Kind of obstacle that ended the run this tick.
    pub crashed_into: Option<EntityKind>,
    /// Flying obstacles removed by an attack this tick.
    pub attacked: usize,
}

pub struct Engine {
    config: GameConfig,
    clock: Clock,
    camera: Movement,
    star_spawner: Spawner,
    cloud_spawner: Spawner,
    land_spawner: LandSpawner,
    cactus_spawner: Spawner,
    bird_spawner: Spawner,
    moon: Moon,
    player: Player,
    info: InfoHandler,
    keys: KeyHandler,
    audio: Option<Box<dyn AudioPlayer>>,
    focused: bool,
    quit: bool,
    screen_size: Option<(u16, u16)>,
}

impl Engine {
    /// Build the engine.  Invalid configuration fails here, never mid-run.
    pub fn new(config: GameConfig, high_score: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut seeder = StdRng::seed_from_u64(seed);
        let mut rng = || StdRng::seed_from_u64(seeder.gen());

        let width = config.game_size.width;
        let lookahead = config.lookahead;
        let camera = Movement::new(
            config.camera.pos,
            config.camera.velocity,
            config.camera.acceleration,
        );

        let mut engine = Self {
            clock: Clock::new(),
            camera,
            star_spawner: Spawner::new(EntityKind::Star, &config.star, width, lookahead, rng())?,
            cloud_spawner: Spawner::new(EntityKind::Cloud, &config.cloud, width, lookahead, rng())?,
            land_spawner: LandSpawner::new(&config.land, width, lookahead, rng())?,
            cactus_spawner: Spawner::new(EntityKind::Cactus, &config.cactus, width, lookahead, rng())?,
            bird_spawner: Spawner::new(EntityKind::Bird, &config.bird, width, lookahead, rng())?,
            moon: Moon::new(&config.moon, config.game_size)?,
            player: Player::new(&config.player, &config.camera)?,
            info: InfoHandler::new(&config.info, config.game_size, high_score),
            keys: KeyHandler::new(),
            audio: None,
            focused: true,
            quit: false,
            screen_size: None,
            config,
        };
        engine.lay_ground();
        debug!(seed, "engine created");
        Ok(engine)
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioPlayer>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn set_audio(&mut self, audio: Option<Box<dyn AudioPlayer>>) {
        self.audio = audio;
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Drain queued input, then run one tick.
    pub fn step<I>(&mut self, elapsed: f64, events: I) -> TickReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_input(event);
        }
        self.tick(elapsed)
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(ev) => match self.keys.on_key_down(&ev) {
                Some(Key::Enter) => self.press_start(),
                Some(Key::Quit) => self.quit = true,
                _ => {}
            },
            InputEvent::KeyUp(ev) => {
                self.keys.on_key_up(&ev);
            }
            InputEvent::Resize { width, height } => self.screen_size = Some((width, height)),
            InputEvent::Focus(focused) => {
                // releases that happen while blurred are never delivered
                if !focused {
                    self.keys.clear();
                }
                self.focused = focused;
            }
        }
    }

    /// The start input: begins the first run, or restarts after a crash.
    fn press_start(&mut self) {
        match self.info.status() {
            GameStatus::NotStart => {
                self.info.start();
                self.player.start();
            }
            GameStatus::GameOver => {
                self.reset();
                self.info.restart();
                self.player.start();
            }
            GameStatus::Playing => {}
        }
    }

    /// Return every simulation component to its initial state.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.camera.reset();
        self.star_spawner.reset();
        self.cloud_spawner.reset();
        self.land_spawner.reset();
        self.cactus_spawner.reset();
        self.bird_spawner.reset();
        self.moon.reset();
        self.player.reset();
        self.info.reset();
        self.lay_ground();
        info!("engine reset");
    }

    /// The ground is visible before the first tick.
    fn lay_ground(&mut self) {
        self.land_spawner.update(0.0, self.camera.pos().x);
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Advance the simulation by `elapsed` seconds.  Skipped entirely unless
    /// a run is in progress and the host is focused; unfocused time is not
    /// caught up later.
    pub fn tick(&mut self, elapsed: f64) -> TickReport {
        if !self.info.check_is_state(GameStatus::Playing) || !self.focused {
            return TickReport::default();
        }

        let time = self.clock.advance(elapsed);

        self.camera.update(time);
        let camera_x = self.camera.pos().x;

        self.star_spawner.update(time, camera_x);
        self.moon.update(time, camera_x);
        self.cloud_spawner.update(time, camera_x);
        self.land_spawner.update(time, camera_x);
        self.cactus_spawner.update(time, camera_x);
        self.bird_spawner.update(time, camera_x);

        if let Some(PlayerEvent::Jumped) = self.player.update(time, self.keys.pressing_keys()) {
            self.play(SoundKind::Jump);
        }
        if let Some(sound) = self.info.update(time, camera_x) {
            self.play(sound);
        }

        let mut report = TickReport {
            simulated: true,
            ..TickReport::default()
        };
        self.resolve_collisions(&mut report);
        report
    }

    /// Ground obstacles are checked first: a ground crash takes precedence
    /// over anything happening in the air on the same tick.
    fn resolve_collisions(&mut self, report: &mut TickReport) {
        let player_boxes = self.player.collider_boxes();

        if has_collided(&player_boxes, &self.cactus_spawner.collider_boxes()) {
            self.resolve_crash();
            report.crashed_into = Some(EntityKind::Cactus);
            return;
        }

        if has_collided(&player_boxes, &self.bird_spawner.collider_boxes()) {
            if self.player.state() == PlayerState::Attack {
                report.attacked = self.bird_spawner.remove_colliding(&player_boxes);
                debug!(removed = report.attacked, "attack passed through flying obstacle");
            } else {
                self.resolve_crash();
                report.crashed_into = Some(EntityKind::Bird);
            }
        }
    }

    /// End the run.  Only has an effect while playing.
    pub fn resolve_crash(&mut self) -> bool {
        if !self.info.check_is_state(GameStatus::Playing) {
            return false;
        }
        self.play(SoundKind::Crash);
        self.player.crash();
        self.info.game_over()
    }

    fn play(&mut self, kind: SoundKind) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play_sound(kind);
        }
    }

    // ── Drawing ──────────────────────────────────────────────────────────────

    /// Read-only pass over the current positions.
    pub fn draw(&self, drawer: &mut dyn Drawer) {
        let time = self.clock.current_time();
        let camera_x = self.camera_x();

        drawer.clear();
        let (is_night, density) = night_density(time, self.config.day_time_period);
        drawer.set_night(is_night, density);

        if is_night {
            self.star_spawner.draw_canvas(drawer, camera_x);
            let moon = self.moon.pos();
            drawer.draw_sprite(self.moon.sprite(), Vec2::new(moon.x - camera_x, moon.y));
        }

        self.land_spawner.draw_canvas(drawer, camera_x);
        if !self.info.check_is_state(GameStatus::NotStart) {
            self.cloud_spawner.draw_canvas(drawer, camera_x);
            self.cactus_spawner.draw_canvas(drawer, camera_x);
            self.bird_spawner.draw_canvas(drawer, camera_x);
        }

        let pos = self.player.pos();
        drawer.draw_sprite(self.player.sprite(), Vec2::new(pos.x - camera_x, pos.y));

        if self.config.debug {
            self.cactus_spawner.draw_collider_boxes(drawer, camera_x);
            self.bird_spawner.draw_collider_boxes(drawer, camera_x);
            let boxes: Vec<_> = self
                .player
                .collider_boxes()
                .iter()
                .map(|b| b.shifted(-camera_x))
                .collect();
            drawer.draw_boxes(&boxes);
        }

        self.info.draw_canvas(drawer);
    }

    // ── Teardown ─────────────────────────────────────────────────────────────

    /// Flush the high score to persistence.  Called once, at teardown.
    pub fn save_high_score(&self, store: &mut dyn ScoreStore) -> Result<(), ScoreStoreError> {
        store.save(self.info.high_score())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.info.status()
    }

    pub fn score(&self) -> u32 {
        self.info.score()
    }

    pub fn high_score(&self) -> u32 {
        self.info.high_score()
    }

    pub fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    pub fn camera_x(&self) -> f64 {
        self.camera.pos().x
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn keys(&self) -> &KeyHandler {
        &self.keys
    }

    pub fn cactus_spawner(&self) -> &Spawner {
        &self.cactus_spawner
    }

    pub fn bird_spawner(&self) -> &Spawner {
        &self.bird_spawner
    }

    pub fn cloud_spawner(&self) -> &Spawner {
        &self.cloud_spawner
    }

    pub fn star_spawner(&self) -> &Spawner {
        &self.star_spawner
    }

    pub fn land_spawner(&self) -> &LandSpawner {
        &self.land_spawner
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Last terminal size reported by a resize event.
    pub fn screen_size(&self) -> Option<(u16, u16)> {
        self.screen_size
    }
}
