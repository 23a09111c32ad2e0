/// Game-level state machine, score and high score.
///
/// ```text
/// NOT_START --start--> PLAYING --game_over--> GAME_OVER --restart--> PLAYING
/// ```
///
/// The score is derived from camera distance, which is itself a function of
/// simulation time, so it is independent of how often ticks run.

use tracing::info;

use crate::config::InfoConfig;
use crate::drawer::Drawer;
use crate::entities::{GameSize, GameStatus, SoundKind, Vec2};

#[derive(Clone, Debug)]
pub struct InfoHandler {
    config: InfoConfig,
    game_size: GameSize,
    status: GameStatus,
    score: u32,
    high_score: u32,
    /// Camera x at which the current run started.
    origin_x: Option<f64>,
    blink_started: Option<f64>,
    now: f64,
}

impl InfoHandler {
    pub fn new(config: &InfoConfig, game_size: GameSize, high_score: u32) -> Self {
        Self {
            config: config.clone(),
            game_size,
            status: GameStatus::NotStart,
            score: 0,
            high_score,
            origin_x: None,
            blink_started: None,
            now: 0.0,
        }
    }

    /// NOT_START → PLAYING.  Returns whether the transition happened.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::NotStart {
            return false;
        }
        self.status = GameStatus::Playing;
        info!("run started");
        true
    }

    /// PLAYING → GAME_OVER; freezes the score and folds it into the high score.
    pub fn game_over(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::GameOver;
        self.high_score = self.high_score.max(self.score);
        info!(score = self.score, high_score = self.high_score, "game over");
        true
    }

    /// GAME_OVER → PLAYING with a fresh score.
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }
        self.reset();
        self.status = GameStatus::Playing;
        info!(high_score = self.high_score, "run restarted");
        true
    }

    /// Clear per-run state; status and high score are kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.origin_x = None;
        self.blink_started = None;
        self.now = 0.0;
    }

    /// Recompute the score; returns `Milestone` when a milestone is crossed.
    pub fn update(&mut self, time: f64, camera_x: f64) -> Option<SoundKind> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.now = time;
        let origin = *self.origin_x.get_or_insert(camera_x);
        let points = ((camera_x - origin) / self.config.units_per_point).floor().max(0.0) as u32;
        if points <= self.score {
            return None;
        }

        let milestone = self.config.milestone;
        let crossed = points / milestone > self.score / milestone;
        self.score = points;
        if crossed {
            self.blink_started = Some(time);
            return Some(SoundKind::Milestone);
        }
        None
    }

    /// False during the "off" half of a milestone blink.
    pub fn is_score_visible(&self) -> bool {
        match self.blink_started {
            Some(start) if self.now - start < self.config.blink_duration => {
                let half = ((self.now - start) / self.config.blink_seconds).floor() as u64;
                half % 2 == 1
            }
            _ => true,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn check_is_state(&self, status: GameStatus) -> bool {
        self.status == status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score seen so far, including the live one.
    pub fn high_score(&self) -> u32 {
        self.high_score.max(self.score)
    }

    pub fn draw_canvas(&self, drawer: &mut dyn Drawer) {
        let width = self.game_size.width;
        let score = if self.is_score_visible() {
            format!("{:05}", self.score)
        } else {
            "     ".to_string()
        };
        let hud = format!("HI {:05}  {}", self.high_score(), score);
        let x = (width - hud.chars().count() as f64 - 1.0).max(0.0);
        drawer.draw_text(&hud, Vec2::new(x, 0.0));

        match self.status {
            GameStatus::NotStart => {
                self.draw_centered(drawer, "Press Enter to start", -1.0);
                self.draw_centered(drawer, "SPACE jump  DOWN duck  X attack  Q quit", 1.0);
            }
            GameStatus::GameOver => {
                self.draw_centered(drawer, "G A M E   O V E R", -1.0);
                self.draw_centered(drawer, "Enter - Play Again   Q - Quit", 1.0);
            }
            GameStatus::Playing => {}
        }
    }

    fn draw_centered(&self, drawer: &mut dyn Drawer, text: &str, dy: f64) {
        let x = ((self.game_size.width - text.chars().count() as f64) / 2.0).floor();
        let y = (self.game_size.height / 2.0).floor() + dy - 4.0;
        drawer.draw_text(text, Vec2::new(x.max(0.0), y.max(0.0)));
    }
}
